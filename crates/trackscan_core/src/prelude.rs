//! Convenience re-exports for pipeline consumers.
//!
//! ```
//! use trackscan_core::prelude::*;
//! ```

pub use trackscan_signatures::{CatalogRegistry, Category, RiskLevel, SignatureDef};

pub use crate::error::{FetchError, SinkError, TrackscanError};
pub use crate::fetch::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, Fetcher, Target};
pub use crate::matcher::{Matcher, RawMatch};
pub use crate::pipeline::{DEFAULT_WORKERS, ScanPipeline};
pub use crate::rule::{CategoryFilter, CompiledRule, RuleSet};
pub use crate::stats::{ScanStats, StatsSnapshot};
pub use crate::store::{Finding, FindingStore, TargetFindings};
