//! Core engine for detecting web trackers and privacy-impacting resources.
//!
//! The engine compiles the builtin signature catalog into a [`RuleSet`],
//! applies it to fetched content through a [`Matcher`], and collects
//! deduplicated, enriched results in a [`FindingStore`]. The
//! [`ScanPipeline`] ties these together behind a channel of targets and a
//! pool of concurrent workers.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use trackscan_core::prelude::*;
//!
//! # async fn run() -> Result<(), TrackscanError> {
//! let matcher = Arc::new(Matcher::new(RuleSet::compile(CategoryFilter::All)));
//! let store = Arc::new(FindingStore::new());
//! let stats = Arc::new(ScanStats::new());
//! let fetcher = Fetcher::new(DEFAULT_USER_AGENT)?;
//!
//! let pipeline = Arc::new(ScanPipeline::new(matcher, Arc::clone(&store), stats, fetcher));
//! let (tx, rx) = tokio::sync::mpsc::channel(64);
//! tx.send("https://example.com".to_owned()).await.ok();
//! drop(tx);
//! pipeline.run(rx).await.map_err(TrackscanError::from)?;
//!
//! for group in store.findings() {
//!     println!("{}: {} findings", group.target, group.findings.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fetch;
pub mod matcher;
pub mod pipeline;
pub mod prelude;
pub mod rule;
pub mod stats;
pub mod store;
pub mod text;

pub use error::{FetchError, SinkError, TrackscanError};
pub use fetch::Fetcher;
pub use matcher::{Matcher, RawMatch};
pub use pipeline::ScanPipeline;
pub use rule::{CategoryFilter, RuleSet};
pub use stats::{ScanStats, StatsSnapshot};
pub use store::{Finding, FindingStore, TargetFindings};
