//! Tracker and privacy-artifact signatures for trackscan.
//!
//! This crate provides the static signature catalog: regular expressions
//! identifying third-party trackers, ad networks, CMS platforms,
//! cloud-storage leakage indicators, and hidden iframes, together with the
//! category taxonomy and the static risk/impact metadata attached to
//! findings.

/// Catalog trait implemented by each per-category signature module.
pub mod catalog;
/// Builtin signature catalogs organised by artifact category.
pub mod catalogs;
mod registry;
/// Signature, category, and risk-level definition types.
pub mod signature;

pub use catalog::Catalog;
pub use registry::CatalogRegistry;
pub use signature::{
    Category, GENERIC_DESCRIPTION, ParseCategoryError, RiskLevel, SignatureDef,
};
