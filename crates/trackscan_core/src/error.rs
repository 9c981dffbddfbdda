//! Typed errors for fetching, persistence, and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use trackscan_signatures::ParseCategoryError;

/// Errors that can occur while resolving a target into content.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The shared HTTP client could not be constructed.
    #[error("failed to initialise HTTP client: {0}")]
    ClientInit(String),

    /// The target is neither an `http(s)://` URL nor a `file://` path.
    #[error("invalid target '{target}': expected an http(s):// URL or file:// path")]
    InvalidTarget {
        /// The rejected target identifier.
        target: String,
    },

    /// The GET request failed, timed out, or returned an unreadable body.
    #[error("request to '{target}' failed: {source}")]
    Http {
        /// The target the request was issued for.
        target: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// A local file target could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// The resolved local path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur when writing findings to the persistence sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink file could not be created or written.
    #[error("failed to write findings to '{}': {source}", path.display())]
    Io {
        /// Path of the sink file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Top-level error type for the trackscan pipeline.
///
/// Unifies fetch, sink, and configuration errors into a single type for
/// callers that orchestrate the full workflow.
#[derive(Debug, Error)]
pub enum TrackscanError {
    /// A target could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The findings sink could not be created or written.
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// The category filter named an unknown category.
    #[error(transparent)]
    Category(#[from] ParseCategoryError),
}
