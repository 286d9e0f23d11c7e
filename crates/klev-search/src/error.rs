//! Error types for the klev-search crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by a document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read a corpus file.
    #[error("failed to read corpus {path}: {source}")]
    Read {
        /// Path to the corpus file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A corpus file is not valid JSON.
    #[error("failed to parse corpus {path}: {source}")]
    Parse {
        /// Path to the corpus file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A corpus has the wrong shape.
    #[error("malformed corpus: {0}")]
    Malformed(String),

    /// The request was cancelled before the store finished.
    #[error("store request cancelled")]
    Cancelled,

    /// The backing store reported a failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Errors returned by a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The document store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The search was cancelled.
    #[error("search cancelled")]
    Cancelled,

    /// The search ran past its deadline.
    #[error("search timed out after {0} ms")]
    TimedOut(u64),
}
