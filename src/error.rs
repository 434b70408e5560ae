//! Error types for catalog loading and compare selection.
//!
//! None of these are fatal: a `LoadError` becomes the blocking
//! "inventory unavailable" screen, selection errors become transient notices.

use std::path::PathBuf;

use thiserror::Error;

use crate::state::types::RecordId;

/// Failure to fetch or parse the vehicle catalog at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request for the catalog failed before a response arrived.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog server answered with a non-success status.
    #[error("catalog request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The payload is not a JSON array of vehicle records.
    #[error("catalog is not valid vehicle JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records carry the same id.
    #[error("catalog contains duplicate record id {0}")]
    DuplicateId(RecordId),
}

/// Non-fatal problems with the compare selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Adding another id would exceed the selection capacity.
    #[error("You can only compare up to {capacity} cars.")]
    CapacityExceeded {
        /// Maximum number of ids.
        capacity: usize,
    },

    /// A comparison needs more selected ids than are present.
    #[error("Please select at least {required} cars to compare ({selected} selected).")]
    InsufficientSelection {
        /// Ids currently selected.
        selected: usize,
        /// Minimum ids needed.
        required: usize,
    },

    /// A selected id no longer resolves to a record.
    #[error("vehicle {0} is no longer in the catalog")]
    NotFound(RecordId),
}
