//! Store error types for tox-store.

use std::path::PathBuf;

use thiserror::Error;
use tox_core::errors::CoreError;

/// Errors from repository operations and seed loading.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entity with the requested id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Seed data is structurally valid JSON but inconsistent.
    #[error("Invalid seed data: {0}")]
    Validation(String),

    /// Reading a seed file failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A seed file matched none of the known document shapes.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input rejected before the store was touched.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub(crate) fn record_not_found(id: &str) -> Self {
        Self::NotFound {
            entity: "record",
            id: id.to_string(),
        }
    }
}
