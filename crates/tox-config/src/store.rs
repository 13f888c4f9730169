//! Data source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// JSON snapshot to load instead of the built-in reference fixture.
    #[serde(default)]
    pub seed_path: String,
}

impl StoreConfig {
    #[must_use]
    pub fn seed_path(&self) -> Option<PathBuf> {
        if self.seed_path.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.seed_path))
        }
    }
}
