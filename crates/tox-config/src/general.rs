//! General application configuration.

use serde::{Deserialize, Serialize};
use tox_core::enums::DatasetVariant;

use crate::error::ConfigError;

/// Default page size for directory and table listings.
const fn default_page_size() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Which dataset shape the store is loaded as.
    #[serde(default)]
    pub dataset: DatasetVariant,

    /// Rows per page for list commands.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl GeneralConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `page_size` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetVariant::default(),
            page_size: default_page_size(),
        }
    }
}
