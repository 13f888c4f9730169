//! # tox-config
//!
//! Layered configuration loading for toxscreen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TOXSCREEN_*` prefix, `__` as separator)
//! 2. Project-level `.toxscreen/config.toml`
//! 3. User-level `~/.config/toxscreen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TOXSCREEN_GENERAL__DATASET` -> `general.dataset`,
//! `TOXSCREEN_AI__API_KEY` -> `ai.api_key`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use tox_config::ToxConfig;
//!
//! let config = ToxConfig::load_with_dotenv().expect("config");
//!
//! if config.ai.is_configured() {
//!     println!("AI model: {}", config.ai.model);
//! }
//! ```

mod ai;
mod classification;
mod error;
mod general;
mod store;

pub use ai::AiConfig;
pub use classification::{ClassificationConfig, PolicyKind, SchemeKind};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToxConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub classification: ClassificationConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

impl ToxConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".toxscreen/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("TOXSCREEN_").split("__"));

        figment
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.general.validate()?;
        self.classification.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("toxscreen").join("config.toml"))
    }

    /// Load `.env` from the workspace root, or the current dir as a fallback.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
