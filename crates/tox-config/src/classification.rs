//! Risk classification policy configuration.
//!
//! Two classification paths exist: a fixed category-to-tier rule applied when
//! a record is created, and threshold schemes applied to a numeric toxicity
//! value. Which one is active defaults per dataset and can be overridden.

use serde::{Deserialize, Serialize};
use tox_core::enums::DatasetVariant;

use crate::error::ConfigError;

/// Which classification path assigns risk tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Category,
    Threshold,
}

/// Threshold scheme used by the `threshold` policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    /// `<50 / 50-500 / 500-5000 / >=5000` mg/kg.
    #[default]
    Ld50,
    /// Two configurable cutoffs, three tiers.
    ThreeTier,
}

const fn default_high_below() -> f64 {
    1.0
}

const fn default_medium_below() -> f64 {
    100.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassificationConfig {
    /// Explicit policy; `None` picks the dataset's own default.
    #[serde(default)]
    pub policy: Option<PolicyKind>,

    #[serde(default)]
    pub scheme: SchemeKind,

    /// Three-tier scheme: values below this are High.
    #[serde(default = "default_high_below")]
    pub high_below: f64,

    /// Three-tier scheme: values below this (and at or above `high_below`) are Medium.
    #[serde(default = "default_medium_below")]
    pub medium_below: f64,
}

impl ClassificationConfig {
    /// Resolve the active policy for a dataset.
    #[must_use]
    pub fn policy_for(&self, dataset: DatasetVariant) -> PolicyKind {
        self.policy.unwrap_or(match dataset {
            DatasetVariant::Pollutants => PolicyKind::Category,
            DatasetVariant::Ld50 => PolicyKind::Threshold,
        })
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the three-tier cutoffs are
    /// negative, not finite, or not strictly increasing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.high_below.is_finite() || self.high_below < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "classification.high_below".into(),
                reason: format!("expected a non-negative number, got {}", self.high_below),
            });
        }
        if !self.medium_below.is_finite() || self.medium_below <= self.high_below {
            return Err(ConfigError::InvalidValue {
                field: "classification.medium_below".into(),
                reason: format!(
                    "must be greater than high_below ({}), got {}",
                    self.high_below, self.medium_below
                ),
            });
        }
        Ok(())
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            policy: None,
            scheme: SchemeKind::default(),
            high_below: default_high_below(),
            medium_below: default_medium_below(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_defaults_follow_dataset() {
        let config = ClassificationConfig::default();
        assert_eq!(
            config.policy_for(DatasetVariant::Pollutants),
            PolicyKind::Category
        );
        assert_eq!(config.policy_for(DatasetVariant::Ld50), PolicyKind::Threshold);
    }

    #[test]
    fn explicit_policy_wins() {
        let config = ClassificationConfig {
            policy: Some(PolicyKind::Threshold),
            ..ClassificationConfig::default()
        };
        assert_eq!(
            config.policy_for(DatasetVariant::Pollutants),
            PolicyKind::Threshold
        );
    }

    #[test]
    fn cutoffs_must_increase() {
        let config = ClassificationConfig {
            high_below: 10.0,
            medium_below: 10.0,
            ..ClassificationConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("classification.medium_below"));
    }

    #[test]
    fn negative_cutoff_is_invalid() {
        let config = ClassificationConfig {
            high_below: -1.0,
            ..ClassificationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
