//! Risk tier classification.
//!
//! Threshold schemes split the non-negative reals into half-open intervals
//! `[lower, upper)`; the last interval is open-ended, so a value exactly on a
//! cutoff lands in the less toxic bucket.
//!
//! ```text
//! LD50 (mg/kg):   [0, 50) High | [50, 500) Moderate | [500, 5000) Low | [5000, ∞) Very Low
//! three-tier:     [0, a)  High | [a, b)    Medium   | [b, ∞)      Low
//! ```

use serde::Serialize;
use tox_core::entities::ChemicalRecord;
use tox_core::enums::{Category, RiskTier};

/// How a scheme was built. Only affects labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeFlavor {
    Ld50,
    ThreeTier,
}

/// One bounded interval: values below `upper` (and at or above the previous
/// cutoff) belong to `tier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct Cutoff {
    upper: f64,
    tier: RiskTier,
}

/// Ordered cutoffs mapping a toxicity value to a [`RiskTier`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdScheme {
    flavor: SchemeFlavor,
    cutoffs: Vec<Cutoff>,
    open_tier: RiskTier,
}

impl ThresholdScheme {
    /// Acute oral LD50 convention: `<50`, `50-500`, `500-5000`, `>=5000` mg/kg.
    #[must_use]
    pub fn ld50() -> Self {
        Self {
            flavor: SchemeFlavor::Ld50,
            cutoffs: vec![
                Cutoff {
                    upper: 50.0,
                    tier: RiskTier::High,
                },
                Cutoff {
                    upper: 500.0,
                    tier: RiskTier::Medium,
                },
                Cutoff {
                    upper: 5000.0,
                    tier: RiskTier::Low,
                },
            ],
            open_tier: RiskTier::VeryLow,
        }
    }

    /// Three tiers from two cutoffs. Callers are expected to pass
    /// `high_below < medium_below`; with inverted cutoffs the Medium band is
    /// simply empty.
    #[must_use]
    pub fn three_tier(high_below: f64, medium_below: f64) -> Self {
        Self {
            flavor: SchemeFlavor::ThreeTier,
            cutoffs: vec![
                Cutoff {
                    upper: high_below,
                    tier: RiskTier::High,
                },
                Cutoff {
                    upper: medium_below,
                    tier: RiskTier::Medium,
                },
            ],
            open_tier: RiskTier::Low,
        }
    }

    #[must_use]
    pub const fn flavor(&self) -> SchemeFlavor {
        self.flavor
    }

    /// Classify a non-negative toxicity value.
    #[must_use]
    pub fn classify(&self, value: f64) -> RiskTier {
        self.cutoffs
            .iter()
            .find(|cutoff| value < cutoff.upper)
            .map_or(self.open_tier, |cutoff| cutoff.tier)
    }

    /// Tiers this scheme can produce, most severe first.
    #[must_use]
    pub fn tiers(&self) -> Vec<RiskTier> {
        self.cutoffs
            .iter()
            .map(|cutoff| cutoff.tier)
            .chain(std::iter::once(self.open_tier))
            .collect()
    }

    /// Display label for a tier under this scheme.
    #[must_use]
    pub const fn label(&self, tier: RiskTier) -> &'static str {
        match (self.flavor, tier) {
            (SchemeFlavor::Ld50, RiskTier::Medium) => "Moderate",
            _ => tier.as_str(),
        }
    }

    /// Value range of a tier for dashboard cards, e.g. `"50-500"`.
    ///
    /// Returns `None` for tiers the scheme never produces.
    #[must_use]
    pub fn band(&self, tier: RiskTier) -> Option<String> {
        let mut lower: Option<f64> = None;
        for cutoff in &self.cutoffs {
            if cutoff.tier == tier {
                return Some(match lower {
                    None => format!("<{}", cutoff.upper),
                    Some(lower) => format!("{lower}-{}", cutoff.upper),
                });
            }
            lower = Some(cutoff.upper);
        }
        if tier == self.open_tier {
            return Some(lower.map_or_else(|| String::from("any"), |lower| format!(">={lower}")));
        }
        None
    }
}

/// Tier a freshly created record gets from its category alone.
///
/// Hormones and heavy metals are High; everything else starts Low.
#[must_use]
pub const fn category_tier(category: Category) -> RiskTier {
    match category {
        Category::Hormone | Category::HeavyMetal => RiskTier::High,
        _ => RiskTier::Low,
    }
}

/// Which of the two classification paths is in force.
///
/// The paths are alternatives and are never blended: a record is either
/// graded by its (stored or category-derived) tier, or by its numeric value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "policy", content = "scheme", rename_all = "snake_case")]
pub enum RiskPolicy {
    /// Tier assigned at creation time; the category rule fills in when a
    /// record carries no stored tier.
    Category,
    /// Tier derived on the fly from the toxicity value.
    Threshold(ThresholdScheme),
}

impl RiskPolicy {
    /// Tier for a record, given the value extracted from it.
    ///
    /// Under [`RiskPolicy::Threshold`] a record without a value has no tier.
    #[must_use]
    pub fn tier_for(&self, record: &ChemicalRecord, value: Option<f64>) -> Option<RiskTier> {
        match self {
            Self::Category => Some(record.risk.unwrap_or_else(|| category_tier(record.category))),
            Self::Threshold(scheme) => value.map(|value| scheme.classify(value)),
        }
    }

    /// Tiers reported by this policy, most severe first.
    #[must_use]
    pub fn tiers(&self) -> Vec<RiskTier> {
        match self {
            Self::Category => vec![RiskTier::High, RiskTier::Medium, RiskTier::Low],
            Self::Threshold(scheme) => scheme.tiers(),
        }
    }

    #[must_use]
    pub const fn label(&self, tier: RiskTier) -> &'static str {
        match self {
            Self::Category => tier.as_str(),
            Self::Threshold(scheme) => scheme.label(tier),
        }
    }
}
