//! Risk tiers, chemical categories, AOP node types, and dataset variants.
//!
//! Enums that travel through JSON keep the labels the dashboards display
//! (`"Heavy Metal"`, `"Very Low"`), so exported snapshots read the same as
//! the data they were loaded from. `from_label` accepts the loose spellings
//! users type on the command line.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase a label and fold `_`/`-` into spaces for lenient matching.
fn normalize_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|ch| if ch == '_' || ch == '-' { ' ' } else { ch })
        .collect::<String>()
        .to_lowercase()
}

// ---------------------------------------------------------------------------
// RiskTier
// ---------------------------------------------------------------------------

/// Discrete risk bucket derived from a toxicity measurement or a category.
///
/// Variants are declared most severe first, so the derived `Ord` sorts
/// `High < Medium < Low < VeryLow`.
///
/// ```text
/// High → Medium ("Moderate" under LD50) → Low → Very Low
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum RiskTier {
    High,
    #[serde(alias = "Moderate")]
    Medium,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
}

impl RiskTier {
    /// All tiers, most severe first.
    pub const ALL: [Self; 4] = [Self::High, Self::Medium, Self::Low, Self::VeryLow];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }

    /// Parse a tier label. `"Moderate"` is accepted for `Medium`.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "high" => Some(Self::High),
            "medium" | "moderate" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "very low" | "verylow" => Some(Self::VeryLow),
            _ => None,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Classification category of a chemical record.
///
/// `Antibiotic`, `Hormone`, and `Pesticide` appear only in the pollutant
/// directory. LD50 name-based categorization yields the pesticide classes,
/// `Mycotoxin`, and `Pharmaceutical`. `HeavyMetal` and `Other` occur in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    Antibiotic,
    Hormone,
    Pesticide,
    #[serde(rename = "Heavy Metal")]
    HeavyMetal,
    #[serde(rename = "Organochlorine Pesticide")]
    OrganochlorinePesticide,
    #[serde(rename = "Organophosphate Pesticide")]
    OrganophosphatePesticide,
    Carbamate,
    Herbicide,
    Pyrethroid,
    Mycotoxin,
    Pharmaceutical,
    Other,
}

impl Category {
    pub const ALL: [Self; 12] = [
        Self::Antibiotic,
        Self::Hormone,
        Self::Pesticide,
        Self::HeavyMetal,
        Self::OrganochlorinePesticide,
        Self::OrganophosphatePesticide,
        Self::Carbamate,
        Self::Herbicide,
        Self::Pyrethroid,
        Self::Mycotoxin,
        Self::Pharmaceutical,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Antibiotic => "Antibiotic",
            Self::Hormone => "Hormone",
            Self::Pesticide => "Pesticide",
            Self::HeavyMetal => "Heavy Metal",
            Self::OrganochlorinePesticide => "Organochlorine Pesticide",
            Self::OrganophosphatePesticide => "Organophosphate Pesticide",
            Self::Carbamate => "Carbamate",
            Self::Herbicide => "Herbicide",
            Self::Pyrethroid => "Pyrethroid",
            Self::Mycotoxin => "Mycotoxin",
            Self::Pharmaceutical => "Pharmaceutical",
            Self::Other => "Other",
        }
    }

    /// Parse a category label, ignoring case and `_`/`-` separators.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        let wanted = normalize_label(raw);
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().to_lowercase() == wanted)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AopNodeType
// ---------------------------------------------------------------------------

/// Node role in an adverse-outcome-pathway graph.
///
/// ```text
/// MIE (molecular initiating event) → KE (key event)* → AO (adverse outcome)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AopNodeType {
    Mie,
    Ke,
    Ao,
}

impl AopNodeType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mie => "MIE",
            Self::Ke => "KE",
            Self::Ao => "AO",
        }
    }
}

impl fmt::Display for AopNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DatasetVariant
// ---------------------------------------------------------------------------

/// Which data source shape a collection of records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DatasetVariant {
    /// Livestock pollutant directory with category-assigned risk.
    #[default]
    Pollutants,
    /// Chicken oral acute toxicity LD50 table with value-derived risk.
    Ld50,
}

impl DatasetVariant {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pollutants => "pollutants",
            Self::Ld50 => "ld50",
        }
    }
}

impl fmt::Display for DatasetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
