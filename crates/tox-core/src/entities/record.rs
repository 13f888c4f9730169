use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, RiskTier};
use crate::errors::CoreError;

/// A pollutant or chemical, in the canonical schema shared by every dataset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalRecord {
    pub id: String,
    pub name: String,
    /// IUPAC or other alternate name.
    #[serde(default)]
    pub alternate_name: Option<String>,
    /// Registry code, e.g. the CAS number.
    #[serde(default)]
    pub code: Option<String>,
    pub category: Category,
    /// Usage or free-text description.
    #[serde(default)]
    pub description: String,
    /// Chemical line notation (SMILES).
    #[serde(default)]
    pub structure: Option<String>,
    #[serde(default)]
    pub inchikey: Option<String>,
    #[serde(default)]
    pub pubchem_cid: Option<u64>,
    #[serde(default)]
    pub toxicity_value: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub risk: Option<RiskTier>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// User-supplied fields for creating a record through a repository.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub name: String,
    /// CAS number or other identifying code.
    pub code: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub structure: Option<String>,
}

impl NewRecord {
    /// Check the required fields before the data layer is invoked.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first blank required field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let required = [
            ("name", &self.name),
            ("code", &self.code),
            ("description", &self.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}
