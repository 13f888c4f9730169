use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One measured endpoint for one chemical. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToxicityObservation {
    pub id: String,
    /// Id of the chemical record this observation belongs to.
    pub pollutant_id: String,
    /// Free-form effect label, e.g. "Acute Toxicity".
    pub toxicity_type: String,
    pub test_organism: String,
    /// Endpoint code such as `LC50`, `EC50`, `IC50`, `LD50`, `NOEC`.
    pub endpoint: String,
    pub value: f64,
    pub unit: String,
    pub reference: String,
}
