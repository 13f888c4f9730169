//! Response shapes returned as JSON by `toxs` commands and the export surface.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AopGraph, ChemicalRecord, ToxicityObservation};

/// Response from `toxs get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecordDetail {
    pub record: ChemicalRecord,
    pub observations: Vec<ToxicityObservation>,
    pub aop: Option<AopGraph>,
    pub summary: Option<String>,
}

/// Every top-level collection plus AOP data, as written by a full JSON export.
///
/// `aop` is keyed by pollutant id in a `BTreeMap` so the serialized key order
/// is stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub pollutants: Vec<ChemicalRecord>,
    pub toxicity: Vec<ToxicityObservation>,
    pub aop: BTreeMap<String, AopGraph>,
    pub generated_at: DateTime<Utc>,
}
