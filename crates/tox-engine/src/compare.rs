//! Side-by-side potency of selected chemicals.
//!
//! Potency is the lowest effect concentration a chemical reached on any
//! median or inhibitory endpoint: the lower the value, the more toxic.

use serde::Serialize;
use tox_core::entities::{ChemicalRecord, ToxicityObservation};

/// Endpoints that take part in a comparison. Threshold endpoints such as
/// NOEC or LOEC are ignored.
pub const COMPARISON_ENDPOINTS: [&str; 3] = ["LC50", "EC50", "IC50"];

/// Unit reported for rows without a single observed unit.
pub const DEFAULT_UNIT: &str = "mg/L";

/// One bar of the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub id: String,
    pub name: String,
    /// Minimum qualifying value; 0 when `count` is 0.
    pub value: f64,
    pub unit: String,
    /// Qualifying observations. Tells a real 0 apart from "no data".
    pub count: usize,
    /// False when the qualifying observations mix units.
    pub units_consistent: bool,
}

impl ComparisonRow {
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.count > 0
    }
}

/// Whether an endpoint label counts towards potency.
#[must_use]
pub fn is_comparison_endpoint(endpoint: &str) -> bool {
    let endpoint = endpoint.trim();
    COMPARISON_ENDPOINTS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(endpoint))
}

/// Build one row per selected id, in selection order.
///
/// `lookup` resolves display names; an id it cannot resolve is shown by its
/// id. Any number of ids is accepted, including none.
pub fn compare<'a, I, F>(
    selected_ids: I,
    observations: &[ToxicityObservation],
    lookup: F,
) -> Vec<ComparisonRow>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: Fn(&str) -> Option<&'a ChemicalRecord>,
{
    selected_ids
        .into_iter()
        .map(|id| {
            let id = id.as_ref();
            let name = lookup(id).map_or_else(|| id.to_string(), |record| record.name.clone());
            potency_row(id, name, observations)
        })
        .collect()
}

/// [`compare`] with names resolved from a record slice.
#[must_use]
pub fn compare_records(
    selected_ids: &[String],
    records: &[ChemicalRecord],
    observations: &[ToxicityObservation],
) -> Vec<ComparisonRow> {
    compare(selected_ids, observations, |id| {
        records.iter().find(|record| record.id == id)
    })
}

fn potency_row(id: &str, name: String, observations: &[ToxicityObservation]) -> ComparisonRow {
    let qualifying: Vec<&ToxicityObservation> = observations
        .iter()
        .filter(|obs| obs.pollutant_id == id && is_comparison_endpoint(&obs.endpoint))
        .collect();

    let value = qualifying
        .iter()
        .map(|obs| obs.value)
        .reduce(f64::min)
        .unwrap_or(0.0);

    let first_unit = qualifying.first().map(|obs| obs.unit.as_str());
    let units_consistent = qualifying
        .iter()
        .all(|obs| Some(obs.unit.as_str()) == first_unit);
    let unit = match first_unit {
        Some(unit) if units_consistent && !unit.trim().is_empty() => unit.to_string(),
        _ => DEFAULT_UNIT.to_string(),
    };

    ComparisonRow {
        id: id.to_string(),
        name,
        value,
        unit,
        count: qualifying.len(),
        units_consistent,
    }
}
