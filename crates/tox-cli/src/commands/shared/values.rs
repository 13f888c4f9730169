//! Numeric values fed to the threshold policy and the dashboard.

use std::collections::HashMap;

use tox_core::entities::{ChemicalRecord, ToxicityObservation};
use tox_engine::compare::compare_records;

/// A record's own toxicity value, falling back to its comparison potency.
///
/// Pollutant records carry no value of their own; their lowest LC50, EC50,
/// or IC50 observation stands in for it.
#[derive(Debug, Default)]
pub struct RecordValues {
    potency: HashMap<String, f64>,
}

impl RecordValues {
    #[must_use]
    pub fn new(records: &[ChemicalRecord], observations: &[ToxicityObservation]) -> Self {
        let ids: Vec<String> = records
            .iter()
            .filter(|record| record.toxicity_value.is_none())
            .map(|record| record.id.clone())
            .collect();
        let potency = compare_records(&ids, records, observations)
            .into_iter()
            .filter(|row| row.has_data())
            .map(|row| (row.id, row.value))
            .collect();
        Self { potency }
    }

    #[must_use]
    pub fn value(&self, record: &ChemicalRecord) -> Option<f64> {
        record
            .toxicity_value
            .or_else(|| self.potency.get(&record.id).copied())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tox_store::fixture::reference_seed;

    use super::RecordValues;

    #[test]
    fn pollutants_fall_back_to_potency() {
        let seed = reference_seed();
        let values = RecordValues::new(&seed.records, &seed.observations);

        let with_data = seed
            .records
            .iter()
            .filter(|record| values.value(record).is_some())
            .count();
        assert!(with_data > 0);

        let mut valued = seed.records[0].clone();
        valued.toxicity_value = Some(3.5);
        assert_eq!(values.value(&valued), Some(3.5));
    }

    #[test]
    fn records_without_observations_have_no_value() {
        let mut record = reference_seed().records.remove(0);
        record.id = "unobserved".into();
        let values = RecordValues::new(std::slice::from_ref(&record), &[]);
        assert_eq!(values.value(&record), None);
    }
}
