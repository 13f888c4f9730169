//! Delimited-text and JSON snapshot serialization.

use std::borrow::Cow;

use tox_core::entities::{ChemicalRecord, ToxicityObservation};
use tox_core::enums::DatasetVariant;
use tox_core::responses::ExportSnapshot;

/// One output column: a literal header label and a field reader.
///
/// A reader returning `None` leaves the cell empty.
pub struct Column<T> {
    pub label: &'static str,
    pub extract: fn(&T) -> Option<String>,
}

impl<T> Column<T> {
    #[must_use]
    pub const fn new(label: &'static str, extract: fn(&T) -> Option<String>) -> Self {
        Self { label, extract }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

type RecordColumn = Column<ChemicalRecord>;
type ObservationColumn = Column<ToxicityObservation>;

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column").field("label", &self.label).finish()
    }
}

/// Quote a field when it contains a comma, quote, or line break; inner
/// quotes are doubled.
#[must_use]
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Header row of column labels, then one comma-joined row per record,
/// separated by `\n`.
#[must_use]
pub fn to_delimited_text<T>(rows: &[T], columns: &[Column<T>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|column| escape_field(column.label))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| {
                (column.extract)(row)
                    .map(|value| escape_field(&value).into_owned())
                    .unwrap_or_default()
            })
            .collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

/// Columns of the LD50 table export, in the remote table's naming.
#[must_use]
pub fn ld50_columns() -> Vec<RecordColumn> {
    vec![
        RecordColumn::new("TAID", |r| Some(r.id.clone())),
        RecordColumn::new("Name", |r| Some(r.name.clone())),
        RecordColumn::new("IUPAC Name", |r| r.alternate_name.clone()),
        RecordColumn::new("PubChem CID", |r| r.pubchem_cid.map(|cid| cid.to_string())),
        RecordColumn::new("Canonical SMILES", |r| r.structure.clone()),
        RecordColumn::new("InChIKey", |r| r.inchikey.clone()),
        RecordColumn::new("Toxicity Value", |r| r.toxicity_value.map(|v| v.to_string())),
    ]
}

#[must_use]
pub fn pollutant_columns() -> Vec<RecordColumn> {
    vec![
        RecordColumn::new("ID", |r| Some(r.id.clone())),
        RecordColumn::new("Name", |r| Some(r.name.clone())),
        RecordColumn::new("CAS Number", |r| r.code.clone()),
        RecordColumn::new("Category", |r| Some(r.category.to_string())),
        RecordColumn::new("Usage", |r| Some(r.description.clone())),
        RecordColumn::new("SMILES", |r| r.structure.clone()),
        RecordColumn::new("Risk Level", |r| r.risk.map(|tier| tier.to_string())),
        RecordColumn::new("Created At", |r| r.created_at.map(|at| at.to_rfc3339())),
    ]
}

#[must_use]
pub fn observation_columns() -> Vec<ObservationColumn> {
    vec![
        ObservationColumn::new("ID", |o| Some(o.id.clone())),
        ObservationColumn::new("Pollutant ID", |o| Some(o.pollutant_id.clone())),
        ObservationColumn::new("Toxicity Type", |o| Some(o.toxicity_type.clone())),
        ObservationColumn::new("Test Organism", |o| Some(o.test_organism.clone())),
        ObservationColumn::new("Endpoint", |o| Some(o.endpoint.clone())),
        ObservationColumn::new("Value", |o| Some(o.value.to_string())),
        ObservationColumn::new("Unit", |o| Some(o.unit.clone())),
        ObservationColumn::new("Reference", |o| Some(o.reference.clone())),
    ]
}

#[must_use]
pub fn columns_for(dataset: DatasetVariant) -> Vec<RecordColumn> {
    match dataset {
        DatasetVariant::Pollutants => pollutant_columns(),
        DatasetVariant::Ld50 => ld50_columns(),
    }
}

/// Pretty-printed snapshot. Keys keep struct field order and the AOP map is
/// ordered, so identical snapshots serialize identically.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(snapshot: &ExportSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

#[must_use]
pub fn json_file_name(epoch_ms: i64) -> String {
    format!("pollutants_export_{epoch_ms}.json")
}

#[must_use]
pub fn csv_file_name(epoch_ms: i64) -> String {
    format!("toxicity_data_{epoch_ms}.csv")
}
