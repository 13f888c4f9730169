//! Seed documents a [`crate::MemoryStore`] can be loaded from.
//!
//! Three JSON shapes are accepted:
//! - the pollutant directory layout (`{"pollutants": [...], "toxicity": [...],
//!   "aop": {...}}` with camelCase pollutant rows)
//! - a full export snapshot written by `toxs export`
//! - a bare array of LD50 table rows
//!
//! Every shape is converted to canonical records on load.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use chrono::Utc;
use serde::Deserialize;
use tox_core::entities::{AopGraph, ChemicalRecord, ToxicityObservation};
use tox_core::responses::ExportSnapshot;
use tox_engine::adapter::{Ld50Row, PollutantRow};
use tox_engine::classify::ThresholdScheme;

use crate::error::StoreError;

/// Canonical contents of a store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Seed {
    pub records: Vec<ChemicalRecord>,
    pub observations: Vec<ToxicityObservation>,
    pub aop: BTreeMap<String, AopGraph>,
}

impl Seed {
    #[must_use]
    pub fn into_snapshot(self) -> ExportSnapshot {
        ExportSnapshot {
            pollutants: self.records,
            toxicity: self.observations,
            aop: self.aop,
            generated_at: Utc::now(),
        }
    }

    /// Reject seeds whose record ids repeat.
    fn check_unique_ids(&self) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        for record in &self.records {
            if !seen.insert(record.id.as_str()) {
                return Err(StoreError::Validation(format!(
                    "duplicate record id {}",
                    record.id
                )));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct DirectoryDocument {
    pollutants: Vec<PollutantRow>,
    #[serde(default)]
    toxicity: Vec<ToxicityObservation>,
    #[serde(default)]
    aop: BTreeMap<String, AopGraph>,
}

// Variant order matters: directory rows require `casNumber`, which export
// snapshots never carry, so the directory shape is tried first.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeedDocument {
    Directory(DirectoryDocument),
    Snapshot(ExportSnapshot),
    Ld50(Vec<Ld50Row>),
}

/// Parse a seed document from JSON text.
///
/// `scheme` grades LD50 rows; the other shapes carry their own tiers.
///
/// # Errors
///
/// Returns [`serde_json::Error`] when the text matches none of the shapes.
pub fn parse_seed(text: &str, scheme: &ThresholdScheme) -> Result<Seed, serde_json::Error> {
    let seed = match serde_json::from_str::<SeedDocument>(text)? {
        SeedDocument::Directory(doc) => Seed {
            records: doc
                .pollutants
                .into_iter()
                .map(PollutantRow::into_record)
                .collect(),
            observations: doc.toxicity,
            aop: doc.aop,
        },
        SeedDocument::Snapshot(snapshot) => Seed {
            records: snapshot.pollutants,
            observations: snapshot.toxicity,
            aop: snapshot.aop,
        },
        SeedDocument::Ld50(rows) => Seed {
            records: rows.into_iter().map(|row| row.into_record(scheme)).collect(),
            observations: Vec::new(),
            aop: BTreeMap::new(),
        },
    };
    Ok(seed)
}

/// Read and parse a seed file.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file cannot be read,
/// [`StoreError::Parse`] if it matches no known shape, and
/// [`StoreError::Validation`] if record ids repeat.
pub async fn load_seed(path: &Path, scheme: &ThresholdScheme) -> Result<Seed, StoreError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let seed = parse_seed(&text, scheme).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    seed.check_unique_ids()?;
    tracing::debug!(
        path = %path.display(),
        records = seed.records.len(),
        observations = seed.observations.len(),
        "loaded seed file"
    );
    Ok(seed)
}
