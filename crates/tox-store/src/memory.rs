//! In-process store implementing both repository traits.

use std::path::Path;

use chrono::Utc;
use tokio::sync::RwLock;
use tox_core::entities::{AopGraph, ChemicalRecord, NewRecord, ToxicityObservation};
use tox_core::responses::ExportSnapshot;
use tox_engine::classify::{ThresholdScheme, category_tier};

use crate::error::StoreError;
use crate::fixture::reference_seed;
use crate::repo::{ObservationRepository, RecordRepository};
use crate::seed::{Seed, load_seed};

/// Store backed by a [`Seed`] behind an async read-write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Seed>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            inner: RwLock::new(seed),
        }
    }

    /// Store holding the reference pollutant dataset.
    #[must_use]
    pub fn with_reference_fixture() -> Self {
        Self::new(reference_seed())
    }

    /// Store seeded from a JSON file (see [`crate::seed`] for the shapes).
    ///
    /// # Errors
    ///
    /// Propagates [`load_seed`] errors.
    pub async fn from_seed_file(path: &Path, scheme: &ThresholdScheme) -> Result<Self, StoreError> {
        Ok(Self::new(load_seed(path, scheme).await?))
    }

    /// Everything the store holds, stamped with the current time.
    pub async fn snapshot(&self) -> ExportSnapshot {
        self.inner.read().await.clone().into_snapshot()
    }
}

/// `p<epoch-ms>`, suffixed with `-2`, `-3`, ... while the id is taken.
fn next_record_id(records: &[ChemicalRecord], epoch_ms: i64) -> String {
    let base = format!("p{epoch_ms}");
    let taken = |candidate: &str| records.iter().any(|record| record.id == candidate);
    if !taken(&base) {
        return base;
    }
    let mut suffix = 2u32;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

impl RecordRepository for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<ChemicalRecord>, StoreError> {
        let records = self.inner.read().await.records.clone();
        tracing::debug!(count = records.len(), "fetched records");
        Ok(records)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<ChemicalRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().find(|record| record.id == id).cloned())
    }

    async fn create(&self, record: NewRecord) -> Result<ChemicalRecord, StoreError> {
        record.validate()?;

        let now = Utc::now();
        let mut inner = self.inner.write().await;
        let created = ChemicalRecord {
            id: next_record_id(&inner.records, now.timestamp_millis()),
            name: record.name.trim().to_string(),
            alternate_name: None,
            code: Some(record.code.trim().to_string()),
            category: record.category,
            description: record.description.trim().to_string(),
            structure: record.structure.filter(|smiles| !smiles.trim().is_empty()),
            inchikey: None,
            pubchem_cid: None,
            toxicity_value: None,
            unit: None,
            risk: Some(category_tier(record.category)),
            created_at: Some(now),
        };
        inner.records.push(created.clone());
        tracing::debug!(id = %created.id, risk = ?created.risk, "created record");
        Ok(created)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.records.len();
        inner.records.retain(|record| record.id != id);
        if inner.records.len() == before {
            tracing::debug!(id, "delete skipped: no such record");
            return Ok(false);
        }
        inner.observations.retain(|obs| obs.pollutant_id != id);
        inner.aop.remove(id);
        tracing::debug!(id, "deleted record and dependents");
        Ok(true)
    }
}

impl ObservationRepository for MemoryStore {
    async fn observations_for(
        &self,
        record_id: &str,
    ) -> Result<Vec<ToxicityObservation>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .observations
            .iter()
            .filter(|obs| obs.pollutant_id == record_id)
            .cloned()
            .collect())
    }

    async fn all_observations(&self) -> Result<Vec<ToxicityObservation>, StoreError> {
        Ok(self.inner.read().await.observations.clone())
    }

    async fn aop_for(&self, record_id: &str) -> Result<Option<AopGraph>, StoreError> {
        Ok(self.inner.read().await.aop.get(record_id).cloned())
    }
}

/// Fetch a record or fail with [`StoreError::NotFound`].
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] when no record has `id`, or whatever
/// the repository itself returns.
pub async fn require_record<R: RecordRepository>(
    repo: &R,
    id: &str,
) -> Result<ChemicalRecord, StoreError> {
    repo.fetch_by_id(id)
        .await?
        .ok_or_else(|| StoreError::record_not_found(id))
}
