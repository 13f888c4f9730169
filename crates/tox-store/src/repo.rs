//! Repository seams between the data layer and everything above it.
//!
//! Callers receive a repository by injection; nothing in toxscreen reaches
//! for a global store. Futures are `Send` so fetches can run on spawned
//! tasks under [`crate::FetchCoordinator`].

use std::future::Future;

use tox_core::entities::{AopGraph, ChemicalRecord, NewRecord, ToxicityObservation};

use crate::error::StoreError;

pub trait RecordRepository: Send + Sync {
    /// Every record, in storage order.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<ChemicalRecord>, StoreError>> + Send;

    fn fetch_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<ChemicalRecord>, StoreError>> + Send;

    /// Validate and insert a record. The store assigns id, tier, and
    /// creation time.
    fn create(
        &self,
        record: NewRecord,
    ) -> impl Future<Output = Result<ChemicalRecord, StoreError>> + Send;

    /// Remove a record together with its observations and AOP graph.
    /// Returns whether a record was removed.
    fn delete_by_id(&self, id: &str) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

pub trait ObservationRepository: Send + Sync {
    fn observations_for(
        &self,
        record_id: &str,
    ) -> impl Future<Output = Result<Vec<ToxicityObservation>, StoreError>> + Send;

    fn all_observations(
        &self,
    ) -> impl Future<Output = Result<Vec<ToxicityObservation>, StoreError>> + Send;

    fn aop_for(
        &self,
        record_id: &str,
    ) -> impl Future<Output = Result<Option<AopGraph>, StoreError>> + Send;
}
