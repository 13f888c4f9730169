use std::future::Future;
use std::sync::Arc;

use tox_config::ToxConfig;
use tox_core::entities::{ChemicalRecord, ToxicityObservation};
use tox_core::enums::DatasetVariant;
use tox_engine::classify::RiskPolicy;
use tox_store::{
    FetchCoordinator, FetchOutcome, MemoryStore, ObservationRepository, RecordRepository,
    StoreError,
};

use crate::bootstrap;

/// Everything a command needs: resolved config, the active policy, and the store.
pub struct AppContext {
    pub config: ToxConfig,
    pub dataset: DatasetVariant,
    pub policy: RiskPolicy,
    pub store: Arc<MemoryStore>,
}

impl AppContext {
    pub async fn init(config: ToxConfig) -> anyhow::Result<Self> {
        let store = bootstrap::open_store(&config).await?;
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: ToxConfig, store: MemoryStore) -> Self {
        let policy = bootstrap::risk_policy(&config);
        tracing::debug!(dataset = %config.general.dataset, ?policy, "resolved risk policy");
        Self {
            dataset: config.general.dataset,
            policy,
            config,
            store: Arc::new(store),
        }
    }

    pub async fn load_records(&self) -> anyhow::Result<Vec<ChemicalRecord>> {
        let store = Arc::clone(&self.store);
        load("records", async move { store.fetch_all().await }).await
    }

    pub async fn load_observations(&self) -> anyhow::Result<Vec<ToxicityObservation>> {
        let store = Arc::clone(&self.store);
        load("observations", async move { store.all_observations().await }).await
    }
}

/// Run one fetch through a [`FetchCoordinator`] and hand back its data.
async fn load<T, F>(what: &str, fetch: F) -> anyhow::Result<T>
where
    T: Clone + Send + 'static,
    F: Future<Output = Result<T, StoreError>> + Send + 'static,
{
    let coordinator = FetchCoordinator::new();
    let outcome = coordinator.start(fetch).outcome().await;
    let state = coordinator.state();
    match (outcome, state.data) {
        (FetchOutcome::Applied, Some(data)) => Ok(data),
        (outcome, _) => Err(anyhow::anyhow!(
            "failed to load {what}: {}",
            state.error.unwrap_or_else(|| format!("{outcome:?}"))
        )),
    }
}
