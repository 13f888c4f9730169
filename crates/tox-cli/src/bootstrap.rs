use anyhow::Context;
use tox_config::{ClassificationConfig, PolicyKind, SchemeKind, ToxConfig};
use tox_core::enums::DatasetVariant;
use tox_engine::classify::{RiskPolicy, ThresholdScheme};
use tox_store::MemoryStore;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;

/// Layered config, with `--dataset` and `--seed` applied on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ToxConfig> {
    let mut config =
        ToxConfig::load_with_dotenv().context("failed to load toxscreen configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut ToxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(raw) = &flags.dataset {
        config.general.dataset = parse_enum::<DatasetVariant>(raw, "dataset")?;
    }
    if let Some(seed) = &flags.seed {
        config.store.seed_path.clone_from(seed);
    }
    Ok(())
}

#[must_use]
pub fn threshold_scheme(classification: &ClassificationConfig) -> ThresholdScheme {
    match classification.scheme {
        SchemeKind::Ld50 => ThresholdScheme::ld50(),
        SchemeKind::ThreeTier => {
            ThresholdScheme::three_tier(classification.high_below, classification.medium_below)
        }
    }
}

/// The policy in force for the configured dataset.
#[must_use]
pub fn risk_policy(config: &ToxConfig) -> RiskPolicy {
    let classification = &config.classification;
    match classification.policy_for(config.general.dataset) {
        PolicyKind::Category => RiskPolicy::Category,
        PolicyKind::Threshold => RiskPolicy::Threshold(threshold_scheme(classification)),
    }
}

/// Store from `store.seed_path`, or the built-in reference data.
///
/// The reference data is a pollutant directory; the LD50 dataset starts
/// empty without a seed file.
pub async fn open_store(config: &ToxConfig) -> anyhow::Result<MemoryStore> {
    if let Some(path) = config.store.seed_path() {
        let scheme = threshold_scheme(&config.classification);
        return MemoryStore::from_seed_file(&path, &scheme)
            .await
            .with_context(|| format!("failed to open seed file {}", path.display()));
    }

    match config.general.dataset {
        DatasetVariant::Pollutants => Ok(MemoryStore::with_reference_fixture()),
        DatasetVariant::Ld50 => {
            tracing::warn!("no store.seed_path configured for the ld50 dataset; starting empty");
            Ok(MemoryStore::default())
        }
    }
}
