use serde::Serialize;
use tox_core::entities::{ChemicalRecord, ToxicityObservation};
use tox_core::enums::{DatasetVariant, RiskTier};
use tox_engine::classify::RiskPolicy;
use tox_engine::stats::{CategoryCount, RiskBucket, Statistics, StatisticsAggregator};

use crate::cli::GlobalFlags;
use crate::commands::shared::values::RecordValues;
use crate::context::AppContext;
use crate::output::output;

/// One risk card: the tier, its count, and the value range it covers.
#[derive(Debug, Serialize)]
struct TierCard {
    tier: RiskTier,
    label: &'static str,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    band: Option<String>,
}

#[derive(Debug, Serialize)]
struct DashboardResponse {
    dataset: DatasetVariant,
    policy: &'static str,
    total: usize,
    valued: usize,
    min: f64,
    max: f64,
    mean: f64,
    high_risk: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    alert: Option<String>,
    tiers: Vec<TierCard>,
    risk_histogram: Vec<RiskBucket>,
    categories: Vec<CategoryCount>,
}

fn alert_for(high_risk: usize) -> Option<String> {
    match high_risk {
        0 => None,
        1 => Some(String::from("1 high-risk record requires attention")),
        n => Some(format!("{n} high-risk records require attention")),
    }
}

fn build_response(
    dataset: DatasetVariant,
    policy: &RiskPolicy,
    records: &[ChemicalRecord],
    observations: &[ToxicityObservation],
) -> DashboardResponse {
    let values = RecordValues::new(records, observations);
    let stats: Statistics =
        StatisticsAggregator::new(policy.clone()).aggregate(records, |record| values.value(record));

    let tiers = stats
        .risk_counts
        .iter()
        .map(|bucket| TierCard {
            tier: bucket.tier,
            label: bucket.label,
            count: bucket.count,
            band: match policy {
                RiskPolicy::Category => None,
                RiskPolicy::Threshold(scheme) => scheme.band(bucket.tier),
            },
        })
        .collect();

    let high_risk = stats.high_risk();
    DashboardResponse {
        dataset,
        policy: match policy {
            RiskPolicy::Category => "category",
            RiskPolicy::Threshold(_) => "threshold",
        },
        total: stats.total,
        valued: stats.valued,
        min: stats.min,
        max: stats.max,
        mean: stats.mean_display,
        high_risk,
        alert: alert_for(high_risk),
        tiers,
        risk_histogram: stats.risk_histogram,
        categories: stats.category_histogram,
    }
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let records = ctx.load_records().await?;
    let observations = ctx.load_observations().await?;
    let response = build_response(ctx.dataset, &ctx.policy, &records, &observations);
    output(&response, flags.format)
}
