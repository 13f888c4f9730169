//! Distribution summaries for the overview dashboard.

use serde::Serialize;
use tox_core::entities::ChemicalRecord;
use tox_core::enums::RiskTier;

use crate::classify::RiskPolicy;

/// Count of records in one risk tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskBucket {
    pub tier: RiskTier,
    /// Tier label under the active policy ("Moderate" for LD50 Medium).
    pub label: &'static str,
    pub count: usize,
}

/// Count of records in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Summary of a record collection.
///
/// `min`, `max`, and `mean` cover only records with a value and are 0 when
/// no record has one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub min: f64,
    pub max: f64,
    /// Unrounded mean for further computation.
    pub mean: f64,
    /// Mean rounded to one decimal place.
    pub mean_display: f64,
    /// How many records had a value.
    pub valued: usize,
    /// Every tier of the policy, zero counts included.
    pub risk_counts: Vec<RiskBucket>,
    /// Chart-facing tiers: zero counts omitted.
    pub risk_histogram: Vec<RiskBucket>,
    /// Categories in first-seen order.
    pub category_histogram: Vec<CategoryCount>,
}

impl Statistics {
    #[must_use]
    pub fn count_for(&self, tier: RiskTier) -> usize {
        self.risk_counts
            .iter()
            .find(|bucket| bucket.tier == tier)
            .map_or(0, |bucket| bucket.count)
    }

    /// Records in the High tier, for the dashboard alert.
    #[must_use]
    pub fn high_risk(&self) -> usize {
        self.count_for(RiskTier::High)
    }
}

/// Builds [`Statistics`] under one [`RiskPolicy`].
#[derive(Debug, Clone)]
pub struct StatisticsAggregator {
    policy: RiskPolicy,
}

impl StatisticsAggregator {
    #[must_use]
    pub const fn new(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    /// Summarize `records`, reading each record's value through `extract`.
    pub fn aggregate<F>(&self, records: &[ChemicalRecord], extract: F) -> Statistics
    where
        F: Fn(&ChemicalRecord) -> Option<f64>,
    {
        let tiers = self.policy.tiers();
        let mut tier_counts = vec![0usize; tiers.len()];
        let mut category_histogram: Vec<CategoryCount> = Vec::new();
        let mut values = Vec::with_capacity(records.len());

        for record in records {
            let value = extract(record);
            if let Some(value) = value {
                values.push(value);
            }

            if let Some(tier) = self.policy.tier_for(record, value) {
                if let Some(index) = tiers.iter().position(|known| *known == tier) {
                    tier_counts[index] += 1;
                }
            }

            let label = record.category.as_str();
            match category_histogram
                .iter_mut()
                .find(|entry| entry.category == label)
            {
                Some(entry) => entry.count += 1,
                None => category_histogram.push(CategoryCount {
                    category: label.to_string(),
                    count: 1,
                }),
            }
        }

        let (min, max, mean) = summarize(&values);

        let risk_counts: Vec<RiskBucket> = tiers
            .iter()
            .zip(tier_counts)
            .map(|(tier, count)| RiskBucket {
                tier: *tier,
                label: self.policy.label(*tier),
                count,
            })
            .collect();
        let risk_histogram = risk_counts
            .iter()
            .filter(|bucket| bucket.count > 0)
            .cloned()
            .collect();

        Statistics {
            total: records.len(),
            min,
            max,
            mean,
            mean_display: round_one_decimal(mean),
            valued: values.len(),
            risk_counts,
            risk_histogram,
            category_histogram,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn summarize(values: &[f64]) -> (f64, f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (min, max, mean)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tox_core::enums::Category;

    use super::*;
    use crate::classify::ThresholdScheme;

    fn record(id: &str, category: Category, value: Option<f64>) -> ChemicalRecord {
        ChemicalRecord {
            id: id.into(),
            name: id.into(),
            alternate_name: None,
            code: None,
            category,
            description: String::new(),
            structure: None,
            inchikey: None,
            pubchem_cid: None,
            toxicity_value: value,
            unit: None,
            risk: None,
            created_at: None,
        }
    }

    fn ld50() -> StatisticsAggregator {
        StatisticsAggregator::new(RiskPolicy::Threshold(ThresholdScheme::ld50()))
    }

    #[test]
    fn empty_input_is_all_zero() {
        let stats = ld50().aggregate(&[], |r| r.toxicity_value);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.mean_display, 0.0);
        assert!(stats.risk_histogram.is_empty());
        assert!(stats.category_histogram.is_empty());
        assert!(stats.risk_counts.iter().all(|bucket| bucket.count == 0));
    }

    #[test]
    fn summarizes_values_and_tiers() {
        let records = vec![
            record("a", Category::Carbamate, Some(10.0)),
            record("b", Category::Other, Some(600.0)),
            record("c", Category::Other, Some(6000.0)),
        ];
        let stats = ld50().aggregate(&records, |r| r.toxicity_value);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 6000.0);
        assert_eq!(stats.mean_display, 2203.3);
        assert!((stats.mean - 6610.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.count_for(RiskTier::High), 1);
        assert_eq!(stats.count_for(RiskTier::Medium), 0);
        assert_eq!(stats.count_for(RiskTier::Low), 1);
        assert_eq!(stats.count_for(RiskTier::VeryLow), 1);

        let charted: Vec<RiskTier> = stats.risk_histogram.iter().map(|b| b.tier).collect();
        assert_eq!(charted, vec![RiskTier::High, RiskTier::Low, RiskTier::VeryLow]);
        assert_eq!(stats.risk_counts.len(), 4);
    }

    #[test]
    fn records_without_value_count_in_total_only() {
        let records = vec![
            record("a", Category::Other, None),
            record("b", Category::Other, Some(40.0)),
        ];
        let stats = ld50().aggregate(&records, |r| r.toxicity_value);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.valued, 1);
        assert_eq!(stats.min, 40.0);
        assert_eq!(stats.high_risk(), 1);
        assert_eq!(stats.risk_counts.iter().map(|b| b.count).sum::<usize>(), 1);
    }

    #[test]
    fn category_histogram_keeps_first_seen_order() {
        let records = vec![
            record("a", Category::Pesticide, None),
            record("b", Category::Antibiotic, None),
            record("c", Category::Pesticide, None),
            record("d", Category::Hormone, None),
        ];
        let stats = ld50().aggregate(&records, |r| r.toxicity_value);
        let order: Vec<(&str, usize)> = stats
            .category_histogram
            .iter()
            .map(|entry| (entry.category.as_str(), entry.count))
            .collect();
        assert_eq!(
            order,
            vec![("Pesticide", 2), ("Antibiotic", 1), ("Hormone", 1)]
        );
    }

    #[test]
    fn category_policy_prefers_stored_tier() {
        let mut stored = record("a", Category::Antibiotic, None);
        stored.risk = Some(RiskTier::Medium);
        let records = vec![
            stored,
            record("b", Category::Hormone, None),
            record("c", Category::Antibiotic, None),
        ];
        let stats = StatisticsAggregator::new(RiskPolicy::Category)
            .aggregate(&records, |r| r.toxicity_value);

        assert_eq!(stats.count_for(RiskTier::High), 1);
        assert_eq!(stats.count_for(RiskTier::Medium), 1);
        assert_eq!(stats.count_for(RiskTier::Low), 1);
        assert_eq!(stats.risk_counts.len(), 3);
    }

    #[test]
    fn ld50_buckets_use_moderate_label() {
        let records = vec![record("a", Category::Other, Some(120.0))];
        let stats = ld50().aggregate(&records, |r| r.toxicity_value);
        assert_eq!(stats.risk_histogram[0].label, "Moderate");
    }

    #[test]
    fn custom_extractor_is_used() {
        let records = vec![
            record("a", Category::Other, Some(1.0)),
            record("b", Category::Other, Some(3.0)),
        ];
        let stats = ld50().aggregate(&records, |r| r.toxicity_value.map(|v| v * 100.0));
        assert_eq!(stats.min, 100.0);
        assert_eq!(stats.max, 300.0);
        assert_eq!(stats.mean, 200.0);
    }
}
