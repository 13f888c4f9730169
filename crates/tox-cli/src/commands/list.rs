use serde::Serialize;
use tox_core::entities::ChemicalRecord;
use tox_core::enums::Category;
use tox_engine::classify::RiskPolicy;
use tox_engine::query::{Page, QueryState};

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::query::query_options;
use crate::commands::shared::values::RecordValues;
use crate::context::AppContext;
use crate::output::{TableRow, output, output_rows};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListRow {
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    risk: Option<&'static str>,
}

impl ListRow {
    /// `value` is the record's own toxicity value or its potency fallback.
    fn from_record(record: &ChemicalRecord, policy: &RiskPolicy, value: Option<f64>) -> Self {
        let risk = policy
            .tier_for(record, value)
            .map(|tier| policy.label(tier));
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            code: record.code.clone().or_else(|| record.alternate_name.clone()),
            category: record.category,
            value,
            unit: record.unit.clone(),
            risk,
        }
    }
}

impl TableRow for ListRow {
    fn headers() -> &'static [&'static str] {
        &["id", "name", "code", "category", "value", "risk"]
    }

    fn cells(&self) -> Vec<String> {
        let dash = || String::from("-");
        vec![
            self.id.clone(),
            self.name.clone(),
            self.code.clone().unwrap_or_else(dash),
            self.category.to_string(),
            self.value.map_or_else(dash, |value| value.to_string()),
            self.risk.map_or_else(dash, str::to_string),
        ]
    }
}

#[derive(Debug, Serialize)]
struct ListResponse {
    rows: Vec<ListRow>,
    total: usize,
    page: usize,
    page_size: usize,
    total_pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    showing: Option<String>,
}

/// "Showing 21-40 of 45".
fn showing_line<T>(page: &Page<T>) -> Option<String> {
    page.range()
        .map(|(first, last)| format!("Showing {first}-{last} of {}", page.total))
}

fn build_state(args: &ListArgs, ctx: &AppContext) -> anyhow::Result<QueryState> {
    let page_size = args
        .page_size
        .unwrap_or(ctx.config.general.page_size as usize)
        .max(1);
    Ok(QueryState::new(query_options(&args.query, ctx.dataset, page_size)?))
}

/// Query `records` and land on `page`, clamped to the pages that exist.
fn run_page(
    state: &mut QueryState,
    records: &[ChemicalRecord],
    page: usize,
) -> Page<ChemicalRecord> {
    state.run(records);
    state.set_page(page);
    if state.options().page_index != page {
        tracing::debug!(
            requested = page,
            page = state.options().page_index,
            "page out of range, clamped"
        );
    }
    state.run(records)
}

pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut state = build_state(args, ctx)?;
    let records = ctx.load_records().await?;
    let observations = ctx.load_observations().await?;
    let values = RecordValues::new(&records, &observations);
    let page = run_page(&mut state, &records, args.page);

    let rows: Vec<ListRow> = page
        .items
        .iter()
        .map(|record| ListRow::from_record(record, &ctx.policy, values.value(record)))
        .collect();
    let showing = showing_line(&page);

    if flags.format == OutputFormat::Table {
        output_rows(&rows, flags.format)?;
        if !flags.quiet {
            eprintln!(
                "{} (page {}/{})",
                showing.as_deref().unwrap_or("No matching records"),
                page.page_index,
                page.total_pages.max(1)
            );
        }
        return Ok(());
    }

    output(
        &ListResponse {
            rows,
            total: page.total,
            page: page.page_index,
            page_size: page.page_size,
            total_pages: page.total_pages,
            showing,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tox_config::ToxConfig;
    use tox_core::enums::{Category, DatasetVariant, RiskTier};
    use tox_engine::classify::{RiskPolicy, ThresholdScheme};
    use tox_store::MemoryStore;
    use tox_store::fixture::reference_seed;

    use super::{ListRow, build_state, run_page, showing_line};
    use crate::cli::root_commands::{ListArgs, QueryArgs};
    use crate::commands::shared::values::RecordValues;
    use crate::context::AppContext;
    use crate::output::TableRow;

    fn args() -> ListArgs {
        ListArgs {
            query: QueryArgs::default(),
            page: 1,
            page_size: None,
        }
    }

    fn ctx() -> AppContext {
        AppContext::with_store(ToxConfig::default(), MemoryStore::default())
    }

    #[test]
    fn filters_and_sorts_reference_records() {
        let records = reference_seed().records;
        let mut list = args();
        list.query.category = Some("antibiotic".into());
        list.query.sort = Some("name".into());
        list.query.order = Some("desc".into());

        let mut state = build_state(&list, &ctx()).expect("state");
        let page = run_page(&mut state, &records, 1);
        let names: Vec<&str> = page.items.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, vec!["Tylosin", "Oxytetracycline"]);
        assert_eq!(showing_line(&page).as_deref(), Some("Showing 1-2 of 2"));
    }

    #[test]
    fn search_matches_cas_numbers() {
        let records = reference_seed().records;
        let mut list = args();
        list.query.search = Some("1912".into());

        let mut state = build_state(&list, &ctx()).expect("state");
        let page = run_page(&mut state, &records, 1);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "p4");
    }

    #[test]
    fn page_beyond_range_is_clamped() {
        let records = reference_seed().records;
        let mut list = args();
        list.page_size = Some(3);

        let mut state = build_state(&list, &ctx()).expect("state");
        let page = run_page(&mut state, &records, 9);
        assert_eq!(page.page_index, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(showing_line(&page).as_deref(), Some("Showing 4-4 of 4"));
    }

    #[test]
    fn invalid_flags_are_rejected() {
        let mut list = args();
        list.query.sort = Some("potency".into());
        assert!(build_state(&list, &ctx()).is_err());

        let mut list = args();
        list.query.category = Some("plastics".into());
        assert!(build_state(&list, &ctx()).is_err());
    }

    #[test]
    fn rows_carry_policy_labels() {
        let mut record = reference_seed().records.remove(0);
        record.toxicity_value = Some(120.0);

        let value = record.toxicity_value;
        let category = ListRow::from_record(&record, &RiskPolicy::Category, value);
        assert_eq!(category.risk, Some("Medium"));

        let threshold =
            ListRow::from_record(&record, &RiskPolicy::Threshold(ThresholdScheme::ld50()), value);
        assert_eq!(threshold.risk, Some("Moderate"));
        assert_eq!(threshold.cells()[4], "120");
        assert_eq!(record.risk, Some(RiskTier::Medium));
        assert_eq!(threshold.category, Category::Antibiotic);
    }

    #[test]
    fn threshold_policy_grades_pollutants_by_potency() {
        let seed = reference_seed();
        let values = RecordValues::new(&seed.records, &seed.observations);
        let policy = RiskPolicy::Threshold(ThresholdScheme::three_tier(1.0, 100.0));

        let graded: Vec<(&str, Option<&str>)> = seed
            .records
            .iter()
            .map(|record| {
                let row = ListRow::from_record(record, &policy, values.value(record));
                assert!(row.value.is_some(), "{} should carry its potency", record.id);
                (record.id.as_str(), row.risk)
            })
            .collect();
        assert_eq!(
            graded,
            vec![
                ("p1", Some("Medium")),
                ("p2", Some("High")),
                ("p3", Some("Low")),
                ("p4", Some("High")),
            ]
        );
    }

    #[test]
    fn ld50_list_starts_sorted_by_value() {
        let mut records = reference_seed().records;
        for (record, value) in records.iter_mut().zip([600.0, 2.0, 40.0, 6000.0]) {
            record.toxicity_value = Some(value);
        }
        let mut ctx = ctx();
        ctx.dataset = DatasetVariant::Ld50;

        let mut state = build_state(&args(), &ctx).expect("state");
        let page = run_page(&mut state, &records, 1);
        let ids: Vec<&str> = page.items.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p3", "p1", "p4"]);

        let mut by_name = args();
        by_name.query.sort = Some("name".into());
        let mut state = build_state(&by_name, &ctx).expect("state");
        let page = run_page(&mut state, &records, 1);
        let ids: Vec<&str> = page.items.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["p4", "p2", "p1", "p3"]);
    }
}
