use tox_engine::compare::{ComparisonRow, compare_records};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CompareArgs;
use crate::context::AppContext;
use crate::output::{TableRow, output_rows};

impl TableRow for ComparisonRow {
    fn headers() -> &'static [&'static str] {
        &["id", "name", "value", "unit", "observations"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            if self.has_data() {
                self.value.to_string()
            } else {
                String::from("no data")
            },
            self.unit.clone(),
            self.count.to_string(),
        ]
    }
}

pub async fn handle(
    args: &CompareArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.ids.len() < 2 {
        tracing::warn!(selected = args.ids.len(), "comparison needs at least two records");
        if !flags.quiet {
            eprintln!("Select at least two records to compare.");
        }
    }

    let records = ctx.load_records().await?;
    let observations = ctx.load_observations().await?;
    let rows = compare_records(&args.ids, &records, &observations);

    for row in rows.iter().filter(|row| !row.units_consistent) {
        tracing::warn!(
            id = %row.id,
            unit = %row.unit,
            "observations mix units; value compared as reported"
        );
    }

    output_rows(&rows, flags.format)
}
