use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use tox_core::entities::{ChemicalRecord, ToxicityObservation};
use tox_core::enums::DatasetVariant;
use tox_core::responses::ExportSnapshot;
use tox_engine::export::{
    columns_for, csv_file_name, json_file_name, observation_columns, to_delimited_text, to_json,
};
use tox_engine::query::query;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ExportArgs, QueryArgs};
use crate::commands::shared::query::query_options;
use crate::context::AppContext;
use crate::output::output;

/// A rendered export, not yet written.
#[derive(Debug, PartialEq, Eq)]
struct Artifact {
    file_name: String,
    contents: String,
    format: &'static str,
    rows: usize,
}

#[derive(Debug, Serialize)]
struct ExportResponse {
    path: String,
    format: &'static str,
    rows: usize,
    bytes: usize,
}

fn snapshot_artifact(snapshot: &ExportSnapshot, epoch_ms: i64) -> anyhow::Result<Artifact> {
    Ok(Artifact {
        file_name: json_file_name(epoch_ms),
        contents: to_json(snapshot).context("failed to serialize export snapshot")?,
        format: "json",
        rows: snapshot.pollutants.len(),
    })
}

/// Every record the query flags select, in query order, on one page.
fn matching_records(
    records: &[ChemicalRecord],
    args: &QueryArgs,
    dataset: DatasetVariant,
) -> anyhow::Result<Vec<ChemicalRecord>> {
    let options = query_options(args, dataset, records.len().max(1))?;
    Ok(query(records, &options).items)
}

fn record_table_artifact(
    records: &[ChemicalRecord],
    dataset: DatasetVariant,
    epoch_ms: i64,
) -> Artifact {
    Artifact {
        file_name: csv_file_name(epoch_ms),
        contents: to_delimited_text(records, &columns_for(dataset)),
        format: "csv",
        rows: records.len(),
    }
}

fn observation_table_artifact(observations: &[ToxicityObservation], epoch_ms: i64) -> Artifact {
    Artifact {
        file_name: csv_file_name(epoch_ms),
        contents: to_delimited_text(observations, &observation_columns()),
        format: "csv",
        rows: observations.len(),
    }
}

async fn write_artifact(dir: &Path, artifact: &Artifact) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;
    let path = dir.join(&artifact.file_name);
    tokio::fs::write(&path, &artifact.contents)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = artifact.rows, "wrote export");
    Ok(path)
}

pub async fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let epoch_ms = Utc::now().timestamp_millis();
    let artifact = match (args.csv, args.observations) {
        (true, true) => observation_table_artifact(&ctx.load_observations().await?, epoch_ms),
        (true, false) => {
            let records = ctx.load_records().await?;
            let selected = matching_records(&records, &args.query, ctx.dataset)?;
            tracing::debug!(total = records.len(), selected = selected.len(), "filtered export");
            record_table_artifact(&selected, ctx.dataset, epoch_ms)
        }
        (false, _) => snapshot_artifact(&ctx.store.snapshot().await, epoch_ms)?,
    };

    let dir = args.out.as_deref().map_or_else(|| PathBuf::from("."), PathBuf::from);
    let path = write_artifact(&dir, &artifact).await?;

    output(
        &ExportResponse {
            path: path.display().to_string(),
            format: artifact.format,
            rows: artifact.rows,
            bytes: artifact.contents.len(),
        },
        flags.format,
    )
}
