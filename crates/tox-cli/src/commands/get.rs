use tox_core::responses::RecordDetail;
use tox_insight::{GeminiSummarizer, SummaryGenerator};
use tox_store::{MemoryStore, ObservationRepository, require_record};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GetArgs;
use crate::context::AppContext;
use crate::output::output;

/// Record with its observations and pathway; the summary is filled in by
/// `summarizer` when one is given.
async fn record_detail<S: SummaryGenerator>(
    store: &MemoryStore,
    id: &str,
    summarizer: Option<&S>,
) -> anyhow::Result<RecordDetail> {
    let record = require_record(store, id).await?;
    let observations = store.observations_for(id).await?;
    let aop = store.aop_for(id).await?;

    let summary = match summarizer {
        Some(summarizer) => Some(summarizer.generate(&record, &observations).await),
        None => None,
    };

    Ok(RecordDetail {
        record,
        observations,
        aop,
        summary,
    })
}

pub async fn handle(args: &GetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summarizer = if args.summary {
        let summarizer = GeminiSummarizer::from_config(&ctx.config.ai)?;
        if !summarizer.is_available() {
            tracing::warn!("ai.api_key is not set; summary will report the service as unavailable");
        }
        Some(summarizer)
    } else {
        None
    };

    let detail = record_detail(&ctx.store, &args.id, summarizer.as_ref()).await?;
    output(&detail, flags.format)
}
