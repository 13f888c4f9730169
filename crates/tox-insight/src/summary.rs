//! Best-effort summary generation.
//!
//! Summaries never fail from the caller's point of view: a missing key, a
//! failed call, or an empty answer each become a fixed sentinel sentence.

use std::future::Future;

use tox_config::AiConfig;
use tox_core::entities::{ChemicalRecord, ToxicityObservation};

use crate::error::InsightError;
use crate::gemini::GeminiClient;
use crate::prompt::build_prompt;

pub const UNAVAILABLE: &str = "AI Service Unavailable: API Key not configured.";
pub const EMPTY_SUMMARY: &str = "No summary generated.";
pub const FAILED_SUMMARY: &str = "Error generating summary. Please try again later.";

/// Produces a short risk-assessment text for one record.
pub trait SummaryGenerator: Send + Sync {
    fn generate(
        &self,
        record: &ChemicalRecord,
        observations: &[ToxicityObservation],
    ) -> impl Future<Output = String> + Send;
}

/// Map a generation result onto the text shown to the user.
#[must_use]
pub fn settle_summary(result: Result<Option<String>, InsightError>) -> String {
    match result {
        Ok(Some(text)) => text,
        Ok(None) => EMPTY_SUMMARY.to_string(),
        Err(error) => {
            tracing::warn!(%error, "summary generation failed");
            FAILED_SUMMARY.to_string()
        }
    }
}

/// [`SummaryGenerator`] backed by Gemini, or by nothing when no key is set.
pub struct GeminiSummarizer {
    client: Option<GeminiClient>,
}

impl GeminiSummarizer {
    #[must_use]
    pub const fn new(client: Option<GeminiClient>) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AiConfig) -> Result<Self, InsightError> {
        Ok(Self::new(GeminiClient::from_config(config)?))
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.client.is_some()
    }
}

impl SummaryGenerator for GeminiSummarizer {
    async fn generate(
        &self,
        record: &ChemicalRecord,
        observations: &[ToxicityObservation],
    ) -> String {
        let Some(client) = &self.client else {
            return UNAVAILABLE.to_string();
        };
        let prompt = build_prompt(record, observations);
        settle_summary(client.generate(&prompt).await)
    }
}
