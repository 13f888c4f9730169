//! # tox-insight
//!
//! Short AI-written risk assessments for the pollutant detail view.
//!
//! [`SummaryGenerator`] is the seam; [`GeminiSummarizer`] implements it over
//! the Gemini `generateContent` REST API. Generation is best-effort and
//! always yields display text (see the sentinels in [`summary`]).

mod error;
pub mod gemini;
mod http;
pub mod prompt;
pub mod summary;

pub use error::InsightError;
pub use gemini::GeminiClient;
pub use summary::{GeminiSummarizer, SummaryGenerator};
