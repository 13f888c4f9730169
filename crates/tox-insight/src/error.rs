//! Insight error types.

use thiserror::Error;

/// Errors from the summary service. Callers turn these into sentinel
/// strings; they never reach a view.
#[derive(Debug, Error)]
pub enum InsightError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body had an unexpected shape.
    #[error("parse error: {0}")]
    Parse(String),
}
