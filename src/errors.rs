use thiserror::Error;

/// Errors surfaced by the summarize pipeline.
///
/// Every variant maps to a bounded HTTP status via [`SummarizerError::status_code`],
/// and its `Display` output is what callers see in the `{"error": ...}` payload.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// The caller sent something unusable (missing URL, bad JSON).
    #[error("{0}")]
    Validation(String),

    /// The webpage fetch or the completion call failed.
    #[error("{0}")]
    Upstream(String),

    /// A required credential is absent. Holds the variable name.
    #[error("{0} not configured")]
    Configuration(String),
}

impl SummarizerError {
    pub fn fetch(detail: impl std::fmt::Display) -> Self {
        SummarizerError::Upstream(format!("Error fetching website: {detail}"))
    }

    pub fn completion(detail: impl std::fmt::Display) -> Self {
        SummarizerError::Upstream(format!("Completion request failed: {detail}"))
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizerError::Validation(_) | SummarizerError::Upstream(_) => 400,
            SummarizerError::Configuration(_) => 500,
        }
    }
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::Upstream(format!("Failed to send HTTP request: {error}"))
    }
}
