use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::errors::SummarizerError;

/// Outcome of reducing a webpage to plain text. `Ok` holds the extracted text.
pub type ExtractionResult = Result<String, SummarizerError>;

/// Outcome of the completion call. `Ok` holds the generated summary.
pub type SummaryResult = Result<String, SummarizerError>;

#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub mode: &'static str,
    pub model: String,
}

/// Transport-neutral response: a status code and a JSON body.
///
/// Both the serverless handler and the standalone server render this type,
/// so status mapping lives in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub fn ok<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self::new(200, body),
            Err(e) => Self::internal(&format!("Failed to serialize response: {e}")),
        }
    }

    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::new(status, json!({ "error": message }))
    }

    #[must_use]
    pub fn internal(message: &str) -> Self {
        Self::error(500, message)
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::error(404, "Not found")
    }

    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::error(405, "Method not allowed")
    }
}

impl From<&SummarizerError> for ApiResponse {
    fn from(error: &SummarizerError) -> Self {
        ApiResponse::error(error.status_code(), &error.to_string())
    }
}
