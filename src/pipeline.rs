//! Request orchestration: validate, fetch, summarize, map to a response.
//!
//! The pipeline is a straight line. A fetch failure short-circuits before the
//! completion call, and every error is converted into a JSON payload here so
//! the transport adapters only have to render an [`ApiResponse`].

use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::ai::LlmClient;
use crate::core::config::AppConfig;
use crate::core::models::{ApiResponse, HealthResponse, SummarizeRequest, SummaryResponse};
use crate::core::traits::{ContentExtractor, SummaryRequester};
use crate::errors::SummarizerError;
use crate::scrape::WebContentExtractor;
use crate::utils::urls::prepare_url;

pub const SERVICE_NAME: &str = "Website Summarizer API";
pub const HEALTH_PATH: &str = "/api/health";
pub const SUMMARIZE_PATH: &str = "/api/summarize";

/// Immutable after construction; share it behind an `Arc` across requests.
pub struct Pipeline {
    config: Arc<AppConfig>,
    extractor: Arc<dyn ContentExtractor>,
    requester: Arc<dyn SummaryRequester>,
}

impl Pipeline {
    pub fn new(
        config: Arc<AppConfig>,
        extractor: Arc<dyn ContentExtractor>,
        requester: Arc<dyn SummaryRequester>,
    ) -> Self {
        Self {
            config,
            extractor,
            requester,
        }
    }

    /// Wire the real HTTP extractor and LLM client from a resolved config.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch client cannot be built.
    pub fn from_config(config: AppConfig) -> Result<Self, SummarizerError> {
        let extractor = WebContentExtractor::new()?;
        let requester = LlmClient::from_config(&config);
        Ok(Self::new(
            Arc::new(config),
            Arc::new(extractor),
            Arc::new(requester),
        ))
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Summarize one URL end to end.
    ///
    /// # Errors
    ///
    /// `Configuration` when the requester has no credential, `Validation` for a
    /// blank or unparsable URL, `Upstream` when the fetch or completion fails.
    /// The completion call is never made if the fetch failed or the page had
    /// no readable text left after stripping.
    pub async fn summarize_url(&self, raw_url: &str) -> Result<String, SummarizerError> {
        self.requester.ensure_configured()?;

        let url = prepare_url(raw_url)?;
        info!(url = %url, "Summarizing website");

        let content = self.extractor.extract(&url).await?;
        if content.trim().is_empty() {
            warn!(url = %url, "Page has no readable content");
            return Err(SummarizerError::fetch("no readable content"));
        }

        self.requester.summarize(&content).await
    }

    /// Handle a raw `POST /api/summarize` body.
    #[tracing::instrument(level = "info", skip(self, body), fields(request_id = %Uuid::new_v4()))]
    pub async fn handle_summarize(&self, body: &str) -> ApiResponse {
        if let Err(e) = self.requester.ensure_configured() {
            error!("Summarize rejected: {}", e);
            return ApiResponse::from(&e);
        }

        let request = match parse_summarize_request(body) {
            Ok(request) => request,
            Err(e) => {
                warn!("Bad summarize request: {}", e);
                return ApiResponse::from(&e);
            }
        };

        let raw_url = request.url.unwrap_or_default();
        match self.summarize_url(&raw_url).await {
            Ok(summary) => {
                info!(summary_chars = summary.chars().count(), "Summary generated");
                ApiResponse::ok(&SummaryResponse { summary })
            }
            Err(e) => {
                warn!(status = e.status_code(), "Summarize failed: {}", e);
                ApiResponse::from(&e)
            }
        }
    }

    #[must_use]
    pub fn health(&self) -> ApiResponse {
        ApiResponse::ok(&HealthResponse {
            status: "ok",
            mode: self.config.backend.as_str(),
            model: self.config.llm_model.clone(),
        })
    }

    #[must_use]
    pub fn index(&self) -> ApiResponse {
        ApiResponse::new(200, json!({ "message": SERVICE_NAME, "health": HEALTH_PATH }))
    }
}

/// View a raw request body as text.
///
/// # Errors
///
/// Returns `Validation` when the bytes are not valid UTF-8.
pub fn body_as_text(bytes: &[u8]) -> Result<&str, SummarizerError> {
    std::str::from_utf8(bytes)
        .map_err(|e| SummarizerError::Validation(format!("Body is not UTF-8: {e}")))
}

/// Parse the summarize body. An empty body is treated as `{}`.
///
/// # Errors
///
/// Returns `Validation` when the body is not a JSON object with an optional string `url`.
pub fn parse_summarize_request(body: &str) -> Result<SummarizeRequest, SummarizerError> {
    if body.trim().is_empty() {
        return Ok(SummarizeRequest::default());
    }

    serde_json::from_str(body)
        .map_err(|e| SummarizerError::Validation(format!("Invalid JSON body: {e}")))
}
