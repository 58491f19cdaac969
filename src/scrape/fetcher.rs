use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

use super::html::extract_text;
use crate::core::models::ExtractionResult;
use crate::core::traits::ContentExtractor;
use crate::errors::SummarizerError;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Some sites reject requests without a browser-like agent.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetches pages over HTTP and extracts their visible text. One request, no retries.
pub struct WebContentExtractor {
    client: Client,
}

impl WebContentExtractor {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. TLS backend failure).
    pub fn new() -> Result<Self, SummarizerError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(BROWSER_USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn fetch_html(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        response.text().await
    }
}

#[async_trait]
impl ContentExtractor for WebContentExtractor {
    async fn extract(&self, url: &str) -> ExtractionResult {
        let html = match self.fetch_html(url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(url = %url, "Fetch failed: {}", e);
                return Err(SummarizerError::fetch(e));
            }
        };

        let text = extract_text(&html);
        info!(
            url = %url,
            html_bytes = html.len(),
            text_chars = text.chars().count(),
            "Extracted page text"
        );

        Ok(text)
    }
}
