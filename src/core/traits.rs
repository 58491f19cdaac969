use async_trait::async_trait;

use super::models::{ExtractionResult, SummaryResult};
use crate::errors::SummarizerError;

/// Turns a URL into plain text ready for the model.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> ExtractionResult;
}

/// Turns extracted text into a summary with a single completion call.
#[async_trait]
pub trait SummaryRequester: Send + Sync {
    /// Reports a missing credential without touching the network.
    fn ensure_configured(&self) -> Result<(), SummarizerError> {
        Ok(())
    }

    async fn summarize(&self, content: &str) -> SummaryResult;
}
