#![allow(dead_code)]

use async_trait::async_trait;
use sitesnark::core::config::{AppConfig, Backend};
use sitesnark::{
    ContentExtractor, ExtractionResult, Pipeline, SummarizerError, SummaryRequester,
    SummaryResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Extractor double that records every URL it is asked for.
pub struct FakeExtractor {
    result: Result<String, String>,
    pub calls: AtomicUsize,
    pub urls: Mutex<Vec<String>>,
}

impl FakeExtractor {
    pub fn text(text: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen_urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentExtractor for FakeExtractor {
    async fn extract(&self, url: &str) -> ExtractionResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());
        match &self.result {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(SummarizerError::fetch(message)),
        }
    }
}

/// Extractor double that panics mid-request.
pub struct PanickingExtractor;

#[async_trait]
impl ContentExtractor for PanickingExtractor {
    async fn extract(&self, url: &str) -> ExtractionResult {
        panic!("extractor blew up on {url}");
    }
}

/// Requester double with a call counter and an optional missing credential.
pub struct FakeRequester {
    result: Result<String, String>,
    configured: bool,
    pub calls: AtomicUsize,
    pub contents: Mutex<Vec<String>>,
}

impl FakeRequester {
    fn build(result: Result<String, String>, configured: bool) -> Arc<Self> {
        Arc::new(Self {
            result,
            configured,
            calls: AtomicUsize::new(0),
            contents: Mutex::new(Vec::new()),
        })
    }

    pub fn summary(text: &str) -> Arc<Self> {
        Self::build(Ok(text.to_string()), true)
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::build(Err(message.to_string()), true)
    }

    pub fn unconfigured() -> Arc<Self> {
        Self::build(Ok("unused".to_string()), false)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SummaryRequester for FakeRequester {
    fn ensure_configured(&self) -> Result<(), SummarizerError> {
        if self.configured {
            Ok(())
        } else {
            Err(SummarizerError::Configuration("GROQ_API_KEY".to_string()))
        }
    }

    async fn summarize(&self, content: &str) -> SummaryResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.contents.lock().unwrap().push(content.to_string());
        match &self.result {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(SummarizerError::completion(message)),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        backend: Backend::Cloud,
        llm_base_url: "https://llm.invalid/v1".to_string(),
        llm_api_key: Some("test-key".to_string()),
        llm_model: "test-model".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

pub fn pipeline_with(extractor: Arc<FakeExtractor>, requester: Arc<FakeRequester>) -> Pipeline {
    Pipeline::new(Arc::new(test_config()), extractor, requester)
}

pub fn panicking_pipeline(requester: Arc<FakeRequester>) -> Pipeline {
    Pipeline::new(Arc::new(test_config()), Arc::new(PanickingExtractor), requester)
}
