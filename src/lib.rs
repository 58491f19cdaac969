//! Sitesnark - fetch a webpage, strip the boilerplate and ask an LLM for a
//! short, snarky summary of what is left.
//!
//! # Architecture
//!
//! One pipeline, two interchangeable transports:
//! - [`scrape`] fetches the page and reduces it to plain text
//! - [`ai`] builds the two-message prompt and makes one chat-completion call
//! - [`pipeline`] validates input, sequences the two and maps errors to JSON
//! - `api` serves the pipeline from a serverless (`lambda_runtime`) function (feature `api`)
//! - `server` serves the pipeline from a standalone axum server (feature `server`)
//!
//! Configuration is read once at startup into an [`AppConfig`] and passed in
//! explicitly, so tests can inject fakes for either component.
//!
//! # Example
//!
//! ```no_run
//! use sitesnark::{AppConfig, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     sitesnark::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let pipeline = Pipeline::from_config(config)?;
//!
//!     match pipeline.summarize_url("example.com").await {
//!         Ok(summary) => println!("{summary}"),
//!         Err(e) => eprintln!("{e}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
#[cfg(feature = "api")]
pub mod api;
pub mod core;
pub mod errors;
pub mod pipeline;
pub mod scrape;
#[cfg(feature = "server")]
pub mod server;
pub mod utils;

pub use crate::core::config::{AppConfig, Backend};
pub use crate::core::models::{ApiResponse, ExtractionResult, SummaryResult};
pub use crate::core::traits::{ContentExtractor, SummaryRequester};
pub use errors::SummarizerError;
pub use pipeline::Pipeline;

/// Configure structured JSON logging.
///
/// Honours `RUST_LOG` and defaults to `info`. Call once at process start.
///
/// # Example
///
/// ```
/// sitesnark::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
