use std::sync::Arc;

use anyhow::Context;
use sitesnark::{AppConfig, Pipeline};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    sitesnark::setup_logging();

    let config = AppConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("Failed to load configuration")?;
    let addr = config.bind_addr().map_err(anyhow::Error::msg)?;

    info!(
        dotenv_loaded,
        mode = config.backend.as_str(),
        model = %config.llm_model,
        base_url = %config.llm_base_url,
        "Starting Website Summarizer API"
    );
    if config.llm_api_key.is_none() {
        warn!(
            "{} is not set; /api/summarize will answer 500 until it is",
            config.backend.credential_var()
        );
    }

    let pipeline = Pipeline::from_config(config).context("Failed to build pipeline")?;
    sitesnark::server::serve(Arc::new(pipeline), addr).await
}
