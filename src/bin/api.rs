use std::sync::Arc;

use lambda_runtime::LambdaEvent;
use serde_json::Value;
use sitesnark::{AppConfig, Pipeline};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    sitesnark::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        lambda_runtime::Error::from(e)
    })?;
    info!(mode = config.backend.as_str(), model = %config.llm_model, "Summarizer function starting");

    let pipeline = Arc::new(Pipeline::from_config(config)?);

    lambda_runtime::run(lambda_runtime::service_fn(move |event: LambdaEvent<Value>| {
        let pipeline = Arc::clone(&pipeline);
        async move { sitesnark::api::handler(&pipeline, event).await }
    }))
    .await
}
