//! Serverless handler - thin router that delegates to the pipeline.
//!
//! Routes:
//! - `POST /api/summarize` summarize a URL
//! - `GET /api/health` health and backend info
//! - `GET /` service description
//! - `OPTIONS *` CORS preflight

use futures::FutureExt;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::panic::AssertUnwindSafe;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::core::models::ApiResponse;
use crate::pipeline::{HEALTH_PATH, Pipeline, SUMMARIZE_PATH};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// Always answers with a proxy-integration payload. A panic inside the
/// pipeline becomes a generic 500 instead of a failed invocation.
///
/// # Errors
///
/// Never returns `Err` in practice; the signature matches `lambda_runtime`.
#[tracing::instrument(level = "info", skip(pipeline, event))]
pub async fn function_handler(
    pipeline: &Pipeline,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let payload = event.payload;

    let method = parsing::event_method(&payload);
    let path = parsing::event_path(&payload).to_string();
    let trace_id = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "X-Amzn-Trace-Id"))
        .unwrap_or("");
    info!(%method, %path, xray_trace_id = %trace_id, "API request received");

    if method == "OPTIONS" {
        return Ok(helpers::preflight());
    }

    let body = match parsing::event_body(&payload) {
        Ok(b) => b,
        Err(e) => return Ok(helpers::render(&ApiResponse::from(&e))),
    };

    let outcome = AssertUnwindSafe(route(pipeline, &method, &path, &body))
        .catch_unwind()
        .await;

    match outcome {
        Ok(response) => Ok(helpers::render(&response)),
        Err(_) => {
            error!(%method, %path, "Handler panicked");
            Ok(helpers::err_response(500, "Internal server error"))
        }
    }
}

/// Dispatch a request by method and path suffix.
pub async fn route(pipeline: &Pipeline, method: &str, path: &str, body: &str) -> ApiResponse {
    let path = path.trim_end_matches('/');

    if path.ends_with(SUMMARIZE_PATH) {
        return match method {
            "POST" => pipeline.handle_summarize(body).await,
            _ => ApiResponse::method_not_allowed(),
        };
    }

    if path.ends_with(HEALTH_PATH) {
        return match method {
            "GET" | "HEAD" => pipeline.health(),
            _ => ApiResponse::method_not_allowed(),
        };
    }

    if path.is_empty() {
        return match method {
            "GET" | "HEAD" => pipeline.index(),
            _ => ApiResponse::method_not_allowed(),
        };
    }

    ApiResponse::not_found()
}
