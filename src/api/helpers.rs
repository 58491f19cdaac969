//! Response builders for the serverless adapter.
//!
//! Every response carries the CORS headers, including preflight answers.

use serde_json::{Value, json};

use crate::core::models::ApiResponse;

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization";

#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": CORS_ALLOW_ORIGIN,
        "Access-Control-Allow-Methods": CORS_ALLOW_METHODS,
        "Access-Control-Allow-Headers": CORS_ALLOW_HEADERS,
    })
}

/// Render an [`ApiResponse`] as a proxy-integration result.
#[must_use]
pub fn render(response: &ApiResponse) -> Value {
    json!({
        "statusCode": response.status,
        "headers": cors_headers(),
        "body": response.body.to_string(),
    })
}

/// Returns a 204 answer to a CORS preflight.
#[must_use]
pub fn preflight() -> Value {
    json!({ "statusCode": 204, "headers": cors_headers(), "body": "" })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    render(&ApiResponse::error(status_code, message))
}
