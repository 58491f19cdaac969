//! Standalone HTTP server adapter built on axum.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::any::Any as PanicPayload;
use std::{net::SocketAddr, sync::Arc};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::core::models::ApiResponse;
use crate::pipeline::{HEALTH_PATH, Pipeline, SUMMARIZE_PATH, body_as_text};

#[derive(Clone)]
struct AppState {
    pipeline: Arc<Pipeline>,
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

/// Build the router with CORS open to any origin, request tracing and panic recovery.
pub fn router(pipeline: Arc<Pipeline>) -> Router {
    let state = AppState { pipeline };

    Router::new()
        .route("/", get(index_handler))
        .route(HEALTH_PATH, get(health_handler))
        .route(SUMMARIZE_PATH, post(summarize_handler))
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind `addr` and serve until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(pipeline: Arc<Pipeline>, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(pipeline);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Website Summarizer API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(state): State<AppState>) -> ApiResponse {
    state.pipeline.index()
}

async fn health_handler(State(state): State<AppState>) -> ApiResponse {
    state.pipeline.health()
}

async fn summarize_handler(State(state): State<AppState>, body: Bytes) -> ApiResponse {
    match body_as_text(&body) {
        Ok(text) => state.pipeline.handle_summarize(text).await,
        Err(e) => ApiResponse::from(&e),
    }
}

async fn not_found_handler() -> ApiResponse {
    ApiResponse::not_found()
}

fn panic_response(err: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "application/json")],
        json!({ "error": "Internal server error" }).to_string(),
    )
        .into_response()
}
