//! Serverless (API Gateway style) adapter over the pipeline

pub mod handler;
pub mod helpers;
pub mod parsing;

// Re-export the main handler for convenience
pub use handler::{handler, route};
