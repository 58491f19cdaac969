//! Configuration, shared models and the component seams

pub mod config;
pub mod models;
pub mod traits;
