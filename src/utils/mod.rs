//! Small helpers shared by the pipeline

pub mod urls;
