//! Error types for pipeline runs.

use rummy_sample::SampleError;
use rummy_types::{ConfigError, RummyError};
use thiserror::Error;

/// Errors that abort a sampling run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The run configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No picture source was configured.
    #[error("No picture sources configured")]
    NoSources,

    /// A source failed while listing pictures.
    #[error("Failed to fetch pictures: {0}")]
    Fetch(#[from] RummyError),

    /// The sample could not be drawn.
    #[error("Failed to sample pictures: {0}")]
    Sample(#[from] SampleError),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
