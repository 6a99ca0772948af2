//! Error taxonomy for the aggregation pipeline.

use thiserror::Error;

/// Errors raised by the processing entry points.
///
/// An empty scenario selection or a date with no contributing points is
/// not an error; both surface as empty output arrays and a thin dataset
/// degrades to "nothing drawn".
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The raw record collection was missing, wrong-shaped, or empty, or a
    /// month/day string could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// `reprocess` was called before any successful `process`.
    #[error("no dataset has been processed for this session yet")]
    NotInitialized,
}
