//! Engine error types.

use thiserror::Error;

/// Error type for the mixing engine and placement sampler.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Construction-time configuration error. Fatal; never clamped.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The per-tick position and color streams disagree in length.
    /// Indicates an upstream defect; the tick is aborted.
    #[error("stream length mismatch: {positions} positions vs {colors} color flags")]
    StreamLengthMismatch { positions: usize, colors: usize },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
