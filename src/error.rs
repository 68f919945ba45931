//! Error types for the rhythm transcription engine

use thiserror::Error;

/// Errors that can occur while converting text or audio into notes
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RhythmError {
    /// Invalid input parameters (tempo, threshold, sample rate, onset list)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration values outside their valid range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Audio decoding error
    #[error("Decoding error: {0}")]
    DecodingError(String),

    /// Numerical error (non-finite intermediate values)
    #[error("Numerical error: {0}")]
    NumericalError(String),
}
