//! Estimator error types.

use thiserror::Error;

/// Result type for estimator operations.
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Errors that can occur while loading inputs or computing an estimate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// The runtime inputs violate a shape or range invariant.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A term of the runtime formula does not fit in 64-bit nanoseconds.
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Input file could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error.
    #[error("Export error: {0}")]
    Export(String),
}

impl EstimateError {
    /// Whether this error stems from the inputs themselves rather than I/O or arithmetic.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EstimateError::InvalidInput(_))
    }

    /// Wrap a decoding failure.
    pub fn parse(e: impl std::fmt::Display) -> Self {
        EstimateError::Parse(e.to_string())
    }

    /// Wrap an encoding failure.
    pub fn export(e: impl std::fmt::Display) -> Self {
        EstimateError::Export(e.to_string())
    }
}
