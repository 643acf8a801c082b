//! Error types for element construction.

use thiserror::Error;

/// Structured error types for element construction.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ElementError {
    /// A categorical parameter had an unrecognized value
    #[error("Unknown {parameter}: {value}")]
    UnknownMode {
        parameter: &'static str,
        value: String,
    },

    /// Paired data series had different lengths
    #[error("Length mismatch for {what}: expected {expected}, found {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl ElementError {
    /// Check if this error was caused by an unrecognized categorical parameter
    pub fn is_unknown_mode(&self) -> bool {
        matches!(self, ElementError::UnknownMode { .. })
    }

    /// Check if this error was caused by malformed construction data
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, ElementError::LengthMismatch { .. })
    }
}

// Conversion from ElementError to the main Error type
impl From<ElementError> for crate::Error {
    fn from(err: ElementError) -> Self {
        crate::Error::Element(err)
    }
}
