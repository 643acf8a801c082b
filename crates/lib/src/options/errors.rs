//! Error types for option list operations.

use thiserror::Error;

/// Structured error types for option list operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OptionsError {
    /// A positional argument matched none of the accepted shapes
    #[error("Unsupported option argument: {shape} is not a flag, pair, mapping or list")]
    UnsupportedArgument { shape: String },

    /// The requested key is not present
    #[error("Option not found: {key}")]
    KeyNotFound { key: String },
}

impl OptionsError {
    /// Check if this error was caused by malformed merge arguments
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, OptionsError::UnsupportedArgument { .. })
    }

    /// Check if this error is related to key lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, OptionsError::KeyNotFound { .. })
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            OptionsError::KeyNotFound { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from OptionsError to the main Error type
impl From<OptionsError> for crate::Error {
    fn from(err: OptionsError) -> Self {
        crate::Error::Options(err)
    }
}
