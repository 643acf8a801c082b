//! Error types for value construction.
//!
//! Values are built from host data at the call that introduces them, so every
//! variant here is raised immediately rather than at serialization time.

use thiserror::Error;

/// Structured error types for typed value construction.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
    /// A color was built from the wrong number of channels
    #[error("Invalid color specification: expected 3 channels, got {got}")]
    InvalidColorArity { got: usize },

    /// A color channel was outside the unit interval
    #[error("Invalid color channel {channel}: {value} is not within [0, 1]")]
    InvalidColorChannel { channel: &'static str, value: f64 },

    /// A coordinate was built without any components
    #[error("Coordinate requires at least one component")]
    EmptyCoordinate,
}

impl ValueError {
    /// Check if this error is related to color construction
    pub fn is_color_error(&self) -> bool {
        matches!(
            self,
            ValueError::InvalidColorArity { .. } | ValueError::InvalidColorChannel { .. }
        )
    }

    /// Check if this error is related to coordinate construction
    pub fn is_coordinate_error(&self) -> bool {
        matches!(self, ValueError::EmptyCoordinate)
    }
}

// Conversion from ValueError to the main Error type
impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
