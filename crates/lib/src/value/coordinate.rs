//! Data points.

use std::fmt;

use super::ValueError;

/// A point with an optional error term and an optional meta tag.
///
/// Written as `(x, y)`, followed by ` +- (ex, ey)` when an error term is set
/// and ` [meta]` when a meta tag is set.
///
/// ```
/// # use tikzplot::value::Coordinate;
/// let point = Coordinate::xy(1.0, 2.5).with_error([0.0, 0.25]).with_meta("a");
/// assert_eq!(point.to_string(), "(1, 2.5) +- (0, 0.25) [a]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    components: Vec<f64>,
    error: Option<Vec<f64>>,
    meta: Option<String>,
}

impl Coordinate {
    /// Creates a point from its components.
    pub fn new(components: impl Into<Vec<f64>>) -> Result<Self, ValueError> {
        let components = components.into();
        if components.is_empty() {
            return Err(ValueError::EmptyCoordinate);
        }
        Ok(Self {
            components,
            error: None,
            meta: None,
        })
    }

    /// Creates a two-dimensional point
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            components: vec![x, y],
            error: None,
            meta: None,
        }
    }

    /// Attaches an error term
    pub fn with_error(mut self, error: impl Into<Vec<f64>>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Attaches a meta tag
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn components(&self) -> &[f64] {
        &self.components
    }

    pub fn error(&self) -> Option<&[f64]> {
        self.error.as_deref()
    }

    pub fn meta(&self) -> Option<&str> {
        self.meta.as_deref()
    }

    pub fn write(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        write_tuple(sink, &self.components)?;
        if let Some(error) = &self.error {
            sink.write_str(" +- ")?;
            write_tuple(sink, error)?;
        }
        if let Some(meta) = &self.meta {
            write!(sink, " [{meta}]")?;
        }
        Ok(())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

fn write_tuple(sink: &mut dyn fmt::Write, parts: &[f64]) -> fmt::Result {
    sink.write_char('(')?;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            sink.write_str(", ")?;
        }
        write!(sink, "{part}")?;
    }
    sink.write_char(')')
}
