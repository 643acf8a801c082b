//! A line with a shaded band around it.

use std::fmt;

use super::write_part;
use crate::{
    Result,
    element::{Coordinates, ElementError, Node, Plot},
    options::{Configurable, Options},
    value::Coordinate,
};

/// A centre line drawn over a filled band between a lower and an upper bound.
///
/// Serializes as two `\addplot` commands: the `fill` part, a closed outline
/// running along the upper bound and back along the lower bound, and the
/// `line` part through the centre values. Options set on the band itself
/// apply to both parts:
///
/// ```
/// use tikzplot::composite::ErrorBand;
/// use tikzplot::element::Node;
/// use tikzplot::options::Configurable;
///
/// let mut band = ErrorBand::symmetric(&[0.0, 1.0], &[1.0, 2.0], &[0.5, 0.5]).unwrap();
/// band.set("color", "red");
///
/// let markup = band.to_markup().unwrap();
/// assert!(markup.starts_with("\\addplot[color=red, fill, draw=none, forget plot, fill opacity=0.2]"));
/// assert!(markup.contains("\\addplot[color=red]{coordinates {\n(0, 1)\n(1, 2)\n};\n}\n"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBand {
    options: Options,
    fill: Plot,
    line: Plot,
    opacity: f64,
}

impl ErrorBand {
    pub const DEFAULT_OPACITY: f64 = 0.2;

    /// Creates a band from explicit bounds.
    pub fn new(x: &[f64], y: &[f64], lower: &[f64], upper: &[f64]) -> Result<Self> {
        for (what, len) in [("lower bound", lower.len()), ("upper bound", upper.len())] {
            if len != x.len() {
                return Err(ElementError::LengthMismatch {
                    what,
                    expected: x.len(),
                    actual: len,
                }
                .into());
            }
        }
        let line = Plot::new(x, y)?;
        let outline: Coordinates = x
            .iter()
            .zip(upper)
            .chain(x.iter().zip(lower).rev())
            .map(|(x, y)| Coordinate::xy(*x, *y))
            .collect();

        Ok(Self {
            options: Options::new(),
            fill: Plot::from_coordinates(outline),
            line,
            opacity: Self::DEFAULT_OPACITY,
        })
    }

    /// Creates a band of `y ± error`.
    pub fn symmetric(x: &[f64], y: &[f64], error: &[f64]) -> Result<Self> {
        if error.len() != y.len() {
            return Err(ElementError::LengthMismatch {
                what: "error",
                expected: y.len(),
                actual: error.len(),
            }
            .into());
        }
        let lower: Vec<f64> = y.iter().zip(error).map(|(y, e)| y - e).collect();
        let upper: Vec<f64> = y.iter().zip(error).map(|(y, e)| y + e).collect();
        Self::new(x, y, &lower, &upper)
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// The band part
    pub fn fill(&self) -> &Plot {
        &self.fill
    }

    pub fn fill_mut(&mut self) -> &mut Plot {
        &mut self.fill
    }

    /// The centre line part
    pub fn line(&self) -> &Plot {
        &self.line
    }

    pub fn line_mut(&mut self) -> &mut Plot {
        &mut self.line
    }

    fn fill_overrides(&self) -> Options {
        crate::options![
            "fill",
            "draw" => "none",
            "forget plot",
            "fill opacity" => self.opacity,
        ]
    }
}

impl Node for ErrorBand {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        tracing::debug!(
            points = self.line.coordinates().len(),
            shared = self.options.len(),
            "Writing error band"
        );
        write_part(&self.fill, &self.options, &self.fill_overrides(), sink)?;
        write_part(&self.line, &self.options, &Options::new(), sink)
    }
}

impl Configurable for ErrorBand {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
