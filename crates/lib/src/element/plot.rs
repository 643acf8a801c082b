//! Plot commands and their content.

use std::fmt;

use super::{ElementError, Node, Shape, write_framed};
use crate::{
    Result,
    escape::escape_into,
    options::{Configurable, Options},
    value::Coordinate,
};

/// An inline coordinate table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinates {
    points: Vec<Coordinate>,
}

impl Coordinates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs two series point by point.
    pub fn from_series(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(ElementError::LengthMismatch {
                what: "y series",
                expected: x.len(),
                actual: y.len(),
            }
            .into());
        }
        Ok(x.iter()
            .zip(y)
            .map(|(x, y)| Coordinate::xy(*x, *y))
            .collect())
    }

    pub fn push(&mut self, point: Coordinate) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [Coordinate] {
        &mut self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<Coordinate> for Coordinates {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Node for Coordinates {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        sink.write_str("coordinates {\n")?;
        for point in &self.points {
            point.write(sink)?;
            sink.write_char('\n')?;
        }
        sink.write_str("};\n")?;
        Ok(())
    }
}

/// A single `\addplot` command over an inline coordinate table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plot {
    options: Options,
    coordinates: Coordinates,
}

impl Plot {
    /// Creates a plot of `y` against `x`.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        Ok(Self::from_coordinates(Coordinates::from_series(x, y)?))
    }

    pub fn from_coordinates(coordinates: Coordinates) -> Self {
        Self {
            options: Options::new(),
            coordinates,
        }
    }

    /// Replaces the option list
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Attaches symmetric y error bars, one per point.
    pub fn with_y_errors(mut self, errors: &[f64]) -> Result<Self> {
        self.check_len("y errors", errors.len())?;
        for (point, error) in self.coordinates.points.iter_mut().zip(errors) {
            *point = point.clone().with_error([0.0, *error]);
        }
        self.options.set("error bars/y dir", "both");
        self.options.set_flag("error bars/y explicit");
        Ok(self)
    }

    /// Attaches a meta tag to each point.
    pub fn with_meta<S: AsRef<str>>(mut self, meta: &[S]) -> Result<Self> {
        self.check_len("point meta", meta.len())?;
        for (point, tag) in self.coordinates.points.iter_mut().zip(meta) {
            *point = point.clone().with_meta(tag.as_ref());
        }
        self.options.set("point meta", "explicit symbolic");
        Ok(self)
    }

    fn check_len(&self, what: &'static str, actual: usize) -> Result<()> {
        if actual != self.coordinates.len() {
            return Err(ElementError::LengthMismatch {
                what,
                expected: self.coordinates.len(),
                actual,
            }
            .into());
        }
        Ok(())
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    pub fn coordinates_mut(&mut self) -> &mut Coordinates {
        &mut self.coordinates
    }

    /// Writes this plot using `options` in place of its own.
    pub fn write_with(&self, options: &Options, sink: &mut dyn fmt::Write) -> Result<()> {
        write_framed(sink, Shape::Command, "addplot", options, |sink| {
            self.coordinates.write(sink)
        })
    }
}

impl Node for Plot {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        self.write_with(&self.options, sink)
    }
}

impl Configurable for Plot {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

/// An `\addlegendentry{text}` command for the preceding plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    text: String,
    verbatim: bool,
}

impl LegendEntry {
    /// Creates an entry whose text is escaped on output
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            verbatim: false,
        }
    }

    /// Creates an entry whose text is already markup, e.g. `$x^2$`
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            verbatim: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Node for LegendEntry {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        write_framed(sink, Shape::Command, "addlegendentry", &Options::new(), |sink| {
            if self.verbatim {
                sink.write_str(&self.text)?;
            } else {
                escape_into(sink, &self.text)?;
            }
            Ok(())
        })
    }
}
