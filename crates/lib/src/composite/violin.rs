//! Density glyphs.

use std::fmt;

use super::write_part;
use crate::{
    Result,
    element::{Coordinates, ElementError, Node, Orientation, Plot, Side},
    options::{Configurable, Options},
    value::Coordinate,
};

/// A violin-shaped glyph drawn from pre-computed density samples.
///
/// The samples are `(position, density)` pairs along the value axis with
/// positions ascending. The glyph is centred on `center` along the other axis
/// and scaled so the largest density reaches `width` away from the centre.
///
/// Parts:
/// - `body`: the filled outline, shown in the legend as an area
/// - `median`: an optional line across the body, kept out of the legend
#[derive(Debug, Clone, PartialEq)]
pub struct Violin {
    options: Options,
    body: Plot,
    median: Plot,
    positions: Vec<f64>,
    densities: Vec<f64>,
    center: f64,
    width: f64,
    orientation: Orientation,
    side: Side,
    median_at: Option<f64>,
}

impl Violin {
    pub const DEFAULT_WIDTH: f64 = 0.4;

    pub fn new(center: f64, positions: &[f64], densities: &[f64]) -> Result<Self> {
        if positions.len() != densities.len() {
            return Err(ElementError::LengthMismatch {
                what: "densities",
                expected: positions.len(),
                actual: densities.len(),
            }
            .into());
        }
        let mut violin = Self {
            options: Options::new(),
            body: Plot::default(),
            median: Plot::default(),
            positions: positions.to_vec(),
            densities: densities.to_vec(),
            center,
            width: Self::DEFAULT_WIDTH,
            orientation: Orientation::default(),
            side: Side::default(),
            median_at: None,
        };
        violin.rebuild();
        Ok(violin)
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self.rebuild();
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self.rebuild();
        self
    }

    /// Sets the distance from the centre reached by the largest density
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self.rebuild();
        self
    }

    /// Draws a median marker at the given position
    pub fn with_median(mut self, position: f64) -> Self {
        self.median_at = Some(position);
        self.rebuild();
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn body(&self) -> &Plot {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Plot {
        &mut self.body
    }

    /// The median part; empty unless [`Violin::with_median`] was used
    pub fn median(&self) -> &Plot {
        &self.median
    }

    pub fn median_mut(&mut self) -> &mut Plot {
        &mut self.median
    }

    fn scale(&self) -> f64 {
        let peak = self.densities.iter().copied().fold(0.0_f64, f64::max);
        if peak > 0.0 { self.width / peak } else { 0.0 }
    }

    /// Maps (value-axis position, offset from centre) to plot space.
    fn point(&self, position: f64, offset: f64) -> Coordinate {
        match self.orientation {
            Orientation::Vertical => Coordinate::xy(self.center + offset, position),
            Orientation::Horizontal => Coordinate::xy(position, self.center + offset),
        }
    }

    fn half_width_at(&self, position: f64) -> f64 {
        let scale = self.scale();
        self.positions
            .windows(2)
            .zip(self.densities.windows(2))
            .find(|(p, _)| p[0] <= position && position <= p[1])
            .map(|(p, d)| {
                let span = p[1] - p[0];
                let t = if span > 0.0 { (position - p[0]) / span } else { 0.0 };
                (d[0] + t * (d[1] - d[0])) * scale
            })
            .unwrap_or(0.0)
    }

    fn extent(&self, half_width: f64) -> (f64, f64) {
        match self.side {
            Side::Both => (-half_width, half_width),
            Side::Low => (-half_width, 0.0),
            Side::High => (0.0, half_width),
        }
    }

    fn rebuild(&mut self) {
        let scale = self.scale();
        let samples: Vec<(f64, f64)> = self
            .positions
            .iter()
            .zip(&self.densities)
            .map(|(p, d)| (*p, d * scale))
            .collect();

        let mut outline = Coordinates::new();
        match self.side {
            Side::Both => {
                for (p, w) in &samples {
                    outline.push(self.point(*p, *w));
                }
                for (p, w) in samples.iter().rev() {
                    outline.push(self.point(*p, -w));
                }
            }
            Side::Low | Side::High => {
                let sign = if self.side == Side::High { 1.0 } else { -1.0 };
                for (p, w) in &samples {
                    outline.push(self.point(*p, sign * w));
                }
                if let (Some((first, _)), Some((last, _))) = (samples.first(), samples.last()) {
                    outline.push(self.point(*last, 0.0));
                    outline.push(self.point(*first, 0.0));
                }
            }
        }
        *self.body.coordinates_mut() = outline;

        let mut marker = Coordinates::new();
        if let Some(position) = self.median_at {
            let (from, to) = self.extent(self.half_width_at(position));
            marker.push(self.point(position, from));
            marker.push(self.point(position, to));
        }
        *self.median.coordinates_mut() = marker;
    }

    fn body_overrides(&self) -> Options {
        crate::options!["fill", "area legend"]
    }

    fn median_overrides(&self) -> Options {
        crate::options!["forget plot"]
    }
}

impl Node for Violin {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        tracing::debug!(
            samples = self.positions.len(),
            center = self.center,
            "Writing violin"
        );
        write_part(&self.body, &self.options, &self.body_overrides(), sink)?;
        if self.median_at.is_some() {
            write_part(&self.median, &self.options, &self.median_overrides(), sink)?;
        }
        Ok(())
    }
}

impl Configurable for Violin {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
