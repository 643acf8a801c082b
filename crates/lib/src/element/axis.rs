//! Axes and grouped axes.

use std::fmt;

use super::{LegendEntry, LegendPosition, Node, Plot, Shape, write_framed};
use crate::{
    Result,
    composite::{ErrorBand, Violin},
    options::{Configurable, Options},
    value::Value,
};

/// One entry of an axis body.
#[derive(Debug)]
pub enum AxisItem {
    Plot(Plot),
    ErrorBand(ErrorBand),
    Violin(Violin),
    Legend(LegendEntry),
    Node(Box<dyn Node>),
}

impl AxisItem {
    /// Whether this item draws something that can carry a legend entry
    pub fn is_plot(&self) -> bool {
        matches!(
            self,
            AxisItem::Plot(_) | AxisItem::ErrorBand(_) | AxisItem::Violin(_)
        )
    }
}

impl Node for AxisItem {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        match self {
            AxisItem::Plot(plot) => plot.write(sink),
            AxisItem::ErrorBand(band) => band.write(sink),
            AxisItem::Violin(violin) => violin.write(sink),
            AxisItem::Legend(entry) => entry.write(sink),
            AxisItem::Node(node) => node.write(sink),
        }
    }
}

/// A coordinate system holding plots, written as an `axis` environment.
///
/// Inside a [`GroupPlot`] each axis is written as an inline
/// `\nextgroupplot[options]` header instead.
#[derive(Debug)]
pub struct Axis {
    shape: Shape,
    options: Options,
    items: Vec<AxisItem>,
}

impl Default for Axis {
    fn default() -> Self {
        Self::new()
    }
}

impl Axis {
    pub fn new() -> Self {
        Self {
            shape: Shape::Environment,
            options: Options::new(),
            items: Vec::new(),
        }
    }

    /// Creates an axis that opens the next cell of a group plot
    pub fn next_group_plot() -> Self {
        Self {
            shape: Shape::Inline,
            ..Self::new()
        }
    }

    /// Replaces the option list
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &'static str {
        match self.shape {
            Shape::Inline => "nextgroupplot",
            _ => "axis",
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn items(&self) -> &[AxisItem] {
        &self.items
    }

    /// Number of items that draw data
    pub fn plot_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_plot()).count()
    }

    /// Adds a plot of `y` against `x` and returns it for configuration.
    pub fn plot(&mut self, x: &[f64], y: &[f64]) -> Result<&mut Plot> {
        Ok(self.add_plot(Plot::new(x, y)?))
    }

    pub fn add_plot(&mut self, plot: Plot) -> &mut Plot {
        self.items.push(AxisItem::Plot(plot));
        match self.items.last_mut() {
            Some(AxisItem::Plot(plot)) => plot,
            _ => unreachable!("just pushed a plot"),
        }
    }

    /// Adds a symmetric error band and returns it for configuration.
    pub fn error_band(&mut self, x: &[f64], y: &[f64], error: &[f64]) -> Result<&mut ErrorBand> {
        Ok(self.add_error_band(ErrorBand::symmetric(x, y, error)?))
    }

    pub fn add_error_band(&mut self, band: ErrorBand) -> &mut ErrorBand {
        self.items.push(AxisItem::ErrorBand(band));
        match self.items.last_mut() {
            Some(AxisItem::ErrorBand(band)) => band,
            _ => unreachable!("just pushed an error band"),
        }
    }

    /// Adds a violin centred on `center` and returns it for configuration.
    pub fn violin(
        &mut self,
        center: f64,
        positions: &[f64],
        densities: &[f64],
    ) -> Result<&mut Violin> {
        Ok(self.add_violin(Violin::new(center, positions, densities)?))
    }

    pub fn add_violin(&mut self, violin: Violin) -> &mut Violin {
        self.items.push(AxisItem::Violin(violin));
        match self.items.last_mut() {
            Some(AxisItem::Violin(violin)) => violin,
            _ => unreachable!("just pushed a violin"),
        }
    }

    /// Adds a legend entry for the most recent plot.
    pub fn legend_entry(&mut self, entry: LegendEntry) -> &mut Self {
        if self.plot_count() == 0 {
            tracing::warn!(text = entry.text(), "Legend entry added to an axis without plots");
        }
        self.items.push(AxisItem::Legend(entry));
        self
    }

    /// Appends an arbitrary node to the axis body
    pub fn push(&mut self, node: impl Node + 'static) -> &mut Self {
        self.items.push(AxisItem::Node(Box::new(node)));
        self
    }

    /// Sets `legend pos` from its markup spelling.
    pub fn set_legend_position(&mut self, position: &str) -> Result<&mut Self> {
        let position: LegendPosition = position.parse()?;
        self.options.set("legend pos", position.as_str());
        Ok(self)
    }

    /// Writes this axis using `options` in place of its own.
    pub fn write_with(&self, options: &Options, sink: &mut dyn fmt::Write) -> Result<()> {
        write_framed(sink, self.shape, self.name(), options, |sink| {
            for item in &self.items {
                item.write(sink)?;
            }
            Ok(())
        })
    }
}

impl Node for Axis {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        tracing::debug!(
            name = self.name(),
            items = self.items.len(),
            "Writing axis"
        );
        self.write_with(&self.options, sink)
    }
}

impl Configurable for Axis {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

/// A grid of axes sharing one `groupplot` environment.
#[derive(Debug)]
pub struct GroupPlot {
    options: Options,
    columns: usize,
    rows: usize,
    axes: Vec<Axis>,
}

impl GroupPlot {
    /// Creates a grid of `columns` by `rows` cells.
    pub fn new(columns: usize, rows: usize) -> Self {
        let mut options = Options::new();
        options.set(
            "group style",
            Value::bracketed(Value::scalar(format!("group size={columns} by {rows}"))),
        );
        Self {
            options,
            columns,
            rows,
            axes: Vec::new(),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Opens the next cell and returns its axis.
    pub fn next_plot(&mut self) -> &mut Axis {
        if self.axes.len() == self.columns.saturating_mul(self.rows) {
            tracing::warn!(
                columns = self.columns,
                rows = self.rows,
                "Group plot has more cells than its grid"
            );
        }
        self.axes.push(Axis::next_group_plot());
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }
}

impl Node for GroupPlot {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        tracing::debug!(cells = self.axes.len(), "Writing group plot");
        write_framed(sink, Shape::Environment, "groupplot", &self.options, |sink| {
            for axis in &self.axes {
                axis.write(sink)?;
            }
            Ok(())
        })
    }
}

impl Configurable for GroupPlot {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
