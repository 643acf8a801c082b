//! JSON figure descriptions and their conversion into an element tree.
//!
//! ```json
//! {
//!   "options": {"scale": 1.5},
//!   "axes": [
//!     {
//!       "options": {"xlabel": "t", "ymin": 0},
//!       "legend_position": "north west",
//!       "plots": [
//!         {"x": [0, 1], "y": [1, 2], "options": ["thick", {"color": "red"}], "legend": "a_1"},
//!         {"x": [0, 1], "y": [2, 3], "error": [0.1, 0.2]}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Options are merged exactly like positional arguments to `Options::add_raw`:
//! objects give key/value pairs, strings give flags, arrays nest.

use serde::Deserialize;
use tikzplot::{
    Axis, Figure, Result,
    composite::ErrorBand,
    element::{LegendEntry, Plot},
    options::Configurable,
    value::Raw,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FigureInput {
    pub options: Option<serde_json::Value>,
    pub axes: Vec<AxisInput>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AxisInput {
    pub options: Option<serde_json::Value>,
    pub legend_position: Option<String>,
    pub plots: Vec<PlotInput>,
}

#[derive(Debug, Deserialize)]
pub struct PlotInput {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default)]
    pub options: Option<serde_json::Value>,
    /// Symmetric errors; the plot becomes an error band when present
    #[serde(default)]
    pub error: Option<Vec<f64>>,
    #[serde(default)]
    pub legend: Option<String>,
}

fn apply_options(target: &mut impl Configurable, options: Option<&serde_json::Value>) -> Result<()> {
    if let Some(options) = options {
        target.add_raw([Raw::from(options.clone())])?;
    }
    Ok(())
}

impl FigureInput {
    /// Builds the element tree described by this input.
    pub fn build(&self) -> Result<Figure> {
        let mut figure = Figure::new();
        apply_options(&mut figure, self.options.as_ref())?;
        for axis in &self.axes {
            figure.add_axis(axis.build()?);
        }
        tracing::debug!(axes = self.axes.len(), "Built figure from input");
        Ok(figure)
    }
}

impl AxisInput {
    fn build(&self) -> Result<Axis> {
        let mut axis = Axis::new();
        apply_options(&mut axis, self.options.as_ref())?;
        if let Some(position) = &self.legend_position {
            axis.set_legend_position(position)?;
        }
        for plot in &self.plots {
            match &plot.error {
                Some(error) => {
                    let band = axis.add_error_band(ErrorBand::symmetric(&plot.x, &plot.y, error)?);
                    apply_options(band, plot.options.as_ref())?;
                }
                None => {
                    let line = axis.add_plot(Plot::new(&plot.x, &plot.y)?);
                    apply_options(line, plot.options.as_ref())?;
                }
            }
            if let Some(legend) = &plot.legend {
                axis.legend_entry(LegendEntry::new(legend.as_str()));
            }
        }
        Ok(axis)
    }
}
