use tikzplot::{
    Axis, Figure,
    element::{LegendEntry, Node},
    options::Configurable,
};

/// Serializes a node, panicking on failure.
pub fn markup(node: &impl Node) -> String {
    node.to_markup().expect("Failed to serialize node")
}

/// A straight line through `n` points, `y = 2x`.
pub fn line_series(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y = x.iter().map(|x| 2.0 * x).collect();
    (x, y)
}

/// Creates an axis holding one red line with a legend entry.
pub fn axis_with_line(points: usize) -> Axis {
    let (x, y) = line_series(points);
    let mut axis = Axis::new();
    axis.plot(&x, &y)
        .expect("Failed to add plot")
        .set("color", "red");
    axis.legend_entry(LegendEntry::new("line"));
    axis
}

/// Creates a figure with `axes` axes, each holding one line of `points` points.
pub fn figure_with_axes(axes: usize, points: usize) -> Figure {
    let mut figure = Figure::new();
    for _ in 0..axes {
        figure.add_axis(axis_with_line(points));
    }
    figure
}
