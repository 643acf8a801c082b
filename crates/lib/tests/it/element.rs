//! Element tree tests
//!
//! Serialization of commands, environments and the typed element kinds.

use tikzplot::{
    element::{
        Axis, Coordinates, Element, Figure, LegendEntry, Node, Orientation, Plot, Side, Text,
    },
    options,
    options::Configurable,
    value::Coordinate,
};

use crate::helpers::{axis_with_line, figure_with_axes, markup};

#[test]
fn test_axis_with_single_plot() {
    let mut plot = Element::command("addplot");
    plot.set("color", "red");
    plot.push(Coordinates::from_iter([
        Coordinate::xy(0.0, 0.0),
        Coordinate::xy(1.0, 2.0),
    ]));
    let mut axis = Element::environment("axis");
    axis.push(plot);

    assert_eq!(
        markup(&axis),
        "\\begin{axis}\n\\addplot[color=red]{coordinates {\n(0, 0)\n(1, 2)\n};\n}\n\\end{axis}\n"
    );
}

#[test]
fn test_typed_axis_matches_generic_tree() {
    let mut axis = Axis::new();
    axis.add_plot(
        Plot::new(&[0.0, 1.0], &[0.0, 2.0])
            .unwrap()
            .with_options(options!["color" => "red"]),
    );
    assert_eq!(
        markup(&axis),
        "\\begin{axis}\n\\addplot[color=red]{coordinates {\n(0, 0)\n(1, 2)\n};\n}\n\\end{axis}\n"
    );
}

#[test]
fn test_children_written_in_insertion_order() {
    let mut scope = Element::environment("scope");
    scope.push(Text::new("% first\n"));
    scope.push(Element::command("node"));
    scope.push(Text::new("% last\n"));
    assert_eq!(
        markup(&scope),
        "\\begin{scope}\n% first\n\\node{}\n% last\n\\end{scope}\n"
    );
    assert_eq!(scope.children().len(), 3);
}

#[test]
fn test_nested_environments_pair_up() {
    let mut outer = Element::environment("tikzpicture");
    let mut inner = Element::environment("scope");
    inner.push(Element::environment("axis"));
    outer.push(inner);
    let out = markup(&outer);
    assert_eq!(out.matches("\\begin{").count(), out.matches("\\end{").count());
    assert!(out.ends_with("\\end{axis}\n\\end{scope}\n\\end{tikzpicture}\n"));
}

#[test]
fn test_figure_with_several_axes() {
    let figure = figure_with_axes(2, 3);
    let out = markup(&figure);
    assert_eq!(out.matches("\\begin{axis}").count(), 2);
    assert_eq!(out.matches("\\addlegendentry{line}").count(), 2);
    assert!(out.starts_with("\\begin{tikzpicture}\n\\begin{axis}\n\\addplot[color=red]"));
}

#[test]
fn test_group_plot_cells() {
    let mut figure = Figure::new();
    let group = figure.group_plot(2, 1);
    group.next_plot().set("title", "A");
    group.next_plot().set("title", "B");
    assert_eq!(group.axes().len(), 2);

    let out = markup(&figure);
    assert!(out.contains("\\begin{groupplot}[group style={group size=2 by 1}]\n"));
    assert!(out.contains("\\nextgroupplot[title=A]\n\\nextgroupplot[title=B]\n\\end{groupplot}\n"));
    assert!(!out.contains("\\begin{nextgroupplot}"));
}

#[test]
fn test_next_group_plot_keeps_axis_capabilities() {
    let mut axis = Axis::next_group_plot();
    axis.set("ylabel", "y");
    axis.plot(&[1.0], &[1.0]).unwrap();
    axis.legend_entry(LegendEntry::new("one"));
    assert_eq!(axis.plot_count(), 1);
    assert_eq!(
        markup(&axis),
        "\\nextgroupplot[ylabel=y]\n\\addplot{coordinates {\n(1, 1)\n};\n}\n\\addlegendentry{one}\n"
    );
}

#[test]
fn test_plot_with_meta() {
    let plot = Plot::new(&[0.0, 1.0], &[1.0, 0.0])
        .unwrap()
        .with_meta(&["a", "b"])
        .unwrap();
    assert_eq!(
        markup(&plot),
        "\\addplot[point meta=explicit symbolic]{coordinates {\n(0, 1) [a]\n(1, 0) [b]\n};\n}\n"
    );

    let err = Plot::new(&[0.0], &[1.0]).unwrap().with_meta(&["a", "b"]).unwrap_err();
    assert!(err.is_configuration_error());
}

#[test]
fn test_legend_without_plots_still_written() {
    let mut axis = Axis::new();
    axis.legend_entry(LegendEntry::verbatim("$\\alpha$"));
    assert_eq!(
        markup(&axis),
        "\\begin{axis}\n\\addlegendentry{$\\alpha$}\n\\end{axis}\n"
    );
}

#[test]
fn test_modes_reject_unknown_values() {
    assert_eq!("both".parse::<Side>().unwrap(), Side::Both);
    let err = "sideways".parse::<Side>().unwrap_err();
    assert!(err.is_unknown_mode());
    assert!(!err.is_configuration_error());
    assert_eq!(err.to_string(), "Unknown side: sideways");

    assert!("diagonal".parse::<Orientation>().is_err());
}

#[test]
fn test_write_to_io() {
    let axis = axis_with_line(2);
    let mut buffer = Vec::new();
    tikzplot::write_to(&axis, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), markup(&axis));
}

#[test]
fn test_large_figure() {
    let figure = figure_with_axes(4, 1_000);
    let out = figure.to_markup().unwrap();
    assert_eq!(out.lines().filter(|line| line.starts_with('(')).count(), 4_000);
}
