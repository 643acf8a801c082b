//! Composite element tests
//!
//! Shared option fan-out, synthetic options and the guarantee that parts are
//! never modified by serialization.

use tikzplot::{
    composite::{ErrorBand, OverrideWindow, Violin, write_part},
    element::{Axis, Orientation, Plot, Side},
    options,
    options::{Configurable, Options},
};

use crate::helpers::{line_series, markup};

fn band() -> ErrorBand {
    let (x, y) = line_series(3);
    let mut band = ErrorBand::symmetric(&x, &y, &[0.5, 0.5, 0.5]).unwrap();
    band.fill_mut().set("color", "gray");
    band.line_mut().set_flag("thick");
    band.set("color", "blue");
    band
}

#[test]
fn test_repeated_writes_leave_parts_identical() {
    let band = band();
    let fill_before = band.fill().options().clone();
    let line_before = band.line().options().clone();
    let first = markup(&band);

    for _ in 0..100 {
        assert_eq!(markup(&band), first);
    }
    assert_eq!(band.fill().options(), &fill_before);
    assert_eq!(band.line().options(), &line_before);
    assert_eq!(band.fill().options().to_string(), "[color=gray]");
}

#[test]
fn test_shared_options_fan_out() {
    let out = markup(&band());
    let headers: Vec<&str> = out.lines().filter(|line| line.starts_with("\\addplot")).collect();
    assert_eq!(
        headers,
        [
            "\\addplot[color=blue, fill, draw=none, forget plot, fill opacity=0.2]{coordinates {",
            "\\addplot[thick, color=blue]{coordinates {",
        ]
    );
}

#[test]
fn test_shared_option_delete() {
    let mut band = band();
    band.delete("color").unwrap();
    assert!(band.get("color").unwrap_err().is_not_found());
    assert!(markup(&band).contains("\\addplot[color=gray, fill, draw=none"));
}

#[test]
fn test_synthetic_options_win() {
    let mut band = band();
    band.set("forget plot", false);
    band.set("fill opacity", 1);
    let out = markup(&band);
    assert!(out.contains("\\addplot[color=blue, forget plot, fill opacity=0.2, fill, draw=none]"));
    assert!(out.contains("\\addplot[thick, color=blue, forget plot=false, fill opacity=1]"));
}

#[test]
fn test_violin_in_axis() {
    let mut axis = Axis::new();
    axis.violin(2.0, &[0.0, 1.0, 2.0], &[0.5, 1.0, 0.5])
        .unwrap()
        .set("color", "teal");
    assert_eq!(axis.plot_count(), 1);

    let out = markup(&axis);
    assert!(out.contains("\\addplot[color=teal, fill, area legend]"));
    assert!(!out.contains("forget plot"));
}

#[test]
fn test_violin_median_and_sides() {
    let violin = Violin::new(0.0, &[0.0, 1.0], &[1.0, 1.0])
        .unwrap()
        .with_orientation(Orientation::Horizontal)
        .with_side(Side::Low)
        .with_width(0.5)
        .with_median(0.5);
    let body_before = violin.body().options().clone();

    let out = markup(&violin);
    assert!(out.contains("(0, -0.5)\n(1, -0.5)\n(1, 0)\n(0, 0)\n"));
    assert!(out.contains("\\addplot[forget plot]{coordinates {\n(0.5, -0.5)\n(0.5, 0)\n};\n}\n"));
    assert_eq!(violin.body().options(), &body_before);
}

#[test]
fn test_override_window_on_plain_plot() {
    let mut plot = Plot::new(&[0.0], &[0.0]).unwrap();
    plot.set("mark", "o").set_flag("only marks");

    let shared = options!["mark" => "*"];
    let window = OverrideWindow::open(plot.options(), &shared, &Options::new());
    assert_eq!(window.options().to_string(), "[mark=*, only marks]");

    let mut out = String::new();
    window.write(&plot, &mut out).unwrap();
    assert!(out.starts_with("\\addplot[mark=*, only marks]"));

    let mut again = String::new();
    write_part(&plot, &Options::new(), &Options::new(), &mut again).unwrap();
    assert_eq!(again, markup(&plot));
    assert_eq!(plot.options().to_string(), "[mark=o, only marks]");
}

#[test]
fn test_composite_length_mismatch() {
    assert!(ErrorBand::symmetric(&[0.0, 1.0], &[0.0, 1.0], &[0.1]).unwrap_err().is_configuration_error());
    assert!(Violin::new(0.0, &[0.0, 1.0], &[1.0]).unwrap_err().is_configuration_error());
}
