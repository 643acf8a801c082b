//! Document tests

use tikzplot::{Document, DocumentSettings, Figure, Node};

use crate::helpers::{figure_with_axes, markup};

#[test]
fn test_document_wraps_figure() {
    let figure = figure_with_axes(1, 2);
    let figure_markup = markup(&figure);

    let settings = DocumentSettings::default()
        .with_class("article")
        .with_compat("1.18")
        .with_library("fillbetween");
    let document = Document::with_settings(figure, settings);
    let out = markup(&document);

    let expected_preamble = "\\documentclass{article}\n\
                             \\usepackage{pgfplots}\n\
                             \\pgfplotsset{compat=1.18}\n\
                             \\usepgfplotslibrary{fillbetween}\n\
                             \\begin{document}\n";
    assert!(out.starts_with(expected_preamble));
    assert_eq!(&out[expected_preamble.len()..], format!("{figure_markup}\\end{{document}}\n"));
}

#[test]
fn test_group_plots_library_follows_content() {
    let mut document = Document::new(Figure::new());
    assert!(!markup(&document).contains("usepgfplotslibrary"));

    document.figure_mut().group_plot(1, 1).next_plot();
    assert!(markup(&document).contains("\\usepgfplotslibrary{groupplots}\n"));
    assert!(document.settings().libraries.is_empty());
}

#[test]
fn test_settings_round_trip_through_json() {
    let settings = DocumentSettings::default().with_compat("newest");
    let json = serde_json::to_string(&settings).unwrap();
    let parsed: DocumentSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, settings);

    let empty: DocumentSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, DocumentSettings::default());
}

#[test]
fn test_document_to_string_matches_write() {
    let document = Document::new(figure_with_axes(1, 1));
    let mut out = String::new();
    document.write(&mut out).unwrap();
    assert_eq!(out, document.to_markup().unwrap());
}
