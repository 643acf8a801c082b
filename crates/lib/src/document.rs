//! Standalone documents.
//!
//! A [`Document`] wraps a [`Figure`] in the preamble needed to compile it on
//! its own. It only serializes; compiling the result is left to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    element::{Figure, Node},
};

/// Preamble configuration for a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// Document class passed to `\documentclass`
    pub class: String,
    /// Packages loaded with `\usepackage`, in order
    pub packages: Vec<String>,
    /// pgfplots compatibility level
    pub compat: Option<String>,
    /// pgfplots libraries loaded with `\usepgfplotslibrary`
    pub libraries: Vec<String>,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            class: "standalone".to_string(),
            packages: vec!["pgfplots".to_string()],
            compat: None,
            libraries: Vec::new(),
        }
    }
}

impl DocumentSettings {
    pub fn with_compat(mut self, compat: impl Into<String>) -> Self {
        self.compat = Some(compat.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Adds a pgfplots library unless it is already listed
    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        let library = library.into();
        if !self.libraries.contains(&library) {
            self.libraries.push(library);
        }
        self
    }
}

/// A figure together with its preamble.
#[derive(Debug, Default)]
pub struct Document {
    settings: DocumentSettings,
    figure: Figure,
}

impl Document {
    pub fn new(figure: Figure) -> Self {
        Self::with_settings(figure, DocumentSettings::default())
    }

    pub fn with_settings(figure: Figure, settings: DocumentSettings) -> Self {
        Self { settings, figure }
    }

    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut DocumentSettings {
        &mut self.settings
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn figure_mut(&mut self) -> &mut Figure {
        &mut self.figure
    }

    fn libraries(&self) -> Vec<&str> {
        let mut libraries: Vec<&str> = self.settings.libraries.iter().map(String::as_str).collect();
        if self.figure.uses_group_plots() && !libraries.contains(&"groupplots") {
            libraries.push("groupplots");
        }
        libraries
    }
}

impl Node for Document {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        let settings = &self.settings;
        tracing::debug!(class = %settings.class, "Writing document");

        writeln!(sink, "\\documentclass{{{}}}", settings.class)?;
        for package in &settings.packages {
            writeln!(sink, "\\usepackage{{{package}}}")?;
        }
        if let Some(compat) = &settings.compat {
            writeln!(sink, "\\pgfplotsset{{compat={compat}}}")?;
        }
        for library in self.libraries() {
            writeln!(sink, "\\usepgfplotslibrary{{{library}}}")?;
        }
        sink.write_str("\\begin{document}\n")?;
        self.figure.write(sink)?;
        sink.write_str("\\end{document}\n")?;
        Ok(())
    }
}
