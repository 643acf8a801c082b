//!
//! tikzplot: build pgfplots figures as a typed element tree and serialize them to markup.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: Host data coerced into one of the markup value forms: scalars,
//!   bracketed literals, aggregates, colors and coordinates. Arbitrary host data enters as
//!   `value::Raw`.
//! * **Options (`options::Options`)**: An ordered, key-unique option list. Keys keep the position of
//!   their first insertion; setting an existing key overwrites its value in place. A key without a
//!   value is a flag.
//! * **Elements (`element::Node`)**: The tree itself. Figures hold axes, axes hold plots and
//!   legend entries, and every node writes its own markup followed by its children in order.
//! * **Composites (`composite`)**: Elements made of several plots that present one option list,
//!   such as error bands and violins. Their parts are written under layered options without ever
//!   being modified.
//! * **Documents (`document::Document`)**: A figure wrapped in the preamble needed to compile it.
//!
//! ```
//! use tikzplot::element::{Figure, LegendEntry, Node};
//! use tikzplot::options::Configurable;
//!
//! let mut figure = Figure::new();
//! let axis = figure.axis();
//! axis.set("xlabel", "x");
//! axis.plot(&[0.0, 1.0], &[0.0, 1.0])?.set("color", "blue");
//! axis.legend_entry(LegendEntry::new("linear"));
//!
//! let markup = figure.to_markup()?;
//! assert!(markup.starts_with("\\begin{tikzpicture}\n\\begin{axis}[xlabel=x]\n"));
//! # Ok::<(), tikzplot::Error>(())
//! ```

use std::{fmt, io};

pub mod composite;
pub mod document;
pub mod element;
pub mod escape;
pub mod options;
pub mod value;

pub use document::{Document, DocumentSettings};
pub use element::{Axis, Figure, Node, Plot};
pub use options::{Configurable, Options};
pub use value::{Raw, Value, coerce};

/// Result type used throughout the tikzplot library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the tikzplot library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to write markup")]
    Write(#[from] fmt::Error),

    /// Structured value errors from the value module
    #[error(transparent)]
    Value(value::ValueError),

    /// Structured option errors from the options module
    #[error(transparent)]
    Options(options::OptionsError),

    /// Structured element errors from the element module
    #[error(transparent)]
    Element(element::ElementError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Write(_) => "write",
            Error::Value(_) => "value",
            Error::Options(_) => "options",
            Error::Element(_) => "element",
        }
    }

    /// Check if this error was caused by invalid configuration.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Error::Value(_) => true,
            Error::Options(options_err) => options_err.is_configuration_error(),
            Error::Element(element_err) => element_err.is_configuration_error(),
            _ => false,
        }
    }

    /// Check if this error indicates a lookup of a missing key.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Options(options_err) => options_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is an unrecognized categorical parameter.
    pub fn is_unknown_mode(&self) -> bool {
        match self {
            Error::Element(element_err) => element_err.is_unknown_mode(),
            _ => false,
        }
    }

    /// Check if the sink rejected a write.
    pub fn is_write_error(&self) -> bool {
        matches!(self, Error::Write(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Serializes `node` and writes the markup to `writer`.
///
/// The markup is built in full before anything reaches `writer`, so a failed
/// serialization writes nothing.
pub fn write_to(node: &impl Node, mut writer: impl io::Write) -> Result<()> {
    let markup = node.to_markup()?;
    writer.write_all(markup.as_bytes())?;
    writer.flush()?;
    Ok(())
}
