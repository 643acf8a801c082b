//! The element tree.
//!
//! Every piece of a document is a [`Node`]: something that writes its markup
//! and then its children, in insertion order. Elements that carry an option
//! list write it in one of three [`Shape`]s:
//!
//! - [`Shape::Command`]: `\name[options]{children}` followed by a newline
//! - [`Shape::Environment`]: `\begin{name}[options]`, children, `\end{name}`
//! - [`Shape::Inline`]: `\name[options]` followed by its children, unwrapped
//!
//! [`Element`] is the general form with a free-standing name. The typed kinds
//! ([`Figure`], [`Axis`], [`GroupPlot`], [`Plot`], [`LegendEntry`]) fix their
//! name and shape and offer the constructors that belong to them.
//!
//! ```
//! use tikzplot::element::{Coordinates, Element, Node};
//! use tikzplot::options::Configurable;
//! use tikzplot::value::Coordinate;
//!
//! let mut plot = Element::command("addplot");
//! plot.set("color", "red");
//! plot.push(Coordinates::from_iter([Coordinate::xy(0.0, 0.0), Coordinate::xy(1.0, 2.0)]));
//!
//! let mut axis = Element::environment("axis");
//! axis.push(plot);
//!
//! assert_eq!(
//!     axis.to_markup().unwrap(),
//!     "\\begin{axis}\n\\addplot[color=red]{coordinates {\n(0, 0)\n(1, 2)\n};\n}\n\\end{axis}\n"
//! );
//! ```

use std::{borrow::Cow, fmt};

use crate::{
    Result,
    options::{Configurable, Options},
    value::{Coordinate, Value},
};

pub mod axis;
pub mod errors;
pub mod figure;
pub mod modes;
pub mod plot;

pub use axis::{Axis, AxisItem, GroupPlot};
pub use errors::ElementError;
pub use figure::{Figure, FigureItem};
pub use modes::{LegendPosition, Orientation, Side};
pub use plot::{Coordinates, LegendEntry, Plot};

/// A serializable node of the document tree.
pub trait Node: fmt::Debug {
    /// Writes this node and then its children, in order.
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()>;

    /// Serializes this node into a new string.
    fn to_markup(&self) -> Result<String> {
        let mut markup = String::new();
        self.write(&mut markup)?;
        Ok(markup)
    }
}

/// How an element frames its options and children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Command,
    Environment,
    Inline,
}

/// Writes the frame of one element around `body`.
pub(crate) fn write_framed(
    sink: &mut dyn fmt::Write,
    shape: Shape,
    name: &str,
    options: &Options,
    body: impl FnOnce(&mut dyn fmt::Write) -> Result<()>,
) -> Result<()> {
    match shape {
        Shape::Command => {
            write!(sink, "\\{name}")?;
            options.write(sink)?;
            sink.write_char('{')?;
            body(&mut *sink)?;
            sink.write_str("}\n")?;
        }
        Shape::Environment => {
            write!(sink, "\\begin{{{name}}}")?;
            options.write(sink)?;
            sink.write_char('\n')?;
            body(&mut *sink)?;
            writeln!(sink, "\\end{{{name}}}")?;
        }
        Shape::Inline => {
            write!(sink, "\\{name}")?;
            options.write(sink)?;
            sink.write_char('\n')?;
            body(&mut *sink)?;
        }
    }
    Ok(())
}

/// A named element with an option list and arbitrary children.
#[derive(Debug)]
pub struct Element {
    name: Cow<'static, str>,
    shape: Shape,
    options: Options,
    children: Vec<Box<dyn Node>>,
}

impl Element {
    pub fn new(name: impl Into<Cow<'static, str>>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            options: Options::new(),
            children: Vec::new(),
        }
    }

    /// Creates a command-shaped element
    pub fn command(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, Shape::Command)
    }

    /// Creates an environment-shaped element
    pub fn environment(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, Shape::Environment)
    }

    /// Creates an inline element whose children follow its header unwrapped
    pub fn inline(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, Shape::Inline)
    }

    /// Replaces the option list
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn children(&self) -> &[Box<dyn Node>] {
        &self.children
    }

    /// Appends a child
    pub fn push(&mut self, child: impl Node + 'static) -> &mut Self {
        self.children.push(Box::new(child));
        self
    }

    /// Appends an already boxed child
    pub fn push_boxed(&mut self, child: Box<dyn Node>) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Writes this element using `options` in place of its own.
    pub fn write_with(&self, options: &Options, sink: &mut dyn fmt::Write) -> Result<()> {
        write_framed(sink, self.shape, &self.name, options, |sink| {
            for child in &self.children {
                child.write(sink)?;
            }
            Ok(())
        })
    }
}

impl Node for Element {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        self.write_with(&self.options, sink)
    }
}

impl Configurable for Element {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

/// Verbatim markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(pub String);

impl Text {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }
}

impl Node for Text {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        sink.write_str(&self.0)?;
        Ok(())
    }
}

impl Node for Value {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        Value::write(self, sink)?;
        Ok(())
    }
}

impl Node for Coordinate {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        Coordinate::write(self, sink)?;
        Ok(())
    }
}
