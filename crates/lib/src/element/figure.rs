//! The top-level picture.

use std::fmt;

use super::{Axis, GroupPlot, Node, Shape, write_framed};
use crate::{
    Result,
    options::{Configurable, Options},
};

/// One entry of a figure body.
#[derive(Debug)]
pub enum FigureItem {
    Axis(Axis),
    GroupPlot(GroupPlot),
    Node(Box<dyn Node>),
}

impl Node for FigureItem {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        match self {
            FigureItem::Axis(axis) => axis.write(sink),
            FigureItem::GroupPlot(group) => group.write(sink),
            FigureItem::Node(node) => node.write(sink),
        }
    }
}

/// A `tikzpicture` environment holding axes.
#[derive(Debug, Default)]
pub struct Figure {
    options: Options,
    items: Vec<FigureItem>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[FigureItem] {
        &self.items
    }

    /// Adds an empty axis and returns it for configuration.
    pub fn axis(&mut self) -> &mut Axis {
        self.add_axis(Axis::new())
    }

    pub fn add_axis(&mut self, axis: Axis) -> &mut Axis {
        self.items.push(FigureItem::Axis(axis));
        match self.items.last_mut() {
            Some(FigureItem::Axis(axis)) => axis,
            _ => unreachable!("just pushed an axis"),
        }
    }

    /// Adds a `columns` by `rows` group plot and returns it.
    pub fn group_plot(&mut self, columns: usize, rows: usize) -> &mut GroupPlot {
        self.items.push(FigureItem::GroupPlot(GroupPlot::new(columns, rows)));
        match self.items.last_mut() {
            Some(FigureItem::GroupPlot(group)) => group,
            _ => unreachable!("just pushed a group plot"),
        }
    }

    pub fn push(&mut self, node: impl Node + 'static) -> &mut Self {
        self.items.push(FigureItem::Node(Box::new(node)));
        self
    }

    /// Whether any item needs the `groupplots` library
    pub fn uses_group_plots(&self) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, FigureItem::GroupPlot(_)))
    }
}

impl Node for Figure {
    fn write(&self, sink: &mut dyn fmt::Write) -> Result<()> {
        tracing::debug!(items = self.items.len(), "Writing figure");
        write_framed(sink, Shape::Environment, "tikzpicture", &self.options, |sink| {
            for item in &self.items {
                item.write(sink)?;
            }
            Ok(())
        })
    }
}

impl Configurable for Figure {
    fn options(&self) -> &Options {
        &self.options
    }

    fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
