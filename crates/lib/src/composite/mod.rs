//! Composite elements.
//!
//! A composite presents one option namespace to its caller while serializing
//! as several markup commands. It owns its parts (each a full element with
//! its own option list) plus one shared option list, and during a write it
//! hands each part a transient, layered option list:
//!
//! 1. the part's own options,
//! 2. the composite's shared options,
//! 3. synthetic options the composite computes for that part.
//!
//! Later layers overwrite earlier values; a key keeps the position of its
//! first appearance. The layered list is built per write, lent to exactly one
//! serialization pass, and dropped afterwards. Parts are only borrowed, so
//! their stored options are identical before and after any number of writes,
//! including writes that fail part-way.

use std::fmt;

use crate::{
    Result,
    element::{Element, Plot},
    options::{Configurable, Options},
};

pub mod error_band;
pub mod violin;

pub use error_band::ErrorBand;
pub use violin::Violin;

/// A part of a composite that can be written under borrowed options.
pub trait Overridable: Configurable {
    /// Writes this element using `options` in place of its own.
    fn write_with(&self, options: &Options, sink: &mut dyn fmt::Write) -> Result<()>;
}

impl Overridable for Plot {
    fn write_with(&self, options: &Options, sink: &mut dyn fmt::Write) -> Result<()> {
        Plot::write_with(self, options, sink)
    }
}

impl Overridable for Element {
    fn write_with(&self, options: &Options, sink: &mut dyn fmt::Write) -> Result<()> {
        Element::write_with(self, options, sink)
    }
}

/// The layered option list for one write of one part.
#[derive(Debug)]
pub struct OverrideWindow {
    merged: Options,
}

impl OverrideWindow {
    /// Layers the part's own options, the shared options and the synthetic options.
    pub fn open(own: &Options, shared: &Options, synthetic: &Options) -> Self {
        let merged = Options::layered(&[own, shared, synthetic]);
        tracing::trace!(
            own = own.len(),
            shared = shared.len(),
            synthetic = synthetic.len(),
            merged = merged.len(),
            "Opened override window"
        );
        Self { merged }
    }

    pub fn options(&self) -> &Options {
        &self.merged
    }

    /// Writes `part` once under the layered options and closes the window.
    pub fn write(self, part: &impl Overridable, sink: &mut dyn fmt::Write) -> Result<()> {
        part.write_with(&self.merged, sink)
    }
}

/// Writes `part` under its own, the shared and the synthetic options.
pub fn write_part(
    part: &impl Overridable,
    shared: &Options,
    synthetic: &Options,
    sink: &mut dyn fmt::Write,
) -> Result<()> {
    OverrideWindow::open(part.options(), shared, synthetic).write(part, sink)
}
