//! Brace-delimited aggregates.

use std::fmt;

use super::{Raw, Value, coerce};
use crate::options::Options;

/// One entry of an aggregate.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A positional item such as `1` in `{1, 2}`
    Item(Value),
    /// A keyed setting; `None` writes a bare key
    Keyed(String, Option<Value>),
}

impl Entry {
    fn write(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Entry::Item(value) => value.write(sink),
            Entry::Keyed(key, value) => {
                sink.write_str(key)?;
                if let Some(value) = value {
                    sink.write_char('=')?;
                    value.write(sink)?;
                }
                Ok(())
            }
        }
    }
}

/// An aggregate value, written as `{a, b=c, ...}`.
///
/// An aggregate can hold positional items (`{1, 2, 1}`), keyed settings
/// (`{at={(0.5, 1)}, anchor=north}`) or a mix of both, written in insertion
/// order. Items are kept as given, repeats included; keys are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueList {
    entries: Vec<Entry>,
}

impl ValueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list of positional items from a sequence.
    pub fn from_items(items: impl IntoIterator<Item = Raw>) -> Self {
        let mut list = Self::new();
        for item in items {
            list.push(item);
        }
        list
    }

    /// Builds a keyed list from ordered pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, Raw)>) -> Self {
        let mut list = Self::new();
        for (key, value) in pairs {
            list.set(key, value);
        }
        list
    }

    /// Appends a coerced positional item. Absent items are skipped.
    pub fn push(&mut self, item: impl Into<Raw>) {
        if let Some(value) = coerce(item) {
            self.entries.push(Entry::Item(value));
        }
    }

    /// Sets a keyed entry.
    ///
    /// An existing key keeps its position and takes the new value. An absent
    /// value writes the bare key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Raw>) {
        let key = key.into();
        let value = coerce(value);
        let existing = self.entries.iter_mut().find_map(|entry| match entry {
            Entry::Keyed(name, slot) if *name == key => Some(slot),
            _ => None,
        });
        match existing {
            Some(slot) => *slot = value,
            None => self.entries.push(Entry::Keyed(key, value)),
        }
    }

    /// Reads the value of a keyed entry, treating missing keys and bare keys alike
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find_map(|entry| match entry {
            Entry::Keyed(name, value) if name == key => value.as_ref(),
            _ => None,
        })
    }

    /// Returns the positional items in order
    pub fn items(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Item(value) => Some(value),
            Entry::Keyed(..) => None,
        })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes `{entries}`; an empty list writes `{}`.
    pub fn write(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        sink.write_char('{')?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                sink.write_str(", ")?;
            }
            entry.write(sink)?;
        }
        sink.write_char('}')
    }
}

impl From<Options> for ValueList {
    fn from(options: Options) -> Self {
        let entries = options
            .iter()
            .map(|(key, value)| Entry::Keyed(key.to_string(), value.cloned()))
            .collect();
        Self { entries }
    }
}

impl IntoIterator for ValueList {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T: Into<Raw>> FromIterator<T> for ValueList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter.into_iter().map(Into::into))
    }
}

impl fmt::Display for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}
