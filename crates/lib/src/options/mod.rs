//! Ordered option lists.
//!
//! An [`Options`] container is the `[k1=v1, flag, ...]` part of a markup
//! command. Keys are unique and keep the position of their first insertion;
//! writing an existing key replaces its value in place. Values are coerced on
//! insertion (see [`crate::value::coerce`]), so a stored value is always typed,
//! and a key without a value is written as a bare flag.
//!
//! # Merging arguments
//!
//! [`Options::add`] accepts any mix of [`Arg`] shapes, processed left to right:
//!
//! - [`Arg::Flag`] inserts a bare flag
//! - [`Arg::Pair`] inserts one key/value pair
//! - [`Arg::Mapping`] inserts every pair of a mapping in order
//! - [`Arg::Nested`] applies the same dispatch to each inner argument
//!
//! Untyped host data goes through [`Options::add_raw`], which classifies every
//! argument before touching the container and fails on shapes that are none of
//! the above.
//!
//! ```
//! use tikzplot::options::{Arg, Options};
//!
//! let mut options = Options::new();
//! options.add(["ybar", "fill"]);
//! options.add_named([("mark", "none")]);
//! assert_eq!(options.to_string(), "[ybar, fill, mark=none]");
//!
//! options.add([Arg::from(("ybar", "stacked"))]);
//! assert_eq!(options.to_string(), "[ybar=stacked, fill, mark=none]");
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::{
    Result,
    value::{Raw, Value, ValueList, coerce, list::Entry},
};

pub mod errors;

pub use errors::OptionsError;

/// One positional argument to [`Options::add`].
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A bare flag such as `fill`
    Flag(String),
    /// A single `key=value` setting
    Pair(String, Raw),
    /// Several settings in order
    Mapping(Vec<(String, Raw)>),
    /// A list of further arguments
    Nested(Vec<Arg>),
}

impl Arg {
    fn nested(items: Vec<Raw>) -> std::result::Result<Self, OptionsError> {
        items
            .into_iter()
            .map(Arg::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Arg::Nested)
    }
}

impl TryFrom<Raw> for Arg {
    type Error = OptionsError;

    fn try_from(raw: Raw) -> std::result::Result<Self, Self::Error> {
        if let Some(key) = raw.as_key() {
            return Ok(Arg::Flag(key));
        }
        match raw {
            Raw::Map(pairs) => Ok(Arg::Mapping(pairs)),
            Raw::Tuple(items) => match <[Raw; 2]>::try_from(items) {
                Ok([key, value]) => match key.as_key() {
                    Some(key) => Ok(Arg::Pair(key, value)),
                    None => Arg::nested(vec![key, value]),
                },
                Err(items) => Arg::nested(items),
            },
            Raw::Seq(items) => Arg::nested(items),
            Raw::Value(Value::Scalar(token)) => Ok(Arg::Flag(token)),
            Raw::Value(Value::Aggregate(list)) => Ok(Arg::from(list)),
            other => Err(OptionsError::UnsupportedArgument {
                shape: other.shape().to_string(),
            }),
        }
    }
}

impl From<&str> for Arg {
    fn from(flag: &str) -> Self {
        Arg::Flag(flag.to_string())
    }
}

impl From<String> for Arg {
    fn from(flag: String) -> Self {
        Arg::Flag(flag)
    }
}

impl<K: Into<String>, V: Into<Raw>> From<(K, V)> for Arg {
    fn from((key, value): (K, V)) -> Self {
        Arg::Pair(key.into(), value.into())
    }
}

impl From<Vec<Arg>> for Arg {
    fn from(args: Vec<Arg>) -> Self {
        Arg::Nested(args)
    }
}

impl From<Options> for Arg {
    fn from(options: Options) -> Self {
        Arg::Mapping(
            options
                .entries
                .into_iter()
                .map(|(key, value)| (key, Raw::from(value)))
                .collect(),
        )
    }
}

/// Positional items of the list become flags named by their printed form.
impl From<ValueList> for Arg {
    fn from(list: ValueList) -> Self {
        Arg::Nested(
            list.into_iter()
                .map(|entry| match entry {
                    Entry::Item(value) => Arg::Flag(value.to_string()),
                    Entry::Keyed(key, value) => Arg::Pair(key, Raw::from(value)),
                })
                .collect(),
        )
    }
}

/// An ordered, key-unique option list.
#[derive(Debug, Clone, Default)]
pub struct Options {
    entries: IndexMap<String, Option<Value>>,
}

impl Options {
    /// Creates a new empty option list
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the key is present, as a flag or with a value
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Sets `key=value`, coercing the value.
    ///
    /// An existing key keeps its position and takes the new value. An absent
    /// value (`None`) turns the key into a flag.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Raw>) {
        self.entries.insert(key.into(), coerce(value));
    }

    /// Sets a bare flag
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.entries.insert(key.into(), None);
    }

    /// Reads a key.
    ///
    /// Returns `Ok(None)` for a flag and an error if the key is not present.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        self.entries
            .get(key)
            .map(Option::as_ref)
            .ok_or_else(|| OptionsError::KeyNotFound { key: key.to_string() }.into())
    }

    /// Reads the value of a key, treating missing keys and flags alike
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    /// Returns true if the key is present as a bare flag
    pub fn is_flag(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(None))
    }

    /// Removes a key, returning its value.
    ///
    /// The remaining entries keep their relative order. Removing a missing key
    /// is an error.
    pub fn delete(&mut self, key: &str) -> Result<Option<Value>> {
        self.entries
            .shift_remove(key)
            .ok_or_else(|| OptionsError::KeyNotFound { key: key.to_string() }.into())
    }

    /// Merges positional arguments, left to right.
    pub fn add<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        for arg in args {
            self.apply(arg.into());
        }
    }

    /// Merges named arguments in order.
    pub fn add_named<I, K, V>(&mut self, named: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Raw>,
    {
        for (key, value) in named {
            self.set(key, value);
        }
    }

    /// Merges untyped positional arguments.
    ///
    /// Every argument is classified before any entry is written, so a rejected
    /// argument leaves the container untouched.
    pub fn add_raw<I>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Raw>,
    {
        let args = args
            .into_iter()
            .map(|raw| Arg::try_from(raw.into()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        tracing::trace!(count = args.len(), "Merging option arguments");
        self.add(args);
        Ok(())
    }

    /// Merges untyped positional arguments followed by named arguments.
    pub fn merge<I, N, K, V>(&mut self, args: I, named: N) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Raw>,
        N: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Raw>,
    {
        self.add_raw(args)?;
        self.add_named(named);
        Ok(())
    }

    fn apply(&mut self, arg: Arg) {
        match arg {
            Arg::Flag(key) => self.set_flag(key),
            Arg::Pair(key, value) => self.set(key, value),
            Arg::Mapping(pairs) => self.add_named(pairs),
            Arg::Nested(args) => {
                for arg in args {
                    self.apply(arg);
                }
            }
        }
    }

    /// Overlays another container: its values win, existing keys keep their position.
    pub fn extend_from(&mut self, other: &Options) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Builds a fresh container from layers, lowest precedence first.
    pub fn layered(layers: &[&Options]) -> Options {
        let mut merged = Options::new();
        for layer in layers {
            merged.extend_from(layer);
        }
        merged
    }

    /// Returns an iterator over entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    /// Returns an iterator over keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Writes `key=value, flag, ...` without delimiters.
    pub fn write_entries(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                sink.write_str(", ")?;
            }
            sink.write_str(key)?;
            if let Some(value) = value {
                sink.write_char('=')?;
                value.write(sink)?;
            }
        }
        Ok(())
    }

    /// Writes `[entries]`, or nothing at all when empty.
    pub fn write(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        if self.entries.is_empty() {
            return Ok(());
        }
        sink.write_char('[')?;
        self.write_entries(sink)?;
        sink.write_char(']')
    }
}

// Order matters for equality, unlike the underlying map
impl PartialEq for Options {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

impl<A: Into<Arg>> FromIterator<A> for Options {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut options = Options::new();
        options.add(iter);
        options
    }
}

impl TryFrom<Raw> for Options {
    type Error = crate::Error;

    fn try_from(raw: Raw) -> Result<Self> {
        let mut options = Options::new();
        options.add_raw([raw])?;
        Ok(options)
    }
}

/// Builds an [`Options`] from flags and `"key" => value` pairs, in written order.
///
/// ```
/// let options = tikzplot::options!["ybar", "fill", "mark" => "none"];
/// assert_eq!(options.to_string(), "[ybar, fill, mark=none]");
/// ```
#[macro_export]
macro_rules! options {
    (@entries $options:ident;) => {};
    (@entries $options:ident; $key:literal => $value:expr $(, $($rest:tt)*)?) => {
        $options.set($key, $value);
        $( $crate::options!(@entries $options; $($rest)*); )?
    };
    (@entries $options:ident; $flag:expr $(, $($rest:tt)*)?) => {
        $options.set_flag($flag);
        $( $crate::options!(@entries $options; $($rest)*); )?
    };
    () => {
        $crate::options::Options::new()
    };
    ($($body:tt)+) => {{
        let mut options = $crate::options::Options::new();
        $crate::options!(@entries options; $($body)+);
        options
    }};
}

/// Shared option access for everything that owns one logical option list.
///
/// Elements hand out their own container; composite elements hand out the
/// shared container that is layered over each of their parts at write time.
pub trait Configurable {
    fn options(&self) -> &Options;

    fn options_mut(&mut self) -> &mut Options;

    /// Sets `key=value`
    fn set(&mut self, key: impl Into<String>, value: impl Into<Raw>) -> &mut Self
    where
        Self: Sized,
    {
        self.options_mut().set(key, value);
        self
    }

    /// Sets a bare flag
    fn set_flag(&mut self, key: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.options_mut().set_flag(key);
        self
    }

    /// Reads a key; see [`Options::get`]
    fn get(&self, key: &str) -> Result<Option<&Value>> {
        self.options().get(key)
    }

    /// Removes a key; see [`Options::delete`]
    fn delete(&mut self, key: &str) -> Result<Option<Value>> {
        self.options_mut().delete(key)
    }

    /// Merges positional arguments; see [`Options::add`]
    fn add<I>(&mut self, args: I) -> &mut Self
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.options_mut().add(args);
        self
    }

    /// Merges untyped arguments; see [`Options::add_raw`]
    fn add_raw<I>(&mut self, args: I) -> Result<()>
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: Into<Raw>,
    {
        self.options_mut().add_raw(args)
    }
}
