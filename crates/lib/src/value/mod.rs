//! Typed values and the coercion of host data into them.
//!
//! Every option value and plot datum stored in the element tree is one of the
//! [`Value`] variants. Host data enters through [`Raw`], a tagged view of the
//! shapes a caller can hand over (numbers, text, tuples, sequences, mappings),
//! and is turned into a [`Value`] by [`coerce`].
//!
//! # Coercion order
//!
//! The first matching rule wins:
//!
//! 1. An already typed [`Value`] is returned unchanged. This includes a
//!    [`Node`] wrapped by [`Value::node`], which writes itself in place.
//! 2. A tuple of two or more items whose first item is numeric is a literal
//!    and becomes [`Value::Bracketed`], e.g. `(0.5, 1)` writes `{(0.5, 1)}`.
//! 3. [`Raw::None`] stays absent; stored in an option list it is a bare flag.
//! 4. Any other tuple, sequence or mapping becomes [`Value::Aggregate`].
//! 5. Everything else is a [`Value::Scalar`] holding its printed form.
//!
//! ```
//! use tikzplot::value::{Raw, coerce};
//!
//! assert_eq!(coerce((0.5, 1)).unwrap().to_string(), "{(0.5, 1)}");
//! assert_eq!(coerce(vec![1, 2, 3]).unwrap().to_string(), "{1, 2, 3}");
//! assert_eq!(coerce("red").unwrap().to_string(), "red");
//! assert!(coerce(Raw::None).is_none());
//! ```

use std::{fmt, sync::Arc};

use crate::element::Node;

pub mod color;
pub mod coordinate;
pub mod errors;
pub mod list;

pub use color::Color;
pub use coordinate::Coordinate;
pub use errors::ValueError;
pub use list::ValueList;

/// A coerced value ready for markup serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single printable token
    Scalar(String),
    /// A value wrapped in `{ ... }` to keep its text grouped
    Bracketed(Box<Value>),
    /// A brace-delimited, comma-joined list of entries
    Aggregate(ValueList),
    /// A color in the `rgb` color model or a named color spec
    Color(Color),
    /// A single data point
    Coordinate(Coordinate),
    /// A node that writes its own markup in place of the value
    Node(NodeValue),
}

/// A shared node held as a value.
///
/// Two node values are equal only when they share the same node.
#[derive(Debug, Clone)]
pub struct NodeValue(Arc<dyn Node + Send + Sync>);

impl NodeValue {
    pub fn new(node: impl Node + Send + Sync + 'static) -> Self {
        Self(Arc::new(node))
    }

    pub fn node(&self) -> &(dyn Node + Send + Sync) {
        self.0.as_ref()
    }
}

impl PartialEq for NodeValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Value {
    /// Creates a scalar from anything printable
    pub fn scalar(token: impl fmt::Display) -> Self {
        Value::Scalar(token.to_string())
    }

    /// Wraps a value in braces
    pub fn bracketed(inner: impl Into<Value>) -> Self {
        Value::Bracketed(Box::new(inner.into()))
    }

    /// Wraps a node so it can be stored wherever a value is expected
    pub fn node(node: impl Node + Send + Sync + 'static) -> Self {
        Value::Node(NodeValue::new(node))
    }

    /// Returns the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Bracketed(_) => "bracketed",
            Value::Aggregate(_) => "aggregate",
            Value::Color(_) => "color",
            Value::Coordinate(_) => "coordinate",
            Value::Node(_) => "node",
        }
    }

    /// Attempts to read the token of a scalar
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(token) => Some(token),
            _ => None,
        }
    }

    /// Attempts to convert to an aggregate (returns immutable reference)
    pub fn as_list(&self) -> Option<&ValueList> {
        match self {
            Value::Aggregate(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable aggregate reference
    pub fn as_list_mut(&mut self) -> Option<&mut ValueList> {
        match self {
            Value::Aggregate(list) => Some(list),
            _ => None,
        }
    }

    /// Writes the markup form of this value to `sink`.
    ///
    /// A node that fails to write reports a plain [`fmt::Error`].
    pub fn write(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Value::Scalar(token) => sink.write_str(token),
            Value::Bracketed(inner) => {
                sink.write_char('{')?;
                inner.write(sink)?;
                sink.write_char('}')
            }
            Value::Aggregate(list) => list.write(sink),
            Value::Color(color) => color.write(sink),
            Value::Coordinate(coordinate) => coordinate.write(sink),
            Value::Node(node) => node.node().write(sink).map_err(|_| fmt::Error),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Value::Color(value)
    }
}

impl From<Coordinate> for Value {
    fn from(value: Coordinate) -> Self {
        Value::Coordinate(value)
    }
}

impl From<NodeValue> for Value {
    fn from(value: NodeValue) -> Self {
        Value::Node(value)
    }
}

impl From<ValueList> for Value {
    fn from(value: ValueList) -> Self {
        Value::Aggregate(value)
    }
}

/// Host data handed to the element tree before coercion.
///
/// `Raw` mirrors the shapes a dynamically typed caller would pass around.
/// Rust tuples convert to [`Raw::Tuple`], vectors and slices to [`Raw::Seq`],
/// and `None` to [`Raw::None`], so most call sites never name this type.
#[derive(Debug, Clone, PartialEq)]
pub enum Raw {
    /// Absence of a value; a bare flag in option lists
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Fixed-arity grouping such as a point literal or a key/value pair
    Tuple(Vec<Raw>),
    /// Variable-length sequence
    Seq(Vec<Raw>),
    /// Ordered key/value mapping
    Map(Vec<(String, Raw)>),
    /// An already typed value
    Value(Value),
}

impl Raw {
    /// Returns true for integer and float data
    pub fn is_numeric(&self) -> bool {
        matches!(self, Raw::Int(_) | Raw::Float(_))
    }

    /// Returns true for text and numeric data, the shapes usable as keys
    pub fn is_key_like(&self) -> bool {
        matches!(self, Raw::Text(_) | Raw::Int(_) | Raw::Float(_))
    }

    /// Returns the printed form of a key-like value
    pub fn as_key(&self) -> Option<String> {
        match self {
            Raw::Text(text) => Some(text.clone()),
            Raw::Int(n) => Some(n.to_string()),
            Raw::Float(x) => Some(x.to_string()),
            _ => None,
        }
    }

    /// Describes the shape of this value for error messages
    pub fn shape(&self) -> &'static str {
        match self {
            Raw::None => "none",
            Raw::Bool(_) => "bool",
            Raw::Int(_) => "int",
            Raw::Float(_) => "float",
            Raw::Text(_) => "text",
            Raw::Tuple(_) => "tuple",
            Raw::Seq(_) => "sequence",
            Raw::Map(_) => "mapping",
            Raw::Value(value) => value.type_name(),
        }
    }

    /// Builds an ordered mapping from key/value pairs
    pub fn map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Raw>,
    {
        Raw::Map(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Coerces host data into a typed value.
///
/// Returns `None` only for [`Raw::None`], which marks a bare flag. Coercion is
/// idempotent: feeding the result back in returns it unchanged.
pub fn coerce(raw: impl Into<Raw>) -> Option<Value> {
    match raw.into() {
        Raw::Value(value) => Some(value),
        Raw::Tuple(items) if items.len() >= 2 && items[0].is_numeric() => {
            Some(Value::bracketed(Value::Scalar(tuple_literal(items))))
        }
        Raw::None => None,
        Raw::Tuple(items) | Raw::Seq(items) => Some(Value::Aggregate(ValueList::from_items(items))),
        Raw::Map(pairs) => Some(Value::Aggregate(ValueList::from_pairs(pairs))),
        Raw::Bool(flag) => Some(Value::scalar(flag)),
        Raw::Int(n) => Some(Value::scalar(n)),
        Raw::Float(x) => Some(Value::scalar(x)),
        Raw::Text(text) => Some(Value::Scalar(text)),
    }
}

/// Prints the token a raw value coerces to, or nothing for `Raw::None`.
pub(crate) fn render(raw: Raw) -> String {
    coerce(raw).map(|value| value.to_string()).unwrap_or_default()
}

fn tuple_literal(items: Vec<Raw>) -> String {
    let parts: Vec<String> = items.into_iter().map(render).collect();
    format!("({})", parts.join(", "))
}

// Convenient From implementations for common host types
impl From<Value> for Raw {
    fn from(value: Value) -> Self {
        Raw::Value(value)
    }
}

impl From<Color> for Raw {
    fn from(value: Color) -> Self {
        Raw::Value(Value::Color(value))
    }
}

impl From<Coordinate> for Raw {
    fn from(value: Coordinate) -> Self {
        Raw::Value(Value::Coordinate(value))
    }
}

impl From<NodeValue> for Raw {
    fn from(value: NodeValue) -> Self {
        Raw::Value(Value::Node(value))
    }
}

impl From<ValueList> for Raw {
    fn from(value: ValueList) -> Self {
        Raw::Value(Value::Aggregate(value))
    }
}

impl From<bool> for Raw {
    fn from(value: bool) -> Self {
        Raw::Bool(value)
    }
}

impl From<i64> for Raw {
    fn from(value: i64) -> Self {
        Raw::Int(value)
    }
}

impl From<i32> for Raw {
    fn from(value: i32) -> Self {
        Raw::Int(value as i64)
    }
}

impl From<u32> for Raw {
    fn from(value: u32) -> Self {
        Raw::Int(value as i64)
    }
}

impl From<usize> for Raw {
    fn from(value: usize) -> Self {
        Raw::Int(value as i64)
    }
}

impl From<f64> for Raw {
    fn from(value: f64) -> Self {
        Raw::Float(value)
    }
}

impl From<f32> for Raw {
    fn from(value: f32) -> Self {
        Raw::Float(value as f64)
    }
}

impl From<String> for Raw {
    fn from(value: String) -> Self {
        Raw::Text(value)
    }
}

impl From<&str> for Raw {
    fn from(value: &str) -> Self {
        Raw::Text(value.to_string())
    }
}

impl From<&String> for Raw {
    fn from(value: &String) -> Self {
        Raw::Text(value.clone())
    }
}

impl<T: Into<Raw>> From<Option<T>> for Raw {
    fn from(value: Option<T>) -> Self {
        value.map_or(Raw::None, Into::into)
    }
}

impl<T: Into<Raw>> From<Vec<T>> for Raw {
    fn from(value: Vec<T>) -> Self {
        Raw::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Raw> + Clone> From<&[T]> for Raw {
    fn from(value: &[T]) -> Self {
        Raw::Seq(value.iter().cloned().map(Into::into).collect())
    }
}

impl<A: Into<Raw>, B: Into<Raw>> From<(A, B)> for Raw {
    fn from((a, b): (A, B)) -> Self {
        Raw::Tuple(vec![a.into(), b.into()])
    }
}

impl<A: Into<Raw>, B: Into<Raw>, C: Into<Raw>> From<(A, B, C)> for Raw {
    fn from((a, b, c): (A, B, C)) -> Self {
        Raw::Tuple(vec![a.into(), b.into(), c.into()])
    }
}

impl From<serde_json::Value> for Raw {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Raw::None,
            serde_json::Value::Bool(flag) => Raw::Bool(flag),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(int) => Raw::Int(int),
                None => Raw::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(text) => Raw::Text(text),
            serde_json::Value::Array(items) => {
                Raw::Seq(items.into_iter().map(Raw::from).collect())
            }
            serde_json::Value::Object(entries) => Raw::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Raw::from(value)))
                    .collect(),
            ),
        }
    }
}
