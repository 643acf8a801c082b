//! Escaping of reserved markup characters.
//!
//! Text that should appear literally in a document (legend entries, labels,
//! titles) must not contain characters the markup language treats specially.
//! [`escape_str`] replaces each of them with its literal form; all other
//! characters pass through unchanged. [`escape`] applies the same table to
//! every text leaf of a host value: text, scalar values and mapping keys,
//! recursing through tuples, sequences and mappings. Numbers and other typed
//! values are left alone.

use std::fmt;

use crate::value::{Raw, Value};

fn replacement(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some(r"\&"),
        '_' => Some(r"\_"),
        '$' => Some(r"\$"),
        '^' => Some(r"\^{}"),
        '#' => Some(r"\#"),
        '%' => Some(r"\%"),
        '{' => Some(r"\{"),
        '}' => Some(r"\}"),
        '\\' => Some(r"\textbackslash{}"),
        _ => None,
    }
}

/// Returns an escaped copy of `text`.
///
/// ```
/// assert_eq!(tikzplot::escape::escape_str("a_b&c"), r"a\_b\&c");
/// ```
pub fn escape_str(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match replacement(ch) {
            Some(rep) => escaped.push_str(rep),
            None => escaped.push(ch),
        }
    }
    escaped
}

/// Writes the escaped form of `text` into `writer` without allocating.
pub fn escape_into<W: fmt::Write + ?Sized>(writer: &mut W, text: &str) -> fmt::Result {
    let mut last = 0;
    for (idx, ch) in text.char_indices() {
        if let Some(rep) = replacement(ch) {
            if last < idx {
                writer.write_str(&text[last..idx])?;
            }
            writer.write_str(rep)?;
            last = idx + ch.len_utf8();
        }
    }

    if last < text.len() {
        writer.write_str(&text[last..])
    } else {
        Ok(())
    }
}

/// Escapes every text leaf of a host value.
pub fn escape(value: Raw) -> Raw {
    match value {
        Raw::Text(text) => Raw::Text(escape_str(&text)),
        Raw::Value(Value::Scalar(token)) => Raw::Value(Value::Scalar(escape_str(&token))),
        Raw::Tuple(items) => Raw::Tuple(items.into_iter().map(escape).collect()),
        Raw::Seq(items) => Raw::Seq(items.into_iter().map(escape).collect()),
        Raw::Map(pairs) => Raw::Map(
            pairs
                .into_iter()
                .map(|(key, value)| (escape_str(&key), escape(value)))
                .collect(),
        ),
        other => other,
    }
}
