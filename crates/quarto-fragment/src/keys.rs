/*
 * keys.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Key maps and the `{@name}` marker syntax.
//!
//! A [`KeyMap`] is an insertion-ordered map of key to replacement text.
//! Replacement happens in map order. Because every marker ends in `}`,
//! `{@a}` never occurs inside `{@ab}`, so overlapping names render the same
//! in any order. Order matters only when a value contains the marker of a
//! later key, or a key name itself contains `{@`. Re-setting an existing
//! key keeps its original position.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::FragmentResult;

/// Opening delimiter of a marker.
pub const MARKER_OPEN: &str = "{@";

/// Closing delimiter of a marker.
pub const MARKER_CLOSE: &str = "}";

/// Mapping of key to replacement text, in insertion order.
pub type KeyMap = IndexMap<String, String>;

/// Format the marker for a key: `title` becomes `{@title}`.
pub fn marker(key: &str) -> String {
    format!("{MARKER_OPEN}{key}{MARKER_CLOSE}")
}

/// Find the distinct marker names in `text`, in order of first appearance.
///
/// A marker name is any non-empty run of characters other than `{` and `}`
/// between `{@` and the next `}`.
pub fn scan_markers(text: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(MARKER_OPEN) {
        let after = &rest[start + MARKER_OPEN.len()..];
        match after.find(['{', '}']) {
            Some(end) if end > 0 && after[end..].starts_with(MARKER_CLOSE) => {
                let name = &after[..end];
                if !names.contains(&name) {
                    names.push(name);
                }
                rest = &after[end + MARKER_CLOSE.len()..];
            }
            // Not a marker; resume just past this `{`.
            _ => rest = &rest[start + 1..],
        }
    }

    names
}

/// Build a key map from any serializable struct or map.
///
/// Each top-level field becomes a key. Strings are used verbatim, numbers
/// and booleans as their JSON text, `null` as the empty string, and arrays
/// or objects as compact JSON.
///
/// # Errors
/// Fails if serialization fails or the value is not a JSON object.
pub fn key_map_from_serialize<T: Serialize + ?Sized>(value: &T) -> FragmentResult<KeyMap> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields
            .into_iter()
            .map(|(k, v)| (k, value_to_text(v)))
            .collect()),
        other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
            "expected an object, found {}",
            kind_name(&other)
        ))
        .into()),
    }
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
