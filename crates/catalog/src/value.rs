//! Safe typed accessors over dynamic JSON entries.
//!
//! Every lookup is "fetch key, attempt type coercion, `None` on failure".
//! Nothing in this module panics or returns an error: a field holding the
//! wrong type reads the same as an absent field.

use serde_json::{Map, Value};

/// A catalog entry: one key-value mapping out of the entry sequence.
pub type Entry = Map<String, Value>;

/// Human-readable name of a JSON value's type, for error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// View a value as an entry mapping, or `None` for any other shape.
pub fn as_entry(value: &Value) -> Option<&Entry> {
    value.as_object()
}

/// String field, or `None` if absent or not a string.
pub fn str_field<'a>(entry: &'a Entry, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str)
}

/// Integer field, or `None` if absent or not integer-backed.
///
/// Strict: a float `2.0` or a string `"2"` both read as `None`.
pub fn int_field(entry: &Entry, key: &str) -> Option<i64> {
    entry.get(key).and_then(Value::as_i64)
}

/// Numeric field widened to `f64`, or `None` if absent, null, or
/// non-numeric. Accepts both integer and float representations.
pub fn number_field(entry: &Entry, key: &str) -> Option<f64> {
    entry.get(key).and_then(Value::as_f64)
}

/// Nested mapping field, or `None` if absent or not a mapping.
pub fn object_field<'a>(entry: &'a Entry, key: &str) -> Option<&'a Entry> {
    entry.get(key).and_then(Value::as_object)
}

/// Sequence field, or `None` if absent or not a sequence.
pub fn array_field<'a>(entry: &'a Entry, key: &str) -> Option<&'a [Value]> {
    entry.get(key).and_then(Value::as_array).map(Vec::as_slice)
}
