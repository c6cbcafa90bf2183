//! Report rendering.
//!
//! The report is an interactively-read diagnostic stream: fixed section
//! headers, one table name or row tuple per line. No machine-readable
//! output.

use serde_json::Value as JsonValue;

/// Render a section header line: `---- <title> ----`.
pub fn section(title: &str) -> String {
    format!("---- {} ----", title)
}

/// Render a single column value for display.
///
/// Strings are quoted so that empty strings and strings with embedded commas
/// survive visual inspection; NULL is spelled out the way SQLite shells do.
pub fn format_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "NULL".to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => serde_json::to_string(s).unwrap_or_else(|_| s.clone()),
        JsonValue::Array(arr) => serde_json::to_string(arr).unwrap_or_default(),
        JsonValue::Object(obj) => serde_json::to_string(obj).unwrap_or_default(),
    }
}

/// Render a row as a tuple: `(v1, v2, ...)`.
pub fn format_row(values: &[JsonValue]) -> String {
    let inner: Vec<String> = values.iter().map(format_value).collect();
    format!("({})", inner.join(", "))
}
