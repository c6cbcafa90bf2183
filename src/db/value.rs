//! Row value decoding.
//!
//! Rows are opaque to the inspector: each column is decoded into a
//! `serde_json::Value` for display only, never interpreted. SQLite columns
//! are dynamically typed, so decoding goes by the column's reported type
//! name with a permissive fallback chain for expression columns.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::Value as JsonValue;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo};

/// Decode all columns of a row, in column order.
pub fn decode_row(row: &SqliteRow) -> Vec<JsonValue> {
    row.columns()
        .iter()
        .enumerate()
        .map(|(idx, col)| decode_column(row, idx, col.type_info().name()))
        .collect()
}

/// Render blob bytes as UTF-8 text when valid, base64 otherwise.
pub fn render_blob(bytes: &[u8]) -> JsonValue {
    match std::str::from_utf8(bytes) {
        Ok(s) => JsonValue::String(s.to_string()),
        Err(_) => JsonValue::String(STANDARD.encode(bytes)),
    }
}

fn decode_column(row: &SqliteRow, idx: usize, type_name: &str) -> JsonValue {
    let lower = type_name.to_lowercase();

    if lower.contains("int") {
        return decode_integer(row, idx);
    }
    if lower.contains("real")
        || lower.contains("float")
        || lower.contains("double")
        || lower.contains("numeric")
        || lower.contains("decimal")
    {
        return decode_float(row, idx);
    }
    if lower.contains("bool") {
        return decode_boolean(row, idx);
    }
    if lower.contains("blob") || lower.contains("binary") {
        return decode_binary(row, idx);
    }
    if lower == "null" {
        return JsonValue::Null;
    }
    decode_text(row, idx)
}

fn decode_integer(row: &SqliteRow, idx: usize) -> JsonValue {
    row.try_get::<Option<i64>, _>(idx)
        .ok()
        .flatten()
        .map(|v| JsonValue::Number(v.into()))
        .unwrap_or(JsonValue::Null)
}

fn decode_float(row: &SqliteRow, idx: usize) -> JsonValue {
    if let Ok(Some(v)) = row.try_get::<Option<f64>, _>(idx) {
        return serde_json::Number::from_f64(v)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(v.to_string()));
    }
    JsonValue::Null
}

fn decode_boolean(row: &SqliteRow, idx: usize) -> JsonValue {
    row.try_get::<Option<bool>, _>(idx)
        .ok()
        .flatten()
        .map(JsonValue::Bool)
        .unwrap_or(JsonValue::Null)
}

fn decode_binary(row: &SqliteRow, idx: usize) -> JsonValue {
    row.try_get::<Option<Vec<u8>>, _>(idx)
        .ok()
        .flatten()
        .map(|v| render_blob(&v))
        .unwrap_or(JsonValue::Null)
}

fn decode_text(row: &SqliteRow, idx: usize) -> JsonValue {
    // TEXT-affinity columns, plus anything with an unrecognized declared
    // type. Fall through the storage classes before giving up.
    if let Ok(Some(v)) = row.try_get::<Option<String>, _>(idx) {
        return JsonValue::String(v);
    }
    if let Ok(Some(v)) = row.try_get::<Option<i64>, _>(idx) {
        return JsonValue::Number(v.into());
    }
    if let Ok(Some(v)) = row.try_get::<Option<f64>, _>(idx) {
        if let Some(n) = serde_json::Number::from_f64(v) {
            return JsonValue::Number(n);
        }
    }
    if let Ok(Some(v)) = row.try_get::<Option<Vec<u8>>, _>(idx) {
        return render_blob(&v);
    }
    JsonValue::Null
}
