//! Compact single-line rendering of tool parameter values.
//!
//! Strings are quoted and capped, arrays show at most three items, and
//! objects collapse to compact JSON or a property count. Nesting depth is
//! unlimited; output size is bounded by these caps at every level.

use serde_json::{Map, Value};

use super::text::truncate;

pub const MAX_STRING_CHARS: usize = 100;
pub const MAX_ARRAY_ITEMS: usize = 3;
pub const MAX_INLINE_OBJECT_CHARS: usize = 80;

pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => format!("\"{}\"", truncate(s, MAX_STRING_CHARS)),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => format_array(items),
        Value::Object(map) => format_object(map),
    }
}

fn format_array(items: &[Value]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }

    let mut parts: Vec<String> = items
        .iter()
        .take(MAX_ARRAY_ITEMS)
        .map(format_value)
        .collect();

    if items.len() > MAX_ARRAY_ITEMS {
        parts.push(format!("+{} more", items.len() - MAX_ARRAY_ITEMS));
    }

    format!("[{}]", parts.join(", "))
}

fn format_object(map: &Map<String, Value>) -> String {
    if map.is_empty() {
        return "{}".to_string();
    }

    let mut entries = map.iter();
    if let (Some((key, value)), None) = (entries.next(), entries.next()) {
        return format!("{{ {}: {} }}", key, format_value(value));
    }

    match serde_json::to_string(map) {
        Ok(compact) if compact.chars().count() <= MAX_INLINE_OBJECT_CHARS => compact,
        _ => format!("{{ {} properties }}", map.len()),
    }
}
