//! Required-field checks for record kinds whose rendering depends on them.
//!
//! Only `result`, `assistant` and `user` are checked. Everything else passes
//! through and is handled by the formatter's fallbacks.

use serde_json::{Map, Value, json};

use crate::error::{Error, Result};

const RESULT_REQUIRED: &[&str] = &[
    "duration_ms",
    "duration_api_ms",
    "usage",
    "num_turns",
    "session_id",
    "uuid",
];

const MESSAGE_REQUIRED: &[&str] = &["message"];

/// Confirm the fields required by the record's `type` are present.
///
/// A field holding `null` counts as missing.
pub fn validate(value: &Value) -> Result<()> {
    let Some(object) = value.as_object() else {
        return Err(Error::NotAnObject(json_type_name(value)));
    };

    match object.get("type").and_then(Value::as_str) {
        Some("result") => require(object, "result", RESULT_REQUIRED),
        Some("assistant") => require(object, "assistant", MESSAGE_REQUIRED),
        Some("user") => require(object, "user", MESSAGE_REQUIRED),
        _ => Ok(()),
    }
}

fn require(object: &Map<String, Value>, kind: &'static str, required: &[&'static str]) -> Result<()> {
    let missing: Vec<&'static str> = required
        .iter()
        .copied()
        .filter(|field| object.get(*field).is_none_or(Value::is_null))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(Error::Validation {
        kind,
        missing,
        example: example_for(kind),
    })
}

/// Smallest payload that passes validation for `kind`, pretty-printed.
pub fn example_for(kind: &str) -> String {
    let example = match kind {
        "result" => json!({
            "type": "result",
            "subtype": "success",
            "duration_ms": 5000,
            "duration_api_ms": 3000,
            "num_turns": 1,
            "total_cost_usd": 0.0012,
            "usage": {"input_tokens": 100, "output_tokens": 50},
            "session_id": "session-123",
            "uuid": "b7e1c0de-0000-4000-8000-000000000000"
        }),
        "assistant" => json!({
            "type": "assistant",
            "message": {"content": [{"type": "text", "text": "Hello"}]}
        }),
        "user" => json!({
            "type": "user",
            "message": {"content": "Hello"}
        }),
        other => json!({"type": other}),
    };

    serde_json::to_string_pretty(&example).unwrap_or_default()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
