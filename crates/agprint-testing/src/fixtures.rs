//! Sample records as `serde_json::Value`.
//!
//! Every builder produces a record that passes validation so tests can
//! start from a known-good shape and remove or tweak fields.

use agprint_types::EventRecord;
use serde_json::{Value, json};

pub const SESSION_ID: &str = "sess-0001";

pub fn assistant_text(text: &str) -> Value {
    json!({
        "type": "assistant",
        "message": {
            "id": "msg_01",
            "model": "claude-sonnet-4-5",
            "content": [{"type": "text", "text": text}]
        },
        "session_id": SESSION_ID,
        "uuid": "a-1"
    })
}

pub fn assistant_tool_use(name: &str, input: Value) -> Value {
    json!({
        "type": "assistant",
        "message": {
            "content": [{"type": "tool_use", "id": "toolu_01", "name": name, "input": input}]
        },
        "session_id": SESSION_ID
    })
}

pub fn user_text(text: &str) -> Value {
    json!({
        "type": "user",
        "message": {"role": "user", "content": text},
        "session_id": SESSION_ID
    })
}

pub fn user_tool_result(tool_use_id: &str, content: &str, is_error: bool) -> Value {
    json!({
        "type": "user",
        "message": {
            "role": "user",
            "content": [{
                "type": "tool_result",
                "tool_use_id": tool_use_id,
                "content": content,
                "is_error": is_error
            }]
        },
        "session_id": SESSION_ID
    })
}

pub fn result_success() -> Value {
    json!({
        "type": "result",
        "subtype": "success",
        "duration_ms": 5000,
        "duration_api_ms": 4200,
        "num_turns": 3,
        "total_cost_usd": 0.0421,
        "usage": {"input_tokens": 1234, "output_tokens": 567},
        "session_id": SESSION_ID,
        "uuid": "r-1",
        "is_error": false,
        "result": "Done."
    })
}

pub fn system_init() -> Value {
    json!({
        "type": "system",
        "subtype": "init",
        "claude_code_version": "2.0.0",
        "model": "claude-sonnet-4-5",
        "cwd": "/work/project",
        "permissionMode": "default",
        "apiKeySource": "none",
        "tools": ["Bash", "Read"],
        "mcp_servers": [{"name": "docs", "status": "connected"}],
        "session_id": SESSION_ID
    })
}

pub fn system_compact_boundary(trigger: &str, pre_tokens: u64) -> Value {
    json!({
        "type": "system",
        "subtype": "compact_boundary",
        "compact_metadata": {"trigger": trigger, "pre_tokens": pre_tokens},
        "session_id": SESSION_ID
    })
}

/// A hook-response notice; `payload` fields are merged into the record.
pub fn hook_response(event: &str, payload: Value) -> Value {
    let mut record = json!({
        "type": "system",
        "subtype": "hook_response",
        "hook_name": format!("{}:test", event),
        "hook_event": event,
        "stdout": "",
        "stderr": "",
        "exit_code": 0,
        "session_id": SESSION_ID
    });

    if let (Some(target), Value::Object(extra)) = (record.as_object_mut(), payload) {
        target.extend(extra);
    }
    record
}

pub fn text_delta(text: &str) -> Value {
    json!({
        "type": "stream_event",
        "event": {
            "type": "content_block_delta",
            "index": 0,
            "delta": {"type": "text_delta", "text": text}
        },
        "session_id": SESSION_ID
    })
}

pub fn tool_use_start(name: &str) -> Value {
    json!({
        "type": "stream_event",
        "event": {
            "type": "content_block_start",
            "index": 1,
            "content_block": {"type": "tool_use", "id": "toolu_02", "name": name, "input": {}}
        },
        "session_id": SESSION_ID
    })
}

/// Serialize records as JSON Lines with a trailing newline.
pub fn to_jsonl(records: &[Value]) -> String {
    records.iter().map(|r| format!("{}\n", r)).collect()
}

/// Validate and decode a fixture, panicking with the decode error.
pub fn record(value: Value) -> EventRecord {
    EventRecord::from_value(value).unwrap_or_else(|e| panic!("fixture failed to decode: {}", e))
}
