//! End-to-end rendering of representative records through the public API.

use agprint::{FormatOptions, format_record, format_value};
use agprint_testing::assertions::{assert_box_count, assert_has_line, assert_no_ansi, assert_no_box};
use agprint_testing::fixtures::{self, record};
use agprint_types::parse_record;
use serde_json::json;

const WIDTH: usize = 40;

fn plain() -> FormatOptions {
    FormatOptions::plain(WIDTH)
}

#[test]
fn assistant_text_and_tool_use() {
    let r = record(json!({
        "type": "assistant",
        "message": {
            "content": [
                {"type": "text", "text": "Let me read that file for you."},
                {"type": "tool_use", "id": "toolu_01", "name": "Read", "input": {"file_path": "/path/to/file.ts"}}
            ]
        }
    }));

    let output = format_record(&r, true, &plain());

    assert_has_line(&output, "🤖 Assistant").unwrap();
    assert_has_line(&output, "Let me read that file for you.").unwrap();
    assert_has_line(&output, "→ Read").unwrap();
    assert_has_line(&output, r#"  file_path: "/path/to/file.ts""#).unwrap();
    assert_box_count(&output, WIDTH, 1).unwrap();
}

#[test]
fn run_summary_durations() {
    let mut value = fixtures::result_success();
    value["duration_api_ms"] = json!(3000);

    let output = format_record(&record(value), true, &plain());

    assert_has_line(&output, "✅ Completed successfully").unwrap();
    assert_has_line(&output, "  Duration: 5.00s").unwrap();
    assert_has_line(&output, "  API Time: 3.00s").unwrap();
    assert_has_line(&output, "  Input: 1,234").unwrap();
}

#[test]
fn run_summary_missing_fields_names_exactly_those() {
    let err = parse_record(
        r#"{"type":"result","subtype":"success","duration_ms":1,"usage":{},"uuid":"u"}"#,
    )
    .unwrap_err();

    assert_eq!(
        err.missing_fields(),
        &["duration_api_ms", "num_turns", "session_id"]
    );
}

#[test]
fn pre_compact_auto_without_instructions() {
    let r = record(fixtures::hook_response(
        "PreCompact",
        json!({"trigger": "auto", "custom_instructions": null}),
    ));

    let output = format_record(&r, true, &plain());

    assert_has_line(&output, "⚡ PreCompact (auto)").unwrap();
    assert_has_line(&output, "  No custom instructions").unwrap();
}

#[test]
fn post_tool_use_response_is_bounded() {
    let long = "x".repeat(600);
    let r = record(fixtures::hook_response(
        "PostToolUse",
        json!({"tool_name": "Bash", "tool_response": long}),
    ));

    let output = format_record(&r, false, &plain());

    assert!(output.contains("... [truncated]"));
    assert!(output.chars().count() < 600);
}

#[test]
fn replayed_user_turn_is_empty() {
    let mut value = fixtures::user_text("already seen");
    value["isReplay"] = json!(true);

    assert_eq!(format_record(&record(value), true, &plain()), "");
}

#[test]
fn tool_result_header_differs_from_plain_user() {
    let plain_turn = format_record(&record(fixtures::user_text("hi")), true, &plain());
    let results = format_record(
        &record(fixtures::user_tool_result("toolu_01", "ok", false)),
        true,
        &plain(),
    );

    assert_has_line(&plain_turn, "👤 User").unwrap();
    assert_has_line(&results, "👤 User · Tool Results").unwrap();
    assert_has_line(&results, "✓ Tool result (toolu_01)").unwrap();
}

#[test]
fn stream_events_are_never_boxed() {
    let delta = format_record(&record(fixtures::text_delta("partial")), true, &plain());
    assert_eq!(delta, "partial");
    assert_no_box(&delta).unwrap();

    assert_eq!(
        format_record(&record(fixtures::tool_use_start("Bash")), true, &plain()),
        "\n[Starting tool: Bash]\n"
    );
}

#[test]
fn rendering_is_deterministic() {
    let samples = [
        fixtures::assistant_text("hello"),
        fixtures::assistant_tool_use("Grep", json!({"pattern": "fn main", "path": "src"})),
        fixtures::user_text("hi"),
        fixtures::user_tool_result("toolu_01", "boom", true),
        fixtures::result_success(),
        fixtures::system_init(),
        fixtures::system_compact_boundary("manual", 155_000),
        fixtures::hook_response("Stop", json!({"stop_hook_active": false})),
        fixtures::hook_response("Mystery", json!({"stdout": "out"})),
        fixtures::text_delta("abc"),
        json!({"type": "telemetry"}),
    ];

    for value in samples {
        let r = record(value);
        let first = format_record(&r, true, &plain());
        let second = format_record(&r, true, &plain());
        assert_eq!(first, second);
        assert_no_ansi(&first).unwrap();
    }
}

#[test]
fn init_and_compact_boundary() {
    let init = format_record(&record(fixtures::system_init()), true, &plain());
    assert_has_line(&init, "⚙️ System (init)").unwrap();
    assert_has_line(&init, "🚀 Session initialized").unwrap();
    assert_has_line(&init, "Tools (2):").unwrap();

    let compact = format_record(
        &record(fixtures::system_compact_boundary("auto", 155_000)),
        true,
        &plain(),
    );
    assert_has_line(&compact, "📦 Conversation compacted").unwrap();
    assert!(compact.contains("155,000"));
}

#[test]
fn unknown_hook_event_falls_back_to_generic() {
    let r = record(fixtures::hook_response(
        "Mystery",
        json!({"stdout": "hello from hook", "exit_code": 2}),
    ));
    let output = format_record(&r, false, &plain());

    assert!(output.contains("Hook"));
    assert!(output.contains("Exit code: 2"));
    assert!(output.contains("hello from hook"));
}

#[test]
fn value_formatter_truncates_long_strings() {
    let long = "a".repeat(150);
    let formatted = format_value(&json!(long));

    assert_eq!(formatted.chars().count(), 102);
    assert!(formatted.ends_with("...\""));
    assert_eq!(format_value(&json!("short")), "\"short\"");
}
