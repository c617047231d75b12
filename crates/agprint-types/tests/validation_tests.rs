use agprint_types::{Error, EventRecord, parse_record};
use serde_json::{Value, json};

const RESULT_FIELDS: [&str; 6] = [
    "duration_ms",
    "duration_api_ms",
    "usage",
    "num_turns",
    "session_id",
    "uuid",
];

fn complete_result() -> Value {
    json!({
        "type": "result",
        "subtype": "success",
        "duration_ms": 5000,
        "duration_api_ms": 3000,
        "num_turns": 4,
        "total_cost_usd": 0.0421,
        "usage": {"input_tokens": 1200, "output_tokens": 340},
        "session_id": "session-abc",
        "uuid": "uuid-1"
    })
}

#[test]
fn test_each_missing_result_field_is_named_alone() {
    for field in RESULT_FIELDS {
        let mut value = complete_result();
        value.as_object_mut().unwrap().remove(field);

        let err = EventRecord::from_value(value).unwrap_err();
        assert_eq!(err.missing_fields(), &[field], "removing {}", field);

        let text = err.to_string();
        assert!(text.contains(field), "{}", text);
        for other in RESULT_FIELDS.iter().filter(|f| **f != field) {
            assert!(
                !text
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .contains(other),
                "first line should not mention {}: {}",
                other,
                text
            );
        }
    }
}

#[test]
fn test_all_missing_result_fields_are_listed_in_order() {
    let err = parse_record(r#"{"type":"result","subtype":"success"}"#).unwrap_err();

    assert_eq!(err.missing_fields(), &RESULT_FIELDS);
    assert!(err.to_string().starts_with(
        "Invalid result message: missing required field(s): duration_ms, duration_api_ms, usage, num_turns, session_id, uuid"
    ));
}

#[test]
fn test_validation_error_carries_example() {
    let err = parse_record(r#"{"type":"user"}"#).unwrap_err();

    match &err {
        Error::Validation { kind, example, .. } => {
            assert_eq!(*kind, "user");
            let parsed: Value = serde_json::from_str(example).unwrap();
            assert_eq!(parsed["type"], "user");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(err.to_string().contains("Example of a valid user message:"));
}

#[test]
fn test_validation_runs_before_decoding() {
    // `usage` has the wrong shape, but the missing uuid is reported first.
    let mut value = complete_result();
    value["usage"] = json!("lots");
    value.as_object_mut().unwrap().remove("uuid");

    let err = EventRecord::from_value(value).unwrap_err();
    assert_eq!(err.missing_fields(), &["uuid"]);
}

#[test]
fn test_complete_result_decodes() -> anyhow::Result<()> {
    let record = EventRecord::from_value(complete_result())?;

    match record {
        EventRecord::Result(summary) => {
            assert_eq!(summary.duration_ms, 5000.0);
            assert_eq!(summary.num_turns, 4);
            assert_eq!(summary.usage.input_tokens, 1200);
            assert_eq!(summary.session_id, "session-abc");
        }
        other => anyhow::bail!("expected result record, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_system_and_stream_records_are_not_validated() {
    assert!(parse_record(r#"{"type":"system"}"#).is_ok());
    assert!(parse_record(r#"{"type":"stream_event"}"#).is_ok());
}
