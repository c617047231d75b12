use agprint_types::EventRecord;
use owo_colors::OwoColorize;
use std::fmt;

use super::FormatOptions;
use super::assistant::{ASSISTANT_HEADER, format_assistant};
use super::frame::wrap_in_box;
use super::result::{RESULT_HEADER, format_run_summary};
use super::stream::format_stream_event;
use super::system::{format_system, system_header};
use super::user::{format_user, user_header};

pub const UNKNOWN_HEADER: &str = "❓ Unknown";

/// View for displaying a single EventRecord
pub struct RecordView<'a> {
    pub record: &'a EventRecord,
    pub options: &'a FormatOptions,
    /// Wrap non-empty output between rules with a header line
    pub boxed: bool,
}

impl<'a> RecordView<'a> {
    pub fn new(record: &'a EventRecord, options: &'a FormatOptions) -> Self {
        Self {
            record,
            options,
            boxed: true,
        }
    }

    pub fn boxed(mut self, boxed: bool) -> Self {
        self.boxed = boxed;
        self
    }
}

impl<'a> fmt::Display for RecordView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = self.options;

        let (header, content) = match self.record {
            EventRecord::Assistant(record) => (
                options.paint(ASSISTANT_HEADER, |s| s.cyan().bold().to_string()),
                format_assistant(&record.message, options),
            ),
            EventRecord::User(record) => (
                options.paint(user_header(record), |s| s.green().bold().to_string()),
                format_user(record, options),
            ),
            EventRecord::Result(summary) => (
                options.paint(RESULT_HEADER, |s| s.magenta().bold().to_string()),
                format_run_summary(summary, options),
            ),
            EventRecord::System(notice) => (
                options.paint(&system_header(notice), |s| s.yellow().bold().to_string()),
                format_system(notice, options),
            ),
            EventRecord::StreamEvent(record) => {
                return write!(f, "{}", format_stream_event(&record.event, options));
            }
            EventRecord::Unknown { kind } => (
                options.paint(UNKNOWN_HEADER, |s| s.red().bold().to_string()),
                options.paint(&format!("[Unknown message type: {}]", kind), |s| {
                    s.red().to_string()
                }),
            ),
        };

        if content.is_empty() || !self.boxed {
            return write!(f, "{}", content);
        }

        write!(f, "{}", wrap_in_box(&header, &content, options))
    }
}

/// Render one record; stream events are never boxed.
pub fn format_record(record: &EventRecord, boxed: bool, options: &FormatOptions) -> String {
    RecordView::new(record, options).boxed(boxed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> EventRecord {
        EventRecord::from_value(value).unwrap()
    }

    #[test]
    fn test_boxed_assistant() {
        let r = record(json!({
            "type": "assistant",
            "message": {"content": [{"type": "text", "text": "Done."}]}
        }));
        assert_eq!(
            format_record(&r, true, &FormatOptions::plain(5)),
            "─────\n🤖 Assistant\nDone.\n─────"
        );
        assert_eq!(format_record(&r, false, &FormatOptions::plain(5)), "Done.");
    }

    #[test]
    fn test_empty_content_skips_box() {
        let r = record(json!({"type": "user", "message": {"content": "hi"}, "isReplay": true}));
        assert_eq!(format_record(&r, true, &FormatOptions::plain(5)), "");
    }

    #[test]
    fn test_stream_event_ignores_box_flag() {
        let r = record(json!({
            "type": "stream_event",
            "event": {"type": "content_block_delta", "index": 0, "delta": {"type": "text_delta", "text": "abc"}}
        }));
        assert_eq!(format_record(&r, true, &FormatOptions::plain(5)), "abc");
    }

    #[test]
    fn test_unknown_kind() {
        let r = record(json!({"type": "telemetry"}));
        assert_eq!(
            format_record(&r, true, &FormatOptions::plain(3)),
            "───\n❓ Unknown\n[Unknown message type: telemetry]\n───"
        );
    }
}
