use agprint_types::{ContentDelta, StreamContentBlock, StreamEvent};
use owo_colors::OwoColorize;

use super::FormatOptions;

/// Inline text for one streaming sub-event. Never boxed.
///
/// Only tool-use block starts and text / partial-JSON deltas produce output.
pub fn format_stream_event(event: &StreamEvent, options: &FormatOptions) -> String {
    match event {
        StreamEvent::ContentBlockStart {
            content_block: StreamContentBlock::ToolUse { name, .. },
            ..
        } => {
            let marker = format!("[Starting tool: {}]", name);
            format!("\n{}\n", options.paint(&marker, |s| s.dimmed().to_string()))
        }
        StreamEvent::ContentBlockDelta { delta, .. } => match delta {
            ContentDelta::TextDelta { text } => text.clone(),
            ContentDelta::InputJsonDelta { partial_json } => partial_json.clone(),
            ContentDelta::Other => String::new(),
        },
        _ => String::new(),
    }
}
