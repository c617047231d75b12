use agprint_types::{ToolResultBlock, ToolResultContent, UserBlock, UserContent, UserRecord};
use owo_colors::OwoColorize;

use super::FormatOptions;

pub const USER_HEADER: &str = "👤 User";
pub const TOOL_RESULTS_HEADER: &str = "👤 User · Tool Results";

pub const SYNTHETIC_MARKER: &str = "[Synthetic]";
pub const IMAGE_MARKER: &str = "[Image]";
pub const TOOL_ERROR_TRAILER: &str = "[error]";

pub fn user_header(record: &UserRecord) -> &'static str {
    if record.message.content.has_tool_results() {
        TOOL_RESULTS_HEADER
    } else {
        USER_HEADER
    }
}

/// Replayed turns render as nothing so callers never print them twice.
pub fn format_user(record: &UserRecord, options: &FormatOptions) -> String {
    if record.is_replay {
        return String::new();
    }

    let body = match &record.message.content {
        UserContent::Text(text) => text.clone(),
        UserContent::Blocks(blocks) => blocks
            .iter()
            .filter_map(|block| format_user_block(block, options))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    if !record.is_synthetic {
        return body;
    }

    let marker = options.paint(SYNTHETIC_MARKER, |s| s.bright_black().to_string());
    if body.is_empty() {
        marker
    } else {
        format!("{}\n{}", marker, body)
    }
}

fn format_user_block(block: &UserBlock, options: &FormatOptions) -> Option<String> {
    match block {
        UserBlock::Text { text } => Some(text.clone()),
        UserBlock::Image { .. } => Some(image_marker(options)),
        UserBlock::ToolResult {
            tool_use_id,
            content,
            is_error,
        } => Some(format_tool_result(tool_use_id, content, *is_error, options)),
        UserBlock::Other => None,
    }
}

fn format_tool_result(
    tool_use_id: &str,
    content: &ToolResultContent,
    is_error: bool,
    options: &FormatOptions,
) -> String {
    let id_suffix = if tool_use_id.is_empty() {
        String::new()
    } else {
        format!(" ({})", tool_use_id)
    };

    let mut lines = vec![if is_error {
        options.paint(&format!("✗ Tool error{}", id_suffix), |s| {
            s.red().bold().to_string()
        })
    } else {
        options.paint(&format!("✓ Tool result{}", id_suffix), |s| {
            s.green().bold().to_string()
        })
    }];

    match content {
        ToolResultContent::Text(text) => {
            if !text.is_empty() {
                lines.push(text.clone());
            }
        }
        ToolResultContent::Blocks(blocks) => {
            for block in blocks {
                match block {
                    ToolResultBlock::Text { text } => lines.push(text.clone()),
                    ToolResultBlock::Image { .. } => lines.push(image_marker(options)),
                    ToolResultBlock::Other => {}
                }
            }
        }
    }

    if is_error {
        lines.push(options.paint(TOOL_ERROR_TRAILER, |s| s.red().to_string()));
    }

    lines.join("\n")
}

fn image_marker(options: &FormatOptions) -> String {
    options.paint(IMAGE_MARKER, |s| s.magenta().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn record(value: Value) -> UserRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_plain_text() {
        let r = record(json!({"message": {"content": "Fix the build"}}));
        assert_eq!(format_user(&r, &FormatOptions::plain(40)), "Fix the build");
        assert_eq!(user_header(&r), USER_HEADER);
    }

    #[test]
    fn test_replay_is_empty() {
        let r = record(json!({"message": {"content": "again"}, "isReplay": true}));
        assert_eq!(format_user(&r, &FormatOptions::plain(40)), "");
    }

    #[test]
    fn test_tool_results() {
        let r = record(json!({"message": {"content": [
            {"type": "tool_result", "tool_use_id": "toolu_1", "content": "file contents"},
            {"type": "tool_result", "tool_use_id": "toolu_2", "content": [
                {"type": "text", "text": "permission denied"},
                {"type": "image", "source": {}}
            ], "is_error": true}
        ]}}));

        assert_eq!(user_header(&r), TOOL_RESULTS_HEADER);
        assert_eq!(
            format_user(&r, &FormatOptions::plain(40)),
            "✓ Tool result (toolu_1)\nfile contents\n✗ Tool error (toolu_2)\npermission denied\n[Image]\n[error]"
        );
    }

    #[test]
    fn test_synthetic_prefix() {
        let r = record(json!({
            "message": {"content": [{"type": "text", "text": "Continue."}, {"type": "image", "source": {}}]},
            "isSynthetic": true
        }));
        assert_eq!(
            format_user(&r, &FormatOptions::plain(40)),
            "[Synthetic]\nContinue.\n[Image]"
        );
    }
}
