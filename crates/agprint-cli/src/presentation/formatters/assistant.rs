use agprint_types::{AssistantBlock, AssistantMessage};
use owo_colors::OwoColorize;
use serde_json::Value;

use super::FormatOptions;
use super::value::format_value;

pub const ASSISTANT_HEADER: &str = "🤖 Assistant";

/// Text blocks verbatim, each tool use as an arrow line with its
/// parameters, reasoning appended last.
pub fn format_assistant(message: &AssistantMessage, options: &FormatOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    for block in &message.content {
        match block {
            AssistantBlock::Text { text } => {
                if !text.is_empty() {
                    lines.push(text.clone());
                }
            }
            AssistantBlock::ToolUse { name, input, .. } => {
                lines.extend(format_tool_use(name, input, options));
            }
            AssistantBlock::Thinking { .. } | AssistantBlock::Other => {}
        }
    }

    if let Some(reasoning) = message.reasoning() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(options.paint("[Thinking]", |s| s.dimmed().to_string()));
        lines.push(options.paint(&reasoning, |s| s.dimmed().italic().to_string()));
    }

    lines.join("\n")
}

fn format_tool_use(name: &str, input: &Value, options: &FormatOptions) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}",
        options.paint("→", |s| s.cyan().to_string()),
        options.paint(name, |s| s.cyan().bold().to_string())
    )];

    match input {
        Value::Object(params) => {
            for (key, value) in params {
                lines.push(format!(
                    "  {}: {}",
                    options.paint(key, |s| s.bright_black().to_string()),
                    format_value(value)
                ));
            }
        }
        Value::Null => {}
        other => lines.push(format!("  input: {}", format_value(other))),
    }

    lines
}
