use agprint_types::{CompactTrigger, HookResponse, LifecycleNotification, SessionSource};
use owo_colors::OwoColorize;
use serde_json::Value;

use super::FormatOptions;
use super::text::{indent, truncate_with_marker};

pub const MAX_TOOL_RESPONSE_CHARS: usize = 500;
pub const MAX_PROMPT_CHARS: usize = 200;

/// Render a hook response whose event has a dedicated layout.
///
/// Returns `None` when the event is not a known lifecycle event; the caller
/// falls back to [`format_generic_hook`].
pub fn format_lifecycle(hook: &HookResponse, options: &FormatOptions) -> Option<String> {
    let notification = LifecycleNotification::from_hook(hook)?;
    Some(format_notification(&notification, options))
}

pub fn format_notification(
    notification: &LifecycleNotification<'_>,
    options: &FormatOptions,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    match notification {
        LifecycleNotification::PreToolUse {
            tool_name,
            cwd,
            tool_input,
        } => {
            lines.push(marker("🔧", &format!("PreToolUse: {}", tool_name), options));
            push_field(&mut lines, "Working directory", *cwd);
            if let Some(input) = tool_input {
                lines.push("  Input:".to_string());
                lines.push(indent(&pretty(input), "    "));
            }
        }
        LifecycleNotification::PostToolUse {
            tool_name,
            cwd,
            tool_response,
        } => {
            lines.push(marker("✅", &format!("PostToolUse: {}", tool_name), options));
            push_field(&mut lines, "Working directory", *cwd);
            if let Some(response) = tool_response {
                let text = match response {
                    Value::String(s) => s.clone(),
                    other => pretty(other),
                };
                lines.push("  Response:".to_string());
                lines.push(indent(
                    &truncate_with_marker(&text, MAX_TOOL_RESPONSE_CHARS),
                    "    ",
                ));
            }
        }
        LifecycleNotification::Notification { title, message } => {
            lines.push(marker("🔔", "Notification", options));
            push_field(&mut lines, "Title", *title);
            if !message.is_empty() {
                lines.push(message.to_string());
            }
        }
        LifecycleNotification::UserPromptSubmit { prompt } => {
            lines.push(marker("💬", "UserPromptSubmit", options));
            lines.push(format!(
                "  Prompt: {}",
                truncate_with_marker(prompt, MAX_PROMPT_CHARS)
            ));
        }
        LifecycleNotification::SessionStart {
            source,
            transcript_path,
            cwd,
            permission_mode,
        } => {
            let (icon, label) = match source {
                SessionSource::Startup => ("🚀", "SessionStart (startup)".to_string()),
                SessionSource::Resume => ("🔄", "SessionStart (resume)".to_string()),
                SessionSource::Clear => ("🧹", "SessionStart (clear)".to_string()),
                SessionSource::Compact => ("📦", "SessionStart (compact)".to_string()),
                SessionSource::Other("") => ("🟢", "SessionStart".to_string()),
                SessionSource::Other(other) => ("🟢", format!("SessionStart ({})", other)),
            };
            lines.push(marker(icon, &label, options));
            push_field(&mut lines, "Transcript", *transcript_path);
            push_field(&mut lines, "Working directory", *cwd);
            push_field(&mut lines, "Permission mode", *permission_mode);
        }
        LifecycleNotification::SessionEnd {
            reason,
            transcript_path,
            cwd,
        } => {
            lines.push(marker("🏁", "SessionEnd", options));
            push_field(&mut lines, "Reason", *reason);
            push_field(&mut lines, "Transcript", *transcript_path);
            push_field(&mut lines, "Working directory", *cwd);
        }
        LifecycleNotification::Stop { stop_hook_active } => {
            if *stop_hook_active {
                lines.push(marker("🔁", "Stop hook active: agent continuing", options));
            } else {
                lines.push(marker("🛑", "Agent stopped", options));
            }
        }
        LifecycleNotification::SubagentStop { stop_hook_active } => {
            if *stop_hook_active {
                lines.push(marker(
                    "🔁",
                    "SubagentStop hook active: subagent continuing",
                    options,
                ));
            } else {
                lines.push(marker("🤖", "Subagent stopped", options));
            }
        }
        LifecycleNotification::PreCompact {
            trigger,
            custom_instructions,
            transcript_path,
            cwd,
        } => {
            let (icon, label) = match trigger {
                CompactTrigger::Manual => ("✋", "PreCompact (manual)".to_string()),
                CompactTrigger::Auto => ("⚡", "PreCompact (auto)".to_string()),
                CompactTrigger::Other("") => ("📦", "PreCompact".to_string()),
                CompactTrigger::Other(other) => ("📦", format!("PreCompact ({})", other)),
            };
            lines.push(marker(icon, &label, options));
            match custom_instructions {
                Some(instructions) => {
                    lines.push("  Custom instructions:".to_string());
                    lines.push(indent(instructions, "    "));
                }
                None => lines.push(
                    options.paint("  No custom instructions", |s| s.dimmed().to_string()),
                ),
            }
            push_field(&mut lines, "Transcript", *transcript_path);
            push_field(&mut lines, "Working directory", *cwd);
        }
    }

    lines.join("\n")
}

/// Name, exit code, and raw output of any hook.
pub fn format_generic_hook(hook: &HookResponse, options: &FormatOptions) -> String {
    let label = match (hook.hook_name.as_deref(), hook.hook_event.as_deref()) {
        (Some(name), Some(event)) if !name.starts_with(event) => {
            format!("{} ({})", name, event)
        }
        (Some(name), _) => name.to_string(),
        (None, Some(event)) => event.to_string(),
        (None, None) => "unknown".to_string(),
    };

    let mut lines = vec![marker("🪝", &format!("Hook: {}", label), options)];

    if let Some(code) = hook.exit_code {
        let code_text = code.to_string();
        let painted = if code == 0 {
            options.paint(&code_text, |s| s.green().to_string())
        } else {
            options.paint(&code_text, |s| s.red().to_string())
        };
        lines.push(format!("  Exit code: {}", painted));
    }

    for (label, stream) in [("stdout", &hook.stdout), ("stderr", &hook.stderr)] {
        if let Some(text) = stream.as_deref().filter(|t| !t.trim().is_empty()) {
            lines.push(format!("  {}:", label));
            lines.push(indent(text.trim_end(), "    "));
        }
    }

    lines.join("\n")
}

fn marker(icon: &str, label: &str, options: &FormatOptions) -> String {
    format!(
        "{} {}",
        icon,
        options.paint(label, |s| s.bright_magenta().bold().to_string())
    )
}

fn push_field(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        lines.push(format!("  {}: {}", label, value));
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
