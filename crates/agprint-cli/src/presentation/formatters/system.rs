use agprint_types::{CompactBoundary, InitInfo, SystemNotice};
use owo_colors::OwoColorize;

use super::FormatOptions;
use super::hook::{format_generic_hook, format_lifecycle};
use super::number::format_grouped;

pub const UNKNOWN_SUBTYPE_LINE: &str = "[Unknown system message subtype]";

pub fn system_header(notice: &SystemNotice) -> String {
    match notice.subtype() {
        "" => "⚙️ System".to_string(),
        subtype => format!("⚙️ System ({})", subtype),
    }
}

pub fn format_system(notice: &SystemNotice, options: &FormatOptions) -> String {
    match notice {
        SystemNotice::Init(info) => format_init(info, options),
        SystemNotice::CompactBoundary(boundary) => format_compact_boundary(boundary, options),
        SystemNotice::HookResponse(hook) => format_lifecycle(hook, options)
            .unwrap_or_else(|| format_generic_hook(hook, options)),
        SystemNotice::Other { .. } => {
            options.paint(UNKNOWN_SUBTYPE_LINE, |s| s.yellow().to_string())
        }
    }
}

fn format_init(info: &InitInfo, options: &FormatOptions) -> String {
    let mut lines = vec![options.paint("🚀 Session initialized", |s| {
        s.green().bold().to_string()
    })];

    let fields = [
        ("Version", &info.claude_code_version),
        ("Model", &info.model),
        ("Working Directory", &info.cwd),
        ("Permission Mode", &info.permission_mode),
        ("API Key Source", &info.api_key_source),
        ("Output Style", &info.output_style),
        ("Session", &info.session_id),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            lines.push(format!("  {}: {}", label, value));
        }
    }

    if !info.tools.is_empty() {
        push_section(&mut lines, "Tools", info.tools.len(), options);
        lines.push(format!("  {}", info.tools.join(", ")));
    }

    if !info.mcp_servers.is_empty() {
        push_section(&mut lines, "MCP Servers", info.mcp_servers.len(), options);
        for server in &info.mcp_servers {
            let status = if server.is_connected() {
                options.paint("✓", |s| s.green().to_string())
            } else {
                options.paint("✗", |s| s.red().to_string())
            };
            lines.push(format!("  {} {} ({})", status, server.name, server.status));
        }
    }

    if !info.slash_commands.is_empty() {
        push_section(&mut lines, "Slash Commands", info.slash_commands.len(), options);
        let commands: Vec<String> = info
            .slash_commands
            .iter()
            .map(|c| {
                if c.starts_with('/') {
                    c.clone()
                } else {
                    format!("/{}", c)
                }
            })
            .collect();
        lines.push(format!("  {}", commands.join(", ")));
    }

    if !info.agents.is_empty() {
        push_section(&mut lines, "Agents", info.agents.len(), options);
        lines.push(format!("  {}", info.agents.join(", ")));
    }

    if !info.skills.is_empty() {
        push_section(&mut lines, "Skills", info.skills.len(), options);
        lines.push(format!("  {}", info.skills.join(", ")));
    }

    lines.join("\n")
}

fn format_compact_boundary(boundary: &CompactBoundary, options: &FormatOptions) -> String {
    let meta = &boundary.compact_metadata;
    let trigger = if meta.trigger.is_empty() {
        "unknown"
    } else {
        meta.trigger.as_str()
    };

    [
        options.paint("📦 Conversation compacted", |s| s.cyan().bold().to_string()),
        format!("  Trigger: {}", trigger),
        format!("  Pre-compaction tokens: {}", format_grouped(meta.pre_tokens)),
    ]
    .join("\n")
}

fn push_section(lines: &mut Vec<String>, title: &str, count: usize, options: &FormatOptions) {
    lines.push(String::new());
    lines.push(options.paint(&format!("{} ({}):", title, count), |s| {
        s.bold().to_string()
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use agprint_types::EventRecord;
    use serde_json::{Value, json};

    fn notice(value: Value) -> SystemNotice {
        match EventRecord::from_value(value).unwrap() {
            EventRecord::System(notice) => notice,
            other => panic!("expected system record, got {:?}", other),
        }
    }

    #[test]
    fn test_init_fields_and_sections() {
        let n = notice(json!({
            "type": "system",
            "subtype": "init",
            "claude_code_version": "2.0.14",
            "model": "claude-sonnet-4-5",
            "cwd": "/work",
            "permissionMode": "acceptEdits",
            "apiKeySource": "none",
            "tools": ["Read", "Write"],
            "mcp_servers": [{"name": "github", "status": "connected"}, {"name": "jira", "status": "failed"}],
            "slash_commands": ["compact", "/review"],
            "agents": [],
            "skills": ["pdf"]
        }));

        assert_eq!(system_header(&n), "⚙️ System (init)");
        assert_eq!(
            format_system(&n, &FormatOptions::plain(40)),
            "🚀 Session initialized\n\
             \x20 Version: 2.0.14\n\
             \x20 Model: claude-sonnet-4-5\n\
             \x20 Working Directory: /work\n\
             \x20 Permission Mode: acceptEdits\n\
             \x20 API Key Source: none\n\
             \n\
             Tools (2):\n\
             \x20 Read, Write\n\
             \n\
             MCP Servers (2):\n\
             \x20 ✓ github (connected)\n\
             \x20 ✗ jira (failed)\n\
             \n\
             Slash Commands (2):\n\
             \x20 /compact, /review\n\
             \n\
             Skills (1):\n\
             \x20 pdf"
        );
    }

    #[test]
    fn test_compact_boundary() {
        let n = notice(json!({
            "type": "system",
            "subtype": "compact_boundary",
            "compact_metadata": {"trigger": "auto", "pre_tokens": 155000}
        }));
        assert_eq!(
            format_system(&n, &FormatOptions::plain(40)),
            "📦 Conversation compacted\n  Trigger: auto\n  Pre-compaction tokens: 155,000"
        );
    }

    #[test]
    fn test_hook_response_falls_back_to_generic() {
        let n = notice(json!({
            "type": "system",
            "subtype": "hook_response",
            "hook_name": "FileChanged:src",
            "stdout": "ok"
        }));
        assert_eq!(
            format_system(&n, &FormatOptions::plain(40)),
            "🪝 Hook: FileChanged:src\n  stdout:\n    ok"
        );
    }

    #[test]
    fn test_unknown_subtype() {
        let n = notice(json!({"type": "system", "subtype": "status"}));
        assert_eq!(format_system(&n, &FormatOptions::plain(40)), UNKNOWN_SUBTYPE_LINE);
    }
}
