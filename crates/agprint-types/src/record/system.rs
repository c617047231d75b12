use serde::Deserialize;
use serde_json::Value;

use super::{decode, nullable};
use crate::error::Result;

/// `type: "system"` record, discriminated again by `subtype`
#[derive(Debug, Clone, PartialEq)]
pub enum SystemNotice {
    Init(InitInfo),
    CompactBoundary(CompactBoundary),
    HookResponse(HookResponse),
    Other { subtype: String },
}

impl SystemNotice {
    pub(crate) fn from_value(value: Value) -> Result<Self> {
        let subtype = value
            .get("subtype")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        match subtype.as_str() {
            "init" => decode("system", value).map(SystemNotice::Init),
            "compact_boundary" => decode("system", value).map(SystemNotice::CompactBoundary),
            "hook_response" => decode("system", value).map(SystemNotice::HookResponse),
            _ => Ok(SystemNotice::Other { subtype }),
        }
    }

    pub fn subtype(&self) -> &str {
        match self {
            SystemNotice::Init(_) => "init",
            SystemNotice::CompactBoundary(_) => "compact_boundary",
            SystemNotice::HookResponse(_) => "hook_response",
            SystemNotice::Other { subtype } => subtype,
        }
    }
}

/// Session start-up details
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InitInfo {
    #[serde(default)]
    pub claude_code_version: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default, rename = "permissionMode", alias = "permission_mode")]
    pub permission_mode: Option<String>,
    #[serde(default, rename = "apiKeySource", alias = "api_key_source")]
    pub api_key_source: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub output_style: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub tools: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub mcp_servers: Vec<McpServer>,
    #[serde(default, deserialize_with = "nullable")]
    pub slash_commands: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub agents: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct McpServer {
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
}

impl McpServer {
    pub fn is_connected(&self) -> bool {
        self.status == "connected"
    }
}

/// Marker emitted when the conversation history was compacted
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompactBoundary {
    #[serde(default, deserialize_with = "nullable")]
    pub compact_metadata: CompactMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompactMetadata {
    #[serde(default, deserialize_with = "nullable")]
    pub trigger: String,
    #[serde(default, deserialize_with = "nullable")]
    pub pre_tokens: u64,
}

/// Output of an external hook callback, plus the hook's input payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HookResponse {
    /// e.g. `PreToolUse:Bash`
    #[serde(default)]
    pub hook_name: Option<String>,
    #[serde(default, alias = "hook_event_name")]
    pub hook_event: Option<String>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub exit_code: Option<i64>,

    #[serde(default)]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub tool_input: Option<Value>,
    #[serde(default)]
    pub tool_response: Option<Value>,
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default)]
    pub transcript_path: Option<String>,
    #[serde(default)]
    pub permission_mode: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub stop_hook_active: Option<bool>,
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub custom_instructions: Option<String>,
}

impl HookResponse {
    /// Hook event name, falling back to the prefix of `hook_name`.
    pub fn event_name(&self) -> Option<&str> {
        self.hook_event.as_deref().or_else(|| {
            self.hook_name
                .as_deref()
                .and_then(|name| name.split(':').next())
                .filter(|prefix| !prefix.is_empty())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subtype_dispatch() {
        let init = SystemNotice::from_value(json!({
            "type": "system",
            "subtype": "init",
            "model": "claude-sonnet-4-5",
            "permissionMode": "default",
            "mcp_servers": [{"name": "github", "status": "connected"}]
        }))
        .unwrap();

        match init {
            SystemNotice::Init(info) => {
                assert_eq!(info.model.as_deref(), Some("claude-sonnet-4-5"));
                assert_eq!(info.permission_mode.as_deref(), Some("default"));
                assert!(info.mcp_servers[0].is_connected());
            }
            other => panic!("expected init, got {:?}", other),
        }

        let other = SystemNotice::from_value(json!({"type": "system", "subtype": "status"})).unwrap();
        assert_eq!(other.subtype(), "status");
    }

    #[test]
    fn test_event_name_from_hook_name() {
        let hook = HookResponse {
            hook_name: Some("PostToolUse:Write".to_string()),
            ..Default::default()
        };
        assert_eq!(hook.event_name(), Some("PostToolUse"));

        let explicit = HookResponse {
            hook_name: Some("PostToolUse:Write".to_string()),
            hook_event: Some("Stop".to_string()),
            ..Default::default()
        };
        assert_eq!(explicit.event_name(), Some("Stop"));
    }

    #[test]
    fn test_compact_boundary_metadata() {
        let notice = SystemNotice::from_value(json!({
            "type": "system",
            "subtype": "compact_boundary",
            "compact_metadata": {"trigger": "manual", "pre_tokens": 155000}
        }))
        .unwrap();

        assert_eq!(
            notice,
            SystemNotice::CompactBoundary(CompactBoundary {
                compact_metadata: CompactMetadata {
                    trigger: "manual".to_string(),
                    pre_tokens: 155000,
                }
            })
        );
    }
}
