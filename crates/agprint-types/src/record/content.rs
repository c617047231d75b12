use serde::Deserialize;
use serde_json::Value;

use super::nullable;

/// `type: "assistant"` record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssistantRecord {
    pub message: AssistantMessage,

    #[serde(default)]
    pub session_id: Option<String>,

    #[serde(default)]
    pub uuid: Option<String>,

    /// Set when the turn belongs to a subagent spawned by a tool call
    #[serde(default)]
    pub parent_tool_use_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub content: Vec<AssistantBlock>,
}

/// Content block inside an assistant message
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssistantBlock {
    Text {
        text: String,
    },
    ToolUse {
        #[serde(default)]
        id: String,
        name: String,
        #[serde(default)]
        input: Value,
    },
    /// Reasoning block
    Thinking {
        #[serde(default)]
        thinking: String,
    },
    #[serde(other)]
    Other,
}

impl AssistantMessage {
    /// Concatenated reasoning text, if the turn carried any.
    pub fn reasoning(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .content
            .iter()
            .filter_map(|block| match block {
                AssistantBlock::Thinking { thinking } if !thinking.trim().is_empty() => {
                    Some(thinking.as_str())
                }
                _ => None,
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n\n"))
        }
    }
}

/// `type: "user"` record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    pub message: UserMessage,

    /// Replayed transcript history; already shown once
    #[serde(default, rename = "isReplay", alias = "is_replay", deserialize_with = "nullable")]
    pub is_replay: bool,

    /// Content injected by the runtime rather than typed by a person
    #[serde(
        default,
        rename = "isSynthetic",
        alias = "is_synthetic",
        deserialize_with = "nullable"
    )]
    pub is_synthetic: bool,

    #[serde(default)]
    pub session_id: Option<String>,

    #[serde(default)]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserMessage {
    #[serde(default, deserialize_with = "nullable")]
    pub content: UserContent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UserContent {
    Text(String),
    Blocks(Vec<UserBlock>),
}

impl Default for UserContent {
    fn default() -> Self {
        UserContent::Text(String::new())
    }
}

impl UserContent {
    pub fn has_tool_results(&self) -> bool {
        match self {
            UserContent::Text(_) => false,
            UserContent::Blocks(blocks) => blocks
                .iter()
                .any(|b| matches!(b, UserBlock::ToolResult { .. })),
        }
    }
}

/// Content block inside a user message
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserBlock {
    Text {
        text: String,
    },
    Image {
        #[serde(default)]
        source: Value,
    },
    ToolResult {
        #[serde(default)]
        tool_use_id: String,
        #[serde(default, deserialize_with = "nullable")]
        content: ToolResultContent,
        #[serde(default, deserialize_with = "nullable")]
        is_error: bool,
    },
    #[serde(other)]
    Other,
}

/// Payload of a tool result: plain text or nested blocks
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ToolResultContent {
    Text(String),
    Blocks(Vec<ToolResultBlock>),
}

impl Default for ToolResultContent {
    fn default() -> Self {
        ToolResultContent::Text(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolResultBlock {
    Text {
        text: String,
    },
    Image {
        #[serde(default)]
        source: Value,
    },
    #[serde(other)]
    Other,
}
