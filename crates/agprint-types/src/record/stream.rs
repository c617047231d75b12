use serde::Deserialize;
use serde_json::Value;

/// `type: "stream_event"` record wrapping one raw streaming sub-event
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StreamRecord {
    #[serde(default)]
    pub event: StreamEvent,

    #[serde(default)]
    pub session_id: Option<String>,

    #[serde(default)]
    pub parent_tool_use_id: Option<String>,

    #[serde(default)]
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    MessageStart {
        #[serde(default)]
        message: Value,
    },
    ContentBlockStart {
        #[serde(default)]
        index: u64,
        content_block: StreamContentBlock,
    },
    ContentBlockDelta {
        #[serde(default)]
        index: u64,
        delta: ContentDelta,
    },
    ContentBlockStop {
        #[serde(default)]
        index: u64,
    },
    MessageDelta {
        #[serde(default)]
        delta: Value,
        #[serde(default)]
        usage: Value,
    },
    MessageStop,
    #[default]
    #[serde(other)]
    Other,
}

/// Block announced by `content_block_start`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    ToolUse {
        #[serde(default)]
        id: String,
        name: String,
        #[serde(default)]
        input: Value,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentDelta {
    TextDelta { text: String },
    InputJsonDelta { partial_json: String },
    #[serde(other)]
    Other,
}
