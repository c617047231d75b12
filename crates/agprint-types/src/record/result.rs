use serde::Deserialize;
use serde_json::Value;
use super::{nullable, ordered_entries};

/// `type: "result"` record emitted once at the end of a run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunSummary {
    #[serde(default, deserialize_with = "nullable")]
    pub subtype: String,

    pub duration_ms: f64,
    pub duration_api_ms: f64,
    pub num_turns: u64,

    #[serde(default, deserialize_with = "nullable")]
    pub total_cost_usd: f64,

    pub usage: TokenUsage,

    #[serde(
        default,
        rename = "modelUsage",
        alias = "model_usage",
        deserialize_with = "ordered_entries"
    )]
    pub model_usage: Vec<(String, ModelUsage)>,

    #[serde(default, deserialize_with = "nullable")]
    pub permission_denials: Vec<PermissionDenial>,

    pub session_id: String,
    pub uuid: String,

    /// Final answer text, when the run produced one
    #[serde(default)]
    pub result: Option<String>,
}

/// How the run ended, derived from `subtype`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus<'a> {
    Success,
    MaxTurns,
    ExecutionError,
    Other(&'a str),
}

impl RunSummary {
    pub fn status(&self) -> CompletionStatus<'_> {
        match self.subtype.as_str() {
            "success" => CompletionStatus::Success,
            "error_max_turns" => CompletionStatus::MaxTurns,
            "error_during_execution" => CompletionStatus::ExecutionError,
            other => CompletionStatus::Other(other),
        }
    }
}

/// Aggregate token counters for the run
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenUsage {
    #[serde(default, deserialize_with = "nullable")]
    pub input_tokens: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub output_tokens: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub cache_read_input_tokens: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub cache_creation_input_tokens: u64,
}

/// Per-model counters, keyed by model name in `modelUsage`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelUsage {
    #[serde(default, deserialize_with = "nullable")]
    pub input_tokens: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub output_tokens: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub cache_read_input_tokens: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub cache_creation_input_tokens: u64,
    #[serde(default, rename = "costUSD", deserialize_with = "nullable")]
    pub cost_usd: f64,
}

/// A tool call the permission layer refused
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PermissionDenial {
    pub tool_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tool_use_id: String,
    #[serde(default)]
    pub tool_input: Value,
}
