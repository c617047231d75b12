use serde_json::Value;

use super::HookResponse;

/// Hook events with a dedicated payload shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    PreToolUse,
    PostToolUse,
    Notification,
    UserPromptSubmit,
    SessionStart,
    SessionEnd,
    Stop,
    SubagentStop,
    PreCompact,
}

impl HookEvent {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "PreToolUse" => Some(HookEvent::PreToolUse),
            "PostToolUse" => Some(HookEvent::PostToolUse),
            "Notification" => Some(HookEvent::Notification),
            "UserPromptSubmit" => Some(HookEvent::UserPromptSubmit),
            "SessionStart" => Some(HookEvent::SessionStart),
            "SessionEnd" => Some(HookEvent::SessionEnd),
            "Stop" => Some(HookEvent::Stop),
            "SubagentStop" => Some(HookEvent::SubagentStop),
            "PreCompact" => Some(HookEvent::PreCompact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HookEvent::PreToolUse => "PreToolUse",
            HookEvent::PostToolUse => "PostToolUse",
            HookEvent::Notification => "Notification",
            HookEvent::UserPromptSubmit => "UserPromptSubmit",
            HookEvent::SessionStart => "SessionStart",
            HookEvent::SessionEnd => "SessionEnd",
            HookEvent::Stop => "Stop",
            HookEvent::SubagentStop => "SubagentStop",
            HookEvent::PreCompact => "PreCompact",
        }
    }
}

/// What started the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource<'a> {
    Startup,
    Resume,
    Clear,
    Compact,
    Other(&'a str),
}

impl<'a> SessionSource<'a> {
    fn parse(source: &'a str) -> Self {
        match source {
            "startup" => SessionSource::Startup,
            "resume" => SessionSource::Resume,
            "clear" => SessionSource::Clear,
            "compact" => SessionSource::Compact,
            other => SessionSource::Other(other),
        }
    }
}

/// Why compaction ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactTrigger<'a> {
    Manual,
    Auto,
    Other(&'a str),
}

impl<'a> CompactTrigger<'a> {
    pub fn parse(trigger: &'a str) -> Self {
        match trigger {
            "manual" => CompactTrigger::Manual,
            "auto" => CompactTrigger::Auto,
            other => CompactTrigger::Other(other),
        }
    }
}

/// A hook response narrowed to the payload of its event.
///
/// Borrows from the [`HookResponse`] it was built from.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleNotification<'a> {
    PreToolUse {
        tool_name: &'a str,
        cwd: Option<&'a str>,
        tool_input: Option<&'a Value>,
    },
    PostToolUse {
        tool_name: &'a str,
        cwd: Option<&'a str>,
        tool_response: Option<&'a Value>,
    },
    Notification {
        title: Option<&'a str>,
        message: &'a str,
    },
    UserPromptSubmit {
        prompt: &'a str,
    },
    SessionStart {
        source: SessionSource<'a>,
        transcript_path: Option<&'a str>,
        cwd: Option<&'a str>,
        permission_mode: Option<&'a str>,
    },
    SessionEnd {
        reason: Option<&'a str>,
        transcript_path: Option<&'a str>,
        cwd: Option<&'a str>,
    },
    Stop {
        stop_hook_active: bool,
    },
    SubagentStop {
        stop_hook_active: bool,
    },
    PreCompact {
        trigger: CompactTrigger<'a>,
        custom_instructions: Option<&'a str>,
        transcript_path: Option<&'a str>,
        cwd: Option<&'a str>,
    },
}

impl<'a> LifecycleNotification<'a> {
    /// Narrow a hook response by its event name.
    ///
    /// Returns `None` when the event name is absent or not one of the
    /// known lifecycle events; callers fall back to a generic rendering.
    pub fn from_hook(hook: &'a HookResponse) -> Option<Self> {
        let event = HookEvent::from_name(hook.event_name()?)?;

        let tool_name = hook.tool_name.as_deref().unwrap_or("unknown");
        let cwd = hook.cwd.as_deref();
        let transcript_path = hook.transcript_path.as_deref();
        let stop_hook_active = hook.stop_hook_active.unwrap_or(false);

        let notification = match event {
            HookEvent::PreToolUse => LifecycleNotification::PreToolUse {
                tool_name,
                cwd,
                tool_input: hook.tool_input.as_ref(),
            },
            HookEvent::PostToolUse => LifecycleNotification::PostToolUse {
                tool_name,
                cwd,
                tool_response: hook.tool_response.as_ref(),
            },
            HookEvent::Notification => LifecycleNotification::Notification {
                title: hook.title.as_deref(),
                message: hook.message.as_deref().unwrap_or_default(),
            },
            HookEvent::UserPromptSubmit => LifecycleNotification::UserPromptSubmit {
                prompt: hook.prompt.as_deref().unwrap_or_default(),
            },
            HookEvent::SessionStart => LifecycleNotification::SessionStart {
                source: SessionSource::parse(hook.source.as_deref().unwrap_or_default()),
                transcript_path,
                cwd,
                permission_mode: hook.permission_mode.as_deref(),
            },
            HookEvent::SessionEnd => LifecycleNotification::SessionEnd {
                reason: hook.reason.as_deref(),
                transcript_path,
                cwd,
            },
            HookEvent::Stop => LifecycleNotification::Stop { stop_hook_active },
            HookEvent::SubagentStop => LifecycleNotification::SubagentStop { stop_hook_active },
            HookEvent::PreCompact => LifecycleNotification::PreCompact {
                trigger: CompactTrigger::parse(hook.trigger.as_deref().unwrap_or_default()),
                custom_instructions: hook
                    .custom_instructions
                    .as_deref()
                    .filter(|s| !s.trim().is_empty()),
                transcript_path,
                cwd,
            },
        };

        Some(notification)
    }

    pub fn event(&self) -> HookEvent {
        match self {
            LifecycleNotification::PreToolUse { .. } => HookEvent::PreToolUse,
            LifecycleNotification::PostToolUse { .. } => HookEvent::PostToolUse,
            LifecycleNotification::Notification { .. } => HookEvent::Notification,
            LifecycleNotification::UserPromptSubmit { .. } => HookEvent::UserPromptSubmit,
            LifecycleNotification::SessionStart { .. } => HookEvent::SessionStart,
            LifecycleNotification::SessionEnd { .. } => HookEvent::SessionEnd,
            LifecycleNotification::Stop { .. } => HookEvent::Stop,
            LifecycleNotification::SubagentStop { .. } => HookEvent::SubagentStop,
            LifecycleNotification::PreCompact { .. } => HookEvent::PreCompact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hook(value: Value) -> HookResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_unknown_event_is_not_handled() {
        let response = hook(json!({"hook_event": "FileChanged", "stdout": "ok"}));
        assert_eq!(LifecycleNotification::from_hook(&response), None);

        let nameless = hook(json!({"stdout": "ok"}));
        assert_eq!(LifecycleNotification::from_hook(&nameless), None);
    }

    #[test]
    fn test_pre_compact_blank_instructions_are_absent() {
        let response = hook(json!({
            "hook_event_name": "PreCompact",
            "trigger": "auto",
            "custom_instructions": "   "
        }));

        assert_eq!(
            LifecycleNotification::from_hook(&response),
            Some(LifecycleNotification::PreCompact {
                trigger: CompactTrigger::Auto,
                custom_instructions: None,
                transcript_path: None,
                cwd: None,
            })
        );
    }

    #[test]
    fn test_session_start_source() {
        let response = hook(json!({"hook_event": "SessionStart", "source": "resume"}));
        let notification = LifecycleNotification::from_hook(&response).unwrap();

        assert_eq!(notification.event(), HookEvent::SessionStart);
        assert!(matches!(
            notification,
            LifecycleNotification::SessionStart { source: SessionSource::Resume, .. }
        ));
    }

    #[test]
    fn test_event_names_round_trip() {
        for name in [
            "PreToolUse",
            "PostToolUse",
            "Notification",
            "UserPromptSubmit",
            "SessionStart",
            "SessionEnd",
            "Stop",
            "SubagentStop",
            "PreCompact",
        ] {
            assert_eq!(HookEvent::from_name(name).map(|e| e.as_str()), Some(name));
        }
    }
}
