//! Hook event types
//!
//! The host agent names the lifecycle point that fired the hook. The curator
//! only answers `UserPromptSubmit`, but recognizes the others so it can
//! ignore them cleanly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CuratorError;

/// Hook events a host can deliver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookEvent {
    /// User submits a prompt
    #[default]
    UserPromptSubmit,
    /// Before tool execution
    PreToolUse,
    /// After successful tool execution
    PostToolUse,
    /// Session starts
    SessionStart,
    /// Agent is stopping
    Stop,
    /// Notification event
    Notification,
}

impl HookEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookEvent::UserPromptSubmit => "UserPromptSubmit",
            HookEvent::PreToolUse => "PreToolUse",
            HookEvent::PostToolUse => "PostToolUse",
            HookEvent::SessionStart => "SessionStart",
            HookEvent::Stop => "Stop",
            HookEvent::Notification => "Notification",
        }
    }

    /// Get a human-readable description of this event
    pub fn description(&self) -> &'static str {
        match self {
            HookEvent::UserPromptSubmit => "User submits a prompt",
            HookEvent::PreToolUse => "Before tool execution",
            HookEvent::PostToolUse => "After successful tool execution",
            HookEvent::SessionStart => "Session starts",
            HookEvent::Stop => "Agent is stopping",
            HookEvent::Notification => "Notification event",
        }
    }

    /// Returns all known hook events
    pub fn all() -> &'static [HookEvent] {
        &[
            HookEvent::UserPromptSubmit,
            HookEvent::PreToolUse,
            HookEvent::PostToolUse,
            HookEvent::SessionStart,
            HookEvent::Stop,
            HookEvent::Notification,
        ]
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HookEvent {
    type Err = CuratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookEvent::all()
            .iter()
            .copied()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| {
                CuratorError::invalid_field(format!("unknown hook event: {}", s), "hook_event_name")
            })
    }
}
