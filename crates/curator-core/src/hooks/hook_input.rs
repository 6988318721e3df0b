//! Hook input types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::events::HookEvent;
use crate::error::CuratorResult;

/// Event payload the host writes to the hook's stdin.
///
/// Every field is optional on the wire; fields the curator does not use are
/// ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HookInput {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub hook_event_name: Option<String>,
    #[serde(default)]
    pub cwd: Option<PathBuf>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub transcript_path: Option<PathBuf>,
}

impl HookInput {
    /// Create a new hook input for a prompt submission
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            hook_event_name: Some(HookEvent::UserPromptSubmit.to_string()),
            ..Default::default()
        }
    }

    /// Parse a hook input from its JSON framing
    pub fn from_json(raw: &str) -> CuratorResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Set the prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the current working directory
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// The event that fired the hook, if named and recognized
    pub fn event(&self) -> Option<HookEvent> {
        self.hook_event_name.as_deref().and_then(|name| name.parse().ok())
    }

    /// Working directory, treating an empty path as absent
    pub fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref().filter(|cwd| !cwd.as_os_str().is_empty())
    }
}

impl fmt::Display for HookInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event: {}, Session: {}, Cwd: {:?}",
            self.hook_event_name.as_deref().unwrap_or("<none>"),
            self.session_id,
            self.cwd
        )
    }
}
