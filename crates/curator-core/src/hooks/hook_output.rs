//! Hook output types

use serde::{Deserialize, Serialize};
use std::fmt;

use super::events::HookEvent;
use crate::error::CuratorResult;

/// Label identifying the curator in the host's context
pub const CONTEXT_LABEL: &str = "[Curator]";
/// Lead-in before the list of related titles
pub const RELATED_PREFIX: &str = "Related past research found: ";

/// Response the hook writes to stdout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

/// Event-specific part of the response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: HookEvent,
    pub additional_context: String,
}

impl HookOutput {
    /// Create an output that adds context to the prompt
    pub fn with_context(context: impl Into<String>) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: HookEvent::UserPromptSubmit,
                additional_context: context.into(),
            },
        }
    }

    /// Render related section titles, or `None` when there is nothing to say
    pub fn related_research<S: AsRef<str>>(titles: &[S]) -> Option<Self> {
        if titles.is_empty() {
            return None;
        }
        let joined = titles.iter().map(|t| t.as_ref()).collect::<Vec<&str>>().join(", ");
        Some(Self::with_context(format!(
            "{} {}{}",
            CONTEXT_LABEL, RELATED_PREFIX, joined
        )))
    }

    pub fn additional_context(&self) -> &str {
        &self.hook_specific_output.additional_context
    }

    /// Serialize to the single-line JSON the host expects
    pub fn to_json(&self) -> CuratorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for HookOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event: {}, Context: {}",
            self.hook_specific_output.hook_event_name,
            self.additional_context()
        )
    }
}
