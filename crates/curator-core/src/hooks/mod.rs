//! Hook transport types
//!
//! The host agent runs the curator as a command hook: it writes a JSON event
//! to stdin and reads an optional JSON response from stdout. An empty stdout
//! means "nothing to add".

pub mod events;
pub mod hook_input;
pub mod hook_output;

pub use events::HookEvent;
pub use hook_input::HookInput;
pub use hook_output::{CONTEXT_LABEL, HookOutput, HookSpecificOutput, RELATED_PREFIX};
