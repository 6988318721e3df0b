//! Curator core library
//!
//! Intent-gated recall over a project's research notes: a prompt that asks
//! to research, capture, save or update something is matched against the
//! `### ` sections of the notes document, and the titles of the most relevant
//! sections are handed back to the host agent.
//!
//! ```
//! use curator_core::{HookOutput, find_related};
//!
//! let notes = "### Vector DB options\nqdrant vs milvus #ml\n";
//! let titles = find_related("research vector databases #ml", notes);
//! let output = HookOutput::related_research(&titles).unwrap();
//! assert_eq!(
//!     output.additional_context(),
//!     "[Curator] Related past research found: Vector DB options"
//! );
//! ```

pub mod curation;
pub mod error;
pub mod hooks;
pub mod notes;

pub use curation::{
    IntentCategory, IntentMatch, ScoredMatch, SearchOutcome, Section, classify, extract_keywords,
    extract_tags, find_related, has_curation_intent, score_sections, search, split_sections,
};
pub use error::{CuratorError, CuratorResult};
pub use hooks::{HookEvent, HookInput, HookOutput};
pub use notes::{DEFAULT_NOTES_FILE, NotesDocument};
