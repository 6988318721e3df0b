//! Splitting the notes document into titled sections
//!
//! Sections start at every line beginning with `### `. Log entries and
//! tracked research items both use that heading level and are treated the
//! same way.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Longest title kept, in characters
pub const MAX_TITLE_CHARS: usize = 80;

static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### ").expect("heading pattern is valid"));

/// A titled chunk of the notes document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// First line of the chunk, truncated and trimmed; never empty
    pub title: String,
    /// The whole chunk after the heading marker, title line included
    pub body: String,
}

impl Section {
    /// Build a section from a chunk, or `None` when its title is blank
    pub fn from_chunk(chunk: &str) -> Option<Self> {
        let first_line = chunk.split('\n').next().unwrap_or_default();
        let title: String = first_line.chars().take(MAX_TITLE_CHARS).collect();
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            body: chunk.to_string(),
        })
    }
}

/// Split a notes document into sections, in document order.
///
/// Anything before the first heading is ignored.
///
/// ```
/// use curator_core::curation::split_sections;
///
/// let doc = "# Research\n\n### Vector DB options\nqdrant #ml\n### Caching\nmoka\n";
/// let titles: Vec<_> = split_sections(doc).into_iter().map(|s| s.title).collect();
/// assert_eq!(titles, vec!["Vector DB options", "Caching"]);
/// ```
pub fn split_sections(document: &str) -> Vec<Section> {
    HEADING_PATTERN
        .split(document)
        .skip(1)
        .filter_map(Section::from_chunk)
        .collect()
}
