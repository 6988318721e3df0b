//! The search pipeline: gate, extract, split, score, truncate
//!
//! Each stage can end the search early. None of those endings is an error;
//! they are the common case and the host stays silent for all of them.

use super::extract::{extract_keywords, extract_tags};
use super::intent::has_curation_intent;
use super::scorer::{ScoredMatch, score_sections};
use super::sections::split_sections;
use serde::{Deserialize, Serialize};

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "matches", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The prompt was empty
    NoPrompt,
    /// The prompt is not about curation
    NoIntent,
    /// The prompt had neither keywords nor tags
    NoSignal,
    /// No section scored above zero
    NoMatch,
    /// Ranked matches, best first, at most three
    Related(Vec<ScoredMatch>),
}

impl SearchOutcome {
    /// Short label for logs
    pub fn reason(&self) -> &'static str {
        match self {
            SearchOutcome::NoPrompt => "no_prompt",
            SearchOutcome::NoIntent => "no_intent",
            SearchOutcome::NoSignal => "no_signal",
            SearchOutcome::NoMatch => "no_match",
            SearchOutcome::Related(_) => "related",
        }
    }

    pub fn matches(&self) -> &[ScoredMatch] {
        match self {
            SearchOutcome::Related(matches) => matches,
            _ => &[],
        }
    }

    /// Titles in rank order, empty for every terminal state
    pub fn into_titles(self) -> Vec<String> {
        match self {
            SearchOutcome::Related(matches) => matches.into_iter().map(|m| m.title).collect(),
            _ => Vec::new(),
        }
    }
}

/// Run the full pipeline and report how it ended
pub fn search(prompt: &str, document: &str) -> SearchOutcome {
    let outcome = run(prompt, document);
    match &outcome {
        SearchOutcome::Related(matches) => {
            tracing::debug!(count = matches.len(), "related sections found");
        }
        other => tracing::debug!(reason = other.reason(), "search ended without matches"),
    }
    outcome
}

fn run(prompt: &str, document: &str) -> SearchOutcome {
    if prompt.is_empty() {
        return SearchOutcome::NoPrompt;
    }

    if !has_curation_intent(prompt) {
        return SearchOutcome::NoIntent;
    }

    let keywords = extract_keywords(prompt);
    let tags = extract_tags(prompt);
    if keywords.is_empty() && tags.is_empty() {
        return SearchOutcome::NoSignal;
    }
    tracing::trace!(?keywords, ?tags, "extracted prompt terms");

    let sections = split_sections(document);
    let matches = score_sections(&sections, &keywords, &tags);
    if matches.is_empty() {
        return SearchOutcome::NoMatch;
    }

    SearchOutcome::Related(matches)
}

/// Titles of the notes sections most relevant to a curation prompt.
///
/// Returns at most three titles, best first, or an empty list when the
/// prompt is not a curation request or nothing in the document relates.
///
/// ```
/// use curator_core::curation::find_related;
///
/// let doc = "### Vector DB options\nqdrant #ml\n### Caching\nmoka\n";
/// assert_eq!(find_related("research vector databases #ml", doc), vec!["Vector DB options"]);
/// assert!(find_related("fix the login bug", doc).is_empty());
/// ```
pub fn find_related(prompt: &str, document: &str) -> Vec<String> {
    search(prompt, document).into_titles()
}
