//! Lexical relevance scoring of notes sections
//!
//! A section earns [`KEYWORD_WEIGHT`] for every prompt keyword found as a
//! substring of its lower-cased text, and [`TAG_WEIGHT`] for every prompt tag
//! that is also one of the section's own tags. Repeated prompt keywords or
//! tags score once per repetition.

use super::extract::extract_tags;
use super::sections::Section;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

/// Points per prompt keyword contained in a section
pub const KEYWORD_WEIGHT: u32 = 2;
/// Points per prompt tag carried by a section
pub const TAG_WEIGHT: u32 = 3;
/// Maximum number of ranked matches returned
pub const MAX_RESULTS: usize = 3;

/// A section title together with its relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub score: u32,
    pub title: String,
}

impl ScoredMatch {
    pub fn new(score: u32, title: impl Into<String>) -> Self {
        Self {
            score,
            title: title.into(),
        }
    }
}

impl fmt::Display for ScoredMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}  {}", self.score, self.title)
    }
}

/// Score a single section against the prompt's keywords and tags
pub fn score_section(section: &Section, keywords: &[String], tags: &[String]) -> u32 {
    let body = section.body.to_lowercase();

    let keyword_score: u32 = keywords
        .iter()
        .filter(|keyword| body.contains(keyword.as_str()))
        .map(|_| KEYWORD_WEIGHT)
        .sum();

    let section_tags = extract_tags(&section.body);
    let tag_score: u32 = tags
        .iter()
        .filter(|tag| section_tags.contains(tag))
        .map(|_| TAG_WEIGHT)
        .sum();

    keyword_score + tag_score
}

/// Score every section and rank the ones that scored.
///
/// The result is ordered by descending score; sections with equal scores
/// keep their document order. Zero-score sections are left out and at most
/// [`MAX_RESULTS`] matches are returned.
pub fn score_sections(sections: &[Section], keywords: &[String], tags: &[String]) -> Vec<ScoredMatch> {
    let mut matches: Vec<ScoredMatch> = sections
        .iter()
        .filter_map(|section| {
            let score = score_section(section, keywords, tags);
            (score > 0).then(|| ScoredMatch::new(score, section.title.clone()))
        })
        .collect();

    // stable sort, ties stay in document order
    matches.sort_by_key(|m| Reverse(m.score));
    matches.truncate(MAX_RESULTS);
    matches
}
