//! Keyword and tag extraction
//!
//! Both extractors lower-case their input and return tokens in order of
//! appearance. Duplicates are kept: the scorer counts every occurrence.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Shortest token that counts as a keyword
pub const MIN_KEYWORD_LEN: usize = 4;

/// Words that show up in nearly every curation prompt and carry no topic.
pub const STOPWORDS: &[&str] = &[
    "this", "that", "what", "about", "with", "have", "from", "they", "been", "were", "being",
    "their", "there", "would", "could", "should", "which", "these", "those", "your", "into",
    "more", "some", "such", "only", "other", "than", "then", "them", "does", "doing", "done",
    "will", "just", "also", "like", "make", "want", "need", "know", "think", "look", "find",
    "help", "show", "tell", "give", "take", "come", "work", "first", "after", "before",
    "because", "through", "research", "save", "update", "note", "idea", "curate", "track",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Whole words of at least `MIN_KEYWORD_LEN` word characters
static KEYWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b\w{{{},}}\b", MIN_KEYWORD_LEN)).expect("keyword pattern is valid")
});

/// `#` followed by a run of word characters
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("tag pattern is valid"));

/// Check whether a lower-cased token is a stopword
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

/// Extract topic keywords from free text.
///
/// ```
/// use curator_core::curation::extract_keywords;
///
/// let keywords = extract_keywords("Research Vector databases for the RAG idea");
/// assert_eq!(keywords, vec!["vector", "databases"]);
/// ```
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    KEYWORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !is_stopword(word))
        .map(str::to_string)
        .collect()
}

/// Extract `#tags` from free text, without the leading marker.
///
/// ```
/// use curator_core::curation::extract_tags;
///
/// assert_eq!(extract_tags("see #ML and #rag-notes"), vec!["ml", "rag"]);
/// ```
pub fn extract_tags(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TAG_PATTERN
        .captures_iter(&lowered)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
