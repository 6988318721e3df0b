//! Curation intent classification
//!
//! A prompt has curation intent when any rule of any [`IntentCategory`]
//! matches it. Rules are case-insensitive searches over the lower-cased,
//! trimmed prompt; `^`-anchored rules only fire on a leading short-form
//! trigger such as `idea:` or `note:`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// The four kinds of curation a prompt can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    /// Looking something up or asking what is already known
    Research,
    /// Capturing a thought or brainstorm
    Idea,
    /// Saving a link or reference
    Reference,
    /// Changing the status of tracked research
    Update,
}

impl IntentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentCategory::Research => "research",
            IntentCategory::Idea => "idea",
            IntentCategory::Reference => "reference",
            IntentCategory::Update => "update",
        }
    }

    /// All categories in classification order
    pub fn all() -> &'static [IntentCategory] {
        &[
            IntentCategory::Research,
            IntentCategory::Idea,
            IntentCategory::Reference,
            IntentCategory::Update,
        ]
    }

    fn rule_sources(&self) -> &'static [&'static str] {
        match self {
            IntentCategory::Research => RESEARCH_RULES,
            IntentCategory::Idea => IDEA_RULES,
            IntentCategory::Reference => REFERENCE_RULES,
            IntentCategory::Update => UPDATE_RULES,
        }
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const RESEARCH_RULES: &[&str] = &[
    r"\bresearch\b",
    r"\bfind information\b",
    r"\blook up\b",
    r"\bwhat.s the latest\b",
    r"\bcurate\b",
    r"\bwhat do we know\b",
    r"\bwhat have we learned\b",
    r"\binvestigate\b",
    r"\bexplore\b.*\btopic\b",
    r"\bdig into\b",
    r"\blearn about\b",
];

const IDEA_RULES: &[&str] = &[
    r"\bdocument this idea\b",
    r"\bbrainstorm\b",
    r"\bi.m thinking about\b",
    r"\bi am thinking about\b",
    r"^idea:",
    r"\bwhat if we\b",
    r"\bcapture this\b",
    r"\bnote this\b",
    r"\brecord this\b",
    r"\bjot down\b",
];

const REFERENCE_RULES: &[&str] = &[
    r"\bsave this\b",
    r"\badd this to research\b",
    r"\bsave.*reference\b",
    r"^ref:",
    // any link is worth offering to save
    r"https?://\S+",
    r"\btrack this\b",
    r"\bbookmark\b",
    r"\bkeep this\b",
];

const UPDATE_RULES: &[&str] = &[
    r"\bupdate research\b",
    r"\bmark.*completed\b",
    r"\bmark.*done\b",
    r"^update:",
    r"^note:",
    r"\bupdate.*status\b",
    r"\bcomplete.*research\b",
    r"\bfinish.*research\b",
];

/// A named, ordered set of compiled trigger rules
#[derive(Debug)]
pub struct PatternCategory {
    category: IntentCategory,
    rules: Vec<Regex>,
}

impl PatternCategory {
    fn compile(category: IntentCategory) -> Self {
        let rules = category
            .rule_sources()
            .iter()
            .map(|source| Regex::new(source).expect("curation rule is a valid regex"))
            .collect();
        Self { category, rules }
    }

    pub fn category(&self) -> IntentCategory {
        self.category
    }

    pub fn rules(&self) -> &[Regex] {
        &self.rules
    }

    /// First rule matching an already normalized prompt
    fn first_match(&self, normalized: &str) -> Option<&Regex> {
        self.rules.iter().find(|rule| rule.is_match(normalized))
    }
}

static CATEGORIES: LazyLock<Vec<PatternCategory>> = LazyLock::new(|| {
    IntentCategory::all()
        .iter()
        .map(|category| PatternCategory::compile(*category))
        .collect()
});

/// All pattern categories in classification order
pub fn pattern_categories() -> &'static [PatternCategory] {
    &CATEGORIES
}

/// Which category and rule accepted a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentMatch {
    pub category: IntentCategory,
    pub pattern: String,
}

impl fmt::Display for IntentMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.pattern)
    }
}

/// Find the first category whose rules match the prompt
pub fn classify(prompt: &str) -> Option<IntentMatch> {
    let normalized = prompt.to_lowercase();
    let normalized = normalized.trim();

    pattern_categories().iter().find_map(|category| {
        category.first_match(normalized).map(|rule| IntentMatch {
            category: category.category(),
            pattern: rule.as_str().to_string(),
        })
    })
}

/// Check whether a prompt asks for research, idea capture, a saved
/// reference or a status update.
///
/// ```
/// use curator_core::curation::has_curation_intent;
///
/// assert!(has_curation_intent("Research vector databases"));
/// assert!(has_curation_intent("look at https://example.com/x"));
/// assert!(!has_curation_intent("fix the login bug"));
/// ```
pub fn has_curation_intent(prompt: &str) -> bool {
    classify(prompt).is_some()
}
