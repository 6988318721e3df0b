//! Curation search
//!
//! Decides whether a prompt is a curation request and, if so, which sections
//! of the notes document relate to it.

pub mod extract;
pub mod intent;
pub mod pipeline;
pub mod scorer;
pub mod sections;

pub use extract::{STOPWORDS, extract_keywords, extract_tags};
pub use intent::{IntentCategory, IntentMatch, PatternCategory, classify, has_curation_intent};
pub use pipeline::{SearchOutcome, find_related, search};
pub use scorer::{MAX_RESULTS, ScoredMatch, score_section, score_sections};
pub use sections::{Section, split_sections};
