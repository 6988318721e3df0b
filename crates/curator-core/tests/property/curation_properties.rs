//! Property tests for the curation pipeline.

use curator_core::curation::{MAX_RESULTS, Section, has_curation_intent, score_section};
use curator_core::find_related;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "foxtrot", "golf", "hotel", "india", "juliett", "kilo",
];

fn notes_from(bodies: &[Vec<usize>]) -> String {
    bodies
        .iter()
        .enumerate()
        .map(|(i, words)| {
            let body: Vec<&str> = words.iter().map(|w| WORDS[*w]).collect();
            format!("### Section {}\n{}\n", i, body.join(" "))
        })
        .collect()
}

fn body_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0..WORDS.len(), 0..6), 0..10)
}

proptest! {
    #[test]
    fn prompts_without_letters_never_trigger(prompt in "[0-9 .,!?-]{0,40}", doc in ".{0,200}") {
        prop_assert!(!has_curation_intent(&prompt));
        prop_assert!(find_related(&prompt, &doc).is_empty());
    }

    #[test]
    fn urls_always_trigger(
        before in "[a-zA-Z ]{0,20}",
        secure in any::<bool>(),
        rest in "[a-z0-9./?=_-]{1,30}",
        after in "( [a-z]{1,10}){0,3}",
    ) {
        let scheme = if secure { "https" } else { "http" };
        let prompt = format!("{}{}://{}{}", before, scheme, rest, after);
        prop_assert!(has_curation_intent(&prompt));
    }

    #[test]
    fn search_is_idempotent(prompt in ".{0,60}", bodies in body_strategy()) {
        let doc = notes_from(&bodies);
        prop_assert_eq!(find_related(&prompt, &doc), find_related(&prompt, &doc));
    }

    #[test]
    fn results_never_exceed_three(query in prop::collection::vec(0..WORDS.len(), 1..6), bodies in body_strategy()) {
        let doc = notes_from(&bodies);
        let terms: Vec<&str> = query.iter().map(|w| WORDS[*w]).collect();
        let prompt = format!("research {}", terms.join(" "));
        prop_assert!(find_related(&prompt, &doc).len() <= MAX_RESULTS);
    }

    #[test]
    fn more_keywords_never_score_lower(total in 1usize..WORDS.len(), a in 0usize..WORDS.len(), b in 0usize..WORDS.len()) {
        let (more, fewer) = if a >= b { (a, b) } else { (b, a) };
        let more = more.min(total);
        let fewer = fewer.min(more);
        let keywords: Vec<String> = WORDS[..total].iter().map(|w| w.to_string()).collect();
        let section = |n: usize| Section {
            title: "Entry".to_string(),
            body: format!("Entry\n{}", WORDS[..n].join(" ")),
        };
        prop_assert!(score_section(&section(more), &keywords, &[]) >= score_section(&section(fewer), &keywords, &[]));
    }

    #[test]
    fn equal_scores_keep_document_order(count in 1usize..8) {
        let doc: String = (0..count).map(|i| format!("### Entry {}\nshared topic\n", i)).collect();
        let expected: Vec<String> = (0..count.min(MAX_RESULTS)).map(|i| format!("Entry {}", i)).collect();
        prop_assert_eq!(find_related("research shared topic", &doc), expected);
    }
}
