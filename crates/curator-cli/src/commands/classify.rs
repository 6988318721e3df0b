//! Classify command implementation

use crate::console::CliConsole;
use curator_core::curation::{classify, extract_keywords, extract_tags};
use curator_core::error::CuratorResult;

/// Show the trigger a prompt matches and the terms extracted from it
pub fn execute(prompt: &str) -> CuratorResult<()> {
    let console = CliConsole::new();
    console.print_header("Curation intent");

    match classify(prompt) {
        Some(matched) => {
            console.success(&format!("curation intent: {}", matched.category));
            console.field("pattern", &matched.pattern);
        }
        None => console.field("category", "none"),
    }

    console.field("keywords", &extract_keywords(prompt).join(", "));
    console.field("tags", &extract_tags(prompt).join(", "));
    Ok(())
}
