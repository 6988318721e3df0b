//! Search command implementation

use crate::console::CliConsole;
use curator_core::curation::{SearchOutcome, search};
use curator_core::error::{CuratorError, CuratorResult};
use curator_core::notes::NotesDocument;
use std::path::Path;

/// Search a notes document and print the related section titles
pub fn execute(prompt: &str, file: &Path, scores: bool, json: bool) -> CuratorResult<()> {
    let notes = NotesDocument::at(file);
    let body = notes.read()?.ok_or_else(|| {
        CuratorError::not_found_resource(
            format!("Notes document not found: {}", file.display()),
            "notes document",
        )
    })?;

    let outcome = search(prompt, &body);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match &outcome {
        SearchOutcome::Related(matches) => {
            for m in matches {
                if scores {
                    println!("{}", m);
                } else {
                    println!("{}", m.title);
                }
            }
        }
        other => CliConsole::new().notice(&format!("No related research ({})", other.reason())),
    }

    Ok(())
}
