//! Hook command implementation
//!
//! Reads one event from stdin and writes at most one response to stdout.
//! Every failure on the way (bad framing, no working directory, unreadable
//! notes) ends silently so the host never sees noise for unrelated prompts.

use curator_core::curation::{find_related, has_curation_intent};
use curator_core::error::{CuratorResult, ResultExt, UnifiedError};
use curator_core::hooks::{HookEvent, HookInput, HookOutput};
use curator_core::notes::NotesDocument;
use std::io::{self, Read, Write};
use std::path::Path;

/// Answer the hook event on stdin
pub fn execute(notes_file: &Path) -> CuratorResult<()> {
    let mut raw = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut raw) {
        tracing::warn!("failed to read hook event: {}", e);
        return Ok(());
    }

    let output = match respond(&raw, notes_file) {
        Ok(Some(output)) => output,
        Ok(None) => return Ok(()),
        Err(e) => {
            tracing::warn!(
                code = e.error_code(),
                context = e.context(),
                "hook produced no output: {}",
                e
            );
            return Ok(());
        }
    };

    if let Err(e) = write_response(&output) {
        tracing::warn!("failed to write hook response: {}", e);
    }
    Ok(())
}

/// Turn a raw hook event into an optional response
pub fn respond(raw: &str, notes_file: &Path) -> CuratorResult<Option<HookOutput>> {
    let input = HookInput::from_json(raw).context("Malformed hook event")?;
    tracing::debug!("hook input: {}", input);

    if let Some(name) = input.hook_event_name.as_deref()
        && name != HookEvent::UserPromptSubmit.as_str()
    {
        tracing::debug!(event = name, "ignoring non-prompt event");
        return Ok(None);
    }

    if input.prompt.is_empty() {
        return Ok(None);
    }
    let Some(cwd) = input.working_dir() else {
        tracing::debug!("hook event has no working directory");
        return Ok(None);
    };

    // skip the file read for prompts the pipeline would reject anyway
    if !has_curation_intent(&input.prompt) {
        tracing::debug!("prompt has no curation intent");
        return Ok(None);
    }

    let notes = NotesDocument::locate(cwd, notes_file);
    let body = notes
        .read()
        .map_err(|e| e.with_context_msg("reading notes document"))?;
    let Some(body) = body else {
        return Ok(None);
    };

    let titles = find_related(&input.prompt, &body);
    Ok(HookOutput::related_research(&titles))
}

fn write_response(output: &HookOutput) -> CuratorResult<()> {
    let json = output.to_json()?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::DEFAULT_NOTES_FILE;
    use std::fs;
    use tempfile::TempDir;

    const NOTES: &str = "# Research\n\n### Vector DB options\nqdrant vs milvus #ml\n\n### Caching\nmoka\n";

    fn project_with_notes() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_NOTES_FILE), NOTES).unwrap();
        dir
    }

    fn event(prompt: &str, cwd: &Path) -> String {
        serde_json::json!({
            "session_id": "s-1",
            "hook_event_name": "UserPromptSubmit",
            "cwd": cwd,
            "prompt": prompt,
        })
        .to_string()
    }

    #[test]
    fn test_related_research_response() {
        let dir = project_with_notes();
        let raw = event("research vector databases #ml", dir.path());
        let output = respond(&raw, Path::new(DEFAULT_NOTES_FILE)).unwrap().unwrap();
        assert_eq!(
            output.additional_context(),
            "[Curator] Related past research found: Vector DB options"
        );
    }

    #[test]
    fn test_unrelated_prompt_is_silent() {
        let dir = project_with_notes();
        let raw = event("fix the login bug", dir.path());
        assert!(respond(&raw, Path::new(DEFAULT_NOTES_FILE)).unwrap().is_none());
    }

    #[test]
    fn test_missing_notes_is_silent() {
        let dir = TempDir::new().unwrap();
        let raw = event("research vector databases", dir.path());
        assert!(respond(&raw, Path::new(DEFAULT_NOTES_FILE)).unwrap().is_none());
    }

    #[test]
    fn test_custom_notes_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("NOTES.md"), NOTES).unwrap();
        let raw = event("what do we know about caching", dir.path());
        let output = respond(&raw, Path::new("NOTES.md")).unwrap().unwrap();
        assert!(output.additional_context().ends_with("Caching"));
    }

    #[test]
    fn test_missing_cwd_is_silent() {
        let raw = r#"{"prompt": "research vector databases"}"#;
        assert!(respond(raw, Path::new(DEFAULT_NOTES_FILE)).unwrap().is_none());
    }

    #[test]
    fn test_other_events_are_ignored() {
        let dir = project_with_notes();
        let raw = serde_json::json!({
            "hook_event_name": "PreToolUse",
            "cwd": dir.path(),
            "prompt": "research vector databases",
        })
        .to_string();
        assert!(respond(&raw, Path::new(DEFAULT_NOTES_FILE)).unwrap().is_none());
    }

    #[test]
    fn test_unreadable_notes_is_an_error_with_context() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_NOTES_FILE), [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        let raw = event("research vector databases", dir.path());
        let err = respond(&raw, Path::new(DEFAULT_NOTES_FILE)).unwrap_err();
        assert_eq!(err.error_code(), "CURATOR_IO");
        assert_eq!(err.context(), Some("reading notes document"));
    }

    #[test]
    fn test_empty_prompt_is_silent() {
        let dir = project_with_notes();
        let raw = event("", dir.path());
        assert!(respond(&raw, Path::new(DEFAULT_NOTES_FILE)).unwrap().is_none());
    }

    #[test]
    fn test_malformed_event_is_an_error() {
        assert!(respond("{not json", Path::new(DEFAULT_NOTES_FILE)).is_err());
    }
}
