//! Locating and reading the notes document

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CuratorError, CuratorResult};

/// Notes document looked up in the hook's working directory
pub const DEFAULT_NOTES_FILE: &str = "research.md";

/// The append-only research notes of a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesDocument {
    path: PathBuf,
}

impl NotesDocument {
    /// Resolve `file_name` inside `cwd`
    pub fn locate(cwd: impl AsRef<Path>, file_name: impl AsRef<Path>) -> Self {
        Self {
            path: cwd.as_ref().join(file_name),
        }
    }

    /// Use an explicit path as the notes document
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document body.
    ///
    /// A missing file is `Ok(None)`; any other failure, including content
    /// that is not UTF-8, is an error.
    pub fn read(&self) -> CuratorResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "notes document not found");
                Ok(None)
            }
            Err(e) => Err(CuratorError::io_with_path(
                e.to_string(),
                self.path.display().to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnifiedError;
    use tempfile::TempDir;

    #[test]
    fn test_read_existing_document() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_NOTES_FILE), "### Entry\nbody\n").unwrap();

        let notes = NotesDocument::locate(dir.path(), DEFAULT_NOTES_FILE);
        assert_eq!(notes.read().unwrap().as_deref(), Some("### Entry\nbody\n"));
    }

    #[test]
    fn test_missing_document_is_none() {
        let dir = TempDir::new().unwrap();
        let notes = NotesDocument::locate(dir.path(), DEFAULT_NOTES_FILE);
        assert_eq!(notes.read().unwrap(), None);
    }

    #[test]
    fn test_binary_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let err = NotesDocument::at(&path).read().unwrap_err();
        assert_eq!(err.error_code(), "CURATOR_IO");
    }

    #[test]
    fn test_directory_is_not_a_document() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(DEFAULT_NOTES_FILE)).unwrap();
        let notes = NotesDocument::locate(dir.path(), DEFAULT_NOTES_FILE);
        let err = notes.read().unwrap_err();
        assert_eq!(err.error_code(), "CURATOR_IO");
    }
}
