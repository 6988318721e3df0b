//! Core error types and traits for the curator

use thiserror::Error;

/// Result type alias for curator operations
pub type CuratorResult<T> = Result<T, CuratorError>;

/// Common accessors shared by curator errors.
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C: std::fmt::Display>(self, context: C) -> CuratorResult<T>;

    /// Add context lazily (only evaluated on error)
    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> CuratorResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn context<C: std::fmt::Display>(self, context: C) -> CuratorResult<T> {
        self.map_err(|e| CuratorError::other(format!("{}: {}", context, e)))
    }

    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> CuratorResult<T> {
        self.map_err(|e| CuratorError::other(format!("{}: {}", f(), e)))
    }
}

/// Main error type for the curator
#[derive(Error, Debug, Clone)]
pub enum CuratorError {
    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
        context: Option<String>,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        resource_type: Option<String>,
        context: Option<String>,
    },

    /// Generic error with context
    #[error("Error: {message}")]
    Other {
        message: String,
        context: Option<String>,
    },
}

impl UnifiedError for CuratorError {
    fn error_code(&self) -> &str {
        match self {
            Self::Io { .. } => "CURATOR_IO",
            Self::Json { .. } => "CURATOR_JSON",
            Self::InvalidInput { .. } => "CURATOR_INVALID_INPUT",
            Self::NotFound { .. } => "CURATOR_NOT_FOUND",
            Self::Other { .. } => "CURATOR_OTHER",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Io { message, .. }
            | Self::Json { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::NotFound { message, .. }
            | Self::Other { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::Io { context, .. }
            | Self::Json { context, .. }
            | Self::InvalidInput { context, .. }
            | Self::NotFound { context, .. }
            | Self::Other { context, .. } => context.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CuratorError::io("boom").error_code(), "CURATOR_IO");
        assert_eq!(CuratorError::json("bad").error_code(), "CURATOR_JSON");
        assert_eq!(
            CuratorError::invalid_field("unknown event", "hook_event_name").error_code(),
            "CURATOR_INVALID_INPUT"
        );
        assert_eq!(
            CuratorError::not_found_resource("research.md", "notes document").error_code(),
            "CURATOR_NOT_FOUND"
        );
        assert_eq!(CuratorError::other("x").error_code(), "CURATOR_OTHER");
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk gone"));
        let err = result.context("Failed to read notes").unwrap_err();
        assert_eq!(err.message(), "Failed to read notes: disk gone");
    }

    #[test]
    fn test_context_accessor() {
        let err = CuratorError::io_with_path("permission denied", "/tmp/research.md");
        assert_eq!(err.context(), None);
        let err = err.with_context_msg("loading notes document");
        assert_eq!(err.context(), Some("loading notes document"));
    }
}
