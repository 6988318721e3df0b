//! From trait implementations for CuratorError conversions

use super::types::CuratorError;

impl From<std::io::Error> for CuratorError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for CuratorError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}
