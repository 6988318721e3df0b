//! Error types for the curator
//!
//! Only the host-facing operations (reading the hook event, loading the notes
//! document, writing the response) can fail. The curation pipeline itself is
//! infallible for any string input and reports "nothing to say" through
//! [`crate::curation::SearchOutcome`] instead of an error.
//!
//! Every error exposes the same fields through [`UnifiedError`]:
//! - error_code: A stable identifier for programmatic handling
//! - message: Human-readable error message
//! - context: Optional additional context about where/why the error occurred

mod constructors;
mod conversions;
mod types;

pub use types::{CuratorError, CuratorResult, ResultExt, UnifiedError};
