//! CLI commands

pub mod classify;
pub mod hook;
pub mod search;
