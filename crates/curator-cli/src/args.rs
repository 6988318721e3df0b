//! CLI argument definitions using clap
//!
//! - curator                      # Hook mode (default)
//! - curator hook                 # Hook mode, explicit
//! - curator search "prompt"      # Search a notes file
//! - curator classify "prompt"    # Show the matched trigger

use clap::{Parser, Subcommand};
use curator_core::DEFAULT_NOTES_FILE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "curator")]
#[command(about = "Curator - recall related research notes for curation prompts")]
#[command(version)]
pub struct Cli {
    /// Notes document name, resolved inside the hook's working directory
    #[arg(
        long,
        env = "CURATOR_NOTES_FILE",
        default_value = DEFAULT_NOTES_FILE,
        global = true
    )]
    pub notes_file: PathBuf,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Answer a UserPromptSubmit hook event read from stdin
    Hook,

    /// Search a notes document for sections related to a prompt
    Search {
        /// The prompt to search with
        prompt: String,

        /// Notes document to search (defaults to the notes file in the current directory)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Show each match's score
        #[arg(long)]
        scores: bool,

        /// Print the full search outcome as JSON
        #[arg(long, conflicts_with = "scores")]
        json: bool,
    },

    /// Show which curation trigger a prompt matches and what it extracts
    Classify {
        /// The prompt to classify
        prompt: String,
    },
}
