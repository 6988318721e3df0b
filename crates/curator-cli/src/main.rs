//! Curator CLI
//!
//! Runs as a `UserPromptSubmit` command hook: the host agent pipes the event
//! JSON to stdin and, when the prompt is a curation request with related
//! notes, receives a JSON response naming the related research on stdout.
//!
//! # Usage
//!
//! ```bash
//! # Hook mode (default): read the event from stdin
//! echo '{"prompt":"research vector dbs","cwd":"."}' | curator
//!
//! # Try a prompt against a notes file
//! curator search "research vector databases #ml" --scores
//!
//! # See which trigger a prompt hits
//! curator classify "idea: offline sync"
//! ```

mod args;
mod commands;
mod console;
mod router;

use clap::Parser;
use curator_core::error::CuratorResult;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

fn main() -> CuratorResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    router::route(cli)
}

/// Log to stderr; stdout carries the hook response
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
