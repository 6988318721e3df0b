//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use curator_core::error::CuratorResult;

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli) -> CuratorResult<()> {
    match cli.command {
        None | Some(Commands::Hook) => commands::hook::execute(&cli.notes_file),
        Some(Commands::Search {
            prompt,
            file,
            scores,
            json,
        }) => {
            let file = file.unwrap_or(cli.notes_file);
            commands::search::execute(&prompt, &file, scores, json)
        }
        Some(Commands::Classify { prompt }) => commands::classify::execute(&prompt),
    }
}
