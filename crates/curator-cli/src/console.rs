//! CLI console utilities

use colored::*;

/// CLI console for formatted output
#[derive(Default)]
pub struct CliConsole;

impl CliConsole {
    pub const fn new() -> Self {
        Self
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!("{}", title.bold().underline());
    }

    /// Print a labelled value
    pub fn field(&self, label: &str, value: &str) {
        println!("  {:<10} {}", format!("{}:", label).dimmed(), value);
    }

    /// Print a success line
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message);
    }

    /// Print a notice on stderr, keeping stdout for results
    pub fn notice(&self, message: &str) {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    }
}
