//! Summary printing.
//!
//! Separate from command logic so xcgen can be used as a library without
//! pulling terminal output along.

use colored::Colorize;

use super::run::{CommandSummary, GenerateSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(summary: &CommandSummary, verbose: bool) {
    match summary {
        CommandSummary::Generate(summary) => print_generate(summary, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_generate(summary: &GenerateSummary, verbose: bool) {
    if let Some(document) = &summary.document {
        print!("{document}");
        return;
    }

    let counts = if summary.plural_count > 0 {
        format!("{} keys, {} plural", summary.key_count, summary.plural_count)
    } else {
        format!(
            "{} {}",
            summary.key_count,
            if summary.key_count == 1 { "key" } else { "keys" }
        )
    };
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Generated {} ({})", summary.output.display(), counts).green()
    );

    if verbose {
        println!("  input: {}", summary.input.display());
        if !summary.config_from_file {
            println!("  no {} found, using defaults", CONFIG_FILE_NAME);
        }
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
