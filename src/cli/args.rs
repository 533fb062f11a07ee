//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all xcgen
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `generate`: Generate the typed Swift accessor file from the catalog
//! - `init`: Initialize xcgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path to the .xcstrings catalog (overrides config file)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Locale whose values are surfaced as doc comments (overrides config file)
    #[arg(long)]
    pub comments_locale: Option<String>,

    /// Key segment separator (overrides config file)
    #[arg(long)]
    pub separator: Option<char>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path of the generated Swift file (overrides config file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Translation table name (overrides config file)
    #[arg(long)]
    pub table: Option<String>,

    /// Name of the generated root enum (overrides config file)
    #[arg(long)]
    pub type_name: Option<String>,

    /// Access modifier for generated declarations (overrides config file)
    #[arg(long)]
    pub access: Option<String>,

    /// Print the generated source to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the typed Swift accessor file from the strings catalog
    Generate(GenerateCommand),
    /// Initialize a new .xcgenrc.json configuration file
    Init,
}
