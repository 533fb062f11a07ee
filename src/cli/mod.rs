//! Command-line interface layer.

use std::process::ExitCode;

use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use run::{CommandSummary, GenerateSummary, InitSummary};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let summary = run::run(args)?;
    report::print(&summary, verbose);

    Ok(ExitStatus::Success.into())
}
