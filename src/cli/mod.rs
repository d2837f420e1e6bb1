//! Command-line interface layer.

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::CommandResult;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(exit_status_from_result(&result))
}

fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
