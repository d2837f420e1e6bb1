use std::path::Path;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// Returns `Err` for internal failures (bad config, missing source root or
/// localization file); issues found by a check are part of the result.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(Path::new(".")),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
