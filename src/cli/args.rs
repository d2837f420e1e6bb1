//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run i18n checks (hardcoded UI copy, missing keys)
//! - `init`: Initialize a `.glotcsrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

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
}

/// Common arguments shared by all checking commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root used for config discovery and relative paths
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Localization service file with the en-US dictionary (overrides config file)
    #[arg(long)]
    pub localization_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check for i18n issues (hardcoded UI copy, missing keys)
    Check(CheckCommand),
    /// Initialize a new .glotcsrc.json configuration file
    Init,
}
