use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running glotcs commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of source files (`.cs` / `.axaml`) that were checked.
    pub source_files_checked: usize,
}
