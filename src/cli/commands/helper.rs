use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
) -> CommandResult {
    issues.sort();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    CommandResult {
        summary,
        error_count,
        issues,
        source_files_checked,
    }
}
