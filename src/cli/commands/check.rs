use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{hardcoded::check_hardcoded_issues, missing::check_missing_keys_issues},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum CheckRule {
    Hardcoded,
    Missing,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![CheckRule::Hardcoded, CheckRule::Missing]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let mut checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks
    };
    checks.sort();
    checks.dedup();

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Hardcoded => {
                let issues = check_hardcoded_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::HardcodedText));
            }
            CheckRule::Missing => {
                let issues = check_missing_keys_issues(&ctx)?;
                all_issues.extend(issues.into_iter().map(Issue::MissingKey));
            }
        }
    }

    let read_errors = &ctx.sources().errors;
    all_issues.extend(read_errors.iter().cloned().map(Issue::ReadError));

    Ok(finish(CommandSummary::Check, all_issues, ctx.files.len()))
}
