//! Hardcoded text detection rule.
//!
//! Scans every C# file for string literals and reports the ones that look
//! like UI copy, after dropping literals the surrounding code explains
//! (logging, exceptions, format strings, explicit opt-outs).

use rayon::prelude::*;

use crate::{
    config::Config,
    core::{
        CheckContext, FileKind, SourceContext, SourceFile, SourceLocation,
        directives::has_ignore_marker, line_at,
    },
    issues::HardcodedTextIssue,
    rules::helpers::{is_debug_marker, is_logging_context, is_probable_ui_copy, is_time_format},
    scanner::{StringToken, scan},
};

pub fn check_hardcoded_issues(ctx: &CheckContext) -> Vec<HardcodedTextIssue> {
    let files: Vec<&SourceFile> = ctx.sources_of(FileKind::CSharp).collect();
    let config = &ctx.config;
    files
        .par_iter()
        .flat_map_iter(|file| check_hardcoded(file, config))
        .collect()
}

/// Find probable UI copy in a single C# file.
pub fn check_hardcoded(file: &SourceFile, config: &Config) -> Vec<HardcodedTextIssue> {
    let lines = file.lines();

    scan(&file.content)
        .filter(|token| token.line() <= lines.len())
        .filter(|token| !is_suppressed(token, &lines, config))
        .filter(|token| is_probable_ui_copy(&token.value))
        .map(|token| {
            let source_line = line_at(&lines, token.line());
            let location = SourceLocation::new(&file.path, token.line(), token.column());
            HardcodedTextIssue::new(
                SourceContext::new(location, source_line),
                token.value,
                &config.ignore_marker,
            )
        })
        .collect()
}

fn is_suppressed(token: &StringToken, lines: &[&str], config: &Config) -> bool {
    let line = line_at(lines, token.line());
    let prev = line_at(lines, token.line().saturating_sub(1));
    let prev2 = line_at(lines, token.line().saturating_sub(2));
    let context = format!("{} {} {}", prev2, prev, line);
    let context = context.trim();
    let value = token.value.as_str();

    has_ignore_marker(&config.ignore_marker, prev, line)
        || is_logging_context(context)
        || context.contains("throw new")
        || (context.contains(".ToString(") && is_time_format(value))
        || is_debug_marker(value)
        || context.contains("GetString(")
        || config.ignore_texts.iter().any(|t| t == value)
}
