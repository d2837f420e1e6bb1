//! Issue types for i18n analysis results.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it.

use enum_dispatch::enum_dispatch;

use crate::core::SourceContext;
use crate::utils::snippet;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    HardcodedText,
    MissingKey,
    ReadError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::HardcodedText => write!(f, "hardcoded"),
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Probable UI copy written as a raw string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedTextIssue {
    /// Points at the literal's opening quote.
    pub context: SourceContext,
    /// The literal's value as scanned.
    pub text: String,
    pub hint: String,
}

impl HardcodedTextIssue {
    pub fn new(context: SourceContext, text: impl Into<String>, ignore_marker: &str) -> Self {
        Self {
            context,
            text: text.into(),
            hint: format!(
                "add // {} on the same line or the line above if this is not UI copy",
                ignore_marker
            ),
        }
    }

    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::HardcodedText
    }
}

/// Translation key used in the shell but missing from the en-US dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub context: SourceContext,
    pub key: String,
    /// Display path of the localization file that was searched.
    pub localization_file: String,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// A source file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An i18n issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    HardcodedText(HardcodedTextIssue),
    MissingKey(MissingKeyIssue),
    ReadError(ReadErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::HardcodedText(_) => HardcodedTextIssue::severity(),
            Issue::MissingKey(_) => MissingKeyIssue::severity(),
            Issue::ReadError(_) => ReadErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::HardcodedText(_) => HardcodedTextIssue::rule(),
            Issue::MissingKey(_) => MissingKeyIssue::rule(),
            Issue::ReadError(_) => ReadErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (literal text, key name, error).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for HardcodedTextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        snippet(&self.text)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some(&self.hint)
    }
}

impl Report for MissingKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("not found in {}", self.localization_file))
    }
}

impl Report for ReadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        format!("Failed to read: {}", self.error)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_key(&self) -> (&str, usize, usize) {
        match self.location() {
            ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::File { path } => (path, 0, 0),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
