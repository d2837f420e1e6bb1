//! Text heuristics shared by the hardcoded rule.
//!
//! Two groups of predicates:
//! - literal classification: does a string look like UI copy, a key, a path?
//! - context classification: is the surrounding code a logging call, a
//!   format call, an exception?

use std::sync::LazyLock;

use regex::Regex;

use crate::{core::key_usage::is_key_token, utils::contains_cjk};

static HAS_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]{3,}").unwrap());

static TIME_FORMAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[Hhmsf:.\-_/ ]+$").unwrap());

// Microsoft.Extensions.Logging: logger.LogWarning(...)
static LOG_METHOD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.log(debug|information|warning|error|critical)\(").unwrap()
});

// Serilog-style static loggers: Log.Debug(...), Serilog.Log.Error(...)
static LOG_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(log\.|serilog\.log\.)").unwrap());

static LOG_LEVEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(debug|information|warning|error|fatal)\(").unwrap());

// Custom log services: _appLogService.Info(...)
static LOG_SERVICE_LEVEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(info|warn|warning|error|debug|trace)\(").unwrap());

const CONSOLE_WRITERS: &[&str] = &[
    "console.writeline(",
    "console.error.writeline(",
    "console.out.writeline(",
    "debug.writeline(",
    "trace.writeline(",
];

fn has_whitespace(text: &str) -> bool {
    text.contains([' ', '\t', '\n'])
}

/// Typical i18n keys: dot/underscore/dash separated tokens, no spaces.
pub fn is_key_like(text: &str) -> bool {
    if has_whitespace(text) || text.chars().count() < 3 {
        return false;
    }
    is_key_token(text)
}

/// Paths, URLs, file names and very short tokens ("OK", "RX").
pub fn looks_like_path_or_identifier(text: &str) -> bool {
    text.starts_with('/')
        || text.starts_with('\\')
        || text.contains("://")
        || text.ends_with(".axaml")
        || text.ends_with(".cs")
        || text.ends_with(".json")
        || text.chars().count() <= 2
}

/// Whether a literal looks like human-facing copy.
///
/// CJK text always counts. Latin text counts only when it has a word of
/// three or more letters and whitespace, so control names like
/// `NameTextBox` pass.
pub fn is_probable_ui_copy(text: &str) -> bool {
    if is_key_like(text) || looks_like_path_or_identifier(text) {
        return false;
    }
    if contains_cjk(text) {
        return true;
    }
    HAS_WORD_REGEX.is_match(text) && has_whitespace(text)
}

/// Whether `context` (the token's line plus the two lines above) is a
/// logging call. Logs may be raw English.
pub fn is_logging_context(context: &str) -> bool {
    let lowered = context.to_lowercase();

    if lowered.contains("logger.") || lowered.contains("ilogger") {
        return true;
    }
    if CONSOLE_WRITERS.iter().any(|w| lowered.contains(w)) {
        return true;
    }
    if LOG_METHOD_REGEX.is_match(context) {
        return true;
    }
    if LOG_PREFIX_REGEX.is_match(context) && LOG_LEVEL_REGEX.is_match(context) {
        return true;
    }
    lowered.contains("logservice") && LOG_SERVICE_LEVEL_REGEX.is_match(context)
}

/// Date/time format strings such as `HH:mm:ss.fff`.
pub fn is_time_format(text: &str) -> bool {
    TIME_FORMAT_REGEX.is_match(text) && !contains_cjk(text)
}

/// Debug markers such as `[Shell] window opened`.
pub fn is_debug_marker(text: &str) -> bool {
    text.starts_with('[') && text.contains(']') && text.contains(' ')
}
