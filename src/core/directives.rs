//! Ignore-marker handling for the hardcoded rule.
//!
//! A line opts out when the marker (default `i18n-ignore`) appears on the
//! line itself or on the line directly above it:
//!
//! ```text
//! Title = "Debug build"; // i18n-ignore
//!
//! // i18n-ignore
//! Title = "Debug build";
//! ```

/// Check whether a finding on `line` is suppressed by `marker`.
pub fn has_ignore_marker(marker: &str, prev_line: &str, line: &str) -> bool {
    prev_line.contains(marker) || line.contains(marker)
}
