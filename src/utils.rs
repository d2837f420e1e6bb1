//! Common utility functions shared across the codebase.

/// Maximum number of characters of a literal shown in reports.
pub const MAX_SNIPPET_LEN: usize = 80;

/// Render literal text on one line for reports.
///
/// Newlines are shown as `\n`; text longer than [`MAX_SNIPPET_LEN`]
/// characters is cut to 77 characters plus `...`.
///
/// # Examples
///
/// ```
/// use glotcs::utils::snippet;
///
/// assert_eq!(snippet("Hello\nWorld"), "Hello\\nWorld");
/// assert_eq!(snippet(&"a".repeat(100)), format!("{}...", "a".repeat(77)));
/// ```
pub fn snippet(text: &str) -> String {
    let escaped = text.replace('\n', "\\n");
    if escaped.chars().count() > MAX_SNIPPET_LEN {
        let head: String = escaped.chars().take(MAX_SNIPPET_LEN - 3).collect();
        format!("{}...", head)
    } else {
        escaped
    }
}

/// Checks if the text contains a CJK unified ideograph (U+4E00..=U+9FFF).
///
/// # Examples
///
/// ```
/// use glotcs::utils::contains_cjk;
///
/// assert!(contains_cjk("连接服务器"));
/// assert!(!contains_cjk("Connect"));
/// ```
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}
