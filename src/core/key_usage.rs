//! Translation key extraction from C# and AXAML source lines.
//!
//! Recognised usages:
//!
//! - C#: `.GetString("key")`, `L["key"]`, `Strings["key"]`, `Localization["key"]`
//! - AXAML bindings: `{Binding L[key]}`, `{Binding Localization[key]}`
//! - AXAML markup extension: `{converters:Localize key}`,
//!   `{converters:Localize Key=key}` / `Key='key'`

use std::sync::LazyLock;

use regex::Regex;

use crate::core::FileKind;

// Keys look like segment.segment, segment_segment or segment-segment.
static KEY_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9]+([._-][a-z0-9]+)+$").unwrap());

static CSHARP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"\.GetString\(\s*"(?P<key>[^"]+)"\s*(?:,|\))"#,
        r#"\bL\s*\[\s*"(?P<key>[^"]+)"\s*\]"#,
        r#"\bStrings\s*\[\s*"(?P<key>[^"]+)"\s*\]"#,
        r#"\bLocalization\s*\[\s*"(?P<key>[^"]+)"\s*\]"#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static XAML_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\bL\[(?P<key>[A-Za-z0-9._-]+)\]",
        r"\bLocalization\[(?P<key>[A-Za-z0-9._-]+)\]",
        r"\bLocalize\s+(?P<key>[A-Za-z0-9._-]+)",
        // The regex crate has no backreferences, so each quote style gets
        // its own alternative.
        r#"\bLocalize\b[^}]*\bKey\s*=\s*(?:"(?P<key>[^"']+)"|'(?P<key2>[^"']+)')"#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// A key referenced on a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyUsage {
    pub key: String,
    /// 1-based column of the key's first character.
    pub col: usize,
}

/// Whether `text` has the shape of an i18n key.
pub fn is_key_token(text: &str) -> bool {
    KEY_TOKEN_REGEX.is_match(text)
}

/// Extract key usages from one line.
///
/// C# patterns apply to every file kind; AXAML patterns only to `.axaml`.
/// Matches that do not look like keys are dropped.
pub fn extract_key_usages(kind: FileKind, line: &str) -> Vec<KeyUsage> {
    let xaml: &[Regex] = if kind.is_xaml() { &XAML_PATTERNS } else { &[] };

    CSHARP_PATTERNS
        .iter()
        .chain(xaml)
        .flat_map(|regex| regex.captures_iter(line))
        .filter_map(|caps| caps.name("key").or_else(|| caps.name("key2")))
        .filter(|m| is_key_token(m.as_str()))
        .map(|m| KeyUsage {
            key: m.as_str().to_string(),
            col: line[..m.start()].chars().count() + 1,
        })
        .collect()
}
