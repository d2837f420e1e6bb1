//! en-US key loading from the localization service source.
//!
//! The primary locale lives in C# as a dictionary initializer:
//!
//! ```text
//! ["dialog.connect.title"] = "Connect to server",
//! ```

use std::{collections::HashSet, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result, bail};
use regex::Regex;

static EN_DICT_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[\s*"(?P<key>[^"]+)"\s*\]\s*="#).unwrap());

/// Extract every dictionary-initializer key from `source`.
pub fn extract_locale_keys(source: &str) -> HashSet<String> {
    EN_DICT_KEY_REGEX
        .captures_iter(source)
        .filter_map(|caps| caps.name("key"))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Load the en-US key set from the localization file.
///
/// Fails if the file does not exist, cannot be read, or yields no keys.
pub fn load_locale_keys(path: &Path) -> Result<HashSet<String>> {
    if !path.exists() {
        bail!("Localization file not found: {}", path.display());
    }

    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read localization file: {}", path.display()))?;
    let keys = extract_locale_keys(&String::from_utf8_lossy(&bytes));

    if keys.is_empty() {
        bail!("Failed to extract en-US keys from {}", path.display());
    }

    Ok(keys)
}
