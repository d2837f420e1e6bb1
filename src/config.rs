use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::file_scanner::is_glob_pattern;

pub const CONFIG_FILE_NAME: &str = ".glotcsrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory scanned for `.cs` / `.axaml` files.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// File holding the hardcoded en-US dictionary.
    #[serde(default = "default_localization_file")]
    pub localization_file: String,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Literal values never reported as hardcoded text.
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_ignore_marker")]
    pub ignore_marker: String,
}

fn default_source_root() -> String {
    "src/Shell".to_string()
}

fn default_localization_file() -> String {
    "src/Core/Services/LocalizationService.cs".to_string()
}

fn default_ignores() -> Vec<String> {
    ["**/bin/**", "**/obj/**"].map(String::from).to_vec()
}

fn default_ignore_marker() -> String {
    "i18n-ignore".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            localization_file: default_localization_file(),
            ignores: default_ignores(),
            ignore_texts: Vec::new(),
            ignore_marker: default_ignore_marker(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// ignore marker is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.ignore_marker.trim().is_empty() {
            anyhow::bail!("'ignoreMarker' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
