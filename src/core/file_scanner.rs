use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::core::FileKind;

/// Check if a pattern contains glob wildcards.
/// Patterns without wildcards are treated as literal paths.
pub(crate) fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Result of scanning files.
pub struct ScanResult {
    pub files: BTreeSet<PathBuf>,
    pub skipped_count: usize,
}

/// Collect every `.cs` / `.axaml` file under `base_dir`.
///
/// `ignore_patterns` are glob patterns matched against the full path, or
/// literal paths (relative to `base_dir`) excluded by prefix.
pub fn scan_files(base_dir: &Path, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    for entry in WalkDir::new(base_dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && FileKind::from_path(path).is_some() {
            files.insert(path.to_path_buf());
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}
