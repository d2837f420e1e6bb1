use std::{
    cell::OnceCell,
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{FileKind, SourceFile, file_scanner::scan_files},
    issues::ReadErrorIssue,
};

/// Source files read from disk, plus the files that could not be read.
#[derive(Debug, Default)]
pub struct LoadedSources {
    pub files: Vec<SourceFile>,
    pub errors: Vec<ReadErrorIssue>,
}

/// Data container for check operations.
///
/// Created once per command from CLI args and the config file. Source files
/// are read lazily (and in parallel) the first time a rule asks for them.
pub struct CheckContext {
    pub config: Config,
    /// Project root; report paths are relative to it.
    pub root_dir: PathBuf,
    pub source_dir: PathBuf,
    pub localization_file: PathBuf,
    pub files: BTreeSet<PathBuf>,
    pub verbose: bool,

    sources: OnceCell<LoadedSources>,
}

impl CheckContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args.path.clone();

        // Priority: CLI args > config file > defaults
        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(ref source_root) = common_args.source_root {
            config.source_root = source_root.to_string_lossy().to_string();
        }
        if let Some(ref localization_file) = common_args.localization_file {
            config.localization_file = localization_file.to_string_lossy().to_string();
        }

        let source_dir = root_dir.join(&config.source_root);
        let localization_file = root_dir.join(&config.localization_file);

        if !source_dir.is_dir() {
            bail!("Source root not found: {}", source_dir.display());
        }

        let scan_result = scan_files(&source_dir, &config.ignores, verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            source_dir,
            localization_file,
            files: scan_result.files,
            verbose,
            sources: OnceCell::new(),
        })
    }

    /// Path as shown to users: relative to the project root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        relative_display(&self.root_dir, path)
    }

    /// All discovered source files, read on first access.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; only I/O failures end
    /// up in `errors`.
    pub fn sources(&self) -> &LoadedSources {
        self.sources.get_or_init(|| {
            let root_dir = &self.root_dir;
            let results: Vec<_> = self
                .files
                .par_iter()
                .filter_map(|path| {
                    let kind = FileKind::from_path(path)?;
                    let display = relative_display(root_dir, path);
                    Some(match fs::read(path) {
                        Ok(bytes) => Ok(SourceFile::from_bytes(display, kind, &bytes)),
                        Err(e) => Err(ReadErrorIssue {
                            file_path: display,
                            error: e.to_string(),
                        }),
                    })
                })
                .collect();

            let mut loaded = LoadedSources::default();
            for result in results {
                match result {
                    Ok(file) => loaded.files.push(file),
                    Err(issue) => {
                        if self.verbose {
                            eprintln!(
                                "{} Cannot read {}: {}",
                                "warning:".bold().yellow(),
                                issue.file_path,
                                issue.error
                            );
                        }
                        loaded.errors.push(issue);
                    }
                }
            }
            loaded
        })
    }

    /// Source files of one kind.
    pub fn sources_of(&self, kind: FileKind) -> impl Iterator<Item = &SourceFile> {
        self.sources().files.iter().filter(move |f| f.kind == kind)
    }
}

fn relative_display(root_dir: &Path, path: &Path) -> String {
    path.strip_prefix(root_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
