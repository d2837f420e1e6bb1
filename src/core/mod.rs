//! Core analysis engine.
//!
//! Loads configuration and source files, and extracts the data the rules
//! work on.
//!
//! ## Module Structure
//!
//! - `context`: CheckContext (config, discovered files, lazily read sources)
//! - `data`: SourceLocation, SourceContext, SourceFile
//! - `directives`: ignore-marker handling
//! - `file_scanner`: directory walking with ignore patterns
//! - `key_usage`: translation key extraction from source lines
//! - `locale`: en-US key loading from the localization service

pub mod context;
pub mod data;
pub mod directives;
pub mod file_scanner;
pub mod key_usage;
pub mod locale;

pub use context::{CheckContext, LoadedSources};
pub use data::{FileKind, SourceContext, SourceFile, SourceLocation, line_at};
