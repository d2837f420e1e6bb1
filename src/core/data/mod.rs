//! Core data types shared by the rules.
//!
//! ## Module Structure
//!
//! - `source`: Source code location types (SourceContext, SourceLocation)
//! - `source_file`: Loaded source files (SourceFile, FileKind)

pub mod source;
pub mod source_file;

pub use source::{SourceContext, SourceLocation};
pub use source_file::{FileKind, SourceFile, line_at};
