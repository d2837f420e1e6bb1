//! glotcs - i18n checker for C# / Avalonia projects
//!
//! glotcs is a CLI tool and library that finds hardcoded UI copy in C# string
//! literals and translation keys used in C# or AXAML but missing from the
//! en-US dictionary.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Source discovery, key extraction and check context
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Detection rules
//! - `scanner`: Lexical scanner for C# string literals and comments
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod scanner;
pub mod utils;
