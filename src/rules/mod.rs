//! Rule implementations for glotcs.
//!
//! Each rule has a `check_*_issues` entry point taking the [`CheckContext`]
//! and a pure `check_*` function taking only the inputs it needs.
//!
//! ## Module Structure
//!
//! - `helpers`: text heuristics (UI copy, key shapes, logging contexts)
//! - `hardcoded`: hardcoded UI copy in C# string literals
//! - `missing`: keys used in C#/AXAML but absent from the en-US dictionary
//!
//! [`CheckContext`]: crate::core::CheckContext

pub mod hardcoded;
pub mod helpers;
pub mod missing;
