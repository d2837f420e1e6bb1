//! String literal scanner for C# source text.
//!
//! The scanner walks the source once, left to right, and yields every string
//! literal together with the position of its opening quote. Comments are
//! skipped, so literals inside `//` or `/* */` are never reported.
//!
//! Supported literal forms:
//!
//! - regular strings: `"..."` (backslash escapes kept as written)
//! - verbatim strings: `@"..."` (`""` collapsed to `"`)
//! - interpolated strings: `$"..."`, `$@"..."`, `@$"..."`
//!
//! Interpolation holes (`{...}`) are not parsed: a quote inside a hole ends
//! the literal early.
//!
//! ## Module Structure
//!
//! - `token`: `SourcePosition`, `LiteralKind`, `StringToken`
//! - `cursor`: character cursor with line/column tracking
//! - `literals`: the `Literals` iterator (the scanning state machine)

mod cursor;
mod literals;
mod token;


pub use literals::Literals;
pub use token::{LiteralKind, SourcePosition, StringToken};

/// Scan `source` for string literals.
///
/// The returned iterator is lazy and yields tokens in document order. An
/// unterminated literal at the end of input yields no token.
///
/// ```
/// use glotcs::scanner::{LiteralKind, scan};
///
/// let tokens: Vec<_> = scan(r#"var s = @"say ""hi"""; // "not me""#).collect();
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].value, r#"say "hi""#);
/// assert_eq!(tokens[0].kind, LiteralKind::Verbatim);
/// ```
pub fn scan(source: &str) -> Literals<'_> {
    Literals::new(source)
}
