use std::fmt;

/// 1-based line/column position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position of the first character of a file.
    pub fn start() -> Self {
        Self::new(1, 1)
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// How a string literal was written, derived from its prefix.
///
/// - `"..."` is `Regular`
/// - `@"..."` is `Verbatim`
/// - `$"..."` is `Interpolated`
/// - `$@"..."` and `@$"..."` are `VerbatimInterpolated`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Regular,
    Verbatim,
    Interpolated,
    VerbatimInterpolated,
}

impl LiteralKind {
    pub fn from_flags(verbatim: bool, interpolated: bool) -> Self {
        match (verbatim, interpolated) {
            (false, false) => LiteralKind::Regular,
            (true, false) => LiteralKind::Verbatim,
            (false, true) => LiteralKind::Interpolated,
            (true, true) => LiteralKind::VerbatimInterpolated,
        }
    }

    /// Verbatim literals only escape quotes by doubling them.
    pub fn is_verbatim(&self) -> bool {
        matches!(
            self,
            LiteralKind::Verbatim | LiteralKind::VerbatimInterpolated
        )
    }

    pub fn is_interpolated(&self) -> bool {
        matches!(
            self,
            LiteralKind::Interpolated | LiteralKind::VerbatimInterpolated
        )
    }
}

/// A string literal found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringToken {
    /// Position of the opening quote (not the prefix).
    pub start: SourcePosition,
    pub kind: LiteralKind,
    /// Content between the quotes. Verbatim `""` is collapsed to `"`,
    /// backslash escapes are kept as written.
    pub value: String,
}

impl StringToken {
    pub fn line(&self) -> usize {
        self.start.line
    }

    pub fn column(&self) -> usize {
        self.start.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_flags() {
        assert_eq!(LiteralKind::from_flags(false, false), LiteralKind::Regular);
        assert_eq!(LiteralKind::from_flags(true, false), LiteralKind::Verbatim);
        assert_eq!(
            LiteralKind::from_flags(false, true),
            LiteralKind::Interpolated
        );
        assert_eq!(
            LiteralKind::from_flags(true, true),
            LiteralKind::VerbatimInterpolated
        );
    }

    #[test]
    fn test_kind_flags_round_trip() {
        for kind in [
            LiteralKind::Regular,
            LiteralKind::Verbatim,
            LiteralKind::Interpolated,
            LiteralKind::VerbatimInterpolated,
        ] {
            assert_eq!(
                LiteralKind::from_flags(kind.is_verbatim(), kind.is_interpolated()),
                kind
            );
        }
    }

    #[test]
    fn test_position_display() {
        assert_eq!(SourcePosition::new(12, 4).to_string(), "12:4");
        assert_eq!(SourcePosition::default(), SourcePosition::new(1, 1));
    }
}
