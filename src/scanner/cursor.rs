use std::str::Chars;

use super::token::SourcePosition;

/// Character cursor with line/column tracking.
///
/// Cloning a cursor is cheap and is how the scanner takes a checkpoint
/// before a speculative read (literal prefixes).
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'src> {
    chars: Chars<'src>,
    position: SourcePosition,
    consumed: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            chars: source.chars(),
            position: SourcePosition::start(),
            consumed: 0,
        }
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    pub(crate) fn peek_next(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next()
    }

    /// Consume one character, keeping line and column in sync.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.consumed += 1;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn position(&self) -> SourcePosition {
        self.position
    }

    /// Number of characters consumed so far.
    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.peek().is_none()
    }
}
