use std::iter::FusedIterator;

use super::{
    cursor::Cursor,
    token::{LiteralKind, SourcePosition, StringToken},
};

/// Lazy iterator over the string literals of one source text.
///
/// Created by [`scan`](super::scan). Each call to `next` resumes the walk
/// where the previous token ended; dropping the iterator abandons the scan.
#[derive(Debug, Clone)]
pub struct Literals<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Literals<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Current cursor position.
    pub fn position(&self) -> SourcePosition {
        self.cursor.position()
    }

    /// Number of characters consumed so far. Equals the input length
    /// once the iterator is exhausted.
    pub fn consumed(&self) -> usize {
        self.cursor.consumed()
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.cursor.peek() {
            if c == '\n' {
                break;
            }
            self.cursor.advance();
        }
    }

    fn skip_block_comment(&mut self) {
        // `/*`
        self.cursor.advance();
        self.cursor.advance();
        while let Some(c) = self.cursor.advance() {
            if c == '*' && self.cursor.eat('/') {
                return;
            }
        }
    }

    /// Try to consume a `$`, `@`, `$@` or `@$` prefix that is directly
    /// followed by a quote. On failure the cursor is left untouched.
    fn eat_prefix(&mut self) -> Option<LiteralKind> {
        let checkpoint = self.cursor.clone();
        let mut verbatim = false;
        let mut interpolated = false;

        loop {
            match self.cursor.peek() {
                Some('@') if !verbatim => verbatim = true,
                Some('$') if !interpolated => interpolated = true,
                _ => break,
            }
            self.cursor.advance();
        }

        if self.cursor.peek() == Some('"') {
            Some(LiteralKind::from_flags(verbatim, interpolated))
        } else {
            self.cursor = checkpoint;
            None
        }
    }

    /// Read a literal with the cursor on its opening quote.
    ///
    /// Returns `None` when the input ends before the closing quote.
    fn read_literal(&mut self, kind: LiteralKind) -> Option<StringToken> {
        let start = self.cursor.position();
        self.cursor.advance();

        let mut value = String::new();
        if kind.is_verbatim() {
            loop {
                match self.cursor.advance()? {
                    '"' if self.cursor.eat('"') => value.push('"'),
                    '"' => break,
                    c => value.push(c),
                }
            }
        } else {
            loop {
                match self.cursor.advance()? {
                    '"' => break,
                    '\\' => {
                        value.push('\\');
                        value.push(self.cursor.advance()?);
                    }
                    c => value.push(c),
                }
            }
        }

        Some(StringToken { start, kind, value })
    }
}

impl Iterator for Literals<'_> {
    type Item = StringToken;

    fn next(&mut self) -> Option<StringToken> {
        while let Some(c) = self.cursor.peek() {
            match (c, self.cursor.peek_next()) {
                ('/', Some('*')) => self.skip_block_comment(),
                ('/', Some('/')) => self.skip_line_comment(),
                ('$' | '@', _) => match self.eat_prefix() {
                    Some(kind) => return self.read_literal(kind),
                    None => {
                        self.cursor.advance();
                    }
                },
                ('"', _) => return self.read_literal(LiteralKind::Regular),
                _ => {
                    self.cursor.advance();
                }
            }
        }
        None
    }
}

// An unterminated literal consumes the rest of the input, so `None`
// is only ever returned at end of input.
impl FusedIterator for Literals<'_> {}
