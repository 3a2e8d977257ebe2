//! Cursor and location bookkeeping shared by every recognizer: current byte
//! position, current line/column, and the handful of non-mutating lookahead
//! helpers recognizers use to decide whether to commit. Mirrors the
//! teacher's `CharReader`, generalized from byte+`char` tracking to the
//! decoder's signed-codepoint convention this crate's recognizers need.

use crate::decode::{self, DecodedChar};
use crate::params::NewlineKind;
use crate::position::Point;

#[derive(Debug, Clone)]
pub struct Reader<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Reader<'a> {
    pub fn new(input: &'a [u8]) -> Reader<'a> {
        Reader { input, pos: 0, line: 1, column: 1 }
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn position(&self) -> Point {
        Point { byte: self.pos, line: self.line, column: self.column }
    }

    /// The unconsumed remainder of the input.
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.remaining().starts_with(pat)
    }

    /// Peeks the next codepoint without consuming it.
    pub fn peek(&self) -> (DecodedChar, usize) {
        decode::decode_one(self.remaining())
    }

    /// Peeks up to `n` codepoints without consuming any.
    pub fn peek_n(&self, n: usize) -> Vec<DecodedChar> {
        decode::decode_n(self.remaining(), n)
    }

    /// Advances the cursor by `byte_len` bytes and `char_len` codepoints,
    /// for any non-newline advance (the caller is responsible for not using
    /// this to cross a newline — use `inc_line` there instead).
    pub fn advance(&mut self, byte_len: usize, char_len: usize) {
        self.pos += byte_len;
        self.column += char_len;
    }

    /// Advances across a newline of `byte_len` bytes (1 for LF/CR, 2 for
    /// CRLF), resetting the column and incrementing the line. CRLF is one
    /// newline event: exactly one call to `inc_line` covers both bytes.
    pub fn inc_line(&mut self, byte_len: usize) {
        self.pos += byte_len;
        self.line += 1;
        self.column = 1;
    }

    /// Slices the input between two byte offsets previously obtained from
    /// this reader's own `position().byte`.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.input[start..end]
    }

    /// Convenience: does the input at the cursor start with a newline, and
    /// if so which kind and how many bytes.
    pub fn peek_newline(&self) -> Option<(NewlineKind, usize)> {
        crate::params::decode_newline(self.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_line_and_column_across_newlines() {
        let mut r = Reader::new(b"ab\ncd");
        r.advance(1, 1);
        r.advance(1, 1);
        assert_eq!(r.position(), Point { byte: 2, line: 1, column: 3 });
        r.inc_line(1);
        assert_eq!(r.position(), Point { byte: 3, line: 2, column: 1 });
    }

    #[test]
    fn crlf_is_a_single_line_increment() {
        let mut r = Reader::new(b"\r\nx");
        let (kind, len) = r.peek_newline().unwrap();
        assert_eq!(kind, NewlineKind::CrLf);
        r.inc_line(len);
        assert_eq!(r.position(), Point { byte: 2, line: 2, column: 1 });
    }

    #[test]
    fn peek_does_not_mutate_cursor() {
        let r = Reader::new(b"xyz");
        let before = r.position();
        let _ = r.peek();
        let _ = r.peek_n(2);
        assert_eq!(r.position(), before);
    }

    #[test]
    fn eof_after_last_byte() {
        let mut r = Reader::new(b"a");
        assert!(!r.is_eof());
        r.advance(1, 1);
        assert!(r.is_eof());
    }
}
