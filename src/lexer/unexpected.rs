//! Unconditional last-resort recognizer: consumes exactly one codepoint (or
//! one byte, if invalid UTF-8) and reports it. Always returns `true` — the
//! dispatch loop's fixed-order chain relies on this to guarantee progress.

use crate::decode::DecodedChar;
use crate::error::ErrorKind;
use crate::position::Span;
use crate::token::{Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn take_unexpected(&mut self) -> bool {
        let start = self.reader.position();
        let (dc, len) = self.reader.peek();
        let kind = match dc {
            DecodedChar::Codepoint(cp) => {
                self.reader.advance(len, 1);
                ErrorKind::BadChar { codepoint: cp }
            }
            DecodedChar::BadByte(byte) => {
                self.reader.advance(1, 1);
                ErrorKind::BadBytes { byte }
            }
            DecodedChar::Eof => {
                // The EOF recognizer is tried immediately before this one in
                // the dispatch order, so this is unreachable in practice;
                // handled defensively rather than with an assert to keep
                // `take_unexpected` total.
                self.add_tok(Token::new(TokenKind::Eof, Span::point(start)));
                return true;
            }
        };
        let end = self.reader.position();
        self.push_error(kind, Span::new(start, end));
        true
    }
}
