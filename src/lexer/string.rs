//! Single-line string recognizer, including interpolation splice kinds.
//! Tried after the heredoc recognizer in the dispatch order, so a `"""`
//! prefix is always claimed by heredoc first; this recognizer only ever
//! sees a single `"` or `` ` ``.

use crate::decode::{self, DecodedChar};
use crate::error::ErrorKind;
use crate::escape;
use crate::params::{self, is_string_char};
use crate::position::Span;
use crate::token::{SpliceKind, Text, Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn take_string(&mut self) -> bool {
        let Some(open) = self.reader.byte_at(0) else { return false };
        if !params::is_string_delim(open) {
            return false;
        }

        let start = self.reader.position();
        self.reader.advance(1, 1);
        let mut buf: Vec<u8> = Vec::new();

        loop {
            if self.reader.is_eof() || self.reader.peek_newline().is_some() {
                break;
            }
            if let Some(b) = self.reader.byte_at(0) {
                if params::is_string_delim(b) {
                    break;
                }
            }

            match self.reader.peek() {
                (DecodedChar::Codepoint(cp), len) if cp <= 0x7F && cp as u8 == params::ESCAPE_LEADER => {
                    self.reader.advance(len, 1);
                    self.take_string_escape(&mut buf);
                }
                (DecodedChar::Codepoint(cp), len) if is_string_char(cp) => {
                    self.reader.advance(len, 1);
                    decode::encode_utf8(&mut buf, cp);
                }
                (DecodedChar::Codepoint(cp), len) => {
                    self.reader.advance(len, 1);
                    self.push_error(ErrorKind::BadStringChar { codepoint: cp }, Span::point(self.reader.position()));
                }
                (DecodedChar::BadByte(b), _) => {
                    self.reader.advance(1, 1);
                    self.push_error(ErrorKind::BadStringChar { codepoint: b as u32 }, Span::point(self.reader.position()));
                }
                (DecodedChar::Eof, _) => break,
            }
        }

        let closing = self.reader.byte_at(0).filter(|b| params::is_string_delim(*b));
        let unclosed = closing.is_none();
        if let Some(_) = closing {
            self.reader.advance(1, 1);
        }

        let splice = match (open, closing) {
            (b'"', Some(b'"')) => SpliceKind::Plain,
            (b'"', Some(b'`')) => SpliceKind::Open,
            (b'`', Some(b'`')) => SpliceKind::Middle,
            (b'`', Some(b'"')) => SpliceKind::Close,
            _ => SpliceKind::Plain,
        };

        let end = self.reader.position();
        if unclosed {
            self.push_error(ErrorKind::UnclosedString, Span::new(start, end));
        }
        self.add_tok(Token::new(TokenKind::String { bytes: Text::Owned(buf), splice }, Span::new(start, end)));
        true
    }

    /// Handles the body of a string escape after the leader has already
    /// been consumed: tries the null escape (line pickup or `&`) first,
    /// since it contributes no bytes, then falls back to a character
    /// escape; reports `BadEscapeChar` if neither matches.
    fn take_string_escape(&mut self, buf: &mut Vec<u8>) {
        let null_outcome = escape::take_null_escape(&mut self.reader);
        if null_outcome.consumed {
            if let Some(err) = null_outcome.error {
                self.push_error(err, Span::point(self.reader.position()));
            }
            return;
        }

        let escape_start = self.reader.position();
        let outcome = escape::take_char_escape(&mut self.reader);
        let escape_end = self.reader.position();
        match outcome.value {
            Some(v) => {
                if let Some(err) = outcome.error {
                    self.push_error(err, Span::new(escape_start, escape_end));
                }
                decode::encode_utf8(buf, v);
            }
            None => {
                let (dc, len) = self.reader.peek();
                let codepoint = match dc {
                    DecodedChar::Codepoint(cp) => {
                        self.reader.advance(len, 1);
                        cp
                    }
                    DecodedChar::BadByte(b) => {
                        self.reader.advance(1, 1);
                        b as u32
                    }
                    DecodedChar::Eof => 0,
                };
                self.push_error(ErrorKind::BadEscapeChar { codepoint }, Span::new(escape_start, self.reader.position()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer as RootLexer;

    #[test]
    fn plain_string_with_escaped_newline() {
        let mut lexer = RootLexer::new(b"\"a\\nb\"");
        assert!(lexer.take_string());
        match lexer.tokens.pop().unwrap().kind {
            TokenKind::String { bytes, splice } => {
                assert_eq!(bytes.as_bytes(), b"a\nb");
                assert_eq!(splice, SpliceKind::Plain);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(lexer.errors.is_empty());
    }

    #[test]
    fn open_splice_before_interpolation() {
        let mut lexer = RootLexer::new(b"\"head`");
        assert!(lexer.take_string());
        match lexer.tokens.pop().unwrap().kind {
            TokenKind::String { splice, .. } => assert_eq!(splice, SpliceKind::Open),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn unclosed_string_is_flagged() {
        let mut lexer = RootLexer::new(b"\"abc");
        assert!(lexer.take_string());
        assert!(lexer.errors.iter().any(|e| e.kind == ErrorKind::UnclosedString));
    }

    #[test]
    fn non_string_input_is_rejected() {
        let mut lexer = RootLexer::new(b"x");
        assert!(!lexer.take_string());
    }
}
