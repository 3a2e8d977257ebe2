//! Codepoint-literal recognizer (`'x'`, `'\n'`, `'é'`, ...).

use crate::decode::DecodedChar;
use crate::error::ErrorKind;
use crate::escape;
use crate::params::{self, CODEPOINT_DELIM, ESCAPE_LEADER};
use crate::position::Span;
use crate::token::{Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn take_codepoint(&mut self) -> bool {
        if self.reader.byte_at(0) != Some(CODEPOINT_DELIM) {
            return false;
        }

        let start = self.reader.position();
        self.reader.advance(1, 1);

        let mut value: Option<u32> = None;
        let mut bad_span_start = self.reader.position();

        match self.reader.peek() {
            (DecodedChar::Codepoint(cp), len) if cp <= 0x7F && cp as u8 == ESCAPE_LEADER => {
                self.reader.advance(len, 1);
                let escape_start = self.reader.position();
                let outcome = escape::take_char_escape(&mut self.reader);
                let escape_end = self.reader.position();
                if let Some(err) = outcome.error {
                    self.push_error(err, Span::new(escape_start, escape_end));
                }
                match outcome.value {
                    Some(v) => value = Some(v),
                    None => bad_span_start = escape_start,
                }
            }
            (DecodedChar::Codepoint(cp), len) if params::is_string_char(cp) => {
                self.reader.advance(len, 1);
                value = Some(cp);
            }
            _ => {}
        }

        if value.is_none() {
            let offending = match self.reader.peek() {
                (DecodedChar::Codepoint(cp), len) => {
                    self.reader.advance(len, 1);
                    cp
                }
                (DecodedChar::BadByte(b), _) => {
                    self.reader.advance(1, 1);
                    b as u32
                }
                (DecodedChar::Eof, _) => 0,
            };
            let _ = offending;
            let bad_span_end = self.reader.position();
            self.push_error(ErrorKind::BadCodepoint, Span::new(bad_span_start, bad_span_end));
        } else if let Some(v) = value {
            if v > 0x10FFFF {
                let end = self.reader.position();
                self.push_error(ErrorKind::UnicodeOverflow, Span::new(start, end));
                value = None;
            }
        }

        if self.reader.byte_at(0) == Some(CODEPOINT_DELIM) {
            self.reader.advance(1, 1);
        } else {
            let unclosed_start = self.reader.position();
            loop {
                if self.reader.is_eof() || self.reader.peek_newline().is_some() {
                    break;
                }
                if self.reader.byte_at(0) == Some(CODEPOINT_DELIM) {
                    self.reader.advance(1, 1);
                    break;
                }
                let (dc, len) = self.reader.peek();
                match dc {
                    DecodedChar::Eof => break,
                    _ => self.reader.advance(len.max(1), 1),
                }
            }
            let unclosed_end = self.reader.position();
            self.push_error(ErrorKind::UnclosedCodepoint, Span::new(unclosed_start, unclosed_end));
        }

        let end = self.reader.position();
        if let Some(v) = value {
            self.add_tok(Token::new(TokenKind::Codepoint { value: v }, Span::new(start, end)));
        }
        true
    }
}
