//! Symbol (bare identifier-like run) recognizer. Never allocates: a
//! symbol's text is always a zero-copy borrow of the input.

use crate::decode::DecodedChar;
use crate::params;
use crate::position::Span;
use crate::token::{Text, Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn take_symbol(&mut self) -> bool {
        let lookahead = self.reader.peek_n(2);
        let mut codepoints = Vec::with_capacity(2);
        for dc in &lookahead {
            match dc {
                DecodedChar::Codepoint(cp) => codepoints.push(*cp),
                _ => break,
            }
        }
        if !params::is_symbol_start(&codepoints) {
            return false;
        }

        let start = self.reader.position();
        loop {
            let (dc, len) = self.reader.peek();
            match dc {
                DecodedChar::Codepoint(cp) if params::is_symbol_char(cp) => self.reader.advance(len, 1),
                _ => break,
            }
        }
        let end = self.reader.position();
        let text = self.reader.slice(start.byte, end.byte);
        self.add_tok(Token::new(TokenKind::Symbol { text: Text::Borrowed(text) }, Span::new(start, end)));
        true
    }
}
