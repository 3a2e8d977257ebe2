//! Horizontal-whitespace recognizer.

use crate::decode::DecodedChar;
use crate::error::ErrorKind;
use crate::params;
use crate::position::Span;
use crate::token::{SpaceChar, Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn take_whitespace(&mut self) -> bool {
        let (dc, _) = self.reader.peek();
        let DecodedChar::Codepoint(first) = dc else { return false };
        if !params::is_space_char(first) {
            return false;
        }

        let start = self.reader.position();
        let mut seen: Option<u8> = None;
        let mut mixed = false;
        let mut count = 0usize;

        loop {
            let (dc, len) = self.reader.peek();
            let DecodedChar::Codepoint(cp) = dc else { break };
            if !params::is_space_char(cp) {
                break;
            }
            let byte = cp as u8;
            match seen {
                None => seen = Some(byte),
                Some(prev) if prev != byte => mixed = true,
                _ => {}
            }
            self.reader.advance(len, 1);
            count += 1;
        }

        let end = self.reader.position();
        let span = Span::new(start, end);
        let ch = if mixed { SpaceChar::Mixed } else { SpaceChar::Char(seen.unwrap()) };

        if mixed {
            self.push_error(ErrorKind::MixedSpace, span);
        }
        self.add_tok(Token::new(TokenKind::UnknownSpace { ch, count }, span));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer as RootLexer;

    #[test]
    fn single_space_run() {
        let mut lexer = RootLexer::new(b"   x");
        assert!(lexer.take_whitespace());
        match lexer.tokens.pop().unwrap().kind {
            TokenKind::UnknownSpace { ch: SpaceChar::Char(b' '), count: 3 } => {}
            other => panic!("unexpected: {other:?}"),
        }
        assert!(lexer.errors.is_empty());
    }

    #[test]
    fn mixed_run_is_flagged() {
        let mut lexer = RootLexer::new(b" \t x");
        assert!(lexer.take_whitespace());
        match lexer.tokens.pop().unwrap().kind {
            TokenKind::UnknownSpace { ch: SpaceChar::Mixed, count: 3 } => {}
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(lexer.errors.len(), 1);
        assert_eq!(lexer.errors[0].kind, ErrorKind::MixedSpace);
    }

    #[test]
    fn non_space_input_is_rejected() {
        let mut lexer = RootLexer::new(b"x");
        assert!(!lexer.take_whitespace());
    }
}
