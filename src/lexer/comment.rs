//! Line-comment recognizer.

use crate::decode::DecodedChar;
use crate::error::ErrorKind;
use crate::params::COMMENT_LEADER;
use crate::position::Span;
use crate::token::{Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn take_comment(&mut self) -> bool {
        if self.reader.byte_at(0) != Some(COMMENT_LEADER) {
            return false;
        }

        let start = self.reader.position();
        self.reader.advance(1, 1);

        loop {
            if self.reader.is_eof() || self.reader.peek_newline().is_some() {
                break;
            }
            match self.reader.peek() {
                (DecodedChar::Codepoint(_), len) => self.reader.advance(len, 1),
                (DecodedChar::BadByte(byte), len) => {
                    let bad_start = self.reader.position();
                    self.reader.advance(len, 1);
                    self.set_fatal(ErrorKind::BadBytes { byte }, Span::point(bad_start));
                    break;
                }
                (DecodedChar::Eof, _) => break,
            }
        }

        let end = self.reader.position();
        self.add_tok(Token::new(TokenKind::Comment, Span::new(start, end)));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer as RootLexer;

    #[test]
    fn comment_stops_before_newline() {
        let mut lexer = RootLexer::new(b"# hello\nx");
        assert!(lexer.take_comment());
        assert_eq!(lexer.tokens.pop().unwrap().kind, TokenKind::Comment);
        assert_eq!(lexer.reader.remaining(), b"\nx");
    }

    #[test]
    fn comment_runs_to_eof() {
        let mut lexer = RootLexer::new(b"# hello");
        assert!(lexer.take_comment());
        assert!(lexer.reader.is_eof());
    }

    #[test]
    fn bad_byte_in_comment_is_fatal() {
        let mut lexer = RootLexer::new(&[b'#', 0x80]);
        assert!(lexer.take_comment());
        assert!(lexer.fatal.is_some());
    }

    #[test]
    fn non_comment_input_is_rejected() {
        let mut lexer = RootLexer::new(b"x");
        assert!(!lexer.take_comment());
    }
}
