//! Newline recognizer and newline-dialect discovery.

use crate::error::ErrorKind;
use crate::position::Span;
use crate::token::{Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn take_newline(&mut self) -> bool {
        let Some((kind, len)) = self.reader.peek_newline() else { return false };

        let start = self.reader.position();
        self.reader.inc_line(len);
        let end = self.reader.position();
        let span = Span::new(start, end);

        match self.discovered_newline {
            None => self.discovered_newline = Some(kind),
            Some(prev) if prev != kind => self.push_error(ErrorKind::MixedNewlines, span),
            _ => {}
        }

        self.add_tok(Token::new(TokenKind::UnknownNewline, span));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer as RootLexer;
    use crate::params::NewlineKind;

    #[test]
    fn first_newline_sets_discovered_dialect() {
        let mut lexer = RootLexer::new(b"\n");
        assert!(lexer.take_newline());
        assert_eq!(lexer.discovered_newline, Some(NewlineKind::Lf));
        assert!(lexer.errors.is_empty());
    }

    #[test]
    fn differing_newline_is_flagged_but_does_not_change_dialect() {
        let mut lexer = RootLexer::new(b"");
        lexer.discovered_newline = Some(NewlineKind::Lf);
        lexer.reader = crate::reader::Reader::new(b"\r\n");
        assert!(lexer.take_newline());
        assert_eq!(lexer.discovered_newline, Some(NewlineKind::Lf));
        assert_eq!(lexer.errors[0].kind, ErrorKind::MixedNewlines);
    }

    #[test]
    fn non_newline_input_is_rejected() {
        let mut lexer = RootLexer::new(b"x");
        assert!(!lexer.take_newline());
    }
}
