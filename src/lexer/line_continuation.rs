//! Line-continuation recognizer: a bare escape leader at end of line, used
//! to join a logical line across a physical newline outside string context.

use crate::error::ErrorKind;
use crate::params::ESCAPE_LEADER;
use crate::position::Span;
use crate::token::{SpaceChar, Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn take_line_continuation(&mut self) -> bool {
        if self.reader.byte_at(0) != Some(ESCAPE_LEADER) {
            return false;
        }

        let start = self.reader.position();
        self.reader.advance(1, 1);
        let trailing = self.skip_heredoc_whitespace();

        let Some((nl_kind, nl_len)) = self.reader.peek_newline() else {
            let end = self.reader.position();
            self.push_error(ErrorKind::BadChar { codepoint: ESCAPE_LEADER as u32 }, Span::new(start, end));
            self.add_tok(Token::new(TokenKind::UnknownSpace { ch: SpaceChar::Char(ESCAPE_LEADER), count: 0 }, Span::new(start, end)));
            return true;
        };

        let nl_start = self.reader.position();
        self.reader.inc_line(nl_len);
        self.record_newline_dialect(nl_kind, Span::new(nl_start, self.reader.position()));

        let end = self.reader.position();
        if trailing {
            self.push_error(ErrorKind::TrailingSpace, Span::new(start, end));
        }

        self.add_tok(Token::new(TokenKind::UnknownSpace { ch: SpaceChar::Char(ESCAPE_LEADER), count: 0 }, Span::new(start, end)));
        true
    }
}
