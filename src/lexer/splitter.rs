//! Splitter recognizer: `:`, `.`, `...`, `;`, `,`. Two/three-character
//! lookahead resolves `.` vs `...`.

use crate::params::{self, SplitterKind};
use crate::position::Span;
use crate::token::{Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn take_splitter(&mut self) -> bool {
        let Some((kind, len)) = params::decode_splitter(self.reader.remaining()) else { return false };

        let start = self.reader.position();
        self.reader.advance(len, len);
        let end = self.reader.position();
        let span = Span::new(start, end);

        let token_kind = match kind {
            SplitterKind::Colon => TokenKind::UnknownColon,
            SplitterKind::Dot => TokenKind::UnknownDot,
            SplitterKind::Ellipsis => TokenKind::Ellipsis,
            SplitterKind::Semicolon => TokenKind::Semicolon,
            SplitterKind::Comma => TokenKind::Comma,
        };
        self.add_tok(Token::new(token_kind, span));
        true
    }
}
