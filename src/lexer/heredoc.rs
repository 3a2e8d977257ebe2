//! Heredoc recognizer: a multi-line, escape-free string bounded by a
//! caller-chosen tag (`"""tag ... tag"""`), optionally indented. Grounded on
//! `takeHeredoc` in the original C lexer, including its two non-obvious
//! details: the closing-backslash byte counts toward the recorded indent
//! width, and a tab-indented heredoc needs one extra literal tab right after
//! that backslash for column alignment.

use crate::decode::DecodedChar;
use crate::error::ErrorKind;
use crate::params::{self, ESCAPE_LEADER, PLAIN_STRING_TRIPLE};
use crate::position::{Point, Span};
use crate::token::{SpliceKind, Text, Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn take_heredoc(&mut self) -> bool {
        if !self.reader.starts_with(PLAIN_STRING_TRIPLE) {
            return false;
        }
        let start = self.reader.position();
        self.reader.advance(3, 3);

        let tag_start_byte = self.reader.position().byte;
        let mut tag_char_len = 0usize;
        loop {
            let (dc, len) = self.reader.peek();
            match dc {
                DecodedChar::Codepoint(cp) if params::is_symbol_char(cp) => {
                    self.reader.advance(len, 1);
                    tag_char_len += 1;
                }
                _ => break,
            }
        }
        let tag_end_byte = self.reader.position().byte;
        let tag: Vec<u8> = self.reader.slice(tag_start_byte, tag_end_byte).to_vec();

        let mut trailing = self.skip_heredoc_whitespace();
        let mut indented = false;
        if self.reader.byte_at(0) == Some(ESCAPE_LEADER) {
            indented = true;
            self.reader.advance(1, 1);
            trailing = self.skip_heredoc_whitespace();
        }
        if trailing {
            self.push_error(ErrorKind::TrailingSpace, Span::point(self.reader.position()));
        }

        let Some((open_nl_kind, open_nl_len)) = self.reader.peek_newline() else {
            let end = self.reader.position();
            self.set_fatal(ErrorKind::HeredocBadOpen, Span::new(start, end));
            self.add_tok(Token::new(TokenKind::StringError, Span::new(start, end)));
            return true;
        };
        let open_nl_start = self.reader.position();
        self.reader.inc_line(open_nl_len);
        self.record_newline_dialect(open_nl_kind, Span::new(open_nl_start, self.reader.position()));

        let mut indent_char = 0u8;
        let mut indent_n_chars = 0usize;
        if indented {
            match self.read_heredoc_indent_definition() {
                Some((ch, n)) => {
                    indent_char = ch;
                    indent_n_chars = n;
                }
                None => {
                    let end = self.reader.position();
                    self.set_fatal(ErrorKind::HeredocBadIndentDefinition, Span::new(start, end));
                    self.add_tok(Token::new(TokenKind::StringError, Span::new(start, end)));
                    return true;
                }
            }
            match self.discovered_indent {
                None => self.discovered_indent = Some(indent_char),
                Some(prev) if prev != indent_char => {
                    self.push_error(ErrorKind::MixedIndentation, Span::point(self.reader.position()))
                }
                _ => {}
            }
        }

        self.take_heredoc_body(&tag, tag_char_len, indented, indent_char, indent_n_chars, start)
    }

    /// Consumes a run of space/tab characters, returning whether any were
    /// seen (the caller decides whether that counts as `TrailingSpace`).
    pub(crate) fn skip_heredoc_whitespace(&mut self) -> bool {
        let mut any = false;
        loop {
            let (dc, len) = self.reader.peek();
            match dc {
                DecodedChar::Codepoint(cp) if params::is_space_char(cp) => {
                    self.reader.advance(len, 1);
                    any = true;
                }
                _ => break,
            }
        }
        any
    }

    /// Reads the indent-definition line: a run of a single indent character
    /// (space or tab), the escape leader, an extra alignment tab when
    /// tab-indented, and a terminating newline. Returns the indent character
    /// and the total character count to strip from each body line —
    /// including the escape-leader byte itself (and the alignment tab, when
    /// present), matching the original's unconditional `indentNChars += 1`
    /// at each of those positions.
    fn read_heredoc_indent_definition(&mut self) -> Option<(u8, usize)> {
        let (dc, _) = self.reader.peek();
        let DecodedChar::Codepoint(cp) = dc else { return None };
        if cp > 0x7F {
            return None;
        }
        let ch = cp as u8;
        if ch != b' ' && ch != b'\t' {
            return None;
        }

        let mut n = 0usize;
        loop {
            let (dc2, len2) = self.reader.peek();
            match dc2 {
                DecodedChar::Codepoint(cp2) if cp2 <= 0x7F && cp2 as u8 == ch => {
                    self.reader.advance(len2, 1);
                    n += 1;
                }
                _ => break,
            }
        }

        if self.reader.byte_at(0) != Some(ESCAPE_LEADER) {
            return None;
        }
        self.reader.advance(1, 1);
        n += 1;

        if ch == b'\t' {
            if self.reader.byte_at(0) != Some(b'\t') {
                return None;
            }
            self.reader.advance(1, 1);
            n += 1;
        }

        let (nl_kind, nl_len) = self.reader.peek_newline()?;
        let nl_start = self.reader.position();
        self.reader.inc_line(nl_len);
        self.record_newline_dialect(nl_kind, Span::new(nl_start, self.reader.position()));

        Some((ch, n))
    }

    #[allow(clippy::too_many_arguments)]
    fn take_heredoc_body(
        &mut self,
        tag: &[u8],
        tag_char_len: usize,
        indented: bool,
        indent_char: u8,
        indent_n_chars: usize,
        start: Point,
    ) -> bool {
        let mut closing_marker = tag.to_vec();
        closing_marker.extend_from_slice(PLAIN_STRING_TRIPLE);
        let closing_marker_char_len = tag_char_len + 3;

        let mut buf: Vec<u8> = Vec::new();

        loop {
            loop {
                if self.reader.is_eof() || self.reader.peek_newline().is_some() {
                    break;
                }
                let line_byte_start = self.reader.position().byte;
                match self.reader.peek() {
                    (DecodedChar::Codepoint(_), len) => self.reader.advance(len, 1),
                    (DecodedChar::BadByte(_), _) => self.reader.advance(1, 1),
                    (DecodedChar::Eof, _) => break,
                }
                let line_byte_end = self.reader.position().byte;
                buf.extend_from_slice(self.reader.slice(line_byte_start, line_byte_end));
            }

            let Some((nl_kind, nl_len)) = self.reader.peek_newline() else {
                let end = self.reader.position();
                self.set_fatal(ErrorKind::UnclosedHeredoc, Span::new(start, end));
                self.add_tok(Token::new(TokenKind::StringError, Span::new(start, end)));
                return true;
            };
            let preserved_newline: &[u8] = match nl_kind {
                params::NewlineKind::Lf => b"\n",
                params::NewlineKind::Cr => b"\r",
                params::NewlineKind::CrLf => b"\r\n",
            };
            let nl_start = self.reader.position();
            self.reader.inc_line(nl_len);
            self.record_newline_dialect(nl_kind, Span::new(nl_start, self.reader.position()));

            let mut consumed_indent = 0usize;
            if indented {
                while consumed_indent < indent_n_chars {
                    match self.reader.byte_at(0) {
                        Some(b) if b == indent_char => {
                            self.reader.advance(1, 1);
                            consumed_indent += 1;
                        }
                        _ => break,
                    }
                }
                if self.reader.peek_newline().is_some() {
                    if consumed_indent != 0 {
                        self.push_error(ErrorKind::TrailingSpace, Span::point(self.reader.position()));
                    }
                } else if consumed_indent < indent_n_chars && !self.reader.is_eof() {
                    self.push_error(ErrorKind::HeredocBadIndentation, Span::point(self.reader.position()));
                }
            }

            if self.reader.starts_with(&closing_marker) {
                self.reader.advance(closing_marker.len(), closing_marker_char_len);
                break;
            }
            buf.extend_from_slice(preserved_newline);
        }

        let end = self.reader.position();
        self.add_tok(Token::new(
            TokenKind::String { bytes: Text::Owned(buf), splice: SpliceKind::Plain },
            Span::new(start, end),
        ));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer as RootLexer;

    #[test]
    fn plain_heredoc_excludes_trailing_newline() {
        let mut lexer = RootLexer::new(b"\"\"\"END\nhello\nEND\"\"\"");
        assert!(lexer.take_heredoc());
        match lexer.tokens.pop().unwrap().kind {
            TokenKind::String { bytes, splice } => {
                assert_eq!(bytes.as_bytes(), b"hello");
                assert_eq!(splice, SpliceKind::Plain);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(lexer.errors.is_empty());
        assert!(lexer.fatal.is_none());
    }

    #[test]
    fn unterminated_heredoc_is_fatal() {
        let mut lexer = RootLexer::new(b"\"\"\"END\nhello\n");
        assert!(lexer.take_heredoc());
        assert!(lexer.fatal.is_some());
    }

    #[test]
    fn missing_newline_after_tag_is_fatal() {
        let mut lexer = RootLexer::new(b"\"\"\"END no newline here");
        assert!(lexer.take_heredoc());
        assert!(matches!(lexer.fatal.as_ref().unwrap().kind, ErrorKind::HeredocBadOpen));
    }

    #[test]
    fn non_heredoc_input_is_rejected() {
        let mut lexer = RootLexer::new(b"\"plain\"");
        assert!(!lexer.take_heredoc());
    }
}
