//! Lexical analyzer for the eexpr source language: turns a UTF-8 byte slice
//! into an ordered token stream plus a structured, non-fatal diagnostic
//! stream and an optional fatal diagnostic. File I/O, the downstream
//! cooking passes, and the CLI are external collaborators, not part of this
//! crate.

pub mod bigint;
pub mod decode;
pub mod error;
pub mod escape;
pub mod lexer;
pub mod params;
pub mod position;
pub mod reader;
pub mod token;

pub use error::{Error, ErrorKind};
pub use lexer::{LexResult, Lexer};
pub use position::{Point, Span};
pub use token::{SpaceChar, SpliceKind, Text, Token, TokenKind};

/// Tokenizes `input` to completion, the crate's single entry point.
pub fn lex(input: &[u8]) -> LexResult<'_> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_is_the_same_as_constructing_a_lexer_directly() {
        let a = lex(b"1 + 2");
        let b = Lexer::new(b"1 + 2").tokenize();
        assert_eq!(a.tokens, b.tokens);
    }
}
