//! Diagnostics: a hand-rolled tagged struct, not a `thiserror`/`anyhow`
//! derive — the recognizers never need error-trait plumbing (`Display`,
//! `std::error::Error`, `From` conversions across crates), only a value they
//! can push onto an append-only stream and a renderer can later format.

use crate::position::Span;

/// One diagnostic payload slot per row of the non-fatal/fatal kind tables.
/// Carries whatever detail the trigger condition produced; kinds with no
/// extra detail beyond their span are unit variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    // Non-fatal.
    BadBytes { byte: u8 },
    BadChar { codepoint: u32 },
    MixedSpace,
    MixedNewlines,
    MixedIndentation,
    TrailingSpace,
    BadDigitSeparator,
    MissingExponent,
    BadExponentSign,
    BadEscapeChar { codepoint: u32 },
    BadEscapeCode { digits: [Option<u8>; 6] },
    MissingLinePickup,
    BadCodepoint,
    UnclosedCodepoint,
    UnicodeOverflow,
    BadStringChar { codepoint: u32 },
    UnclosedString,
    HeredocBadIndentation,

    // Fatal — placed into `Lexer::fatal` rather than the error stream.
    HeredocBadOpen,
    HeredocBadIndentDefinition,
    UnclosedHeredoc,
}

impl ErrorKind {
    /// Whether this kind, by its nature, always terminates the dispatch
    /// loop. `BadBytes` is fatal only in the specific mid-comment context
    /// (the comment recognizer is responsible for routing it to
    /// `Lexer::fatal` itself); everywhere else it is non-fatal, so it is
    /// deliberately excluded here.
    pub fn is_always_fatal(&self) -> bool {
        matches!(
            self,
            ErrorKind::HeredocBadOpen | ErrorKind::HeredocBadIndentDefinition | ErrorKind::UnclosedHeredoc
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub span: Span,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Error {
        Error { kind, span }
    }
}
