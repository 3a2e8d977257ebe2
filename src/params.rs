//! Character classification and parameter tables shared by the token
//! recognizers: digit/radix tables, newline and splitter decoders, escape
//! leaders, and the handful of distinguished single characters. Grounded on
//! the constant tables the original C lexer threads through `lexer.c`
//! (`commonEscapes`, the `*HexEscapeLeader` trio, `radixParams`,
//! `genericExpLetter`, `digitSep`, `digitPoint`, `escapeLeader`,
//! `commentChar`, `plainStringDelim`, `nullEscape`).

pub const ESCAPE_LEADER: u8 = b'\\';
pub const COMMENT_LEADER: u8 = b'#';
pub const DIGIT_SEPARATOR: u8 = b'_';
pub const DECIMAL_POINT: u8 = b'.';
pub const CODEPOINT_DELIM: u8 = b'\'';
pub const STRING_DELIMS: [u8; 2] = [b'"', b'`'];
pub const PLAIN_STRING_TRIPLE: &[u8; 3] = b"\"\"\"";
pub const NULL_ESCAPE_LEADER: u8 = b'&';

pub const TWO_HEX_LEADER: u8 = b'x';
pub const FOUR_HEX_LEADER: u8 = b'u';
pub const SIX_HEX_LEADER: u8 = b'U';

pub const DEFAULT_RADIX: u32 = 10;
pub const RADIX_PREFIX: u8 = b'0';
pub const GENERIC_EXP_LETTER_LOWER: u8 = b'^';
pub const GENERIC_EXP_LETTER_UPPER: u8 = b'^';

/// Decodes a common (non-hex, non-null) escape letter to its codepoint, per
/// `commonEscapes`: `n`/`t`/`r` plus every character that escapes to itself
/// (the escape leader, both string delimiters, the codepoint delimiter, the
/// comment leader).
pub fn common_escape(letter: u8) -> Option<u32> {
    match letter {
        b'n' => Some(0x0A),
        b't' => Some(0x09),
        b'r' => Some(0x0D),
        ESCAPE_LEADER => Some(ESCAPE_LEADER as u32),
        b'"' => Some(b'"' as u32),
        b'`' => Some(b'`' as u32),
        CODEPOINT_DELIM => Some(CODEPOINT_DELIM as u32),
        COMMENT_LEADER => Some(COMMENT_LEADER as u32),
        _ => None,
    }
}

/// A hex escape's expected digit count, keyed by its leader letter.
pub fn hex_escape_len(leader: u8) -> Option<usize> {
    match leader {
        TWO_HEX_LEADER => Some(2),
        FOUR_HEX_LEADER => Some(4),
        SIX_HEX_LEADER => Some(6),
        _ => None,
    }
}

pub fn hex_digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Per-radix parameters: the prefix letter (case-insensitive), the radix
/// value, and the letter this radix uses to introduce its own exponent
/// (distinct from the generic `^` letter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixParams {
    pub radix: u32,
    pub letter_lower: u8,
    pub exp_letter_lower: u8,
}

pub const RADIXES: [RadixParams; 4] = [
    RadixParams { radix: 2, letter_lower: b'b', exp_letter_lower: b'b' },
    RadixParams { radix: 8, letter_lower: b'o', exp_letter_lower: b'o' },
    RadixParams { radix: 12, letter_lower: b'd', exp_letter_lower: b'd' },
    RadixParams { radix: 16, letter_lower: b'x', exp_letter_lower: b'x' },
];

/// Looks up radix parameters by prefix letter (case-insensitive), as seen
/// after a `0` radix-prefix digit.
pub fn radix_by_prefix_letter(letter: u8) -> Option<RadixParams> {
    let lower = letter.to_ascii_lowercase();
    RADIXES.iter().copied().find(|r| r.letter_lower == lower)
}

/// Looks up radix parameters by their native exponent letter
/// (case-insensitive), e.g. `x`/`X` introducing a hex-radix exponent.
pub fn radix_by_exp_letter(letter: u8) -> Option<RadixParams> {
    let lower = letter.to_ascii_lowercase();
    RADIXES.iter().copied().find(|r| r.exp_letter_lower == lower)
}

pub const BASE10_EXP_LETTER_LOWER: u8 = b'e';

pub fn is_base10_exp_letter(letter: u8) -> bool {
    letter.to_ascii_lowercase() == BASE10_EXP_LETTER_LOWER
}

pub fn is_generic_exp_letter(letter: u8) -> bool {
    letter == GENERIC_EXP_LETTER_LOWER || letter == GENERIC_EXP_LETTER_UPPER
}

/// Is `byte` a valid digit for `radix`? Case-insensitive for radix > 10.
pub fn is_digit(radix: u32, byte: u8) -> bool {
    match hex_digit_value(byte) {
        Some(v) => (v as u32) < radix,
        None => false,
    }
}

pub fn digit_value(byte: u8) -> Option<u8> {
    hex_digit_value(byte)
}

/// A horizontal-whitespace character: space or tab. Newlines are handled
/// separately by the newline recognizer.
pub fn is_space_char(cp: u32) -> bool {
    cp == 0x20 || cp == 0x09
}

pub fn is_sign(byte: u8) -> bool {
    byte == b'+' || byte == b'-'
}

pub fn is_string_delim(byte: u8) -> bool {
    STRING_DELIMS.contains(&byte)
}

pub fn is_codepoint_delim(byte: u8) -> bool {
    byte == CODEPOINT_DELIM
}

/// A character legal inside a string body outright (no escape needed):
/// anything printable that is not a delimiter, the escape leader, or a
/// newline.
pub fn is_string_char(cp: u32) -> bool {
    if cp > 0x10FFFF {
        return false;
    }
    if cp < 0x20 {
        return false;
    }
    if cp == ESCAPE_LEADER as u32 {
        return false;
    }
    if cp <= 0x7F && is_string_delim(cp as u8) {
        return false;
    }
    true
}

/// A character legal in a bare symbol: not whitespace, not a digit-looking
/// prefix on its own, not a delimiter/wrap/splitter/escape/comment
/// character.
pub fn is_symbol_char(cp: u32) -> bool {
    if cp <= 0x20 {
        return false;
    }
    if cp > 0x7F {
        // Non-ASCII codepoints are accepted in symbols; only the ASCII
        // punctuation reserved for other constructs is excluded below.
        return true;
    }
    let b = cp as u8;
    !matches!(
        b,
        b'(' | b')' | b'[' | b']' | b'{' | b'}' | b':' | b'.' | b';' | b',' | b'"' | b'`' | b'\'' | b'#' | b'\\'
    )
}

/// Two-character lookahead guard: a symbol may not start with a digit, nor
/// with a sign immediately followed by a digit, so the number recognizer
/// (tried before the symbol recognizer in the dispatch loop, but this
/// predicate lets either consult the rule) always gets first claim on
/// numeric-looking prefixes.
pub fn is_symbol_start(lookahead: &[u32]) -> bool {
    let Some(&first) = lookahead.first() else {
        return false;
    };
    if first > 0x7F {
        return is_symbol_char(first);
    }
    let b0 = first as u8;
    if b0.is_ascii_digit() {
        return false;
    }
    if is_sign(b0) {
        if let Some(&second) = lookahead.get(1) {
            if second <= 0x7F && (second as u8).is_ascii_digit() {
                return false;
            }
        }
    }
    is_symbol_char(first)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewlineKind {
    Lf,
    Cr,
    CrLf,
}

/// Decodes a newline at the front of `bytes`, if any: LF, CR, or CRLF (as a
/// single two-byte event).
pub fn decode_newline(bytes: &[u8]) -> Option<(NewlineKind, usize)> {
    match bytes.first() {
        Some(b'\n') => Some((NewlineKind::Lf, 1)),
        Some(b'\r') => {
            if bytes.get(1) == Some(&b'\n') {
                Some((NewlineKind::CrLf, 2))
            } else {
                Some((NewlineKind::Cr, 1))
            }
        }
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitterKind {
    Colon,
    Dot,
    Ellipsis,
    Semicolon,
    Comma,
}

/// Decodes a splitter token at the front of `bytes`. `.` is ambiguous with
/// `...` (ellipsis), so this needs up to three bytes of lookahead.
pub fn decode_splitter(bytes: &[u8]) -> Option<(SplitterKind, usize)> {
    match bytes.first() {
        Some(b':') => Some((SplitterKind::Colon, 1)),
        Some(b';') => Some((SplitterKind::Semicolon, 1)),
        Some(b',') => Some((SplitterKind::Comma, 1)),
        Some(b'.') => {
            if bytes.get(1) == Some(&b'.') && bytes.get(2) == Some(&b'.') {
                Some((SplitterKind::Ellipsis, 3))
            } else {
                Some((SplitterKind::Dot, 1))
            }
        }
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapKind {
    Paren,
    Bracket,
    Brace,
}

/// Decodes a wrap character, returning its kind and whether it opens
/// (`true`) or closes (`false`) the pair.
pub fn decode_wrap(byte: u8) -> Option<(WrapKind, bool)> {
    match byte {
        b'(' => Some((WrapKind::Paren, true)),
        b')' => Some((WrapKind::Paren, false)),
        b'[' => Some((WrapKind::Bracket, true)),
        b']' => Some((WrapKind::Bracket, false)),
        b'{' => Some((WrapKind::Brace, true)),
        b'}' => Some((WrapKind::Brace, false)),
        _ => None,
    }
}
