//! Escape decoding shared by codepoint literals, strings, and heredocs.
//! Two entry points, both called with the escape leader already consumed by
//! the caller, matching the original C lexer's `takeCharEscape`/
//! `takeNullEscape` split.

use crate::decode::DecodedChar;
use crate::error::ErrorKind;
use crate::params::{self, ESCAPE_LEADER, NULL_ESCAPE_LEADER};
use crate::reader::Reader;

pub struct CharEscapeOutcome {
    /// `Some` whenever some escape form matched (common or hex), even if
    /// the hex digits were malformed — in that case this is the best-effort
    /// decoded value accumulated so far. `None` means no escape form
    /// matched at all; the caller decides what to do (no error is raised
    /// here).
    pub value: Option<u32>,
    pub error: Option<ErrorKind>,
}

/// Tries the common-escape table, then the three hex-escape leaders (2, 4,
/// and 6 digits). Consumes exactly the expected number of digit slots for a
/// matched hex leader even when a digit turns out not to be hex, recording
/// all six slots (unused ones left `None`) in `BadEscapeCode`.
pub fn take_char_escape(reader: &mut Reader) -> CharEscapeOutcome {
    let (dc, len) = reader.peek();
    let DecodedChar::Codepoint(cp) = dc else {
        return CharEscapeOutcome { value: None, error: None };
    };
    if cp > 0x7F {
        return CharEscapeOutcome { value: None, error: None };
    }
    let letter = cp as u8;

    if let Some(value) = params::common_escape(letter) {
        reader.advance(len, 1);
        return CharEscapeOutcome { value: Some(value), error: None };
    }

    if let Some(n) = params::hex_escape_len(letter) {
        reader.advance(len, 1);
        let (value, malformed, digits) = take_hex_digits(reader, n);
        let error = malformed.then_some(ErrorKind::BadEscapeCode { digits });
        return CharEscapeOutcome { value: Some(value), error };
    }

    CharEscapeOutcome { value: None, error: None }
}

/// Consumes exactly `n` digit slots (fewer only at EOF), accumulating a hex
/// value and recording each slot's decoded digit (or `None` on a bad/absent
/// digit). Returns `(value, any_slot_malformed, digits)`.
fn take_hex_digits(reader: &mut Reader, n: usize) -> (u32, bool, [Option<u8>; 6]) {
    let mut digits: [Option<u8>; 6] = [None; 6];
    let mut value: u32 = 0;
    let mut malformed = false;

    for digit in digits.iter_mut().take(n) {
        let (dc, len) = reader.peek();
        match dc {
            DecodedChar::Codepoint(cp) if cp <= 0x7F && params::hex_digit_value(cp as u8).is_some() => {
                let d = params::hex_digit_value(cp as u8).unwrap();
                *digit = Some(d);
                value = (value << 4) | d as u32;
                reader.advance(len, 1);
            }
            DecodedChar::Eof => {
                malformed = true;
            }
            _ => {
                malformed = true;
                value <<= 4;
                let consume_len = len.max(1);
                reader.advance(consume_len, 1);
            }
        }
    }

    (value, malformed, digits)
}

pub struct NullEscapeOutcome {
    pub consumed: bool,
    pub error: Option<ErrorKind>,
}

/// String-context-only escape: a line-break pickup (`\` + newline +
/// optional indent whitespace + `\`) or the dedicated null-escape letter
/// (`&`), which decodes to nothing.
pub fn take_null_escape(reader: &mut Reader) -> NullEscapeOutcome {
    if let Some((_, nl_len)) = reader.peek_newline() {
        reader.inc_line(nl_len);
        while let (DecodedChar::Codepoint(cp), len) = reader.peek() {
            if params::is_space_char(cp) {
                reader.advance(len, 1);
            } else {
                break;
            }
        }
        let (dc, len) = reader.peek();
        if let DecodedChar::Codepoint(cp) = dc {
            if cp <= 0x7F && cp as u8 == ESCAPE_LEADER {
                reader.advance(len, 1);
                return NullEscapeOutcome { consumed: true, error: None };
            }
        }
        return NullEscapeOutcome { consumed: true, error: Some(ErrorKind::MissingLinePickup) };
    }

    let (dc, len) = reader.peek();
    if let DecodedChar::Codepoint(cp) = dc {
        if cp <= 0x7F && cp as u8 == NULL_ESCAPE_LEADER {
            reader.advance(len, 1);
            return NullEscapeOutcome { consumed: true, error: None };
        }
    }

    NullEscapeOutcome { consumed: false, error: None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_escape_decodes_letter() {
        let mut r = Reader::new(b"n");
        let outcome = take_char_escape(&mut r);
        assert_eq!(outcome.value, Some(0x0A));
        assert!(outcome.error.is_none());
        assert!(r.is_eof());
    }

    #[test]
    fn hex_escape_decodes_four_digits() {
        let mut r = Reader::new(b"u00E9");
        let outcome = take_char_escape(&mut r);
        assert_eq!(outcome.value, Some(0xE9));
        assert!(outcome.error.is_none());
        assert!(r.is_eof());
    }

    #[test]
    fn hex_escape_with_bad_digit_reports_all_slots() {
        let mut r = Reader::new(b"x1g");
        let outcome = take_char_escape(&mut r);
        assert!(outcome.value.is_some());
        match outcome.error {
            Some(ErrorKind::BadEscapeCode { digits }) => {
                assert_eq!(digits[0], Some(1));
                assert_eq!(digits[1], None);
            }
            other => panic!("expected BadEscapeCode, got {other:?}"),
        }
    }

    #[test]
    fn no_matching_escape_form_is_reported_as_none() {
        let mut r = Reader::new(b"q");
        let outcome = take_char_escape(&mut r);
        assert!(outcome.value.is_none());
        assert!(outcome.error.is_none());
    }

    #[test]
    fn null_escape_letter_is_consumed_with_no_value() {
        let mut r = Reader::new(b"&");
        let outcome = take_null_escape(&mut r);
        assert!(outcome.consumed);
        assert!(outcome.error.is_none());
        assert!(r.is_eof());
    }

    #[test]
    fn line_pickup_without_closing_leader_is_flagged() {
        let mut r = Reader::new(b"\n  x");
        let outcome = take_null_escape(&mut r);
        assert!(outcome.consumed);
        assert_eq!(outcome.error, Some(ErrorKind::MissingLinePickup));
    }

    #[test]
    fn line_pickup_with_closing_leader_succeeds() {
        let mut r = Reader::new(b"\n  \\x");
        let outcome = take_null_escape(&mut r);
        assert!(outcome.consumed);
        assert!(outcome.error.is_none());
        assert_eq!(r.remaining(), b"x");
    }
}
