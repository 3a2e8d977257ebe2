//! Number literal recognizer: arbitrary-precision mantissa/exponent built
//! with `scale`/`inc`, radix prefixes, fractional digits, and digit
//! separators. Grounded on `takeNumber`/`checkDigitSepContext` in the
//! original C lexer, which this recognizer follows in both grammar shape
//! and the non-obvious details (exponent sign legality, digit-separator
//! group-edge checks).

use crate::bigint::BigUInt;
use crate::decode::DecodedChar;
use crate::error::ErrorKind;
use crate::params;
use crate::position::Span;
use crate::token::{Token, TokenKind};

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn take_number(&mut self) -> bool {
        if !self.number_starts_here() {
            return false;
        }

        let start = self.reader.position();
        let mantissa_negative = self.consume_optional_sign();
        let radix = self.consume_optional_radix_prefix(params::DEFAULT_RADIX);

        let mut mantissa = BigUInt::new();
        self.consume_digit_group(radix, &mut mantissa);

        // The decimal point only belongs to the number when a digit of
        // `radix` actually follows it (grammar: `'.' digits`, never a bare
        // `.`); otherwise it's left for the splitter recognizer, matching
        // the original C lexer's `lookahead[0] == digitPoint &&
        // isDigit(radix, lookahead[1])` guard.
        let mut fractional_digits = 0usize;
        if self.reader.byte_at(0) == Some(params::DECIMAL_POINT)
            && matches!(self.reader.byte_at(1), Some(b) if params::is_digit(radix, b))
        {
            self.reader.advance(1, 1);
            fractional_digits = self.consume_digit_group(radix, &mut mantissa);
        }

        let (exponent, exponent_negative, malformed_span) =
            self.take_exponent(radix, fractional_digits, start);

        if let Some(bad_span) = malformed_span {
            self.push_error(ErrorKind::MissingExponent, bad_span);
            self.add_tok(Token::new(TokenKind::NumberError, bad_span));
            return true;
        }

        let end = self.reader.position();
        self.add_tok(Token::new(
            TokenKind::Number {
                mantissa,
                mantissa_negative,
                radix,
                fractional_digits,
                exponent,
                exponent_negative,
            },
            Span::new(start, end),
        ));
        true
    }

    /// A number begins with a digit, or a sign immediately followed by a
    /// digit; anything else and the recognizer must return false without
    /// consuming, leaving the byte for the symbol/splitter/wrap recognizers.
    fn number_starts_here(&self) -> bool {
        let lookahead = self.reader.peek_n(2);
        let mut codepoints = Vec::with_capacity(2);
        for dc in &lookahead {
            match dc {
                DecodedChar::Codepoint(cp) => codepoints.push(*cp),
                _ => break,
            }
        }
        match codepoints.first() {
            Some(&c) if c <= 0x7F && (c as u8).is_ascii_digit() => true,
            Some(&c) if c <= 0x7F && params::is_sign(c as u8) => {
                matches!(codepoints.get(1), Some(&c2) if c2 <= 0x7F && (c2 as u8).is_ascii_digit())
            }
            _ => false,
        }
    }

    fn consume_optional_sign(&mut self) -> bool {
        if let (DecodedChar::Codepoint(cp), len) = self.reader.peek() {
            if cp <= 0x7F && params::is_sign(cp as u8) {
                let negative = cp as u8 == b'-';
                self.reader.advance(len, 1);
                return negative;
            }
        }
        false
    }

    /// A radix prefix is `0` immediately followed by a radix letter (`b`,
    /// `o`, `d`, `x`, case-insensitive); anything else leaves the `0` alone
    /// as an ordinary leading digit.
    fn consume_optional_radix_prefix(&mut self, default_radix: u32) -> u32 {
        if self.reader.byte_at(0) == Some(params::RADIX_PREFIX) {
            if let Some(letter) = self.reader.byte_at(1) {
                if let Some(rp) = params::radix_by_prefix_letter(letter) {
                    self.reader.advance(2, 2);
                    return rp.radix;
                }
            }
        }
        default_radix
    }

    /// Consumes a maximal run of digits (of `radix`) and digit separators,
    /// accumulating into `value` via `scale`/`inc`. A separator is flagged
    /// with `BadDigitSeparator` when it opens a group (no digits seen yet
    /// in this group — always an error, per the original's `alwaysError`
    /// argument being unconditionally true at a group's first position),
    /// closes a group (not followed by another digit), or sits next to
    /// another separator. The separator is still accepted into the digit
    /// stream regardless (it contributes no value, only its context is
    /// checked).
    fn consume_digit_group(&mut self, radix: u32, value: &mut BigUInt) -> usize {
        let mut count = 0usize;
        let mut prev_was_separator = false;

        loop {
            let (dc, len) = self.reader.peek();
            match dc {
                DecodedChar::Codepoint(cp) if cp <= 0x7F && params::is_digit(radix, cp as u8) => {
                    let digit = params::digit_value(cp as u8).unwrap();
                    value.scale(radix);
                    value.inc(digit as u32);
                    self.reader.advance(len, 1);
                    count += 1;
                    prev_was_separator = false;
                }
                DecodedChar::Codepoint(cp) if cp <= 0x7F && cp as u8 == params::DIGIT_SEPARATOR => {
                    let sep_start = self.reader.position();
                    self.reader.advance(len, 1);
                    let sep_end = self.reader.position();

                    let (next_dc, _) = self.reader.peek();
                    let next_is_digit =
                        matches!(next_dc, DecodedChar::Codepoint(cp2) if cp2 <= 0x7F && params::is_digit(radix, cp2 as u8));
                    let next_is_separator =
                        matches!(next_dc, DecodedChar::Codepoint(cp2) if cp2 <= 0x7F && cp2 as u8 == params::DIGIT_SEPARATOR);

                    let at_group_start = count == 0;
                    // A following separator is flagged when *it* is reached
                    // (via `prev_was_separator` below), not here — matching
                    // the original's `!isDigit(lookahead) && lookahead !=
                    // digitSep` group-end condition.
                    let at_group_end = !next_is_digit && !next_is_separator;
                    if at_group_start || at_group_end || prev_was_separator {
                        self.push_error(ErrorKind::BadDigitSeparator, Span::new(sep_start, sep_end));
                    }
                    prev_was_separator = true;
                }
                _ => break,
            }
        }

        count
    }

    /// Parses an optional exponent. Returns `(exponent, negative, None)` on
    /// success (including "no exponent at all", which is a zero exponent),
    /// or `(_, _, Some(span))` when an exponent was introduced but had zero
    /// digits — the caller turns that into a `NumberError` token.
    fn take_exponent(
        &mut self,
        mantissa_radix: u32,
        fractional_digits: usize,
        number_start: crate::position::Point,
    ) -> (BigUInt, bool, Option<Span>) {
        let mut exponent = BigUInt::new();
        let mut negative = false;

        let Some(letter) = self.reader.byte_at(0) else {
            return (exponent, negative, None);
        };
        let is_native = params::radix_by_exp_letter(letter).map(|r| r.radix) == Some(mantissa_radix);
        let is_generic = params::is_generic_exp_letter(letter);
        let is_base10 = params::is_base10_exp_letter(letter);
        if !(is_native || is_generic || is_base10) {
            return (exponent, negative, None);
        }
        self.reader.advance(1, 1);

        if let Some(sign_byte) = self.reader.byte_at(0) {
            if params::is_sign(sign_byte) {
                let sign_start = self.reader.position();
                negative = sign_byte == b'-';
                self.reader.advance(1, 1);
                let sign_end = self.reader.position();
                if fractional_digits == 0 {
                    self.push_error(ErrorKind::BadExponentSign, Span::new(sign_start, sign_end));
                }
            }
        }

        // A radix prefix inside the exponent is only meaningful when the
        // exponent was introduced by the generic letter; a native or
        // base-10 exponent letter already fixes the exponent's digit radix.
        let exp_radix = if is_generic {
            self.consume_optional_radix_prefix(params::DEFAULT_RADIX)
        } else {
            params::DEFAULT_RADIX
        };

        let digit_count = self.consume_digit_group(exp_radix, &mut exponent);
        if digit_count == 0 {
            let end = self.reader.position();
            return (exponent, negative, Some(Span::new(number_start, end)));
        }

        (exponent, negative, None)
    }
}
