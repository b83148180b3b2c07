//! Rendering of digit sequences and special values as printf-style text.
//!
//! The whole field is laid out and measured before anything is written, so a call either writes
//! all of it or nothing.

use displaydoc::Display;

use crate::cursor::OutputCursor;
use crate::digits::{DigitSequence, MAX_DIGITS};
use crate::exact::format_exact;
use crate::float::{Binary, FloatClass};
use crate::format::{Conversion, Flags, FormatSpec, Precision};
use crate::shortest::teju_jagua;

const DIGITS_LUT: &[u8; 200] =
    b"00010203040506070809\
      10111213141516171819\
      20212223242526272829\
      30313233343536373839\
      40414243444546474849\
      50515253545556575859\
      60616263646566676869\
      70717273747576777879\
      80818283848586878889\
      90919293949596979899";

/// `%f` digits below `10^-FIXED_LIMIT_CAP` are zero for every `f64`, so larger precisions only
/// add padding.
const FIXED_LIMIT_CAP: u32 = 1100;

/// An error formatting a number.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Formatted field needs {needed} bytes but only {available} remain in the buffer.
    BufferTooSmall { needed: usize, available: usize },

    /// Invalid conversion character {0:?}; expected one of `eEfFgG`.
    InvalidConversion(char),
}

impl core::error::Error for FormatError {}

/// Where the pieces of a finite number come from, in printing order. Digit positions index into
/// the number's [DigitSequence], and positions outside its stored digits print as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Body {
    int_start: isize,
    int_len: usize,
    point: bool,
    frac_start: isize,
    frac_len: usize,
    exp: Option<i32>,
}

impl Body {
    /// `ddd[.ddd]`, with `frac_len` digits after the point.
    fn fixed(seq: &DigitSequence, frac_len: usize, alternate: bool) -> Self {
        let k = seq.exp() as isize;
        // With no integer digits, print a single `0` from before the first stored digit.
        let (int_start, int_len) = if k > 0 { (0, k as usize) } else { (-1, 1) };
        Body{
            int_start,
            int_len,
            point: frac_len > 0 || alternate,
            frac_start: k,
            frac_len,
            exp: None,
        }
    }

    /// `d[.ddd]e±dd`, with `digits` significant digits in total.
    fn exponential(seq: &DigitSequence, digits: usize, alternate: bool) -> Self {
        Body{
            int_start: 0,
            int_len: 1,
            point: digits > 1 || alternate,
            frac_start: 1,
            frac_len: digits.saturating_sub(1),
            exp: Some(seq.exp() - 1),
        }
    }

    /// Drops trailing zeros after the point, and the point itself if nothing is left after it.
    fn strip_trailing_zeros(&mut self, seq: &DigitSequence) {
        self.frac_len = seq.significant_len(self.frac_start, self.frac_len);
        self.point = self.frac_len > 0;
    }

    fn len(&self) -> usize {
        self.int_len
            .saturating_add(self.point as usize)
            .saturating_add(self.frac_len)
            .saturating_add(self.exp.map_or(0, exponent_len))
    }
}

/// Length of `e±dd` or `e±ddd`.
fn exponent_len(exp: i32) -> usize {
    if exp.unsigned_abs() >= 100 { 5 } else { 4 }
}

/// The shortest digits that read back as `binary`; a single `0` for zero.
fn shortest_digits(binary: &Binary) -> DigitSequence {
    match binary.class {
        FloatClass::Zero => DigitSequence::zero(),
        _ => DigitSequence::from_decimal(teju_jagua(binary)),
    }
}

fn exact_digits(binary: &Binary, ndigits: usize, limit: Option<i32>) -> DigitSequence {
    match binary.class {
        FloatClass::Zero => DigitSequence::zero(),
        _ => format_exact(binary, ndigits, limit),
    }
}

/// Generates the digits of a finite `binary` and decides how to lay them out.
fn layout(binary: &Binary, spec: &FormatSpec) -> (DigitSequence, Body) {
    let alternate = spec.flags().contains(Flags::ALTERNATE);
    match (spec.conversion(), spec.precision()) {
        (Conversion::Exponential, Precision::Shortest) => {
            let seq = shortest_digits(binary);
            let body = Body::exponential(&seq, seq.len().max(1), alternate);
            (seq, body)
        }
        (Conversion::Exponential, Precision::Digits(p)) => {
            let digits = (p as usize).saturating_add(1);
            let seq = exact_digits(binary, digits, None);
            let body = Body::exponential(&seq, digits, alternate);
            (seq, body)
        }
        (Conversion::Fixed, Precision::Shortest) => {
            let seq = shortest_digits(binary);
            let frac_len = (seq.len() as isize - seq.exp() as isize).max(0) as usize;
            let body = Body::fixed(&seq, frac_len, alternate);
            (seq, body)
        }
        (Conversion::Fixed, Precision::Digits(p)) => {
            let limit = -(p.min(FIXED_LIMIT_CAP) as i32);
            let seq = exact_digits(binary, MAX_DIGITS, Some(limit));
            let body = Body::fixed(&seq, p as usize, alternate);
            (seq, body)
        }
        (Conversion::General, precision) => {
            let (seq, digits) = match precision {
                Precision::Shortest => {
                    let seq = shortest_digits(binary);
                    let digits = seq.len().max(1);
                    (seq, digits)
                }
                Precision::Digits(p) => {
                    let digits = (p as usize).max(1);
                    (exact_digits(binary, digits, None), digits)
                }
            };
            let x = seq.exp() as isize - 1;
            let digits_signed = isize::try_from(digits).unwrap_or(isize::MAX);
            let use_fixed = match precision {
                Precision::Shortest => (-4 .. 17).contains(&x),
                Precision::Digits(_) => -4 <= x && x < digits_signed,
            };
            let mut body = if use_fixed {
                Body::fixed(&seq, (digits_signed - 1 - x).max(0) as usize, alternate)
            } else {
                Body::exponential(&seq, digits, alternate)
            };
            if !alternate {
                body.strip_trailing_zeros(&seq);
            }
            (seq, body)
        }
    }
}

/// Writes `count` digits of `seq` starting at position `start`.
fn write_digits(cursor: &mut OutputCursor, seq: &DigitSequence, start: isize, count: usize) {
    let stored = seq.len() as isize;
    let end = start.saturating_add(count as isize);
    let mut i = start;
    // leading positions before the stored digits, then the stored digits, then zeros
    while i < end && i < stored {
        cursor.push(b'0' + seq.digit(i));
        i += 1;
    }
    if i < end {
        cursor.fill(b'0', (end - i) as usize);
    }
}

fn write_exponent(cursor: &mut OutputCursor, exp: i32, uppercase: bool) {
    cursor.push(if uppercase { b'E' } else { b'e' });
    cursor.push(if exp < 0 { b'-' } else { b'+' });
    let exp_abs = exp.unsigned_abs() as usize;
    debug_assert!(exp_abs < 1000);
    if exp_abs >= 100 {
        cursor.push(b'0' + (exp_abs / 100) as u8);
    }
    let d = exp_abs % 100 * 2;
    cursor.push_slice(&DIGITS_LUT[d .. d + 2]);
}

fn write_body(cursor: &mut OutputCursor, seq: &DigitSequence, body: &Body, uppercase: bool) {
    write_digits(cursor, seq, body.int_start, body.int_len);
    if body.point {
        cursor.push(b'.');
    }
    write_digits(cursor, seq, body.frac_start, body.frac_len);
    if let Some(exp) = body.exp {
        write_exponent(cursor, exp, uppercase);
    }
}

/// What goes between the sign and the padding.
enum Content {
    Special(&'static [u8]),
    Number(DigitSequence, Body),
}

/// Formats `num` according to `spec` at `cursor`, returning the number of bytes written.
///
/// If the whole field does not fit in `cursor.remaining()`, nothing is written and the cursor
/// does not move.
pub fn format(cursor: &mut OutputCursor, num: f64, spec: &FormatSpec) -> Result<usize, FormatError> {
    let binary = Binary::new(num);
    let flags = spec.flags();
    let uppercase = flags.contains(Flags::UPPERCASE);

    let sign = match binary.class {
        FloatClass::Nan => None,
        _ if binary.sign => Some(b'-'),
        _ if flags.contains(Flags::FORCE_SIGN) => Some(b'+'),
        _ if flags.contains(Flags::SPACE_SIGN) => Some(b' '),
        _ => None,
    };

    let content = match binary.class {
        FloatClass::Infinite => Content::Special(if uppercase { b"INF" } else { b"inf" }),
        FloatClass::Nan => Content::Special(if uppercase { b"NAN" } else { b"nan" }),
        _ => {
            let (seq, body) = layout(&binary, spec);
            Content::Number(seq, body)
        }
    };

    let content_len = match &content {
        Content::Special(text) => text.len(),
        Content::Number(_, body) => body.len(),
    };
    let len = content_len.saturating_add(sign.is_some() as usize);
    let total = len.max(spec.width() as usize);
    if total > cursor.remaining() {
        log::debug!("{num:e} needs {total} bytes, {} available", cursor.remaining());
        return Err(FormatError::BufferTooSmall{ needed: total, available: cursor.remaining() })
    }

    let pad = total - len;
    let left_justify = flags.contains(Flags::LEFT_JUSTIFY);
    let zero_pad = !left_justify
        && flags.contains(Flags::ZERO_PAD)
        && matches!(content, Content::Number(..));

    if !left_justify && !zero_pad {
        cursor.fill(b' ', pad);
    }
    if let Some(sign) = sign {
        cursor.push(sign);
    }
    if zero_pad {
        cursor.fill(b'0', pad);
    }
    match &content {
        Content::Special(text) => cursor.push_slice(text),
        Content::Number(seq, body) => write_body(cursor, seq, body, uppercase),
    }
    if left_justify {
        cursor.fill(b' ', pad);
    }
    Ok(total)
}
