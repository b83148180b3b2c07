//! Splitting a decimal literal into its parts.

use super::ScanError;

/// What a literal denotes, before any conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind<'a> {
    /// `integer.fraction * 10^exponent`. `fraction` has its trailing zeros removed; the exponent
    /// saturates at the `i32` bounds.
    Finite {
        integer: &'a [u8],
        fraction: &'a [u8],
        exponent: i32,
    },
    Infinity,
    Nan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Literal<'a> {
    pub negative: bool,
    pub kind: LiteralKind<'a>,
    /// One past the last byte of the literal.
    pub end: usize,
}

fn starts_with_ignore_case(bytes: &[u8], word: &[u8]) -> bool {
    bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word)
}

/// Length of the run of ASCII digits at the start of `bytes`.
fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|c| c.is_ascii_digit()).count()
}

/// Reads the longest prefix of `bytes` that is a decimal literal.
pub fn lex(bytes: &[u8]) -> Result<Literal<'_>, ScanError> {
    let (negative, mut pos) = match bytes.first() {
        None => return Err(ScanError::Empty),
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        Some(_) => (false, 0),
    };

    let rest = &bytes[pos..];
    if starts_with_ignore_case(rest, b"infinity") {
        return Ok(Literal{ negative, kind: LiteralKind::Infinity, end: pos + 8 })
    }
    if starts_with_ignore_case(rest, b"inf") {
        return Ok(Literal{ negative, kind: LiteralKind::Infinity, end: pos + 3 })
    }
    if starts_with_ignore_case(rest, b"nan") {
        return Ok(Literal{ negative, kind: LiteralKind::Nan, end: pos + 3 })
    }

    let integer_len = digits_len(rest);
    let integer = &rest[..integer_len];
    pos += integer_len;

    let mut fraction: &[u8] = &[];
    if bytes.get(pos) == Some(&b'.') {
        let fraction_len = digits_len(&bytes[pos + 1 ..]);
        fraction = &bytes[pos + 1 .. pos + 1 + fraction_len];
        // a point is part of the literal only next to a digit
        if integer_len + fraction_len > 0 {
            pos += 1 + fraction_len;
        }
    }
    if integer.is_empty() && fraction.is_empty() {
        return Err(ScanError::Syntax)
    }

    let mut exponent = 0i32;
    if let Some(b'e' | b'E') = bytes.get(pos) {
        let (exp_negative, sign_len) = match bytes.get(pos + 1) {
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            _ => (false, 0),
        };
        let start = pos + 1 + sign_len;
        let exp_digits = &bytes[start.min(bytes.len())..];
        let exp_len = digits_len(exp_digits);
        // `1e` and `1e+` end before the marker
        if exp_len > 0 {
            exponent = exp_digits[..exp_len].iter().fold(0i32, |acc, &c| {
                acc.saturating_mul(10).saturating_add((c - b'0') as i32)
            });
            if exp_negative {
                exponent = -exponent;
            }
            pos = start + exp_len;
        }
    }

    let fraction_len = fraction.iter().rposition(|&c| c != b'0').map_or(0, |i| i + 1);
    Ok(Literal{
        negative,
        kind: LiteralKind::Finite{ integer, fraction: &fraction[..fraction_len], exponent },
        end: pos,
    })
}
