//! Correctly rounded conversion of decimal text to `f64`.
//!
//! Literals go through progressively slower paths until one of them can decide the rounding:
//! exact `f64` arithmetic, then [Eisel-Lemire](lemire), then an exact [decimal] computation.

mod decimal;
mod lemire;
mod lex;
mod number;

use displaydoc::Display;

use self::lex::LiteralKind;
use self::number::Number;

/// The bit pattern every NaN literal scans to.
pub const CANONICAL_NAN: u64 = 0xFFF8_0000_0000_0000;

const MANTISSA_EXPLICIT_BITS: usize = 52;
const MINIMUM_EXPONENT: i32 = -1023;
const INFINITE_POWER: i32 = 0x7FF;

/// An `f64` as its biased exponent field and explicit mantissa bits. A negative exponent marks a
/// result that could not be decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtendedFloat {
    pub mant: u64,
    pub exp: i32,
}

impl ExtendedFloat {
    #[inline]
    pub const fn zero() -> Self {
        ExtendedFloat{ mant: 0, exp: 0 }
    }

    #[inline]
    pub const fn infinity() -> Self {
        ExtendedFloat{ mant: 0, exp: INFINITE_POWER }
    }

    #[inline]
    pub const fn invalid() -> Self {
        ExtendedFloat{ mant: 0, exp: -1 }
    }

    /// Assembles the bits. A subnormal mantissa that rounded up to `2^52` overlaps exponent field
    /// 1, which is the smallest normal.
    #[inline]
    pub fn to_f64(self, negative: bool) -> f64 {
        debug_assert!(self.exp >= 0);
        let bits = self.mant | (self.exp as u64) << MANTISSA_EXPLICIT_BITS | (negative as u64) << 63;
        f64::from_bits(bits)
    }
}

/// The result of a successful scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scanned {
    /// The nearest `f64`, ties to even.
    pub value: f64,
    /// One past the last byte of the literal.
    pub end: usize,
    /// A nonzero literal was too large or too small in magnitude, and `value` is `±inf` or `±0`.
    pub range_exceeded: bool,
}

/// An error scanning a number.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// Input is empty.
    Empty,

    /// Input does not start with a decimal number, `inf`, `infinity` or `nan`.
    Syntax,
}

impl core::error::Error for ScanError {}

/// Scans a decimal number at the start of `text`. See [scan_bytes].
pub fn scan_double(text: &str) -> Result<Scanned, ScanError> {
    scan_bytes(text.as_bytes())
}

/// Scans a decimal number at the start of `bytes`: an optional sign, then either
/// `digits[.digits][(e|E)[sign]digits]` or one of `inf`, `infinity`, `nan` in any case. Scanning
/// stops at the first byte that cannot continue the literal; leading whitespace is an error.
///
/// ## Example
///
/// ```
/// let scanned = dconv::scan_double("1.234000e-01 and more").unwrap();
/// assert_eq!(scanned.value, 0.1234);
/// assert_eq!(scanned.end, 12);
/// assert!(!scanned.range_exceeded);
///
/// let scanned = dconv::scan_double("-1e400").unwrap();
/// assert_eq!(scanned.value, f64::NEG_INFINITY);
/// assert!(scanned.range_exceeded);
/// ```
pub fn scan_bytes(bytes: &[u8]) -> Result<Scanned, ScanError> {
    let literal = lex::lex(bytes)?;
    let (magnitude, range_exceeded) = match literal.kind {
        LiteralKind::Nan => return Ok(Scanned{
            value: f64::from_bits(CANONICAL_NAN),
            end: literal.end,
            range_exceeded: false,
        }),
        LiteralKind::Infinity => (f64::INFINITY, false),
        LiteralKind::Finite{ integer, fraction, exponent } => {
            let num = Number::parse(integer, fraction, exponent);
            let value = match num.try_fast_path() {
                Some(value) => value,
                None => moderate_or_slow(&num, integer, fraction, exponent),
            };
            (value, num.mantissa != 0 && (value == 0.0 || value.is_infinite()))
        }
    };
    let value = if literal.negative { -magnitude } else { magnitude };
    Ok(Scanned{ value, end: literal.end, range_exceeded })
}

fn moderate_or_slow(num: &Number, integer: &[u8], fraction: &[u8], exponent: i32) -> f64 {
    let mut fp = lemire::lemire(num.exponent, num.mantissa);
    // With dropped digits the value lies between `w` and `w + 1`; both must round the same way.
    if num.many_digits && fp.exp >= 0 && fp != lemire::lemire(num.exponent, num.mantissa + 1) {
        fp = ExtendedFloat::invalid();
    }
    if fp.exp < 0 {
        log::trace!("{}e{} needs the decimal path", num.mantissa, num.exponent);
        fp = decimal::slow(integer, fraction, exponent);
    }
    fp.to_f64(false)
}
