//! A bounded sequence of decimal digits with a decimal exponent.

use crate::common::{Exp, len_u64};
use crate::shortest::Decimal;

/// Capacity of a [DigitSequence]. The exact decimal expansion of any `f64` has at most 767
/// significant digits, so every position past this capacity is a zero.
pub const MAX_DIGITS: usize = 800;

/// The value `0.d_1 d_2 ... d_len * 10^exp`. Digits are values 0–9, not ASCII.
///
/// Zero is represented with `len == 0` and `exp == 1`, so that it reads as `0.` with a single
/// integer digit.
#[derive(Clone)]
pub struct DigitSequence {
    digits: [u8; MAX_DIGITS],
    len: usize,
    exp: Exp,
}

impl DigitSequence {
    pub const fn zero() -> Self {
        DigitSequence{ digits: [0; MAX_DIGITS], len: 0, exp: 1 }
    }

    /// The digits of `decimal.mant` (with trailing zeros dropped), positioned so that the value
    /// is unchanged.
    pub fn from_decimal(decimal: Decimal) -> Self {
        let mut seq = Self::zero();
        let len = len_u64(decimal.mant);
        let mut mant = decimal.mant;
        for slot in seq.digits[..len].iter_mut().rev() {
            *slot = (mant % 10) as u8;
            mant /= 10;
        }
        seq.len = len;
        seq.exp = decimal.exp + len as Exp;
        seq.trim();
        seq
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The decimal exponent; equivalently, the position of the decimal point relative to the first
    /// digit.
    #[inline]
    pub fn exp(&self) -> Exp {
        self.exp
    }

    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    /// The digit at position `i`, counted from the first stored digit. Positions outside the stored
    /// digits (including negative ones) are zeros.
    #[inline]
    pub fn digit(&self, i: isize) -> u8 {
        if 0 <= i && (i as usize) < self.len {
            self.digits[i as usize]
        } else {
            0
        }
    }

    /// Number of digits in `start .. start + count`, after dropping the zeros at the end of that
    /// range.
    pub fn significant_len(&self, start: isize, count: usize) -> usize {
        let end = (start + count as isize).min(self.len as isize);
        let mut end = end.max(start);
        while end > start && self.digit(end - 1) == 0 {
            end -= 1;
        }
        (end - start) as usize
    }

    /// Takes the first `len` digits of `digits`; trailing zeros are dropped, and an empty result
    /// is zero.
    pub(crate) fn from_parts(digits: [u8; MAX_DIGITS], len: usize, exp: Exp) -> Self {
        debug_assert!(len <= MAX_DIGITS);
        let mut seq = DigitSequence{ digits, len, exp };
        seq.trim();
        if seq.is_empty() { Self::zero() } else { seq }
    }

    /// Drops trailing zeros.
    pub fn trim(&mut self) {
        while self.len > 0 && self.digits[self.len - 1] == 0 {
            self.len -= 1;
        }
    }
}

impl core::fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("0.")?;
        for d in self.digits() {
            write!(f, "{d}")?;
        }
        write!(f, "e{}", self.exp)
    }
}
