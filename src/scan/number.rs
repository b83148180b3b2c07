//! The leading significant digits of a literal, and the exact fast path.

use crate::common::{POW10_F64, POW10_U64};

const MIN_EXPONENT_FAST_PATH: i32 = -22;
const MAX_EXPONENT_FAST_PATH: i32 = 22;
const MAX_EXPONENT_DISGUISED_FAST_PATH: i32 = MAX_EXPONENT_FAST_PATH + 15;
const MAX_MANTISSA_FAST_PATH: u64 = 2 << 52;

/// Significant digits kept in [Number::mantissa].
const MAX_MANTISSA_DIGITS: usize = 19;

/// A literal as `mantissa * 10^exponent`, possibly with digits dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Number {
    /// The exponent of the float, scaled to the mantissa.
    pub exponent: i32,
    /// The first 19 significant digits.
    pub mantissa: u64,
    /// If there were more significant digits than fit in the mantissa.
    pub many_digits: bool,
}

impl Number {
    /// Takes the significant digits of `integer.fraction * 10^exponent`.
    pub fn parse(integer: &[u8], fraction: &[u8], exponent: i32) -> Self {
        let mut num = Number::default();
        let mut count = 0;
        for &c in integer.iter().chain(fraction).skip_while(|&&c| c == b'0') {
            if count < MAX_MANTISSA_DIGITS {
                num.mantissa = num.mantissa * 10 + (c - b'0') as u64;
            }
            count += 1;
        }
        let dropped = count.saturating_sub(MAX_MANTISSA_DIGITS);
        num.many_digits = dropped > 0;
        let exponent = exponent as i64 - fraction.len() as i64 + dropped as i64;
        num.exponent = exponent.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        num
    }

    /// Detect if the float can be accurately reconstructed from native floats.
    #[inline]
    fn is_fast_path(&self) -> bool {
        MIN_EXPONENT_FAST_PATH <= self.exponent
            && self.exponent <= MAX_EXPONENT_DISGUISED_FAST_PATH
            && self.mantissa <= MAX_MANTISSA_FAST_PATH
            && !self.many_digits
    }

    /// Both the mantissa and `10^|exponent|` are exact `f64`s, so a single IEEE operation rounds
    /// correctly. Exponents a little past 22 can be folded into the mantissa while it stays exact.
    pub fn try_fast_path(&self) -> Option<f64> {
        if !self.is_fast_path() {
            return None
        }
        if self.exponent <= MAX_EXPONENT_FAST_PATH {
            let value = self.mantissa as f64;
            if self.exponent < 0 {
                Some(value / POW10_F64[-self.exponent as usize])
            } else {
                Some(value * POW10_F64[self.exponent as usize])
            }
        } else {
            // disguised fast path
            let shift = self.exponent - MAX_EXPONENT_FAST_PATH;
            let mantissa = self.mantissa.checked_mul(POW10_U64[shift as usize])?;
            if mantissa > MAX_MANTISSA_FAST_PATH {
                return None
            }
            Some(mantissa as f64 * POW10_F64[MAX_EXPONENT_FAST_PATH as usize])
        }
    }
}
