//! The slow path: exact binary reconstruction on a fixed-size decimal digit buffer.
//!
//! The literal is scaled by powers of two, a bounded number of bits at a time, until it lies in
//! `[1/2, 1)`; the binary exponent is the total shift, and the mantissa is read off after one more
//! shift by 53 bits. Digits past [Decimal::MAX_DIGITS] are only remembered as a sticky
//! `truncated` flag, which is enough to break ties correctly.

use super::{ExtendedFloat, INFINITE_POWER, MANTISSA_EXPLICIT_BITS, MINIMUM_EXPONENT};

/// A decimal `0.d_1 d_2 ... * 10^decimal_point`, digits 0–9.
#[derive(Clone)]
pub struct Decimal {
    num_digits: usize,
    decimal_point: i32,
    /// Whether nonzero digits were dropped.
    truncated: bool,
    digits: [u8; Self::MAX_DIGITS],
}

impl Decimal {
    /// Digits stored. A halfway point between two doubles has at most 767 significant digits.
    pub const MAX_DIGITS: usize = 768;
    /// Once the decimal point is this far out the value is certainly zero or infinite.
    pub const DECIMAL_POINT_RANGE: i32 = 2047;
    /// The largest shift [Self::left_shift] and [Self::right_shift] accept.
    pub const MAX_SHIFT: usize = 60;

    pub fn new() -> Self {
        Decimal{ num_digits: 0, decimal_point: 0, truncated: false, digits: [0; Self::MAX_DIGITS] }
    }

    /// Parses the digits of `integer.fraction * 10^exponent`.
    pub fn parse(integer: &[u8], fraction: &[u8], exponent: i32) -> Self {
        let mut d = Self::new();
        let mut decimal_point = integer.len() as i64;
        let mut leading = true;
        for &c in integer.iter().chain(fraction) {
            if leading && c == b'0' {
                decimal_point -= 1;
                continue
            }
            leading = false;
            d.try_add_digit(c - b'0');
        }
        let decimal_point = decimal_point + exponent as i64;
        d.decimal_point = decimal_point.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        d.trim();
        d
    }

    #[inline]
    fn try_add_digit(&mut self, digit: u8) {
        if self.num_digits < Self::MAX_DIGITS {
            self.digits[self.num_digits] = digit;
            self.num_digits += 1;
        } else if digit != 0 {
            self.truncated = true;
        }
    }

    /// Drops trailing zeros.
    #[inline]
    fn trim(&mut self) {
        while self.num_digits > 0 && self.digits[self.num_digits - 1] == 0 {
            self.num_digits -= 1;
        }
    }

    /// The integer part, rounded half to even. Saturates at `u64::MAX` past 18 digits.
    pub fn round(&self) -> u64 {
        if self.num_digits == 0 || self.decimal_point < 0 {
            return 0
        }
        if self.decimal_point > 18 {
            return u64::MAX
        }
        let dp = self.decimal_point as usize;
        let mut n = 0u64;
        for i in 0..dp {
            n *= 10;
            if i < self.num_digits {
                n += self.digits[i] as u64;
            }
        }
        let mut round_up = false;
        if dp < self.num_digits {
            round_up = self.digits[dp] >= 5;
            if self.digits[dp] == 5 && dp + 1 == self.num_digits {
                // exactly halfway, unless digits were dropped
                round_up = self.truncated || (dp != 0 && self.digits[dp - 1] & 1 != 0);
            }
        }
        n + round_up as u64
    }

    /// Multiplies by `2^shift`.
    pub fn left_shift(&mut self, shift: usize) {
        debug_assert!(shift <= Self::MAX_SHIFT);
        if self.num_digits == 0 {
            return
        }
        // a shift by at most 60 bits adds at most 19 digits
        let mut tmp = [0u8; Self::MAX_DIGITS + 20];
        let mut write = tmp.len();
        let mut n = 0u64;
        for &digit in self.digits[..self.num_digits].iter().rev() {
            n += (digit as u64) << shift;
            write -= 1;
            tmp[write] = (n % 10) as u8;
            n /= 10;
        }
        while n > 0 {
            write -= 1;
            tmp[write] = (n % 10) as u8;
            n /= 10;
        }

        let count = tmp.len() - write;
        let new_digits = count - self.num_digits;
        let keep = count.min(Self::MAX_DIGITS);
        self.digits[..keep].copy_from_slice(&tmp[write .. write + keep]);
        if tmp[write + keep ..].iter().any(|&d| d != 0) {
            self.truncated = true;
        }
        self.num_digits = keep;
        self.decimal_point = self.decimal_point.saturating_add(new_digits as i32);
        self.trim();
    }

    /// Divides by `2^shift`.
    pub fn right_shift(&mut self, shift: usize) {
        debug_assert!(shift <= Self::MAX_SHIFT);
        let mut read = 0;
        let mut write = 0;
        let mut n = 0u64;
        while n >> shift == 0 {
            if read < self.num_digits {
                n = 10 * n + self.digits[read] as u64;
                read += 1;
            } else if n == 0 {
                return
            } else {
                while n >> shift == 0 {
                    n *= 10;
                    read += 1;
                }
                break
            }
        }

        self.decimal_point = self.decimal_point.saturating_sub(read as i32 - 1);
        if self.decimal_point < -Self::DECIMAL_POINT_RANGE {
            *self = Self::new();
            return
        }

        let mask = (1u64 << shift) - 1;
        while read < self.num_digits {
            let new_digit = (n >> shift) as u8;
            n = 10 * (n & mask) + self.digits[read] as u64;
            read += 1;
            self.digits[write] = new_digit;
            write += 1;
        }
        while n > 0 {
            let new_digit = (n >> shift) as u8;
            n = 10 * (n & mask);
            if write < Self::MAX_DIGITS {
                self.digits[write] = new_digit;
                write += 1;
            } else if new_digit > 0 {
                self.truncated = true;
            }
        }
        self.num_digits = write;
        self.trim();
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::new()
    }
}

/// The largest power of two not above `10^n`, as a shift, capped at [Decimal::MAX_SHIFT].
#[inline]
fn get_shift(n: usize) -> usize {
    const POWERS: [u8; 19] = [0, 3, 6, 9, 13, 16, 19, 23, 26, 29, 33, 36, 39, 43, 46, 49, 53, 56, 59];
    match POWERS.get(n) {
        Some(&shift) => shift as usize,
        None => Decimal::MAX_SHIFT,
    }
}

/// Correctly rounded conversion of `integer.fraction * 10^exponent`, for any number of digits.
pub fn slow(integer: &[u8], fraction: &[u8], exponent: i32) -> ExtendedFloat {
    let mut d = Decimal::parse(integer, fraction, exponent);
    if d.num_digits == 0 || d.decimal_point < -324 {
        return ExtendedFloat::zero()
    }
    if d.decimal_point >= 310 {
        return ExtendedFloat::infinity()
    }

    // scale into [1/2, 1), counting the shifts in exp2
    let mut exp2 = 0i32;
    while d.decimal_point > 0 {
        let shift = get_shift(d.decimal_point as usize);
        d.right_shift(shift);
        if d.decimal_point < -Decimal::DECIMAL_POINT_RANGE {
            return ExtendedFloat::zero()
        }
        exp2 += shift as i32;
    }
    while d.decimal_point <= 0 {
        let shift = if d.decimal_point == 0 {
            match d.digits[0] {
                digit if digit >= 5 => break,
                0 | 1 => 2,
                _ => 1,
            }
        } else {
            get_shift(-d.decimal_point as usize)
        };
        d.left_shift(shift);
        if d.decimal_point > Decimal::DECIMAL_POINT_RANGE {
            return ExtendedFloat::infinity()
        }
        exp2 -= shift as i32;
    }

    // now in [1, 2); denormalize below the smallest normal exponent
    exp2 -= 1;
    while MINIMUM_EXPONENT + 1 > exp2 {
        let n = ((MINIMUM_EXPONENT + 1 - exp2) as usize).min(Decimal::MAX_SHIFT);
        d.right_shift(n);
        exp2 += n as i32;
    }
    if exp2 - MINIMUM_EXPONENT >= INFINITE_POWER {
        return ExtendedFloat::infinity()
    }

    d.left_shift(MANTISSA_EXPLICIT_BITS + 1);
    let mut mant = d.round();
    if mant >= 1 << (MANTISSA_EXPLICIT_BITS + 1) {
        // rounding carried into a new bit
        d.right_shift(1);
        exp2 += 1;
        mant = d.round();
        if exp2 - MINIMUM_EXPONENT >= INFINITE_POWER {
            return ExtendedFloat::infinity()
        }
    }
    let mut power2 = exp2 - MINIMUM_EXPONENT;
    if mant < 1 << MANTISSA_EXPLICIT_BITS {
        power2 -= 1;
    }
    mant &= (1 << MANTISSA_EXPLICIT_BITS) - 1;
    ExtendedFloat{ mant, exp: power2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn slow_f64(text: &str) -> f64 {
        let (mant, exponent) = match text.split_once('e') {
            Some((mant, exp)) => (mant, exp.parse().unwrap()),
            None => (text, 0),
        };
        let (integer, fraction) = mant.split_once('.').unwrap_or((mant, ""));
        slow(integer.as_bytes(), fraction.as_bytes(), exponent).to_f64(false)
    }

    fn digits(d: &Decimal) -> (&[u8], i32, bool) {
        (&d.digits[..d.num_digits], d.decimal_point, d.truncated)
    }

    #[test]
    fn parse() {
        let d = Decimal::parse(b"0012", b"3400", 2);
        assert_eq!(digits(&d), (&[1u8, 2, 3, 4][..], 4, false));
        let d = Decimal::parse(b"", b"00056", -1);
        assert_eq!(digits(&d), (&[5u8, 6][..], -4, false));
        let mut long = [b'1'; 800];
        long[799] = b'0';
        let d = Decimal::parse(&long, b"", 0);
        assert_eq!(digits(&d), (&[1u8; Decimal::MAX_DIGITS][..], 800, true));
    }

    #[test]
    fn shifts() {
        let mut d = Decimal::parse(b"5", b"", 0);
        d.left_shift(3);
        assert_eq!(digits(&d), (&[4u8][..], 2, false));
        d.right_shift(4);
        assert_eq!(digits(&d), (&[2u8, 5][..], 1, false));
        d.right_shift(60);
        d.left_shift(60);
        assert_eq!(digits(&d), (&[2u8, 5][..], 1, false));
        assert_eq!(d.round(), 2);
    }

    #[test]
    fn round_half_even() {
        assert_eq!(Decimal::parse(b"2", b"5", 0).round(), 2);
        assert_eq!(Decimal::parse(b"3", b"5", 0).round(), 4);
        assert_eq!(Decimal::parse(b"2", b"51", 0).round(), 3);
        assert_eq!(Decimal::parse(b"", b"5", 0).round(), 0);
        assert_eq!(Decimal::parse(b"1", b"", 19).round(), u64::MAX);
    }

    #[test]
    fn known() {
        assert_eq!(slow_f64("0.1"), 0.1);
        assert_eq!(slow_f64("1e23"), 1e23);
        assert_eq!(slow_f64("2.2250738585072011e-308"), 2.2250738585072011e-308);
        assert_eq!(slow_f64("4.9406564584124654e-324"), 4.9406564584124654e-324);
        assert_eq!(slow_f64("2.4703282292062327e-324"), 0.0);
        assert_eq!(slow_f64("2.4703282292062328e-324"), 4.9406564584124654e-324);
        assert_eq!(slow_f64("1.7976931348623157e308"), f64::MAX);
        assert_eq!(slow_f64("1.7976931348623159e308"), f64::INFINITY);
        assert_eq!(slow_f64("9007199254740993"), 9007199254740992.0);
        assert_eq!(
            slow_f64("9007199254740993.0000000000000000000000001"),
            9007199254740994.0,
        );
        assert_eq!(slow_f64("1e-400"), 0.0);
        assert_eq!(slow_f64("1e400"), f64::INFINITY);
        assert_eq!(slow_f64("0.000"), 0.0);
    }

    #[test]
    fn halfway_past_buffer() {
        // 1 + 2^-53 is exactly halfway between 1 and the next double.
        let half = "1.00000000000000011102230246251565404236316680908203125";
        assert_eq!(slow_f64(half), 1.0);
        let above = format!("{half}{}1", "0".repeat(800));
        assert_eq!(slow_f64(&above), 1.0000000000000002);
        let below = format!("1.00000000000000011102230246251565404236316680908203124{}", "9".repeat(800));
        assert_eq!(slow_f64(&below), 1.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20_000))]

        #[test]
        fn matches_std(bits in 0u64 .. 0x7ff0_0000_0000_0000, p in 0usize .. 25) {
            let text = format!("{:.*e}", p, f64::from_bits(bits));
            let expected: f64 = text.parse().unwrap();
            prop_assert_eq!(slow_f64(&text).to_bits(), expected.to_bits(), "{}", text);
        }
    }
}
