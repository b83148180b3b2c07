//! Exact-precision digit generation: the leading digits of the exact decimal expansion of an
//! `f64`, correctly rounded half to even.
//!
//! This is the fixed-size-output variant of Dragon4. The value is kept as the ratio `mant / scale`
//! of two [Wide] integers, with the power of ten folded into whichever side keeps both integral.

use core::cmp::Ordering;

use crate::common::{self, Exp};
use crate::digits::{DigitSequence, MAX_DIGITS};
use crate::float::Binary;
use crate::wide::Wide;

/// Generates at most `ndigits` digits of a **finite**, **nonzero** `binary`, stopping early at
/// the digit worth `10^limit` if a limit is given (that digit is the last one kept).
///
/// `ndigits` is capped at [MAX_DIGITS]; the digits past the cap are zeros for every `f64`, and
/// [DigitSequence::digit] reports them as such. If the value rounds to zero at `limit`, the result
/// is [DigitSequence::zero].
pub fn format_exact(binary: &Binary, ndigits: usize, limit: Option<Exp>) -> DigitSequence {
    debug_assert!(binary.is_finite() && binary.mant != 0);
    let ndigits = ndigits.min(MAX_DIGITS);

    // `10^(k-1) <= v < 10^(k+1)`, using the bit length of `mant - 1`.
    let mant_bits = (u64::BITS - (binary.mant - 1).leading_zeros()) as Exp;
    let mut k = common::exp_log10_pow2(mant_bits + binary.exp);

    // `v = mant / scale`.
    let mut mant = Wide::from_u64(binary.mant);
    let mut scale = Wide::from_u64(1);
    if binary.exp < 0 {
        scale.mul_pow2(-binary.exp as usize);
    } else {
        mant.mul_pow2(binary.exp as usize);
    }

    // divide `v` by `10^k`, then fix up `k` so that `scale <= mant < 10 * scale`.
    if k >= 0 {
        scale.mul_pow10(k as usize);
    } else {
        mant.mul_pow10(-k as usize);
    }
    if mant >= scale {
        k += 1;
    } else {
        mant.mul_small(10);
    }
    debug_assert!(scale <= mant);

    let len = match limit {
        Some(limit) if k < limit => return DigitSequence::zero(),
        Some(limit) => ndigits.min((k - limit) as usize),
        None => ndigits,
    };

    // cache `(2, 4, 8) * scale` for digit generation.
    let mut scale2 = scale;
    scale2.mul_pow2(1);
    let mut scale4 = scale;
    scale4.mul_pow2(2);
    let mut scale8 = scale;
    scale8.mul_pow2(3);

    let mut buf = [0u8; MAX_DIGITS];
    for i in 0..len {
        if mant.is_zero() {
            // the expansion terminated; the remaining digits are zeros and nothing rounds.
            return DigitSequence::from_parts(buf, i, k)
        }

        let mut d = 0;
        if mant >= scale8 { mant.sub(&scale8); d += 8; }
        if mant >= scale4 { mant.sub(&scale4); d += 4; }
        if mant >= scale2 { mant.sub(&scale2); d += 2; }
        if mant >= scale  { mant.sub(&scale);  d += 1; }
        debug_assert!(mant < scale);
        debug_assert!(d < 10);
        buf[i] = d;
        mant.mul_small(10);
    }

    // round half to even on the remainder
    let mut scale5 = scale;
    scale5.mul_small(5);
    let order = mant.cmp(&scale5);
    let round_up = order == Ordering::Greater
        || (order == Ordering::Equal && len > 0 && buf[len - 1] % 2 == 1);

    if !round_up {
        return DigitSequence::from_parts(buf, len, k)
    }
    match buf[..len].iter().rposition(|&d| d != 9) {
        Some(i) => {
            buf[i] += 1;
            buf[i + 1 .. len].fill(0);
            DigitSequence::from_parts(buf, len, k)
        }
        None => {
            // all nines (or no digits at all): the result is a single 1 one position higher.
            buf[..len].fill(0);
            buf[0] = 1;
            DigitSequence::from_parts(buf, len.max(1), k + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// `n` digits of `seq`, as text, and the exponent of the first one.
    fn render(seq: &DigitSequence, n: usize) -> (String, Exp) {
        let digits = (0..n as isize).map(|i| char::from(b'0' + seq.digit(i))).collect();
        (digits, seq.exp() - 1)
    }

    /// The same, computed by the standard library's exact formatting.
    fn reference(num: f64, n: usize) -> (String, Exp) {
        let text = format!("{:.*e}", n - 1, num.abs());
        let (mant, exp) = text.split_once('e').unwrap();
        (mant.replace('.', ""), exp.parse().unwrap())
    }

    fn assert_exact(num: f64, n: usize, digits: &str, exp: Exp) {
        let seq = format_exact(&Binary::new(num), n, None);
        assert_eq!(render(&seq, n), (digits.to_string(), exp), "{num:e} to {n} digits");
    }

    #[test]
    fn known() {
        assert_exact(1.0, 18, "100000000000000000", 0);
        assert_exact(789456123.0, 16, "7894561230000000", 8);
        assert_exact(0.1, 20, "10000000000000000555", -1);
        assert_exact(8.6, 5, "86000", 0);
        assert_exact(1234567.8, 7, "1234568", 6);
        assert_exact(4.9406564584124654e-324, 6, "494066", -324);
        assert_exact(f64::MAX, 6, "179769", 308);
    }

    #[test]
    fn half_to_even() {
        assert_exact(0.125, 2, "12", -1);
        assert_exact(0.375, 2, "38", -1);
        assert_exact(2.5, 1, "2", 0);
        assert_exact(3.5, 1, "4", 0);
        assert_exact(9.5, 1, "1", 1);
        assert_exact(99.5, 2, "10", 2);
    }

    #[test]
    fn full_expansion() {
        // The smallest subnormal has 751 significant digits; past them everything is zero.
        let seq = format_exact(&Binary::new(4.9406564584124654e-324), usize::MAX, None);
        assert_eq!(seq.len(), 751);
        assert_eq!(seq.digits()[..5], [4, 9, 4, 0, 6]);
        assert_eq!(seq.digits()[750], 5);
        assert_eq!(seq.digit(751), 0);
        assert_eq!(seq.exp(), -323);
    }

    #[test]
    fn limit() {
        // 0.6 to no decimals rounds up to 1.
        let seq = format_exact(&Binary::new(0.6), MAX_DIGITS, Some(0));
        assert_eq!((seq.digits(), seq.exp()), (&[1u8][..], 1));
        // 0.5 is a tie and rounds down to 0.
        let seq = format_exact(&Binary::new(0.5), MAX_DIGITS, Some(0));
        assert!(seq.is_empty());
        // Far below the last kept position.
        let seq = format_exact(&Binary::new(0.001), MAX_DIGITS, Some(-1));
        assert!(seq.is_empty());
        // 0.099999999860301614 to 5 decimals rounds up to 0.10000.
        let seq = format_exact(&Binary::new(0.099999999860301614), MAX_DIGITS, Some(-5));
        assert_eq!((seq.digits(), seq.exp()), (&[1u8][..], 0));
        // 1234.5678 to 2 decimals.
        let seq = format_exact(&Binary::new(1234.5678), MAX_DIGITS, Some(-2));
        assert_eq!((seq.digits(), seq.exp()), (&[1u8, 2, 3, 4, 5, 7][..], 4));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100_000))]

        #[test]
        fn matches_std(bits in 1u64 .. 0x7ff0_0000_0000_0000, n in 1usize .. 40) {
            let num = f64::from_bits(bits);
            let seq = format_exact(&Binary::new(num), n, None);
            prop_assert_eq!(render(&seq, n), reference(num, n));
        }

        #[test]
        fn matches_std_small_decimals(mant in 1u64 .. 1_000_000, exp in -30i32 .. 30, n in 1usize .. 20) {
            let num = mant as f64 * 10f64.powi(exp);
            let seq = format_exact(&Binary::new(num), n, None);
            prop_assert_eq!(render(&seq, n), reference(num, n));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2_000))]

        #[test]
        fn matches_std_long(bits in 1u64 .. 0x7ff0_0000_0000_0000, n in 100usize .. 900) {
            let num = f64::from_bits(bits);
            let seq = format_exact(&Binary::new(num), n, None);
            prop_assert_eq!(render(&seq, n), reference(num, n));
        }
    }
}
