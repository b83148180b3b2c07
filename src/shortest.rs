//! Tejú Jaguá: the shortest decimal representation that rounds back to the same `f64`.

use crate::common::{self, Exp, Multiplier};
use crate::float::{Binary, Mant};
use crate::lut;

/// A decimal representation `mant * 10^exp` of the **absolute value** of a finite `f64`.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Decimal {
    pub exp: Exp,
    pub mant: Mant,
}

/// Calculates the result of `a * mult / 2^128` without overflow.
#[inline]
const fn multiword_multiply_shift(a: Mant, mult: &Multiplier<Mant>) -> Mant {
    let result_hi = mult.hi as u128 * a as u128;
    let result_lo = mult.lo as u128 * a as u128;
    let result = (result_hi + (result_lo >> Mant::BITS)) >> Mant::BITS;
    result as Mant
}

/// Calculates the result of `multiword_multiply_shift(2^k, mult)` without overflow.
#[inline]
const fn multiword_multiply_shift_pow2(k: u32, mult: &Multiplier<Mant>) -> Mant {
    debug_assert!(k < 2 * Mant::BITS);
    if k <= Mant::BITS {
        mult.hi >> (Mant::BITS - k)
    } else {
        (mult.hi << (k - Mant::BITS)) | mult.lo >> (2 * Mant::BITS - k)
    }
}

/// Checks if `n` is an even number, in which case a mantissa of `n` wins the tiebreak against its
/// neighbours (in a "round to nearest, ties to even" rounding rule).
#[inline]
const fn is_even(n: Mant) -> bool {
    n % 2 == 0
}

/// Returns the largest exponent `f` such that `10^f ≤ 2^binary.exp`.
#[inline]
const fn exp_log10_pow2(binary: &Binary) -> Exp {
    common::exp_log10_pow2(binary.exp)
}

/// Checks whether `binary` is a "small integer", i.e. in the range of the contiguous integers
/// representable by an `f64` without rounding.
#[inline]
const fn is_small_integer(binary: &Binary) -> bool {
    let neg_exp = -binary.exp;
    0 <= neg_exp && neg_exp < Binary::BITS_MANTISSA as Exp
        && crate::float::lsb(binary.mant, neg_exp as u32) == 0
}

/// The core of Tejú Jaguá: finds the shortest decimal representation of `binary` if it can, or
/// the closest if it must.
fn teju_jagua_inner(binary: &Binary) -> Decimal {
    debug_assert!(binary.mant != 0);

    let exp_floor = exp_log10_pow2(binary);
    let exp_residual = common::exp_log10_pow2_residual(binary.exp);
    let mult = lut::MULTIPLIERS.get(exp_floor);
    let mant = binary.mant;

    // Centered: the neighbours are equidistant.
    if mant != Binary::MAX_MANT || binary.exp == Binary::MIN_EXP {
        let mant_a = (2 * mant - 1) << exp_residual;
        let mant_b = (2 * mant + 1) << exp_residual;
        let a = multiword_multiply_shift(mant_a, mult);
        let b = multiword_multiply_shift(mant_b, mult);
        let decimal_a = Decimal{ exp: exp_floor, mant: mant_a };
        let decimal_b = Decimal{ exp: exp_floor, mant: mant_b };

        let q = b / 10;
        let s = q * 10;
        if a < s {
            if s < b || is_even(mant) || !decimal_b.is_tie() {
                return Decimal{ exp: exp_floor + 1, mant: q }.remove_trailing_zeros()
            }
        } else if s == a && is_even(mant) && decimal_a.is_tie() {
            return Decimal{ exp: exp_floor + 1, mant: q }.remove_trailing_zeros()
        } else if !is_even(a + b) {
            return Decimal{ exp: exp_floor, mant: (a + b) / 2 + 1 }
        }

        let mant_c = (4 * mant) << exp_residual;
        let c2 = multiword_multiply_shift(mant_c, mult);
        return Decimal{ exp: exp_floor, mant: round_closest(c2, exp_floor) }
    }

    // Uncentered: `mant` is a power of two, so the lower neighbour is twice as close.
    let mant_a = (4 * Binary::MAX_MANT - 1) << exp_residual;
    let mant_b = (2 * Binary::MAX_MANT + 1) << exp_residual;
    let a = multiword_multiply_shift(mant_a, mult) / 2;
    let b = multiword_multiply_shift(mant_b, mult);
    let decimal_a = Decimal{ exp: exp_floor, mant: mant_a };

    if a < b {
        let q = b / 10;
        let s = q * 10;
        // The mantissa is even, so both ends of the interval are included.
        if a < s || (s == a && decimal_a.is_tie_uncentered()) {
            return Decimal{ exp: exp_floor + 1, mant: q }.remove_trailing_zeros()
        }

        let log2_mant_c = Binary::BITS_MANTISSA + exp_residual + 1;
        let c2 = multiword_multiply_shift_pow2(log2_mant_c, mult);
        let c = c2 / 2;
        if c == a && !decimal_a.is_tie_uncentered() {
            return Decimal{ exp: exp_floor, mant: c + 1 }
        }
        Decimal{ exp: exp_floor, mant: round_closest(c2, exp_floor) }
    } else if decimal_a.is_tie_uncentered() {
        Decimal{ exp: exp_floor, mant: a }.remove_trailing_zeros()
    } else {
        let mant_c = (40 * Binary::MAX_MANT) << exp_residual;
        let c2 = multiword_multiply_shift(mant_c, mult);
        Decimal{ exp: exp_floor - 1, mant: round_closest(c2, exp_floor) }
    }
}

/// Runs Tejú Jaguá on a **finite**, **nonzero** value; the result is the shortest `mant * 10^exp`
/// that rounds back to `binary`, and the closest one to it among those of the same length.
pub fn teju_jagua(binary: &Binary) -> Decimal {
    debug_assert!(binary.is_finite() && binary.mant != 0);
    if is_small_integer(binary) {
        return Decimal{ exp: 0, mant: binary.mant >> (-binary.exp as u32) }.remove_trailing_zeros()
    }
    teju_jagua_inner(binary)
}

/// Rounds `c2 / 2` to the nearest integer, ties to even, where `c2` is the truncated product
/// computed with the multiplier for `10^-exp_floor`.
#[inline]
fn round_closest(c2: Mant, exp_floor: Exp) -> Mant {
    let c = c2 / 2;
    let round_up = !(is_even(c2) || (is_even(c) && Decimal{ exp: -exp_floor, mant: c2 }.is_tie()));
    c + round_up as Mant
}

impl Decimal {
    #[inline]
    fn is_tie(&self) -> bool {
        0 <= self.exp && (self.exp as usize) < lut::MULT_INVERSES_LEN
            && self.is_multiple_of_pow5()
    }

    #[inline]
    fn is_tie_uncentered(&self) -> bool {
        self.mant % 5 == 0
            && self.is_tie()
    }

    /// Checks whether `self.mant` is a multiple of `5 ^ self.exp`.
    #[inline]
    fn is_multiple_of_pow5(&self) -> bool {
        let entry = lut::MULT_INVERSES.get(self.exp);
        self.mant.wrapping_mul(entry.multiplier) <= entry.bound
    }

    /// Shortens `self` by removing trailing zeros from `self.mant` while possible, and
    /// incrementing `self.exp` by the same amount.
    pub const fn remove_trailing_zeros(mut self) -> Self {
        const M_INV5: Mant = -((Mant::MAX / 5) as i64) as Mant;
        const BOUND: Mant = Mant::MAX / 10 + 1;
        debug_assert!(self.mant != 0);
        loop {
            let q = self.mant.wrapping_mul(M_INV5).rotate_right(1);
            if q >= BOUND {
                return self
            }
            self.exp += 1;
            self.mant = q;
        }
    }
}
