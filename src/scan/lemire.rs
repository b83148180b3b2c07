//! The Eisel-Lemire algorithm: `w * 10^q` from a 128-bit truncated product with `5^q`.
//!
//! The result is exact unless the truncated product is too close to a halfway point, which is
//! reported as [ExtendedFloat::invalid] so that the caller can fall back to the decimal path.

use crate::lut::{POW5_128, POW5_128_MAX, POW5_128_MIN};

use super::{ExtendedFloat, INFINITE_POWER, MANTISSA_EXPLICIT_BITS, MINIMUM_EXPONENT};

/// Exponent range in which halfway cases are exactly representable, so that an all-ones low
/// word cannot be a truncation artifact.
const MIN_EXPONENT_ROUND_TO_EVEN: i32 = -4;
const MAX_EXPONENT_ROUND_TO_EVEN: i32 = 23;

/// Exponent range where `5^q` (or its reciprocal) fits the 128-bit table without truncation
/// errors that could move the product across a halfway point.
const EXACT_POW5_RANGE: core::ops::RangeInclusive<i32> = -27 ..= 55;

/// `floor(log2(10^q)) + 63`.
#[inline]
const fn power(q: i32) -> i32 {
    ((q * (152_170 + 65536)) >> 16) + 63
}

#[inline]
fn full_multiplication(a: u64, b: u64) -> (u64, u64) {
    let r = (a as u128) * (b as u128);
    (r as u64, (r >> 64) as u64)
}

/// The upper 128 bits of `w * 5^q`, computing the lower half of the table entry only when the
/// bits of interest may be affected by it.
fn compute_product_approx(q: i32, w: u64, precision: usize) -> (u64, u64) {
    debug_assert!((POW5_128_MIN ..= POW5_128_MAX).contains(&q));
    let mask = if precision < 64 {
        0xFFFF_FFFF_FFFF_FFFF_u64 >> precision
    } else {
        0xFFFF_FFFF_FFFF_FFFF_u64
    };

    let [hi5, lo5] = POW5_128[(q - POW5_128_MIN) as usize];
    let (mut first_lo, mut first_hi) = full_multiplication(w, hi5);
    if first_hi & mask == mask {
        let (_, second_hi) = full_multiplication(w, lo5);
        first_lo = first_lo.wrapping_add(second_hi);
        if second_hi > first_lo {
            first_hi += 1;
        }
    }
    (first_lo, first_hi)
}

/// Computes the nearest `f64` to `w * 10^q`, as biased exponent and explicit mantissa bits.
pub fn lemire(q: i32, w: u64) -> ExtendedFloat {
    if w == 0 || q < POW5_128_MIN {
        return ExtendedFloat::zero()
    }
    if q > POW5_128_MAX {
        return ExtendedFloat::infinity()
    }

    let lz = w.leading_zeros();
    let w = w << lz;
    let (lo, hi) = compute_product_approx(q, w, MANTISSA_EXPLICIT_BITS + 3);
    if lo == 0xFFFF_FFFF_FFFF_FFFF && !EXACT_POW5_RANGE.contains(&q) {
        return ExtendedFloat::invalid()
    }

    let upper_bit = (hi >> 63) as i32;
    let shift = upper_bit + 64 - MANTISSA_EXPLICIT_BITS as i32 - 3;
    let mut mant = hi >> shift;
    let mut power2 = power(q) + upper_bit - lz as i32 - MINIMUM_EXPONENT;

    if power2 <= 0 {
        // subnormal, or rounds up to the smallest normal
        if -power2 + 1 >= 64 {
            return ExtendedFloat::zero()
        }
        mant >>= -power2 + 1;
        mant += mant & 1;
        mant >>= 1;
        power2 = (mant >= 1 << MANTISSA_EXPLICIT_BITS) as i32;
        return ExtendedFloat{ mant, exp: power2 }
    }

    // An exact halfway case rounds down to even, which the `+ (mant & 1)` below would miss.
    if lo <= 1
        && (MIN_EXPONENT_ROUND_TO_EVEN ..= MAX_EXPONENT_ROUND_TO_EVEN).contains(&q)
        && mant & 3 == 1
        && mant << shift == hi
    {
        mant &= !1;
    }

    mant += mant & 1;
    mant >>= 1;
    if mant >= 2 << MANTISSA_EXPLICIT_BITS {
        mant = 1 << MANTISSA_EXPLICIT_BITS;
        power2 += 1;
    }
    mant &= !(1 << MANTISSA_EXPLICIT_BITS);
    if power2 >= INFINITE_POWER {
        return ExtendedFloat::infinity()
    }
    ExtendedFloat{ mant, exp: power2 }
}
