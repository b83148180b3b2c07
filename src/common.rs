//! Routines and types that are *shared* between the formatting and scanning halves.

/// The exponent is represented by an i32 everywhere; this is sufficiently wide to accomodate both
/// binary and decimal exponents of any `f64`, and the saturated exponents of absurd literals.
pub type Exp = i32;

//

pub const EXP_LOG10_POW2_BOUNDS: core::ops::RangeInclusive<i32> = -112815 ..= 112815;

/// Returns the largest exponent `f` such that `10^f ≤ 2^e`, i.e. the integer part of
/// `log_10(2^e)`.
///
/// Uses an euclidean approximation that is only valid in the range [EXP_LOG10_POW2_BOUNDS]. If
/// `exp` is not in that range, the result is unspecified.
#[inline]
pub const fn exp_log10_pow2(exp: i32) -> i32 {
    debug_assert!(*EXP_LOG10_POW2_BOUNDS.start() <= exp && exp <= *EXP_LOG10_POW2_BOUNDS.end());
    let x = 1292913987i64 * exp as i64;
    (x >> 32) as i32
}

/// Returns `e - e_0`, where `e_0` is the smallest exponent such that `exp_log10_pow2(e_0)` equals
/// `exp_log10_pow2(e)`.
///
/// Same range restrictions as [exp_log10_pow2].
#[inline]
pub const fn exp_log10_pow2_residual(exp: i32) -> u32 {
    debug_assert!(*EXP_LOG10_POW2_BOUNDS.start() <= exp && exp <= *EXP_LOG10_POW2_BOUNDS.end());
    let x = 1292913987i64 * exp as i64;
    x as u32 / 1292913987u32
}

//

/// A 128-bit multiplier, split in two halves.
pub struct Multiplier<T> {
    pub hi: T,
    pub lo: T,
}

/// Table of [Multiplier]s indexed by decimal exponent, starting at [Multipliers::OFFSET].
pub struct Multipliers<T, const N: usize> (
    [Multiplier<T>; N]
);

impl<T, const N: usize> Multipliers<T, N> {
    const OFFSET: i32 = -324;

    pub const fn new(table: [Multiplier<T>; N]) -> Self {
        Self(table)
    }

    /// Panics if `exp_floor` is outside the table; callers only pass values of
    /// [exp_log10_pow2] for the binary exponent of a finite `f64`.
    #[inline]
    pub fn get(&self, exp_floor: i32) -> &Multiplier<T> {
        let idx = exp_floor - Self::OFFSET;
        debug_assert!(0 <= idx && idx < N as i32);
        &self.0[idx as usize]
    }
}

/// The modular inverse of `5^f` and the largest `n` such that `n * 5^f` does not overflow.
pub struct MultInverse<T> {
    pub multiplier: T,
    pub bound: T,
}

pub struct MultInverses<T, const N: usize> (
    [MultInverse<T>; N]
);

impl<T, const N: usize> MultInverses<T, N> {
    pub const fn new(table: [MultInverse<T>; N]) -> Self {
        Self(table)
    }

    #[inline]
    pub fn get(&self, exp: i32) -> &MultInverse<T> {
        debug_assert!(0 <= exp && exp < N as i32);
        &self.0[exp as usize]
    }
}

//

/// Exact powers of ten representable as `u64`.
pub const POW10_U64: [u64; 20] = {
    let mut table = [1u64; 20];
    let mut i = 1;
    while i < 20 {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// Exact powers of ten representable as `f64`.
pub const POW10_F64: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11,
    1e12, 1e13, 1e14, 1e15, 1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Number of decimal digits of `x`, which is 1 for 0.
#[inline]
pub fn len_u64(x: u64) -> usize {
    POW10_U64[1..].iter().take_while(|&&p| x >= p).count() + 1
}
