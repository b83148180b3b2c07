//! A fixed-width unsigned integer, wide enough for every intermediate value of exact digit
//! generation.
//!
//! The widest values appear when printing subnormals: `mant * 10^k` stays below `2^1080`, which
//! is covered by 36 limbs of 32 bits. The width never changes at runtime; exceeding it is a logic
//! error and is only checked in debug builds.

use core::cmp::Ordering;

use crate::common::POW10_U64;

/// Number of 32-bit limbs.
pub const LIMBS: usize = 36;

/// Little-endian limbs; every limb at or above `size` is zero.
#[derive(Debug)]
#[derive(Clone, Copy)]
pub struct Wide {
    size: usize,
    limbs: [u32; LIMBS],
}

impl Wide {
    pub const fn from_u64(v: u64) -> Self {
        let mut limbs = [0; LIMBS];
        limbs[0] = v as u32;
        limbs[1] = (v >> 32) as u32;
        let size = if v >> 32 != 0 { 2 } else if v != 0 { 1 } else { 0 };
        Wide{ size, limbs }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs[..self.size].iter().all(|&l| l == 0)
    }

    /// Number of significant bits, 0 for zero.
    #[cfg(test)]
    pub fn bit_length(&self) -> usize {
        match self.limbs[..self.size].iter().rposition(|&l| l != 0) {
            Some(i) => i * 32 + (32 - self.limbs[i].leading_zeros() as usize),
            None => 0,
        }
    }

    fn trim(&mut self) {
        while self.size > 0 && self.limbs[self.size - 1] == 0 {
            self.size -= 1;
        }
    }

    #[cfg(test)]
    pub fn add(&mut self, other: &Wide) -> &mut Self {
        let mut size = self.size.max(other.size);
        let mut carry = false;
        for (a, &b) in self.limbs[..size].iter_mut().zip(&other.limbs[..size]) {
            let (v, c1) = a.overflowing_add(b);
            let (v, c2) = v.overflowing_add(carry as u32);
            *a = v;
            carry = c1 || c2;
        }
        if carry {
            debug_assert!(size < LIMBS, "Wide overflow");
            self.limbs[size] = 1;
            size += 1;
        }
        self.size = size;
        self
    }

    /// Subtracts `other`, which must not be larger than `self`.
    pub fn sub(&mut self, other: &Wide) -> &mut Self {
        let size = self.size.max(other.size);
        let mut borrow = false;
        for (a, &b) in self.limbs[..size].iter_mut().zip(&other.limbs[..size]) {
            let (v, b1) = a.overflowing_sub(b);
            let (v, b2) = v.overflowing_sub(borrow as u32);
            *a = v;
            borrow = b1 || b2;
        }
        debug_assert!(!borrow, "Wide underflow");
        self.size = size;
        self.trim();
        self
    }

    pub fn mul_small(&mut self, other: u32) -> &mut Self {
        let mut carry = 0u64;
        for a in &mut self.limbs[..self.size] {
            let v = *a as u64 * other as u64 + carry;
            *a = v as u32;
            carry = v >> 32;
        }
        if carry > 0 {
            debug_assert!(self.size < LIMBS, "Wide overflow");
            self.limbs[self.size] = carry as u32;
            self.size += 1;
        }
        self
    }

    pub fn mul_pow2(&mut self, bits: usize) -> &mut Self {
        if self.size == 0 {
            return self
        }
        let digits = bits / 32;
        let bits = (bits % 32) as u32;
        debug_assert!(self.size + digits <= LIMBS, "Wide overflow");

        // shift by whole limbs
        self.limbs.copy_within(..self.size, digits);
        self.limbs[..digits].fill(0);
        let mut size = self.size + digits;

        if bits > 0 {
            let overflow = self.limbs[size - 1] >> (32 - bits);
            if overflow > 0 {
                debug_assert!(size < LIMBS, "Wide overflow");
                self.limbs[size] = overflow;
                size += 1;
            }
            for i in (digits + 1 .. self.size + digits).rev() {
                self.limbs[i] = (self.limbs[i] << bits) | (self.limbs[i - 1] >> (32 - bits));
            }
            self.limbs[digits] <<= bits;
        }
        self.size = size;
        self
    }

    pub fn mul_pow10(&mut self, mut n: usize) -> &mut Self {
        while n >= 9 {
            self.mul_small(1_000_000_000);
            n -= 9;
        }
        if n > 0 {
            self.mul_small(POW10_U64[n] as u32);
        }
        self
    }
}

impl PartialEq for Wide {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Wide {}

impl PartialOrd for Wide {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Wide {
    fn cmp(&self, other: &Self) -> Ordering {
        let size = self.size.max(other.size);
        self.limbs[..size].iter().rev().cmp(other.limbs[..size].iter().rev())
    }
}
