//! A reproducible source of random `f64` bit patterns.

const MULTIPLIER: u64 = 6364136223846793005;
const INCREMENT: u64 = 1442695040888963407;

/// 64-bit linear congruential generator with Knuth's MMIX constants.
///
/// Each 64-bit output takes two steps and keeps bits 16..48 of the state after each one. The whole
/// sequence is determined by [Lcg::state], so printing it before an iteration is enough to replay
/// that iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub const fn new(seed: u64) -> Self {
        Lcg{ state: seed }
    }

    #[inline]
    pub const fn state(&self) -> u64 {
        self.state
    }

    #[inline]
    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.state >> 16) & 0xFFFF_FFFF
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let a = self.step();
        let b = self.step();
        a << 32 | b
    }

    /// Random bits as an `f64`; every bit pattern is possible, NaNs and infinities included.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from_bits(self.next_u64())
    }

    /// Like [Lcg::next_f64], but every NaN is replaced by [crate::CANONICAL_NAN].
    pub fn next_canonical_f64(&mut self) -> f64 {
        let num = self.next_f64();
        if num.is_nan() { f64::from_bits(crate::CANONICAL_NAN) } else { num }
    }

    /// Random finite `f64`s; NaN and infinite patterns are skipped.
    pub fn next_finite_f64(&mut self) -> f64 {
        loop {
            let num = self.next_f64();
            if num.is_finite() {
                return num
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.next_u64(), 0x7b7e_f767_ee11_84ba);
        assert_eq!(rng.state(), 1876011003808476466);
        assert_eq!(rng.next_u64(), 0x7822_2e72_1ae9_7f20);
        assert_eq!(rng.next_u64(), 0x4cda_6226_7f36_d0d0);

        let mut rng = Lcg::new(42);
        assert_eq!(rng.next_f64().to_bits(), 0x8aed_87ee_f8a5_c64c);
        assert_eq!(rng.state(), 4159066171780167020);
    }

    #[test]
    fn replay() {
        let mut rng = Lcg::new(7);
        for _ in 0..100 {
            rng.next_u64();
        }
        let mut replay = Lcg::new(rng.state());
        assert_eq!(rng.next_u64(), replay.next_u64());
        assert_eq!(rng, replay);
    }

    #[test]
    fn canonical_nan() {
        let mut rng = Lcg::new(1);
        for _ in 0..100_000 {
            let num = rng.next_canonical_f64();
            assert!(!num.is_nan() || num.to_bits() == crate::CANONICAL_NAN);
            assert!(rng.next_finite_f64().is_finite());
        }
    }
}
