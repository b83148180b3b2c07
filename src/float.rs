//! Decomposition of an `f64` into sign, exponent, mantissa and class.

use crate::common::Exp;

/// The mantissa is represented by an unsigned integer the same size as the float.
pub type Mant = u64;

/// Which of the five IEEE-754 categories a value falls in. Exactly one holds for every bit
/// pattern.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum FloatClass {
    Zero,
    Subnormal,
    Normal,
    Infinite,
    Nan,
}

/// An `f64` decoded into its fields, such that `|num| = mant * 2^exp` for finite values.
///
/// For infinities `mant` is 0; for NaNs it holds the raw payload. `exp` is meaningless for both.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Binary {
    pub sign: bool,
    pub exp: Exp,
    pub mant: Mant,
    pub class: FloatClass,
}

/// Returns the lowest `n` bits of `x`.
#[inline]
pub const fn lsb(x: Mant, n: u32) -> Mant {
    x % (1 << n)
}

impl Binary {
    /// Number of bits in precision of the mantissa, including the implicit `1.`.
    pub const BITS_MANTISSA: u32 = 53;

    /// Number of bits of the mantissa that are actually stored.
    pub const BITS_MANTISSA_EXPLICIT: u32 = Self::BITS_MANTISSA - 1;

    /// The exponent bias, including the implicit factor of `2 ^ Self::BITS_MANTISSA` from treating
    /// the mantissa as an integer. This is also the exponent of every subnormal.
    pub const MIN_EXP: Exp = f64::MIN_EXP - Self::BITS_MANTISSA as i32;

    /// 1 + the maximum mantissa value storable in a float.
    pub const MAX_MANT: Mant = 1 << Self::BITS_MANTISSA_EXPLICIT;

    const EXP_FIELD_MAX: Mant = 0x7ff;

    /// Decodes any `f64`. Total: every bit pattern has a class.
    #[inline]
    pub const fn new(num: f64) -> Self {
        let bits = num.to_bits();
        let sign = bits >> 63 != 0;
        let fraction = lsb(bits, Self::BITS_MANTISSA_EXPLICIT);
        let field = lsb(bits >> Self::BITS_MANTISSA_EXPLICIT, 11);

        let (exp, mant, class) = match (field, fraction) {
            (0, 0) => (Self::MIN_EXP, 0, FloatClass::Zero),
            (0, _) => (Self::MIN_EXP, fraction, FloatClass::Subnormal),
            (Self::EXP_FIELD_MAX, 0) => (0, 0, FloatClass::Infinite),
            (Self::EXP_FIELD_MAX, _) => (0, fraction, FloatClass::Nan),
            _ => (
                field as Exp - 1 + Self::MIN_EXP,
                fraction | Self::MAX_MANT,
                FloatClass::Normal,
            ),
        };

        Binary{ sign, exp, mant, class }
    }

    #[inline]
    pub const fn is_finite(&self) -> bool {
        !matches!(self.class, FloatClass::Infinite | FloatClass::Nan)
    }

    /// Reassembles the bit pattern this value was decoded from.
    #[cfg(test)]
    pub const fn to_f64(&self) -> f64 {
        let sign = (self.sign as u64) << 63;
        let (field, fraction) = match self.class {
            FloatClass::Zero => (0, 0),
            FloatClass::Subnormal => (0, self.mant),
            FloatClass::Infinite => (Self::EXP_FIELD_MAX, 0),
            FloatClass::Nan => (Self::EXP_FIELD_MAX, self.mant),
            FloatClass::Normal => (
                (self.exp - Self::MIN_EXP + 1) as Mant,
                lsb(self.mant, Self::BITS_MANTISSA_EXPLICIT),
            ),
        };
        f64::from_bits(sign | field << Self::BITS_MANTISSA_EXPLICIT | fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Aux function, assert that `num` is decoded as `binary`; repeat for `-num`.
    fn assert_decoded(num: f64, exp: Exp, mant: Mant, class: FloatClass) {
        assert_eq!(Binary::new(num.abs()), Binary{ sign: false, exp, mant, class });
        assert_eq!(Binary::new(-num.abs()), Binary{ sign: true, exp, mant, class });
    }

    #[test]
    fn extremes() {
        assert_decoded(0.0, Binary::MIN_EXP, 0, FloatClass::Zero);
        assert_decoded(4.94065645841246544177e-324, -1022-52, 1, FloatClass::Subnormal);
        assert_decoded(f64::MIN_POSITIVE, -1022-52, 1 << 52, FloatClass::Normal);
        assert_decoded(f64::MAX, 1023-52, (1 << 53) - 1, FloatClass::Normal);
        assert_decoded(1.0, -52, 1 << 52, FloatClass::Normal);
        assert_decoded(f64::INFINITY, 0, 0, FloatClass::Infinite);
    }

    #[test]
    fn nan_payload() {
        let nan = f64::from_bits(0xfff8_0000_0000_0001);
        let binary = Binary::new(nan);
        assert_eq!(binary.class, FloatClass::Nan);
        assert!(binary.sign);
        assert_eq!(binary.mant, 0x8_0000_0000_0001);
        assert_eq!(binary.to_f64().to_bits(), nan.to_bits());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200_000))]

        #[test]
        fn bits_roundtrip(bits in any::<u64>()) {
            let float = f64::from_bits(bits);
            prop_assert_eq!(Binary::new(float).to_f64().to_bits(), bits);
        }

        #[test]
        fn value_roundtrip(float in f64::MIN .. f64::MAX) {
            prop_assume!(float != 0.0);
            let binary = Binary::new(float);
            prop_assert!(binary.is_finite());
            let refloat = (2f64.powi(binary.exp) * binary.mant as f64).copysign(float);
            prop_assert_eq!(refloat, float);
        }
    }
}
