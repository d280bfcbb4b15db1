//! F128 definition, raw parts, classification, and the rounding step shared by the arithmetic operations.

use core::num::FpCategory;

use crate::common::util::shift_right_sticky;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::BIASED_EXPONENT_INF;
use crate::defs::EXPONENT_BIAS;
use crate::defs::EXPONENT_MASK;
use crate::defs::IMPLICIT_BIT;
use crate::defs::MANTISSA_BIT_SIZE;
use crate::defs::MANTISSA_MASK;
use crate::defs::QUIET_BIT;
use crate::defs::SIGN_BIT;

#[cfg(feature = "random")]
use crate::defs::Error;
#[cfg(feature = "random")]
use crate::defs::EXPONENT_MAX;
#[cfg(feature = "random")]
use crate::defs::EXPONENT_MIN;

/// Number of bits below the mantissa kept by intermediate results for rounding.
pub(crate) const ROUND_BITS: u32 = 14;

/// Bit position of the leading bit of an intermediate result passed to `round_pack`.
pub(crate) const LEADING_BIT_POS: u32 = MANTISSA_BIT_SIZE as u32 + ROUND_BITS;

const ROUND_MASK: u128 = (1 << ROUND_BITS) - 1;

const ROUND_HALF: u128 = 1 << (ROUND_BITS - 1);

/// Not-a-number.
pub const NAN: F128 = F128::NAN;

/// Positive infinity.
pub const INF_POS: F128 = F128::INF_POS;

/// Negative infinity.
pub const INF_NEG: F128 = F128::INF_NEG;

/// A number in the IEEE 754 binary128 format: 1 sign bit, 15 bits of biased exponent, and 112 bits of mantissa
/// with the implicit leading bit.
///
/// The value is stored as its bit pattern, so the type is `Copy` and cheap to pass around.
/// All operations are pure functions of their arguments.
#[derive(Copy, Clone)]
pub struct F128 {
    bits: u128,
}

impl F128 {
    /// Positive zero.
    pub const ZERO: Self = Self { bits: 0 };

    /// Negative zero.
    pub const NEG_ZERO: Self = Self { bits: SIGN_BIT };

    /// One.
    pub const ONE: Self = Self {
        bits: (EXPONENT_BIAS as u128) << MANTISSA_BIT_SIZE,
    };

    /// Positive infinity.
    pub const INF_POS: Self = Self {
        bits: EXPONENT_MASK,
    };

    /// Negative infinity.
    pub const INF_NEG: Self = Self {
        bits: EXPONENT_MASK | SIGN_BIT,
    };

    /// Default quiet NaN produced by invalid operations.
    pub const NAN: Self = Self {
        bits: EXPONENT_MASK | QUIET_BIT,
    };

    /// The largest finite number.
    pub const MAX: Self = Self {
        bits: (EXPONENT_MASK - IMPLICIT_BIT) | MANTISSA_MASK,
    };

    /// The smallest finite number.
    pub const MIN: Self = Self {
        bits: (EXPONENT_MASK - IMPLICIT_BIT) | MANTISSA_MASK | SIGN_BIT,
    };

    /// The smallest positive normal number.
    pub const MIN_POSITIVE: Self = Self { bits: IMPLICIT_BIT };

    /// The smallest positive subnormal number.
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self { bits: 1 };

    /// The difference between 1 and the next larger number, 2^-112.
    pub const EPSILON: Self = Self {
        bits: ((EXPONENT_BIAS as u128) - MANTISSA_BIT_SIZE as u128) << MANTISSA_BIT_SIZE,
    };

    /// Constructs a number from its bit pattern.
    #[inline]
    pub const fn from_bits(bits: u128) -> Self {
        Self { bits }
    }

    /// Returns the bit pattern of the number.
    #[inline]
    pub const fn to_bits(&self) -> u128 {
        self.bits
    }

    /// Constructs a number from the sign `s`, the biased exponent `e`, and the stored mantissa bits `m`.
    /// Bits of `e` and `m` outside of their fields are ignored.
    pub fn from_raw_parts(s: Sign, e: u32, m: u128) -> Self {
        debug_assert!(e <= BIASED_EXPONENT_INF);
        debug_assert!(m <= MANTISSA_MASK);

        Self::from_bits(
            s.bit()
                | (((e & BIASED_EXPONENT_INF) as u128) << MANTISSA_BIT_SIZE)
                | (m & MANTISSA_MASK),
        )
    }

    /// Decomposes the number into the sign, the biased exponent, and the stored mantissa bits.
    pub fn to_raw_parts(&self) -> (Sign, u32, u128) {
        (
            self.sign(),
            ((self.bits & EXPONENT_MASK) >> MANTISSA_BIT_SIZE) as u32,
            self.bits & MANTISSA_MASK,
        )
    }

    /// Returns the sign of the number. NaN and zero have a sign too.
    #[inline]
    pub fn sign(&self) -> Sign {
        if self.bits & SIGN_BIT == 0 {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }

    /// Returns the exponent `e` such that 2^e <= |self| < 2^(e+1), or None if the number is zero, infinite, or NaN.
    pub fn exponent(&self) -> Option<Exponent> {
        if self.is_zero() || !self.is_finite() {
            None
        } else {
            let (_, e, _) = self.unpack();
            Some(e)
        }
    }

    /// Returns true if the number is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.bits & !SIGN_BIT > EXPONENT_MASK
    }

    /// Returns true if the number is positive or negative infinity.
    #[inline]
    pub fn is_inf(&self) -> bool {
        self.bits & !SIGN_BIT == EXPONENT_MASK
    }

    /// Returns true if the number is positive infinity.
    #[inline]
    pub fn is_inf_pos(&self) -> bool {
        self.bits == EXPONENT_MASK
    }

    /// Returns true if the number is negative infinity.
    #[inline]
    pub fn is_inf_neg(&self) -> bool {
        self.bits == EXPONENT_MASK | SIGN_BIT
    }

    /// Returns true if the number is positive or negative zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.bits & !SIGN_BIT == 0
    }

    /// Returns true if the number is subnormal.
    #[inline]
    pub fn is_subnormal(&self) -> bool {
        self.bits & EXPONENT_MASK == 0 && !self.is_zero()
    }

    /// Returns true if the number is finite, nonzero, and not subnormal.
    #[inline]
    pub fn is_normal(&self) -> bool {
        let e = self.bits & EXPONENT_MASK;
        e != 0 && e != EXPONENT_MASK
    }

    /// Returns true if the number is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.bits & EXPONENT_MASK != EXPONENT_MASK
    }

    /// Returns true if the sign bit is not set. This includes positive zero, positive infinity, and NaN without the sign bit.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.bits & SIGN_BIT == 0
    }

    /// Returns true if the sign bit is set. This includes negative zero, negative infinity, and NaN with the sign bit.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.bits & SIGN_BIT != 0
    }

    /// Returns the floating point category of the number.
    pub fn classify(&self) -> FpCategory {
        if self.is_nan() {
            FpCategory::Nan
        } else if self.is_inf() {
            FpCategory::Infinite
        } else if self.is_zero() {
            FpCategory::Zero
        } else if self.is_subnormal() {
            FpCategory::Subnormal
        } else {
            FpCategory::Normal
        }
    }

    /// Returns the number with the sign inverted. The sign of zero and NaN is inverted as well.
    #[inline]
    pub fn neg(&self) -> Self {
        Self::from_bits(self.bits ^ SIGN_BIT)
    }

    /// Returns the absolute value of the number.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::from_bits(self.bits & !SIGN_BIT)
    }

    /// Returns the least number greater than `self`.
    /// NaN is returned quieted, and positive infinity is returned as is.
    pub fn next_up(&self) -> Self {
        if self.is_nan() {
            self.quiet()
        } else if self.is_inf_pos() {
            *self
        } else if self.is_zero() {
            Self::MIN_POSITIVE_SUBNORMAL
        } else if self.is_positive() {
            Self::from_bits(self.bits + 1)
        } else {
            Self::from_bits(self.bits - 1)
        }
    }

    /// Returns the greatest number less than `self`.
    /// NaN is returned quieted, and negative infinity is returned as is.
    pub fn next_down(&self) -> Self {
        self.neg().next_up().neg()
    }

    // Sets the quiet bit of NaN.
    #[inline]
    pub(crate) fn quiet(&self) -> Self {
        Self::from_bits(self.bits | QUIET_BIT)
    }

    /// Splits a finite nonzero number into the sign, the exponent, and the mantissa with the explicit leading bit,
    /// so that the mantissa is in the range [2^112, 2^113) and |self| = mantissa * 2^(exponent - 112).
    /// Subnormal numbers are normalized.
    pub(crate) fn unpack(&self) -> (Sign, Exponent, u128) {
        debug_assert!(self.is_finite() && !self.is_zero());

        let (s, be, m) = self.to_raw_parts();
        if be == 0 {
            let shift = m.leading_zeros() - (128 - MANTISSA_BIT_SIZE as u32 - 1);
            (s, 1 - EXPONENT_BIAS - shift as Exponent, m << shift)
        } else {
            (s, be as Exponent - EXPONENT_BIAS, m | IMPLICIT_BIT)
        }
    }

    /// Rounds and encodes the value `s` * `m` * 2^(`e` - 126) using rounding mode `rm`.
    ///
    /// Normally the leading bit of `m` is at position 126, but any nonzero `m` is accepted.
    /// Bits of the exact value which do not fit in `m` must be accounted for by setting the least significant bit of `m`.
    /// Exponent overflow produces infinity or the largest finite number depending on `rm`;
    /// small values are rounded to subnormal numbers or zero.
    pub(crate) fn round_pack(s: Sign, mut e: Exponent, mut m: u128, rm: RoundingMode) -> Self {
        if m == 0 {
            return Self::from_bits(s.bit());
        }

        let lz = m.leading_zeros();
        if lz == 0 {
            m = shift_right_sticky(m, 1);
            e += 1;
        } else if lz > 1 {
            m <<= lz - 1;
            e -= (lz - 1) as Exponent;
        }

        let mut be = e + EXPONENT_BIAS;

        if be >= BIASED_EXPONENT_INF as Exponent {
            return Self::overflow(s, rm);
        }

        if be <= 0 {
            m = shift_right_sticky(m, (1 - be) as u32);
            be = 0;
        }

        let rem = m & ROUND_MASK;
        let mut m = m >> ROUND_BITS;

        let inc = match rm {
            RoundingMode::ToEven => rem > ROUND_HALF || (rem == ROUND_HALF && m & 1 == 1),
            RoundingMode::ToZero => false,
            RoundingMode::Up => rem != 0 && s.is_positive(),
            RoundingMode::Down => rem != 0 && s.is_negative(),
        };

        if inc {
            m += 1;
        }

        // a carry out of the mantissa increments the exponent
        let bits = if be == 0 {
            m
        } else {
            (((be - 1) as u128) << MANTISSA_BIT_SIZE) + m
        };

        if bits >= EXPONENT_MASK {
            Self::overflow(s, rm)
        } else {
            Self::from_bits(bits | s.bit())
        }
    }

    // Result of an operation which exceeds the largest finite number.
    fn overflow(s: Sign, rm: RoundingMode) -> Self {
        let to_inf = match rm {
            RoundingMode::ToEven => true,
            RoundingMode::ToZero => false,
            RoundingMode::Up => s.is_positive(),
            RoundingMode::Down => s.is_negative(),
        };

        let ret = if to_inf { Self::INF_POS } else { Self::MAX };

        if s.is_negative() {
            ret.neg()
        } else {
            ret
        }
    }

    /// Returns a random normal number with the exponent in the range [`exp_from`, `exp_to`).
    /// Sign and mantissa are uniformly distributed.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the exponent range is empty or is out of the range of normal numbers.
    #[cfg(feature = "random")]
    pub fn random_normal(exp_from: Exponent, exp_to: Exponent) -> Result<Self, Error> {
        if exp_from >= exp_to || exp_from < EXPONENT_MIN || exp_to > EXPONENT_MAX + 1 {
            return Err(Error::InvalidArgument);
        }

        let m = rand::random::<u128>() & MANTISSA_MASK;
        let e = (rand::random::<u32>() % (exp_to - exp_from) as u32) as Exponent + exp_from;
        let s = if rand::random::<u8>() & 1 == 0 { Sign::Pos } else { Sign::Neg };

        Ok(Self::from_raw_parts(s, (e + EXPONENT_BIAS) as u32, m))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_raw_parts() {
        assert_eq!(F128::ONE.to_raw_parts(), (Sign::Pos, 0x3fff, 0));
        assert_eq!(F128::NEG_ZERO.to_raw_parts(), (Sign::Neg, 0, 0));
        assert_eq!(F128::MAX.to_raw_parts(), (Sign::Pos, 0x7ffe, MANTISSA_MASK));
        assert_eq!(F128::MIN.to_raw_parts(), (Sign::Neg, 0x7ffe, MANTISSA_MASK));
        assert_eq!(F128::EPSILON.to_raw_parts(), (Sign::Pos, 0x3fff - 112, 0));

        for _ in 0..1000 {
            let n = F128::from_bits(rand::random::<u128>());
            let (s, e, m) = n.to_raw_parts();
            assert_eq!(F128::from_raw_parts(s, e, m).to_bits(), n.to_bits());
        }

        // 1.5
        let n = F128::from_raw_parts(Sign::Pos, 0x3fff, 1 << 111);
        assert_eq!(n.to_bits(), 0x3fff8000000000000000000000000000);
    }

    #[test]
    fn test_classify() {
        assert_eq!(F128::NAN.classify(), FpCategory::Nan);
        assert_eq!(F128::NAN.neg().classify(), FpCategory::Nan);
        assert_eq!(F128::INF_POS.classify(), FpCategory::Infinite);
        assert_eq!(F128::INF_NEG.classify(), FpCategory::Infinite);
        assert_eq!(F128::ZERO.classify(), FpCategory::Zero);
        assert_eq!(F128::NEG_ZERO.classify(), FpCategory::Zero);
        assert_eq!(F128::MIN_POSITIVE_SUBNORMAL.classify(), FpCategory::Subnormal);
        assert_eq!(F128::MIN_POSITIVE.classify(), FpCategory::Normal);
        assert_eq!(F128::MAX.classify(), FpCategory::Normal);

        // signaling NaN
        let snan = F128::from_bits(EXPONENT_MASK | 1);
        assert!(snan.is_nan());
        assert!(!snan.is_inf());
        assert_eq!(snan.quiet().to_bits(), EXPONENT_MASK | QUIET_BIT | 1);

        assert!(F128::INF_POS.is_inf_pos());
        assert!(!F128::INF_POS.is_inf_neg());
        assert!(F128::INF_NEG.is_inf_neg());
        assert!(!F128::INF_POS.is_finite());
        assert!(!F128::NAN.is_finite());
        assert!(F128::MAX.is_finite());
        assert!(F128::NEG_ZERO.is_zero());
        assert!(F128::NEG_ZERO.is_negative());
        assert!(F128::ZERO.is_positive());
        assert!(!F128::ZERO.is_normal());
        assert!(!F128::ZERO.is_subnormal());
        assert!(F128::from_bits(IMPLICIT_BIT - 1).is_subnormal());
    }

    #[test]
    fn test_exponent() {
        assert_eq!(F128::ONE.exponent(), Some(0));
        assert_eq!(F128::MAX.exponent(), Some(16383));
        assert_eq!(F128::MIN_POSITIVE.exponent(), Some(-16382));
        assert_eq!(F128::MIN_POSITIVE_SUBNORMAL.exponent(), Some(-16494));
        assert_eq!(F128::from_bits(1 << 100).exponent(), Some(-16394));
        assert_eq!(F128::ZERO.exponent(), None);
        assert_eq!(F128::INF_NEG.exponent(), None);
        assert_eq!(F128::NAN.exponent(), None);
    }

    #[test]
    fn test_unpack() {
        assert_eq!(F128::ONE.unpack(), (Sign::Pos, 0, IMPLICIT_BIT));
        assert_eq!(
            F128::MIN_POSITIVE_SUBNORMAL.neg().unpack(),
            (Sign::Neg, -16494, IMPLICIT_BIT)
        );
        assert_eq!(
            F128::from_bits(0b11).unpack(),
            (Sign::Pos, -16493, IMPLICIT_BIT | (1 << 111))
        );

        for _ in 0..1000 {
            let n = F128::from_bits(rand::random::<u128>());
            if n.is_zero() || !n.is_finite() {
                continue;
            }
            let (s, e, m) = n.unpack();
            assert!((IMPLICIT_BIT..IMPLICIT_BIT << 1).contains(&m));
            let back = F128::round_pack(s, e, m << ROUND_BITS, RoundingMode::ToZero);
            assert_eq!(back.to_bits(), n.to_bits());
        }
    }

    #[test]
    fn test_round_pack() {
        let one = IMPLICIT_BIT << ROUND_BITS;

        // exact
        assert_eq!(
            F128::round_pack(Sign::Pos, 0, one, RoundingMode::ToEven).to_bits(),
            F128::ONE.to_bits()
        );

        // unnormalized input
        assert_eq!(
            F128::round_pack(Sign::Pos, 3, 1, RoundingMode::ToEven).to_bits(),
            F128::from_bits(0x3f84 << 112).to_bits()
        );
        assert_eq!(
            F128::round_pack(Sign::Neg, -1, one << 1, RoundingMode::ToEven).to_bits(),
            F128::ONE.neg().to_bits()
        );

        // tie goes to even
        let tie = one | ROUND_HALF;
        assert_eq!(
            F128::round_pack(Sign::Pos, 0, tie, RoundingMode::ToEven).to_bits(),
            F128::ONE.to_bits()
        );
        let tie = one | (1 << ROUND_BITS) | ROUND_HALF;
        assert_eq!(
            F128::round_pack(Sign::Pos, 0, tie, RoundingMode::ToEven).to_bits(),
            F128::ONE.to_bits() + 2
        );

        // directed rounding
        let above = one | 1;
        assert_eq!(
            F128::round_pack(Sign::Pos, 0, above, RoundingMode::Up).to_bits(),
            F128::ONE.to_bits() + 1
        );
        assert_eq!(
            F128::round_pack(Sign::Pos, 0, above, RoundingMode::Down).to_bits(),
            F128::ONE.to_bits()
        );
        assert_eq!(
            F128::round_pack(Sign::Neg, 0, above, RoundingMode::Down).to_bits(),
            F128::ONE.neg().to_bits() + 1
        );
        assert_eq!(
            F128::round_pack(Sign::Neg, 0, above, RoundingMode::ToZero).to_bits(),
            F128::ONE.neg().to_bits()
        );

        // carry into the exponent
        let all_ones = u128::MAX >> 1;
        assert_eq!(
            F128::round_pack(Sign::Pos, 0, all_ones, RoundingMode::ToEven).to_bits(),
            0x40000000000000000000000000000000
        );

        // overflow
        assert!(F128::round_pack(Sign::Pos, 16384, one, RoundingMode::ToEven).is_inf_pos());
        assert!(F128::round_pack(Sign::Neg, 16384, one, RoundingMode::ToEven).is_inf_neg());
        assert_eq!(
            F128::round_pack(Sign::Pos, 16384, one, RoundingMode::ToZero).to_bits(),
            F128::MAX.to_bits()
        );
        assert_eq!(
            F128::round_pack(Sign::Neg, 16384, one, RoundingMode::Up).to_bits(),
            F128::MIN.to_bits()
        );
        assert!(F128::round_pack(Sign::Pos, 16383, all_ones, RoundingMode::ToEven).is_inf_pos());
        assert_eq!(
            F128::round_pack(Sign::Pos, 16383, all_ones, RoundingMode::Down).to_bits(),
            F128::MAX.to_bits()
        );

        // subnormal and underflow
        assert_eq!(
            F128::round_pack(Sign::Pos, -16383, one, RoundingMode::ToEven).to_bits(),
            1 << 111
        );
        assert_eq!(
            F128::round_pack(Sign::Pos, -16494, one, RoundingMode::ToEven).to_bits(),
            1
        );
        assert_eq!(
            F128::round_pack(Sign::Pos, -16495, one, RoundingMode::ToEven).to_bits(),
            0
        );
        assert_eq!(
            F128::round_pack(Sign::Pos, -16495, one | 1, RoundingMode::ToEven).to_bits(),
            1
        );
        assert_eq!(
            F128::round_pack(Sign::Neg, -20000, one, RoundingMode::ToEven).to_bits(),
            F128::NEG_ZERO.to_bits()
        );
        assert_eq!(
            F128::round_pack(Sign::Pos, -20000, one, RoundingMode::Up).to_bits(),
            1
        );
        assert_eq!(
            F128::round_pack(Sign::Pos, -16383, all_ones, RoundingMode::ToEven).to_bits(),
            F128::MIN_POSITIVE.to_bits()
        );

        // zero
        assert_eq!(
            F128::round_pack(Sign::Neg, 0, 0, RoundingMode::ToEven).to_bits(),
            F128::NEG_ZERO.to_bits()
        );
    }

    #[test]
    fn test_next() {
        assert_eq!(F128::ZERO.next_up().to_bits(), 1);
        assert_eq!(F128::NEG_ZERO.next_up().to_bits(), 1);
        assert_eq!(F128::ZERO.next_down().to_bits(), SIGN_BIT | 1);
        assert_eq!(F128::MAX.next_up().to_bits(), F128::INF_POS.to_bits());
        assert_eq!(F128::INF_POS.next_up().to_bits(), F128::INF_POS.to_bits());
        assert_eq!(F128::INF_NEG.next_up().to_bits(), F128::MIN.to_bits());
        assert_eq!(F128::INF_NEG.next_down().to_bits(), F128::INF_NEG.to_bits());
        assert_eq!(
            F128::MIN_POSITIVE_SUBNORMAL.neg().next_up().to_bits(),
            F128::NEG_ZERO.to_bits()
        );
        assert_eq!(F128::ONE.next_up().to_bits(), F128::ONE.to_bits() + 1);
        assert_eq!(F128::ONE.next_down().to_bits(), F128::ONE.to_bits() - 1);
        assert!(F128::from_bits(EXPONENT_MASK | 1).next_up().is_nan());
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random_normal() {
        for _ in 0..1000 {
            let n = F128::random_normal(-10, 10).unwrap();
            assert!(n.is_normal());
            let e = n.exponent().unwrap();
            assert!((-10..10).contains(&e));
        }

        assert!(F128::random_normal(EXPONENT_MIN, EXPONENT_MAX + 1).is_ok());
        assert_eq!(F128::random_normal(1, 1).unwrap_err(), Error::InvalidArgument);
        assert_eq!(
            F128::random_normal(EXPONENT_MIN - 1, 0).unwrap_err(),
            Error::InvalidArgument
        );
    }
}
