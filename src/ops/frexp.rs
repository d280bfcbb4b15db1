//! Decomposition into a mantissa and a power of two, and scaling by a power of two.

use crate::defs::Exponent;
use crate::defs::EXPONENT_BIAS;
use crate::defs::MANTISSA_MASK;
use crate::defs::DEFAULT_RM;
use crate::num::F128;
use crate::num::ROUND_BITS;

// Any scaling beyond this takes every finite number out of the range of the format.
const LDEXP_LIMIT: Exponent = 40000;

impl F128 {
    /// Splits the number into a mantissa `m` and an exponent `e` such that `self` = `m` * 2^`e`,
    /// and 0.5 <= |`m`| < 1. Subnormal numbers are normalized.
    /// Zero, infinity, and NaN are returned as is with the exponent 0.
    pub fn frexp(&self) -> (Self, Exponent) {
        if self.is_zero() || !self.is_finite() {
            return (*self, 0);
        }

        let (s, e, m) = self.unpack();

        (
            Self::from_raw_parts(s, (EXPONENT_BIAS - 1) as u32, m & MANTISSA_MASK),
            e + 1,
        )
    }

    /// Returns `self` * 2^`n` rounded to nearest, ties to even.
    pub fn ldexp(&self, n: Exponent) -> Self {
        if self.is_nan() {
            return self.quiet();
        }

        if self.is_zero() || self.is_inf() {
            return *self;
        }

        let (s, e, m) = self.unpack();
        let n = n.clamp(-LDEXP_LIMIT, LDEXP_LIMIT);

        Self::round_pack(s, e + n, m << ROUND_BITS, DEFAULT_RM)
    }
}
