//! Multiplication.

use crate::common::util::mul_wide;
use crate::defs::RoundingMode;
use crate::num::F128;

// The full product of two mantissas has its leading bit at position 224 or 225.
// Shifting by this amount brings it to the rounding position.
const PRODUCT_SHIFT: u32 = 98;

impl F128 {
    /// Multiplies `self` by `d2` and returns the result of the operation rounded using the rounding mode `rm`.
    pub fn mul(&self, d2: &Self, rm: RoundingMode) -> Self {
        if self.is_nan() || d2.is_nan() {
            return Self::propagate_nan(self, d2);
        }

        let s = self.sign().xor(d2.sign());

        if self.is_inf() || d2.is_inf() {
            if self.is_zero() || d2.is_zero() {
                // 0 * inf
                return Self::NAN;
            }
            return Self::from_bits(Self::INF_POS.to_bits() | s.bit());
        }

        if self.is_zero() || d2.is_zero() {
            return Self::from_bits(s.bit());
        }

        let (_, e1, m1) = self.unpack();
        let (_, e2, m2) = d2.unpack();

        let (hi, lo) = mul_wide(m1, m2);

        let sticky = (lo << (128 - PRODUCT_SHIFT) != 0) as u128;
        let m = (hi << (128 - PRODUCT_SHIFT)) | (lo >> PRODUCT_SHIFT) | sticky;

        Self::round_pack(s, e1 + e2, m, rm)
    }
}
