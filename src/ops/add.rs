//! Addition and subtraction.

use crate::common::util::shift_right_sticky;
use crate::defs::RoundingMode;
use crate::num::F128;
use crate::num::ROUND_BITS;

impl F128 {
    /// Adds `d2` to `self` and returns the result of the operation rounded using the rounding mode `rm`.
    pub fn add(&self, d2: &Self, rm: RoundingMode) -> Self {
        self.add_sub(d2, 1, rm)
    }

    /// Subtracts `d2` from `self` and returns the result of the operation rounded using the rounding mode `rm`.
    pub fn sub(&self, d2: &Self, rm: RoundingMode) -> Self {
        self.add_sub(d2, -1, rm)
    }

    // add if op >= 0, subtract if op < 0
    fn add_sub(&self, d2: &Self, op: i8, rm: RoundingMode) -> Self {
        if self.is_nan() || d2.is_nan() {
            return Self::propagate_nan(self, d2);
        }

        let d2 = if op < 0 { d2.neg() } else { *d2 };

        if self.is_inf() {
            if d2.is_inf() && self.sign() != d2.sign() {
                // inf - inf
                return Self::NAN;
            }
            return *self;
        }

        if d2.is_inf() {
            return d2;
        }

        if self.is_zero() && d2.is_zero() {
            return if self.sign() == d2.sign() {
                *self
            } else {
                Self::exact_zero(rm)
            };
        }

        if self.is_zero() {
            return d2;
        }

        if d2.is_zero() {
            return *self;
        }

        let (s1, e1, m1) = self.unpack();
        let (s2, e2, m2) = d2.unpack();

        let m1 = m1 << ROUND_BITS;
        let m2 = m2 << ROUND_BITS;

        // n1 has the larger magnitude
        let ((s1, e1, m1), (s2, e2, m2)) = if e1 > e2 || (e1 == e2 && m1 >= m2) {
            ((s1, e1, m1), (s2, e2, m2))
        } else {
            ((s2, e2, m2), (s1, e1, m1))
        };

        let m2 = shift_right_sticky(m2, (e1 - e2) as u32);

        if s1 == s2 {
            Self::round_pack(s1, e1, m1 + m2, rm)
        } else {
            let m3 = m1 - m2;
            if m3 == 0 {
                Self::exact_zero(rm)
            } else {
                Self::round_pack(s1, e1, m3, rm)
            }
        }
    }

    // Sum of two numbers of equal magnitude and opposite signs.
    fn exact_zero(rm: RoundingMode) -> Self {
        if rm == RoundingMode::Down {
            Self::NEG_ZERO
        } else {
            Self::ZERO
        }
    }

    /// Returns the first of the two arguments which is NaN, with the quiet bit set.
    pub(crate) fn propagate_nan(d1: &Self, d2: &Self) -> Self {
        if d1.is_nan() {
            d1.quiet()
        } else {
            d2.quiet()
        }
    }
}
