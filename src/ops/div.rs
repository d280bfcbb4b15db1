//! Division.

use crate::defs::RoundingMode;
use crate::num::F128;
use crate::num::LEADING_BIT_POS;

impl F128 {
    /// Divides `self` by `d2` and returns the result of the operation rounded using the rounding mode `rm`.
    /// Division of a finite nonzero number by zero gives infinity with the sign of the quotient.
    pub fn div(&self, d2: &Self, rm: RoundingMode) -> Self {
        if self.is_nan() || d2.is_nan() {
            return Self::propagate_nan(self, d2);
        }

        let s = self.sign().xor(d2.sign());
        let inf = Self::from_bits(Self::INF_POS.to_bits() | s.bit());
        let zero = Self::from_bits(s.bit());

        if self.is_inf() {
            if d2.is_inf() {
                return Self::NAN;
            }
            return inf;
        }

        if d2.is_inf() {
            return zero;
        }

        if d2.is_zero() {
            if self.is_zero() {
                return Self::NAN;
            }
            return inf;
        }

        if self.is_zero() {
            return zero;
        }

        let (_, e1, m1) = self.unpack();
        let (_, e2, m2) = d2.unpack();

        // restoring division producing LEADING_BIT_POS + 1 quotient bits
        let mut q = m1 / m2;
        let mut r = m1 % m2;

        for _ in 0..LEADING_BIT_POS {
            r <<= 1;
            q <<= 1;
            if r >= m2 {
                r -= m2;
                q |= 1;
            }
        }

        if r != 0 {
            q |= 1;
        }

        Self::round_pack(s, e1 - e2, q, rm)
    }
}
