//! Natural logarithm.

mod poly;
mod reduce;

use crate::common::consts::HALF;
use crate::common::consts::NEG_HALF;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_RM;
use crate::num::F128;
use crate::ops::consts::LN2_HIGH;
use crate::ops::consts::LN2_LOW;
use crate::ops::consts::LOGTBL;
use crate::ops::log::poly::ln_poly;
use crate::ops::log::reduce::reduce;
use crate::ops::log::reduce::Reduction;

impl F128 {
    /// Computes the natural logarithm of a number.
    ///
    /// The relative error of the result does not exceed approximately 1.2e-34.
    /// The logarithm of 1 is exactly +0, the logarithm of ±0 is negative infinity,
    /// the logarithm of a negative number or negative infinity is NaN,
    /// the logarithm of positive infinity is positive infinity, and NaN is returned quieted.
    pub fn ln(&self) -> Self {
        if let Some(ret) = self.ln_special() {
            return ret;
        }

        if self.to_bits() == Self::ONE.to_bits() {
            return Self::ZERO;
        }

        let rm = DEFAULT_RM;
        let r = reduce(self, rm);
        let (y, w) = ln_poly(&r.z, rm);

        Self::ln_compose(y, w, &r, rm)
    }

    /// Computes the natural logarithm of a number, reporting the pole and the domain errors.
    /// NaN is not considered an error and is returned quieted.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the argument is zero.
    ///  - InvalidArgument: the argument is negative, including negative infinity.
    pub fn try_ln(&self) -> Result<Self, Error> {
        if self.is_nan() {
            Ok(self.quiet())
        } else if self.is_zero() {
            Err(Error::DivisionByZero)
        } else if self.is_negative() {
            Err(Error::InvalidArgument)
        } else {
            Ok(self.ln())
        }
    }

    // Results for arguments outside of the domain of the approximation.
    // The results are produced by floating point operations, so that they carry the proper signs and NaN payloads.
    fn ln_special(&self) -> Option<Self> {
        let rm = DEFAULT_RM;

        if self.is_zero() {
            // pole
            Some(NEG_HALF.div(&Self::ZERO, rm))
        } else if self.is_negative() {
            // negative numbers, negative infinity, and NaN with the sign bit
            Some(self.sub(self, rm).div(&Self::ZERO, rm))
        } else if !self.is_finite() {
            // positive infinity and NaN
            Some(self.add(self, rm))
        } else {
            None
        }
    }

    // ln(x) = e * ln(2) + ln(t) + ln(1 + z).
    // Terms are added from the smallest to the largest.
    fn ln_compose(mut y: Self, w: Self, r: &Reduction, rm: RoundingMode) -> Self {
        let e = Self::from_i32(r.e);

        y = y.sub(&HALF.mul(&w, rm), rm);
        y = y.add(&e.mul(&LN2_LOW, rm), rm);
        y = y.add(&r.z, rm);
        y = y.add(&LOGTBL[r.k], rm);
        y = y.add(&r.t.sub(&Self::ONE, rm), rm);
        y.add(&e.mul(&LN2_HIGH, rm), rm)
    }
}
