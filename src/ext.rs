//! Standard library traits for F128.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::fmt::Display;
use core::fmt::Formatter;
use core::iter::Product;
use core::iter::Sum;
use core::ops::Add;
use core::ops::AddAssign;
use core::ops::Div;
use core::ops::DivAssign;
use core::ops::Mul;
use core::ops::MulAssign;
use core::ops::Neg;
use core::ops::Sub;
use core::ops::SubAssign;
use core::str::FromStr;

use crate::defs::Error;
use crate::defs::DEFAULT_RM;
use crate::defs::SIGN_BIT;
use crate::num::F128;

//
// ops traits
//

impl Add for F128 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        F128::add(&self, &rhs, DEFAULT_RM)
    }
}

impl AddAssign for F128 {
    fn add_assign(&mut self, rhs: Self) {
        *self = F128::add(self, &rhs, DEFAULT_RM)
    }
}

impl Div for F128 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        F128::div(&self, &rhs, DEFAULT_RM)
    }
}

impl DivAssign for F128 {
    fn div_assign(&mut self, rhs: Self) {
        *self = F128::div(self, &rhs, DEFAULT_RM)
    }
}

impl Mul for F128 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        F128::mul(&self, &rhs, DEFAULT_RM)
    }
}

impl MulAssign for F128 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = F128::mul(self, &rhs, DEFAULT_RM)
    }
}

impl Neg for F128 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        F128::neg(&self)
    }
}

impl Neg for &F128 {
    type Output = F128;
    fn neg(self) -> Self::Output {
        F128::neg(self)
    }
}

impl Sub for F128 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        F128::sub(&self, &rhs, DEFAULT_RM)
    }
}

impl SubAssign for F128 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = F128::sub(self, &rhs, DEFAULT_RM)
    }
}

impl Add<&F128> for F128 {
    type Output = Self;
    fn add(self, rhs: &F128) -> Self::Output {
        F128::add(&self, rhs, DEFAULT_RM)
    }
}

impl AddAssign<&F128> for F128 {
    fn add_assign(&mut self, rhs: &F128) {
        *self = F128::add(self, rhs, DEFAULT_RM)
    }
}

impl Div<&F128> for F128 {
    type Output = Self;
    fn div(self, rhs: &F128) -> Self::Output {
        F128::div(&self, rhs, DEFAULT_RM)
    }
}

impl DivAssign<&F128> for F128 {
    fn div_assign(&mut self, rhs: &F128) {
        *self = F128::div(self, rhs, DEFAULT_RM)
    }
}

impl Mul<&F128> for F128 {
    type Output = Self;
    fn mul(self, rhs: &F128) -> Self::Output {
        F128::mul(&self, rhs, DEFAULT_RM)
    }
}

impl MulAssign<&F128> for F128 {
    fn mul_assign(&mut self, rhs: &F128) {
        *self = F128::mul(self, rhs, DEFAULT_RM)
    }
}

impl Sub<&F128> for F128 {
    type Output = Self;
    fn sub(self, rhs: &F128) -> Self::Output {
        F128::sub(&self, rhs, DEFAULT_RM)
    }
}

impl SubAssign<&F128> for F128 {
    fn sub_assign(&mut self, rhs: &F128) {
        *self = F128::sub(self, rhs, DEFAULT_RM)
    }
}

//
// ordering traits
//

impl F128 {
    // Maps the number to an integer which is ordered the same way as finite numbers and infinities.
    // Both zeroes map to 0.
    fn order_key(&self) -> i128 {
        let mag = (self.to_bits() & !SIGN_BIT) as i128;
        if self.is_negative() {
            -mag
        } else {
            mag
        }
    }
}

/// IEEE equality: NaN is not equal to anything, including itself, and +0 is equal to -0.
impl PartialEq for F128 {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Equal))
    }
}

impl PartialOrd for F128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            None
        } else {
            Some(self.order_key().cmp(&other.order_key()))
        }
    }
}

//
// conversion and formatting traits
//

impl From<f64> for F128 {
    fn from(f: f64) -> Self {
        F128::from_f64(f)
    }
}

impl From<f32> for F128 {
    fn from(f: f32) -> Self {
        F128::from_f32(f)
    }
}

impl From<F128> for f64 {
    fn from(n: F128) -> Self {
        n.to_f64()
    }
}

/// Writes the bit pattern in hexadecimal.
impl Debug for F128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "F128({:#034x})", self.to_bits())
    }
}

/// Writes the bit pattern in hexadecimal, the same form is accepted by `FromStr`.
impl Display for F128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#034x}", self.to_bits())
    }
}

/// Parses a bit pattern written in hexadecimal with the `0x` prefix.
impl FromStr for F128 {
    type Err = Error;

    fn from_str(src: &str) -> Result<F128, Self::Err> {
        let digits = src
            .strip_prefix("0x")
            .or_else(|| src.strip_prefix("0X"))
            .ok_or(Error::InvalidArgument)?;

        if digits.is_empty() || digits.len() > 32 {
            return Err(Error::InvalidArgument);
        }

        u128::from_str_radix(digits, 16)
            .map(F128::from_bits)
            .map_err(|_| Error::InvalidArgument)
    }
}

impl Default for F128 {
    fn default() -> F128 {
        F128::ZERO
    }
}

impl Sum for F128 {
    fn sum<I: Iterator<Item = F128>>(iter: I) -> Self {
        let mut acc = F128::ZERO;
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl Product for F128 {
    fn product<I: Iterator<Item = F128>>(iter: I) -> Self {
        let mut acc = F128::ONE;
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl<'a> Sum<&'a F128> for F128 {
    fn sum<I: Iterator<Item = &'a F128>>(iter: I) -> Self {
        let mut acc = F128::ZERO;
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl<'a> Product<&'a F128> for F128 {
    fn product<I: Iterator<Item = &'a F128>>(iter: I) -> Self {
        let mut acc = F128::ONE;
        for v in iter {
            acc *= v;
        }
        acc
    }
}
