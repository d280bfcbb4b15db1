//! Definitions.

use core::fmt::Display;

/// An exponent.
pub type Exponent = i32;

/// Number of bits in the binary128 representation.
pub const BIT_SIZE: usize = 128;

/// Number of explicitly stored bits of the mantissa (fraction).
pub const MANTISSA_BIT_SIZE: usize = 112;

/// Number of bits in the biased exponent field.
pub const EXPONENT_BIT_SIZE: usize = 15;

/// Exponent bias.
pub const EXPONENT_BIAS: Exponent = 16383;

/// Maximum unbiased exponent of a finite number.
pub const EXPONENT_MAX: Exponent = 16383;

/// Minimum unbiased exponent of a normal number.
pub const EXPONENT_MIN: Exponent = -16382;

/// Biased exponent of infinity and NaN.
pub(crate) const BIASED_EXPONENT_INF: u32 = 0x7fff;

/// Sign bit.
pub(crate) const SIGN_BIT: u128 = 1 << 127;

/// Mask of the biased exponent field.
pub(crate) const EXPONENT_MASK: u128 = (BIASED_EXPONENT_INF as u128) << MANTISSA_BIT_SIZE;

/// Mask of the stored mantissa bits.
pub(crate) const MANTISSA_MASK: u128 = (1 << MANTISSA_BIT_SIZE) - 1;

/// Implicit leading bit of a normal number.
pub(crate) const IMPLICIT_BIT: u128 = 1 << MANTISSA_BIT_SIZE;

/// Most significant mantissa bit distinguishes quiet NaN from signaling NaN.
pub(crate) const QUIET_BIT: u128 = 1 << (MANTISSA_BIT_SIZE - 1);

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::ToEven;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }

    /// Returns the sign of the product or quotient of numbers with signs `self` and `other`.
    pub(crate) fn xor(&self, other: Sign) -> Self {
        if *self == other {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }

    // Value of the sign bit.
    pub(crate) fn bit(&self) -> u128 {
        match *self {
            Sign::Pos => 0,
            Sign::Neg => SIGN_BIT,
        }
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy)]
pub enum Error {
    /// Divizor is zero, or the result of a function has a pole at the argument.
    DivisionByZero,

    /// Invalid argument.
    InvalidArgument,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::DivisionByZero => "division by zero",
            Error::InvalidArgument => "invalid argument",
        };
        f.write_str(repr)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

/// Rounding modes.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum RoundingMode {
    /// Round to nearest, ties to even.
    ToEven = 1,

    /// Round toward zero.
    ToZero = 2,

    /// Round toward positive infinity.
    Up = 4,

    /// Round toward negative infinity.
    Down = 8,
}
