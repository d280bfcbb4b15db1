//! Astro-quad is a library that implements IEEE 754 quadruple precision (binary128) floating point numbers
//! in software, with the natural logarithm accurate to about 1.2e-34 relative error.
//!
//! The numbers are represented by the type [F128]. Arithmetic operations are correctly rounded
//! using one of the four IEEE rounding directions given by [RoundingMode].
//! The natural logarithm reduces the argument with a table of breakpoints,
//! approximates the logarithm of the remainder with a polynomial, and recombines the parts from the smallest to the largest.
//!
//! ## Examples
//!
//! ``` rust
//! use astro_quad::F128;
//! use astro_quad::RoundingMode;
//!
//! let rm = RoundingMode::ToEven;
//!
//! let ten = F128::from_i32(10);
//! let x = F128::ONE.div(&ten, rm);
//!
//! // ln(0.1) = -ln(10)
//! let a = x.ln();
//! let b = ten.ln();
//! assert!(a.add(&b, rm).abs().to_f64() < 1e-33);
//!
//! // ln(1) is exactly zero
//! assert_eq!(F128::ONE.ln().to_bits(), 0);
//!
//! // pole and domain errors are reported by try_ln
//! assert!(F128::ZERO.ln().is_inf_neg());
//! assert!(F128::ZERO.try_ln().is_err());
//! assert!(ten.neg().ln().is_nan());
//! ```
//!
//! ## no_std
//!
//! The library can work without the standard library, provided the default features are disabled.
//! Serialization support requires the standard library.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::module_inception)]

#[cfg(all(test, not(feature = "std")))]
extern crate alloc;

mod common;
mod conv;
mod defs;
mod ext;
mod num;
mod ops;

#[cfg(feature = "std")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::defs::DEFAULT_RM;
pub use crate::num::F128;
pub use crate::num::INF_NEG;
pub use crate::num::INF_POS;
pub use crate::num::NAN;

pub use crate::defs::BIT_SIZE;
pub use crate::defs::EXPONENT_BIAS;
pub use crate::defs::EXPONENT_BIT_SIZE;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
pub use crate::defs::MANTISSA_BIT_SIZE;
