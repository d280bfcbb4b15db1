//! Operations on the numbers.

mod add;
pub(crate) mod consts;
mod div;
mod frexp;
mod log;
mod mul;
