//! Constants of the natural logarithm.

mod ln2;
mod logtbl;
mod poly;

pub(crate) use ln2::LN2_HIGH;
pub(crate) use ln2::LN2_LOW;
pub(crate) use logtbl::LOGTBL;
pub(crate) use logtbl::LOGTBL_ONE;
pub(crate) use poly::LN_POLY;
