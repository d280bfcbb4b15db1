//! ln(2) split into two parts.

use crate::num::F128;

/// ln(2) truncated to 16 bits, 6.93145751953125e-1.
/// The product with any exponent of the format is exact.
pub(crate) const LN2_HIGH: F128 = F128::from_bits(0x3ffe62e4000000000000000000000000);

/// ln(2) - LN2_HIGH rounded to nearest, 1.4286068203094172321214581765680755001344e-6.
pub(crate) const LN2_LOW: F128 = F128::from_bits(0x3feb7f7d1cf79abc9e3b39803f2f6af4);
