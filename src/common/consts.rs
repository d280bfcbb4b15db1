//! Static constants.

use crate::num::F128;

/// 0.5
pub(crate) const HALF: F128 = F128::from_bits(0x3ffe0000000000000000000000000000);

/// -0.5
pub(crate) const NEG_HALF: F128 = F128::from_bits(0xbffe0000000000000000000000000000);
