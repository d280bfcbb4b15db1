//! Argument reduction: x = 2^e * u, ln(u) = ln(t) + ln(1 + z), z = (u - t) / t,
//! where t is the breakpoint nearest to u.

use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::EXPONENT_BIAS;
use crate::defs::MANTISSA_BIT_SIZE;
use crate::num::F128;
use crate::ops::consts::LOGTBL_ONE;

// Top 16 bits of the stored mantissa form the index word.
const INDEX_SHIFT: usize = MANTISSA_BIT_SIZE - 16;

// Implicit bit of the index word.
const INDEX_ONE: u32 = 0x10000;

// Index words below this are reduced with the fine breakpoints: u < 0.703125.
const FINE_LIMIT: u32 = 0x16800;

// Bounds of the interval around 1 where the table is not used.
const NEAR_UNITY_LOW: F128 = F128::from_bits(0x3ffefc00000000000000000000000000); // 0.9921875
const NEAR_UNITY_HIGH: F128 = F128::from_bits(0x3fff0200000000000000000000000000); // 1.0078125

/// Breakpoint spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Regime {
    /// u in [0.5, 0.703125) is doubled and reduced with t = 1 + k/128.
    Fine,

    /// u in [0.703125, 1) is reduced with t = 0.5 + k/128; the last breakpoint is t = 1.
    Coarse,
}

/// The breakpoint chosen for the mantissa `u` with exponent `e`.
/// `u` and `e` may be adjusted so that `t` is near `u` and `u` * 2^`e` is unchanged.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Breakpoint {
    pub regime: Regime,
    pub k: usize,
    pub t: F128,
    pub u: F128,
    pub e: Exponent,
}

/// Reduced argument: ln(x) = e * ln(2) + ln(t) + ln(1 + z), with ln(t) - (t - 1) found at index `k` in the table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Reduction {
    pub z: F128,
    pub t: F128,
    pub k: usize,
    pub e: Exponent,
}

/// Returns the breakpoint for the mantissa `u` in [0.5, 1) and the exponent `e` as returned by `frexp`.
pub(crate) fn select_breakpoint(u: F128, e: Exponent) -> Breakpoint {
    debug_assert!(u.is_positive());

    let (_, ue, frac) = u.to_raw_parts();
    debug_assert_eq!(ue, (EXPONENT_BIAS - 1) as u32);

    let m = ((frac >> INDEX_SHIFT) as u32 & 0xffff) | INDEX_ONE;

    if m < FINE_LIMIT {
        let k = (m - 0xff00) >> 9;
        let t = F128::from_raw_parts(
            Sign::Pos,
            EXPONENT_BIAS as u32,
            ((k << 9) as u128) << INDEX_SHIFT,
        );

        Breakpoint {
            regime: Regime::Fine,
            k: k as usize + LOGTBL_ONE,
            t,
            u: F128::from_raw_parts(Sign::Pos, ue + 1, frac),
            e: e - 1,
        }
    } else {
        let k = (m - 0xfe00) >> 10;

        // k = 64 carries into the exponent giving t = 1
        let w = (((EXPONENT_BIAS - 1) as u32) << 16) + (k << 10);
        let t = F128::from_raw_parts(Sign::Pos, w >> 16, ((w & 0xffff) as u128) << INDEX_SHIFT);

        Breakpoint {
            regime: Regime::Coarse,
            k: k as usize + LOGTBL_ONE - 64,
            t,
            u,
            e,
        }
    }
}

/// Returns true if `x` lies in [0.9921875, 1.0078125], where the argument is used directly as 1 + z.
pub(crate) fn is_near_unity(x: &F128) -> bool {
    // positive finite numbers are ordered as their bit patterns
    x.is_positive()
        && x.to_bits() >= NEAR_UNITY_LOW.to_bits()
        && x.to_bits() <= NEAR_UNITY_HIGH.to_bits()
}

/// Reduces a positive finite nonzero `x` which is not 1.
pub(crate) fn reduce(x: &F128, rm: RoundingMode) -> Reduction {
    if is_near_unity(x) {
        return Reduction {
            z: x.sub(&F128::ONE, rm),
            t: F128::ONE,
            k: LOGTBL_ONE,
            e: 0,
        };
    }

    let (u, e) = x.frexp();
    let bp = select_breakpoint(u, e);

    Reduction {
        z: bp.u.sub(&bp.t, rm).div(&bp.t, rm),
        t: bp.t,
        k: bp.k,
        e: bp.e,
    }
}
