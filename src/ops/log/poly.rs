//! Polynomial part of ln(1 + z) for small z.

use crate::defs::RoundingMode;
use crate::num::F128;
use crate::ops::consts::LN_POLY;

/// Returns `(y, w)`, where `w` = z^2 and `y` = z^3 * P(z) approximates ln(1 + z) - z + z^2 / 2.
/// P is evaluated with Horner's scheme from the highest degree coefficient.
pub(crate) fn ln_poly(z: &F128, rm: RoundingMode) -> (F128, F128) {
    let w = z.mul(z, rm);

    let p = LN_POLY[1..]
        .iter()
        .fold(LN_POLY[0], |acc, c| acc.mul(z, rm).add(c, rm));

    let y = p.mul(z, rm).mul(&w, rm);

    (y, w)
}
