//! Auxiliary functions.

const LOW_HALF: u128 = u64::MAX as u128;

/// Shifts `m` right by `n` bits. If any of the shifted out bits is 1, the least significant bit of the result is set to 1.
#[inline]
pub fn shift_right_sticky(m: u128, n: u32) -> u128 {
    if n == 0 {
        m
    } else if n >= 128 {
        (m != 0) as u128
    } else {
        (m >> n) | ((m << (128 - n)) != 0) as u128
    }
}

/// Full product of two 128-bit numbers as the pair (high part, low part).
#[inline]
pub fn mul_wide(a: u128, b: u128) -> (u128, u128) {
    let (a1, a0) = (a >> 64, a & LOW_HALF);
    let (b1, b0) = (b >> 64, b & LOW_HALF);

    let p00 = a0 * b0;
    let p01 = a0 * b1;
    let p10 = a1 * b0;
    let p11 = a1 * b1;

    // at most 3 * (2^64 - 1), no overflow
    let mid = (p00 >> 64) + (p01 & LOW_HALF) + (p10 & LOW_HALF);

    let lo = (p00 & LOW_HALF) | (mid << 64);
    let hi = p11 + (p01 >> 64) + (p10 >> 64) + (mid >> 64);

    (hi, lo)
}
