//! Conversion from and to primitive types.

use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::BIASED_EXPONENT_INF;
use crate::defs::EXPONENT_BIAS;
use crate::defs::MANTISSA_BIT_SIZE;
use crate::defs::MANTISSA_MASK;
use crate::num::F128;

const F64_MANTISSA_BIT_SIZE: u32 = 52;
const F64_EXPONENT_BIAS: Exponent = 1023;
const F64_EXPONENT_INF: u64 = 0x7ff;
const F64_QUIET_BIT: u64 = 1 << (F64_MANTISSA_BIT_SIZE - 1);

const F32_MANTISSA_BIT_SIZE: u32 = 23;
const F32_EXPONENT_BIAS: Exponent = 127;
const F32_EXPONENT_INF: u64 = 0xff;

impl F128 {
    /// Constructs a number from `f64`. The conversion is exact.
    /// The payload of NaN is placed in the most significant bits of the mantissa.
    pub fn from_f64(f: f64) -> Self {
        Self::from_binary(
            f.to_bits(),
            F64_MANTISSA_BIT_SIZE,
            F64_EXPONENT_INF,
            F64_EXPONENT_BIAS,
        )
    }

    /// Constructs a number from `f32`. The conversion is exact.
    /// The payload of NaN is placed in the most significant bits of the mantissa.
    pub fn from_f32(f: f32) -> Self {
        Self::from_binary(
            f.to_bits() as u64,
            F32_MANTISSA_BIT_SIZE,
            F32_EXPONENT_INF,
            F32_EXPONENT_BIAS,
        )
    }

    // Widens a number in a smaller binary interchange format given by its bits.
    fn from_binary(bits: u64, mbits: u32, einf: u64, bias: Exponent) -> Self {
        let s = if bits >> (mbits + einf.count_ones()) & 1 == 0 {
            Sign::Pos
        } else {
            Sign::Neg
        };
        let be = (bits >> mbits) & einf;
        let frac = bits & ((1 << mbits) - 1);
        let widen = MANTISSA_BIT_SIZE as u32 - mbits;

        if be == einf {
            // infinity or NaN
            return Self::from_raw_parts(s, BIASED_EXPONENT_INF, (frac as u128) << widen);
        }

        if be == 0 {
            if frac == 0 {
                return Self::from_raw_parts(s, 0, 0);
            }

            // subnormal: position of the most significant bit becomes the exponent
            let msb = 63 - frac.leading_zeros();
            let e = msb as Exponent - mbits as Exponent + 1 - bias;
            let m = (frac as u128) << (MANTISSA_BIT_SIZE as u32 - msb);

            return Self::from_raw_parts(s, (e + EXPONENT_BIAS) as u32, m & MANTISSA_MASK);
        }

        let e = be as Exponent - bias;
        Self::from_raw_parts(s, (e + EXPONENT_BIAS) as u32, (frac as u128) << widen)
    }

    /// Converts the number to `f64` rounding to nearest, ties to even.
    /// Numbers which are too large become infinity and too small ones become subnormal or zero.
    /// NaN keeps the most significant bits of its payload and is quieted.
    pub fn to_f64(&self) -> f64 {
        let sign_bit = if self.is_negative() { 1u64 << 63 } else { 0 };
        let inf = sign_bit | (F64_EXPONENT_INF << F64_MANTISSA_BIT_SIZE);
        let shift = MANTISSA_BIT_SIZE as u32 - F64_MANTISSA_BIT_SIZE;

        if self.is_nan() {
            let (_, _, frac) = self.to_raw_parts();
            return f64::from_bits(inf | F64_QUIET_BIT | (frac >> shift) as u64);
        }

        if self.is_inf() {
            return f64::from_bits(inf);
        }

        if self.is_zero() {
            return f64::from_bits(sign_bit);
        }

        let (_, e, m) = self.unpack();

        let bits = if e >= 1 - F64_EXPONENT_BIAS {
            let mut e = e;
            let mut q = round_shift(m, shift);
            if q >> (F64_MANTISSA_BIT_SIZE + 1) != 0 {
                q >>= 1;
                e += 1;
            }

            if e > F64_EXPONENT_BIAS {
                return f64::from_bits(inf);
            }

            (((e + F64_EXPONENT_BIAS) as u64) << F64_MANTISSA_BIT_SIZE)
                | (q as u64 & ((1 << F64_MANTISSA_BIT_SIZE) - 1))
        } else {
            // subnormal: a carry into bit 52 gives the smallest normal number
            let sub_shift = (shift as Exponent + 1 - F64_EXPONENT_BIAS - e) as u32;
            if sub_shift > MANTISSA_BIT_SIZE as u32 + 2 {
                0
            } else {
                round_shift(m, sub_shift) as u64
            }
        };

        f64::from_bits(sign_bit | bits)
    }
}

// Shifts `m` right by `n` > 0 bits rounding to nearest, ties to even.
fn round_shift(m: u128, n: u32) -> u128 {
    let q = m >> n;
    let rem = m & ((1 << n) - 1);
    let half = 1 << (n - 1);

    if rem > half || (rem == half && q & 1 == 1) {
        q + 1
    } else {
        q
    }
}

macro_rules! impl_int_conv {
    ($s:ty, $u:ty, $from_s:ident, $from_u:ident) => {
        impl F128 {
            /// Constructs a number from a signed integer. The conversion is exact.
            pub fn $from_s(i: $s) -> Self {
                let ret = Self::$from_u(i.unsigned_abs());
                if i < 0 {
                    ret.neg()
                } else {
                    ret
                }
            }

            /// Constructs a number from an unsigned integer. The conversion is exact.
            pub fn $from_u(u: $u) -> Self {
                if u == 0 {
                    return Self::ZERO;
                }

                let msb = <$u>::BITS - 1 - u.leading_zeros();
                let m = (u as u128) << (MANTISSA_BIT_SIZE as u32 - msb);

                Self::from_raw_parts(Sign::Pos, msb + EXPONENT_BIAS as u32, m & MANTISSA_MASK)
            }
        }

        impl From<$s> for F128 {
            fn from(i: $s) -> Self {
                F128::$from_s(i)
            }
        }

        impl From<$u> for F128 {
            fn from(u: $u) -> Self {
                F128::$from_u(u)
            }
        }
    };
}

impl_int_conv!(i32, u32, from_i32, from_u32);
impl_int_conv!(i64, u64, from_i64, from_u64);
