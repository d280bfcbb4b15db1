//! Components used in the reference comparison tests.

use astro_float::{BigFloat, Consts, Exponent, RoundingMode, Sign, Word, WORD_BIT_SIZE};
use astro_quad::{F128, EXPONENT_BIAS, MANTISSA_BIT_SIZE};

// Working precision of the reference.
pub const REF_PREC: usize = 256;

const REF_RM: RoundingMode = RoundingMode::ToEven;

/// Converts a finite number to the reference representation exactly.
pub fn to_ref(x: &F128) -> BigFloat {
    let (s, e, m) = x.to_raw_parts();

    let sig = if e == 0 {
        m
    } else {
        m | (1u128 << MANTISSA_BIT_SIZE)
    };

    // the most significant bit of a normal number lands at the top of the words
    let mant = sig << (127 - MANTISSA_BIT_SIZE);
    let words: Vec<Word> = (0..128 / WORD_BIT_SIZE)
        .map(|i| (mant >> (i * WORD_BIT_SIZE)) as Word)
        .collect();

    let e = (e.max(1) as Exponent) - EXPONENT_BIAS + 1;
    let s = if s.is_negative() { Sign::Neg } else { Sign::Pos };

    BigFloat::from_words(&words, s, e)
}

/// Returns the reference value of ln(x) for a positive finite x.
pub fn ref_ln(x: &F128, cc: &mut Consts) -> BigFloat {
    to_ref(x).ln(REF_PREC, REF_RM, cc)
}

/// Returns the reference value of exp(y).
pub fn ref_exp(y: &F128, cc: &mut Consts) -> BigFloat {
    to_ref(y).exp(REF_PREC, REF_RM, cc)
}

/// Returns |got - expected| / |expected| approximately.
pub fn rel_err(got: &BigFloat, expected: &BigFloat) -> f64 {
    let d = got.sub(expected, REF_PREC, REF_RM);
    let r = d.div(expected, REF_PREC, REF_RM);
    approx_f64(&r).abs()
}

/// Returns |got - expected| approximately.
pub fn abs_err(got: &BigFloat, expected: &BigFloat) -> f64 {
    approx_f64(&got.sub(expected, REF_PREC, REF_RM)).abs()
}

// Leading word of the mantissa scaled by the exponent; enough to report errors.
fn approx_f64(n: &BigFloat) -> f64 {
    if n.is_zero() {
        return 0.0;
    }

    let (m, _, s, e, _) = n.as_raw_parts().expect("finite number");
    let top = *m.last().expect("nonempty mantissa") as f64;
    let v = top * 2f64.powi(e - WORD_BIT_SIZE as Exponent);

    if s == Sign::Neg {
        -v
    } else {
        v
    }
}

/// Returns a number in [lo, hi) with random low bits in the mantissa.
pub fn random_in(lo: f64, hi: f64) -> F128 {
    let x = F128::from_f64(lo + rand::random::<f64>() * (hi - lo));
    let (s, e, m) = x.to_raw_parts();
    F128::from_raw_parts(s, e, m | (rand::random::<u64>() as u128 >> 4))
}

/// Accumulates the peak and the root mean square of relative errors.
#[derive(Debug, Default)]
pub struct ErrStat {
    pub peak: f64,
    sum_sq: f64,
    n: usize,
}

impl ErrStat {
    pub fn push(&mut self, err: f64) {
        self.peak = self.peak.max(err);
        self.sum_sq += err * err;
        self.n += 1;
    }

    pub fn rms(&self) -> f64 {
        (self.sum_sq / self.n as f64).sqrt()
    }
}
