//! Natural logarithm compared with the reference at 256 bits of precision.

use crate::oracle::common::{abs_err, ref_exp, ref_ln, rel_err, to_ref, random_in, ErrStat};
use astro_float::Consts;
use astro_quad::{RoundingMode, F128, EXPONENT_MAX, EXPONENT_MIN};

// Bounds observed for the relative error of the result.
const PEAK_ERR: f64 = 2.5e-34;
const RMS_ERR: f64 = 6e-35;

fn check_interval(lo: f64, hi: f64, run_cnt: usize, cc: &mut Consts) {
    let mut stat = ErrStat::default();

    for _ in 0..run_cnt {
        let x = random_in(lo, hi);
        if x.to_bits() == F128::ONE.to_bits() {
            continue;
        }

        let err = rel_err(&to_ref(&x.ln()), &ref_ln(&x, cc));
        assert!(err <= PEAK_ERR, "ln({:?}) relative error {:e}", x, err);
        stat.push(err);
    }

    assert!(stat.rms() <= RMS_ERR, "[{}, {}): rms {:e}", lo, hi, stat.rms());
}

#[test]
fn compare_ln_accuracy() {
    let mut cc = Consts::new().unwrap();

    check_interval(0.875, 1.125, 20000, &mut cc);
    check_interval(0.125, 8.0, 20000, &mut cc);
    check_interval(0.5, 1.0, 5000, &mut cc);
    check_interval(1e-300, 1e300, 5000, &mut cc);

    // whole exponent range
    let mut stat = ErrStat::default();
    for _ in 0..5000 {
        let x = F128::random_normal(EXPONENT_MIN, EXPONENT_MAX + 1).unwrap().abs();
        let err = rel_err(&to_ref(&x.ln()), &ref_ln(&x, &mut cc));
        assert!(err <= PEAK_ERR, "ln({:?}) relative error {:e}", x, err);
        stat.push(err);
    }
    assert!(stat.rms() <= RMS_ERR, "rms {:e}", stat.rms());

    // subnormal arguments
    for _ in 0..1000 {
        let x = F128::from_bits(rand::random::<u128>() >> 16);
        if x.is_zero() {
            continue;
        }
        let err = rel_err(&to_ref(&x.ln()), &ref_ln(&x, &mut cc));
        assert!(err <= PEAK_ERR, "ln({:?}) relative error {:e}", x, err);
    }
}

#[test]
fn compare_ln_boundaries() {
    let mut cc = Consts::new().unwrap();
    let rm = RoundingMode::ToEven;

    let mut points = vec![
        // bounds of the interval where the table is bypassed
        F128::from_f64(0.9921875),
        F128::from_f64(1.0078125),
        // switch between fine and coarse breakpoints
        F128::from_f64(0.703125),
        F128::from_f64(1.40625),
        F128::ONE,
        F128::from_i32(2),
        F128::from_f64(0.5),
        F128::MIN_POSITIVE,
        F128::MAX.next_down(),
    ];

    // every breakpoint and the midpoints between breakpoints
    for k in 0..=128 {
        let t = F128::from_i32(64 + k).div(&F128::from_i32(128), rm);
        points.push(t);
        points.push(t.add(&F128::from_f64(1.0 / 256.0), rm));
        points.push(t.ldexp(1));
    }

    for p in points {
        let x0 = p.next_down();
        let x1 = p.next_up();

        let y0 = x0.ln();
        let y = p.ln();
        let y1 = x1.ln();

        // monotonic across the boundary
        assert!(y0 <= y && y <= y1, "{:?}: {:?} {:?} {:?}", p, y0, y, y1);

        for x in [x0, p, x1] {
            if x.to_bits() == F128::ONE.to_bits() {
                assert_eq!(x.ln().to_bits(), 0);
                continue;
            }
            let err = rel_err(&to_ref(&x.ln()), &ref_ln(&x, &mut cc));
            assert!(err <= PEAK_ERR, "ln({:?}) relative error {:e}", x, err);
        }
    }
}

#[test]
fn compare_exp_ln() {
    let mut cc = Consts::new().unwrap();

    for _ in 0..5000 {
        let x = F128::random_normal(-2000, 2000).unwrap().abs();
        let y = x.ln();

        // exp(ln(x)) / x - 1 is the absolute error of ln(x)
        let err = rel_err(&ref_exp(&y, &mut cc), &to_ref(&x));
        let bound = y.abs().to_f64() * PEAK_ERR + 1e-40;
        assert!(err <= bound, "exp(ln({:?})) relative error {:e}", x, err);
    }
}

#[test]
fn compare_ln_scaling() {
    let mut cc = Consts::new().unwrap();
    let rm = RoundingMode::ToEven;

    // ln(x * 2^k) - ln(x) = k * ln(2)
    for _ in 0..2000 {
        let x = random_in(0.5, 2.0);
        let k = (rand::random::<u32>() % 32000) as i32 - 16000;

        let y = x.ldexp(k).ln().sub(&x.ln(), rm);
        let expected = ref_ln(&F128::from_i32(2), &mut cc)
            .mul(&to_ref(&F128::from_i32(k)), 256, astro_float::RoundingMode::ToEven);

        let bound = (k.abs() as f64 * 0.7 + 1.0) * 2.0 * PEAK_ERR;
        let err = abs_err(&to_ref(&y), &expected);
        assert!(err <= bound, "ln({:?} * 2^{}) error {:e}", x, k, err);
    }
}

#[test]
fn compare_ln_additivity() {
    let rm = RoundingMode::ToEven;

    // ln(a * b) = ln(a) + ln(b) up to the rounding of the product and of the results
    for _ in 0..10000 {
        let a = random_in(0.125, 8.0);
        let b = random_in(0.125, 8.0);
        let p = a.mul(&b, rm);

        let la = a.ln();
        let lb = b.ln();
        let lp = p.ln();

        let d = lp.sub(&la.add(&lb, rm), rm).abs().to_f64();
        let bound =
            (la.abs().to_f64() + lb.abs().to_f64() + lp.abs().to_f64() + 1.0) * 2.0 * PEAK_ERR;
        assert!(d <= bound, "ln({:?} * {:?}) differs by {:e}", a, b, d);
    }
}
