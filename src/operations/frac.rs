//! This module contains the implementation of the best rational approximation
//! of a float, computed with continued fractions.

use crate::Rational;

/// The default error bound of `Rational::from_f64`.
pub const DEFAULT_EPSILON: f64 = 1e-15;

/// Returns the rational number with the smallest denominator that is within
/// `eps` of `number`. The convergents of the continued fraction
/// a0 + 1/(a1 + 1/(a2 + 1/( ... ))) are computed until one of them is close
/// enough. If the numerator or the denominator of the next convergent does not
/// fit in an i64, the last convergent that fits is returned instead.
///
/// Inf and NaN are not numbers that we can approximate, and both return 1/0.
/// Numbers too large for any convergent to fit also return 1/0.
pub fn best_approximation(number: f64, eps: f64) -> Rational {
    if !number.is_finite() {
        return Rational::INFINITY;
    }

    let target = if number < 0. { -number } else { number };
    let distance = |p: i64, q: i64| {
        let d = p as f64 / q as f64 - target;
        if d < 0. {
            -d
        } else {
            d
        }
    };

    // The last two convergents. The recurrence starts with 0/1 and 1/0.
    let mut p = (0_i64, 1_i64);
    let mut q = (1_i64, 0_i64);
    let mut x = target;

    loop {
        // 2^63 is the first float past the range of i64.
        if x >= i64::MAX as f64 {
            break;
        }
        // The number is not negative, so truncation is floor.
        let a = x as i64;

        let next_p = a.checked_mul(p.1).and_then(|v| v.checked_add(p.0));
        let next_q = a.checked_mul(q.1).and_then(|v| v.checked_add(q.0));
        let (next_p, next_q) = match (next_p, next_q) {
            (Some(np), Some(nq)) => (np, nq),
            _ => break,
        };
        p = (p.1, next_p);
        q = (q.1, next_q);

        if distance(p.1, q.1) <= eps {
            break;
        }

        // The fraction part is zero if the expansion is exact.
        x = 1. / (x - a as f64);
        if !x.is_finite() {
            break;
        }
    }

    if number < 0. {
        Rational::new(-p.1, q.1)
    } else {
        Rational::new(p.1, q.1)
    }
}

impl Rational {
    /// Returns the rational number with the smallest denominator that is
    /// within `DEFAULT_EPSILON` of `val`. See `best_approximation`.
    pub fn from_f64(val: f64) -> Self {
        best_approximation(val, DEFAULT_EPSILON)
    }
}

#[test]
fn test_approximation_round_trip() {
    let d = 123417. / 23572.;
    let r = Rational::from_f64(d);
    let approx = r.get_numerator() as f64 / r.get_denominator() as f64;
    let diff = if d > approx { d - approx } else { approx - d };
    assert!(diff < 1e-15);
    assert_eq!((r.get_numerator(), r.get_denominator()), (123417, 23572));
}

#[cfg(feature = "std")]
#[test]
fn test_frac_pi() {
    let pi = core::f64::consts::PI;

    // Verified with https://oeis.org/A002485 and https://oeis.org/A002486.
    let check = |eps: f64, p: i64, q: i64| {
        let r = best_approximation(pi, eps);
        assert_eq!((r.get_numerator(), r.get_denominator()), (p, q));
    };
    check(0.5, 3, 1);
    check(1e-2, 22, 7);
    check(1e-4, 333, 106);
    check(1e-6, 355, 113);

    let r = best_approximation(-pi, 1e-6);
    assert_eq!((r.get_numerator(), r.get_denominator()), (-355, 113));

    // The default bound needs larger convergents.
    let r = Rational::from_f64(pi);
    assert!((r.as_f64() - pi).abs() <= DEFAULT_EPSILON);
}

#[test]
fn test_frac_exact_values() {
    let check = |val: f64, p: i64, q: i64| {
        let r = Rational::from_f64(val);
        assert_eq!((r.get_numerator(), r.get_denominator()), (p, q));
    };
    check(0., 0, 1);
    check(-0., 0, 1);
    check(0.5, 1, 2);
    check(-0.75, -3, 4);
    check(3., 3, 1);
    check(-1.5, -3, 2);
    check(0.1, 1, 10);
    check(0.375, 3, 8);
    check(1e-300, 0, 1);
}

#[test]
fn test_frac_special_values() {
    assert!(Rational::from_f64(f64::INFINITY).is_inf());
    assert!(!Rational::from_f64(f64::INFINITY).is_negative());
    // NaN is not distinguished from infinity.
    assert!(Rational::from_f64(f64::NAN).is_inf());
    assert!(Rational::from_f64(f64::NEG_INFINITY).is_inf());

    // Too large for any convergent.
    assert!(Rational::from_f64(1e300).is_inf());
    assert!(Rational::from_f64(f64::MAX).is_inf());
}

#[cfg(feature = "std")]
#[test]
fn test_frac_range_guard() {
    use crate::utils;

    // The loop stops at the range of the integers, and returns a number that
    // is as close as possible.
    for val in utils::get_special_float_values() {
        let r = Rational::from_f64(val);
        if !val.is_finite() || val.abs() >= i64::MAX as f64 {
            assert!(r.is_inf());
            continue;
        }
        assert!(r.is_finite());
        assert_eq!(r.is_negative(), val < 0. && r.get_numerator() != 0);
        let err = (r.as_f64() - val).abs();
        // The best approximation is at most 1/q^2 away.
        let q = r.get_denominator() as f64;
        assert!(err <= DEFAULT_EPSILON || err <= 1. / (q * q), "{}", val);
    }

    let r = Rational::from_f64(core::f64::consts::SQRT_2);
    assert!(r.get_denominator() > 1000);
    assert!((r.as_f64() - core::f64::consts::SQRT_2).abs() <= DEFAULT_EPSILON);
}
