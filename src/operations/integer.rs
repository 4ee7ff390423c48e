//! This module contains the integer GCD and LCM helpers. They operate on the
//! magnitudes of the numerator and the denominator, so they work on `u64` and
//! the callers pass absolute values.

/// Returns the greatest common divisor of `a` and `b`, computed with the
/// Euclidean algorithm. gcd(a, 0) = a, gcd(0, b) = b and gcd(0, 0) = 0.
pub fn gcd(a: u64, b: u64) -> u64 {
    let mut a = a;
    let mut b = b;
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns the least common multiple of `a` and `b`, or zero if either input
/// is zero. The result wraps if it does not fit in a u64.
pub fn lcm(a: u64, b: u64) -> u64 {
    overflowing_lcm(a, b).0
}

/// Computes the least common multiple of `a` and `b`, and reports if the
/// result overflowed. Returns zero (without overflow) if either input is zero,
/// which lets sums involving a zero denominator collapse to zero.
pub(crate) fn overflowing_lcm(a: u64, b: u64) -> (u64, bool) {
    if a == 0 || b == 0 {
        return (0, false);
    }
    (a / gcd(a, b)).overflowing_mul(b)
}

#[test]
fn test_gcd() {
    assert_eq!(gcd(210, 165), 15);
    assert_eq!(gcd(165, 210), 15);
    assert_eq!(gcd(17, 5), 1);
    assert_eq!(gcd(12, 0), 12);
    assert_eq!(gcd(0, 12), 12);
    assert_eq!(gcd(0, 0), 0);
    assert_eq!(gcd(1 << 63, 1 << 40), 1 << 40);
    assert_eq!(gcd(u64::MAX, u64::MAX), u64::MAX);
}

#[test]
fn test_lcm() {
    assert_eq!(lcm(4, 6), 12);
    assert_eq!(lcm(6, 4), 12);
    assert_eq!(lcm(7, 7), 7);
    assert_eq!(lcm(1, 9), 9);
    // A zero input short-circuits to zero.
    assert_eq!(lcm(0, 9), 0);
    assert_eq!(lcm(9, 0), 0);
    assert_eq!(lcm(0, 0), 0);

    assert_eq!(overflowing_lcm(1 << 32, 3 << 32), (3 << 32, false));
    let (_, overflow) = overflowing_lcm(u64::MAX, u64::MAX - 1);
    assert!(overflow);
}

#[test]
fn test_gcd_divides_both() {
    use crate::utils::Lfsr;

    let mut lfsr = Lfsr::new();
    for _ in 0..1000 {
        let a = lfsr.get64() >> 20;
        let b = lfsr.get64() >> 30;
        let g = gcd(a, b);
        if g == 0 {
            assert_eq!((a, b), (0, 0));
            continue;
        }
        assert_eq!(a % g, 0);
        assert_eq!(b % g, 0);
        // Dividing out the GCD leaves co-prime values.
        assert_eq!(gcd(a / g, b / g), 1);
    }
}
