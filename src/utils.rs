//! This file contains test helpers: lists of edge-case values and a random
//! number generator.

use crate::Rational;

/// Returns list of interesting rational numbers that various tests use to
/// catch edge cases.
pub fn get_special_test_values() -> [Rational; 20] {
    [
        Rational::NAN,
        Rational::INFINITY,
        Rational::NEG_INFINITY,
        Rational::ZERO,
        Rational::ONE,
        Rational::new(-1, 1),
        Rational::new(1, 2),
        Rational::new(-3, 4),
        Rational::new(22, 7),
        Rational::new(355, 113),
        Rational::new(-1, 1 << 40),
        Rational::new(1 << 40, 3),
        Rational::new(i64::MAX, 1),
        Rational::new(i64::MIN, 1),
        Rational::new(i64::MIN + 1, 1),
        Rational::new(1, i64::MAX),
        Rational::new(-1, i64::MAX),
        Rational::new(i64::MAX, i64::MAX - 1),
        Rational::new(i64::MIN, 3),
        Rational::new(7, 1 << 62),
    ]
}

/// Returns list of interesting floats that various tests use to catch edge
/// cases.
pub fn get_special_float_values() -> [f64; 20] {
    [
        -f64::NAN,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::EPSILON,
        -f64::EPSILON,
        0.000000000000000000000000000000000000001,
        f64::MIN,
        f64::MAX,
        core::f64::consts::PI,
        core::f64::consts::LN_2,
        core::f64::consts::SQRT_2,
        core::f64::consts::E,
        0.0,
        -0.0,
        10.,
        -10.,
        -0.00001,
        0.1,
        355. / 113.,
    ]
}

// Linear-feedback shift register. We use this as a random number generator for
// tests.
pub struct Lfsr {
    state: u32,
}

impl Default for Lfsr {
    fn default() -> Self {
        Self::new()
    }
}

impl Lfsr {
    /// Generate a new LFSR number generator.
    pub fn new() -> Lfsr {
        Lfsr { state: 0x13371337 }
    }

    /// Generate a new LFSR number generator that starts with a specific state.
    pub fn new_with_seed(seed: u32) -> Lfsr {
        Lfsr {
            state: 0x13371337 ^ seed,
        }
    }

    fn step(&mut self) {
        let a = (self.state >> 24) & 1;
        let b = (self.state >> 23) & 1;
        let c = (self.state >> 22) & 1;
        let d = (self.state >> 17) & 1;
        let n = a ^ b ^ c ^ d ^ 1;
        self.state <<= 1;
        self.state |= n;
    }

    fn get(&mut self) -> u32 {
        let mut res: u32 = 0;
        for _ in 0..32 {
            self.step();
            res <<= 1;
            res ^= self.state & 0x1;
        }
        res
    }

    pub fn get64(&mut self) -> u64 {
        ((self.get() as u64) << 32) | self.get() as u64
    }

    /// Returns a random finite rational number with a numerator and a
    /// denominator of up to `bits` bits.
    pub fn get_rational(&mut self, bits: u32) -> Rational {
        let shift = 64 - bits;
        let n = (self.get64() as i64) >> shift;
        let d = (self.get64() >> shift) as i64;
        Rational::new(n, d.max(1))
    }
}

#[test]
fn test_lfsr_balance() {
    let mut lfsr = Lfsr::new();

    // Count the number of items, and the number of 1s.
    let mut items = 0;
    let mut ones = 0;

    for _ in 0..10000 {
        let mut u = lfsr.get();
        for _ in 0..32 {
            items += 1;
            ones += u & 1;
            u >>= 1;
        }
    }
    // Make sure that we have around 50% 1s and 50% zeros.
    assert!((ones as f64) < (0.55 * items as f64));
    assert!((ones as f64) > (0.45 * items as f64));
}

#[test]
fn test_special_values_are_canonical() {
    for r in get_special_test_values() {
        let again = Rational::new(r.get_numerator(), r.get_denominator());
        assert_eq!(again.get_numerator(), r.get_numerator());
        assert_eq!(again.get_denominator(), r.get_denominator());
    }
}

#[test]
fn test_random_rationals() {
    let mut lfsr = Lfsr::new_with_seed(3);
    for _ in 0..1000 {
        let r = lfsr.get_rational(20);
        assert!(r.is_finite());
        assert!(r.get_denominator() < (1 << 20));
        assert!(r.get_numerator().unsigned_abs() <= (1 << 19));
    }
}
