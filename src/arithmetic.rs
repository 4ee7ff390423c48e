use super::operations::integer::{gcd, overflowing_lcm};
use super::rational::Rational;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub,
    SubAssign,
};

/// Returns n * (l / d), the numerator `n/d` rescaled to the denominator `l`.
/// A zero denominator contributes zero, which turns NaN operands into 0/0.
fn scale(n: i64, l: i64, d: i64) -> (i64, bool) {
    if d == 0 {
        return (0, false);
    }
    n.overflowing_mul(l / d)
}

/// Divide `x` by the common factor `g`. The quotient never grows in
/// magnitude, so it fits, even when `g` is 2^63. A zero factor is ignored.
fn divide_out(x: i64, g: u64) -> i64 {
    if g == 0 {
        return x;
    }
    (x as i128 / g as i128) as i64
}

/// Convert the lcm of two denominators back to i64, and report if it does
/// not fit.
fn lcm_of_denominators(a: &Rational, b: &Rational) -> (i64, bool) {
    let (l, overflow) = overflowing_lcm(
        a.get_denominator() as u64,
        b.get_denominator() as u64,
    );
    (l as i64, overflow || l > i64::MAX as u64)
}

impl Rational {
    /// Computes a+b, and reports if any step of the computation overflowed.
    /// The returned number is the wrapped result in that case.
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        Self::add_sub(self, rhs, false)
    }

    /// Computes a-b, and reports if any step of the computation overflowed.
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        Self::add_sub(self, rhs, true)
    }

    fn add_sub(a: Self, b: Self, subtract: bool) -> (Self, bool) {
        let op = |x: i64, y: i64| {
            if subtract {
                x.overflowing_sub(y)
            } else {
                x.overflowing_add(y)
            }
        };

        // Infinity is combined using the numerators alone.
        if a.is_inf() || b.is_inf() {
            let (n, o0) = op(a.get_numerator(), b.get_numerator());
            let (res, o1) = Self::overflowing_new(n, 0);
            return (res, o0 || o1);
        }

        // Bring both numbers to the common denominator L and combine the
        // numerators. NaN has a zero denominator, so L is zero, and the
        // result is 0/0.
        let (l, o0) = lcm_of_denominators(&a, &b);
        let (x, o1) = scale(a.get_numerator(), l, a.get_denominator());
        let (y, o2) = scale(b.get_numerator(), l, b.get_denominator());
        let (n, o3) = op(x, y);
        let (res, o4) = Self::overflowing_new(n, l);
        (res, o0 || o1 || o2 || o3 || o4)
    }

    /// Computes a*b, and reports if any step of the computation overflowed.
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let (n1, d1) = (self.get_numerator(), self.get_denominator());
        let (n2, d2) = (rhs.get_numerator(), rhs.get_denominator());

        if self.is_inf() || rhs.is_inf() {
            let (n, o0) = n1.overflowing_mul(n2);
            let (res, o1) = Self::overflowing_new(n, 0);
            return (res, o0 || o1);
        }

        // Cross-reduce before multiplying, to keep the products small:
        // (n1/g1 * n2/g2) / (d1/g2 * d2/g1).
        let g1 = gcd(n1.unsigned_abs(), d2 as u64);
        let g2 = gcd(d1 as u64, n2.unsigned_abs());
        let (n, o0) = divide_out(n1, g1).overflowing_mul(divide_out(n2, g2));
        let (d, o1) = divide_out(d1, g2).overflowing_mul(divide_out(d2, g1));
        let (res, o2) = Self::overflowing_new(n, d);
        (res, o0 || o1 || o2)
    }

    /// Computes a/b, as a * (1/b), and reports if any step of the
    /// computation overflowed. Dividing by zero gives infinity, or NaN for
    /// 0/0.
    pub fn overflowing_div(self, rhs: Self) -> (Self, bool) {
        let (inv, o0) =
            Self::overflowing_new(rhs.get_denominator(), rhs.get_numerator());
        let (res, o1) = self.overflowing_mul(inv);
        (res, o0 || o1)
    }

    /// Computes the remainder of a/b, and reports if any step of the
    /// computation overflowed. The result has the sign of `a`. A zero divisor
    /// gives NaN.
    pub fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
        let (n1, n2) = (self.get_numerator(), rhs.get_numerator());

        if self.is_inf() || rhs.is_inf() {
            if n2 == 0 {
                return (Self::NAN, false);
            }
            let (n, o0) = n1.overflowing_rem(n2);
            let (res, o1) = Self::overflowing_new(n, 0);
            return (res, o0 || o1);
        }

        // Take the remainder of the numerators over the common denominator.
        let (l, o0) = lcm_of_denominators(&self, &rhs);
        let (x, o1) = scale(n1, l, self.get_denominator());
        let (y, o2) = scale(n2, l, rhs.get_denominator());
        if y == 0 {
            return (Self::NAN, o0 || o1 || o2);
        }
        let (n, o3) = x.overflowing_rem(y);
        let (res, o4) = Self::overflowing_new(n, l);
        (res, o0 || o1 || o2 || o3 || o4)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.overflowing_mul(rhs).0
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.overflowing_div(rhs).0
    }
}

impl Rem for Rational {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        self.overflowing_rem(rhs).0
    }
}

macro_rules! assign_operator {
    ($op_trait:ident, $op_fn:ident, $op:tt) => {
        impl $op_trait for Rational {
            fn $op_fn(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

assign_operator!(AddAssign, add_assign, +);
assign_operator!(SubAssign, sub_assign, -);
assign_operator!(MulAssign, mul_assign, *);
assign_operator!(DivAssign, div_assign, /);
assign_operator!(RemAssign, rem_assign, %);

#[cfg(test)]
fn assert_canonical(r: Rational) {
    let (n, d) = (r.get_numerator(), r.get_denominator());
    assert!(d >= 0, "negative denominator in {}/{}", n, d);
    if !r.is_nan() {
        assert_eq!(gcd(n.unsigned_abs(), d as u64), 1, "{}/{}", n, d);
    }
}

#[test]
fn test_add() {
    let a = Rational::new(1, 2);
    let b = Rational::new(1, 3);
    let c = a + b;
    assert_eq!((c.get_numerator(), c.get_denominator()), (5, 6));

    let c = Rational::new(1, 6) + Rational::new(1, 3);
    assert_eq!((c.get_numerator(), c.get_denominator()), (1, 2));

    let c = Rational::new(3, 4) + Rational::new(-3, 4);
    assert_eq!((c.get_numerator(), c.get_denominator()), (0, 1));
}

#[test]
fn test_add_infinity() {
    let c = Rational::new(1, 0) + Rational::new(3, 4);
    assert_eq!(c, Rational::new(1, 0));
    assert!(c.is_inf());
    assert!(!c.is_negative());

    // The numerators are summed: 2 + (-1).
    let c = Rational::new(2, 3) + Rational::new(-4, 0);
    assert_eq!(c, Rational::new(-1, 0));
    assert!(c.is_inf());
    assert_eq!(c.get_numerator(), 1);

    // Opposite infinities cancel into NaN.
    let c = Rational::INFINITY + Rational::NEG_INFINITY;
    assert!(c.is_nan());
    let c = Rational::INFINITY - Rational::INFINITY;
    assert!(c.is_nan());
    let c = Rational::INFINITY + Rational::INFINITY;
    assert!(c.is_inf());
    assert_eq!(c.get_numerator(), 1);

    // NaN absorbs finite numbers.
    assert!((Rational::NAN + Rational::new(3, 4)).is_nan());
    assert!((Rational::new(3, 4) - Rational::NAN).is_nan());
}

#[test]
fn test_sub() {
    let c = Rational::new(1, 2) - Rational::new(-3, 4);
    assert_eq!(c, Rational::new(5, 4));
    assert_eq!((c.get_numerator(), c.get_denominator()), (5, 4));

    let c = Rational::new(1, 4) - Rational::new(3, 4);
    assert_eq!((c.get_numerator(), c.get_denominator()), (-1, 2));

    let c = Rational::new(5, 1) - Rational::new(-3, 0);
    assert!(c.is_inf());
    assert_eq!(c.get_numerator(), 1);
}

#[test]
fn test_mul() {
    let c = Rational::new(1, -2) * Rational::new(-3, 4);
    assert_eq!(c, Rational::new(3, 8));
    assert_eq!((c.get_numerator(), c.get_denominator()), (3, 8));

    let c = Rational::new(6, 35) * Rational::new(7, 9);
    assert_eq!((c.get_numerator(), c.get_denominator()), (2, 15));

    assert!((Rational::new(5, 7) * Rational::ZERO).is_zero());
    assert!((Rational::NAN * Rational::ZERO).is_nan());
    assert!((Rational::NAN * Rational::new(3, 2)).is_nan());

    let c = Rational::new(-3, 2) * Rational::INFINITY;
    assert!(c.is_inf());
    assert!(c.is_negative());
    assert!((Rational::ZERO * Rational::INFINITY).is_nan());
}

#[test]
fn test_div() {
    let c = Rational::new(1, -2) / Rational::new(-3, 4);
    assert_eq!(c, Rational::new(2, 3));
    assert_eq!((c.get_numerator(), c.get_denominator()), (2, 3));

    // Division by zero does not fault.
    let c = Rational::new(1, 2) / Rational::ZERO;
    assert!(c.is_inf());
    assert!(!c.is_negative());
    let c = Rational::new(-1, 2) / Rational::ZERO;
    assert!(c.is_inf());
    assert!(c.is_negative());
    assert!((Rational::ZERO / Rational::ZERO).is_nan());
    assert!((Rational::new(3, 5) / Rational::NAN).is_nan());

    assert!((Rational::new(7, 3) / Rational::INFINITY).is_zero());
}

#[test]
fn test_rem() {
    let c = Rational::new(7, 2) % Rational::new(1, 3);
    assert_eq!((c.get_numerator(), c.get_denominator()), (1, 6));
    let c = Rational::new(-7, 2) % Rational::new(1, 3);
    assert_eq!((c.get_numerator(), c.get_denominator()), (-1, 6));
    let c = Rational::new(9, 1) % Rational::new(3, 1);
    assert!(c.is_zero());
    let c = Rational::new(5, 4) % Rational::new(2, 1);
    assert_eq!((c.get_numerator(), c.get_denominator()), (5, 4));

    // A zero divisor gives NaN.
    assert!((Rational::new(5, 4) % Rational::ZERO).is_nan());
    assert!((Rational::INFINITY % Rational::ZERO).is_nan());
    assert!((Rational::NAN % Rational::new(1, 2)).is_nan());

    // Infinity keeps the remainder of the numerators.
    let c = Rational::INFINITY % Rational::new(3, 4);
    assert!(c.is_inf());
    assert!((Rational::new(3, 4) % Rational::INFINITY).is_nan());
}

#[test]
fn test_assign_operators() {
    let mut a = Rational::new(1, 2);
    a += Rational::new(1, 4);
    assert_eq!(a, Rational::new(3, 4));
    a -= Rational::new(1, 2);
    assert_eq!(a, Rational::new(1, 4));
    a *= Rational::new(8, 1);
    assert_eq!(a, Rational::new(2, 1));
    a /= Rational::new(4, 3);
    assert_eq!(a, Rational::new(3, 2));
    a %= Rational::new(1, 1);
    assert_eq!(a, Rational::new(1, 2));
}

#[test]
fn test_overflow_flags() {
    let max = Rational::new(i64::MAX, 1);

    let (_, overflow) = max.overflowing_add(Rational::ONE);
    assert!(overflow);
    let (_, overflow) = max.overflowing_sub(Rational::new(-1, 1));
    assert!(overflow);
    let (_, overflow) = max.overflowing_mul(Rational::new(2, 1));
    assert!(overflow);
    let (_, overflow) = max.overflowing_div(Rational::new(1, 2));
    assert!(overflow);

    // The common denominator does not fit.
    let a = Rational::new(1, i64::MAX);
    let b = Rational::new(1, i64::MAX - 1);
    assert!(a.overflowing_add(b).1);
    assert!(a.overflowing_sub(b).1);
    assert!(a.overflowing_rem(b).1);

    // The inverse of the divisor does not fit.
    let (_, overflow) = Rational::ONE.overflowing_div(Rational::new(i64::MIN, 3));
    assert!(overflow);

    let (res, overflow) =
        Rational::new(i64::MIN, 1).overflowing_rem(Rational::new(-1, 1));
    assert!(overflow);
    assert!(res.is_zero());

    // Cross reduction keeps these products in range.
    let (res, overflow) =
        Rational::new(i64::MAX, 2).overflowing_mul(Rational::new(2, i64::MAX));
    assert!(!overflow);
    assert_eq!(res, Rational::ONE);

    let (res, overflow) = max.overflowing_sub(max);
    assert!(!overflow);
    assert!(res.is_zero());
    let (res, overflow) = Rational::new(3, 4).overflowing_add(Rational::new(1, 4));
    assert!(!overflow);
    assert_eq!(res, Rational::ONE);
}

#[test]
fn test_unchecked_overflow_wraps() {
    // The plain operators return the wrapped value, and don't panic.
    let c = Rational::new(i64::MAX, 1) + Rational::ONE;
    assert_eq!((c.get_numerator(), c.get_denominator()), (i64::MIN, 1));
    let c = Rational::new(i64::MAX, 1) * Rational::new(2, 1);
    assert_eq!((c.get_numerator(), c.get_denominator()), (-2, 1));
    let c = Rational::new(i64::MIN, 1) % Rational::new(-1, 1);
    assert!(c.is_zero());
}

#[test]
fn test_random_vals() {
    use crate::utils::Lfsr;

    let mut lfsr = Lfsr::new();

    // Check that the value r equals num/den.
    fn check(r: Rational, num: i128, den: i128) {
        assert_canonical(r);
        let n = r.get_numerator() as i128;
        let d = r.get_denominator() as i128;
        assert_eq!(n * den, num * d);
    }

    for _ in 0..5000 {
        let a = lfsr.get_rational(20);
        let b = lfsr.get_rational(20);
        let n1 = a.get_numerator() as i128;
        let d1 = a.get_denominator() as i128;
        let n2 = b.get_numerator() as i128;
        let d2 = b.get_denominator() as i128;

        let (r, overflow) = a.overflowing_add(b);
        assert!(!overflow);
        check(r, n1 * d2 + n2 * d1, d1 * d2);

        let (r, overflow) = a.overflowing_sub(b);
        assert!(!overflow);
        check(r, n1 * d2 - n2 * d1, d1 * d2);

        let (r, overflow) = a.overflowing_mul(b);
        assert!(!overflow);
        check(r, n1 * n2, d1 * d2);

        if n2 != 0 {
            let (r, overflow) = a.overflowing_div(b);
            assert!(!overflow);
            // The sign of the divisor moves to the numerator.
            let s = n2.signum();
            check(r, s * n1 * d2, s * d1 * n2);
        }
    }
}

#[test]
fn test_special_values() {
    use crate::utils;

    // Every operator returns a canonical value for any pair of inputs.
    let values = utils::get_special_test_values();
    for a in values {
        for b in values {
            assert_canonical(a + b);
            assert_canonical(a - b);
            assert_canonical(a * b);
            assert_canonical(a / b);
            assert_canonical(a % b);
            assert_eq!(a + b, a.overflowing_add(b).0);
            if a.is_nan() || b.is_nan() {
                assert!((a * b).is_nan() || a.is_inf() || b.is_inf());
            }
        }
    }
}
