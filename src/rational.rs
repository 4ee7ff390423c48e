use super::operations::integer::gcd;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// Declare the different categories of the rational number. The category is
/// not stored, it is derived from the numerator and the denominator, and can
/// be accessed by the accessors: is_finite, is_inf, is_nan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Finite,
    Infinity,
    NaN,
}

/// This is the main data structure of this library. It represents an exact
/// rational number as a ratio of two 64-bit integers.
///
/// The value is always kept in canonical form: the denominator is never
/// negative, and the numerator and the denominator have no common factor.
/// A zero denominator encodes the extended values: `n/0` is infinity with the
/// sign of `n` (canonically `1/0` or `-1/0`), and `0/0` is NaN.
#[derive(Debug, Clone, Copy)]
pub struct Rational {
    // Carries the sign of the number.
    numerator: i64,
    // Never negative.
    denominator: i64,
}

impl Rational {
    /// The value zero.
    pub const ZERO: Self = Rational {
        numerator: 0,
        denominator: 1,
    };
    /// The value one.
    pub const ONE: Self = Rational {
        numerator: 1,
        denominator: 1,
    };
    /// Positive infinity.
    pub const INFINITY: Self = Rational {
        numerator: 1,
        denominator: 0,
    };
    /// Negative infinity.
    pub const NEG_INFINITY: Self = Rational {
        numerator: -1,
        denominator: 0,
    };
    /// Not a number.
    pub const NAN: Self = Rational {
        numerator: 0,
        denominator: 0,
    };

    /// Create a new rational number `numerator/denominator` and reduce it to
    /// canonical form. A zero denominator creates infinity, or NaN if the
    /// numerator is also zero. The numerator wraps in the rare cases where the
    /// reduced value is not representable, see `overflowing_new`.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self::overflowing_new(numerator, denominator).0
    }

    /// Create a new rational number `numerator/denominator` in canonical
    /// form, and report if the reduced value did not fit in the 64-bit
    /// fields. This can only happen when one of the inputs is i64::MIN, for
    /// example in `i64::MIN/-1`, whose numerator is 2^63.
    pub fn overflowing_new(numerator: i64, denominator: i64) -> (Self, bool) {
        // Don't reduce NaN. gcd(0, 0) is zero.
        if numerator == 0 && denominator == 0 {
            return (Self::NAN, false);
        }

        // Move the sign to the numerator.
        let negative = (numerator < 0) ^ (denominator < 0);

        // Work on the magnitudes, so that i64::MIN does not overflow.
        let num = numerator.unsigned_abs();
        let den = denominator.unsigned_abs();
        let g = gcd(num, den);
        debug_assert!(g != 0);
        let (num, den) = (num / g, den / g);

        let limit = i64::MAX as u64;
        let numerator = if negative {
            (num as i64).wrapping_neg()
        } else {
            num as i64
        };

        // The only denominator that does not fit is 2^63. The numerator is
        // odd in that case, and fits. Use the nearest denominator instead, so
        // that the denominator stays positive.
        if den > limit {
            return (Self::new(numerator, i64::MAX), true);
        }

        let r = Rational {
            numerator,
            denominator: den as i64,
        };
        (r, !negative && num > limit)
    }

    /// Returns the numerator. This value carries the sign of the number.
    pub fn get_numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator. This value is never negative.
    pub fn get_denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns the kind of number this rational represents.
    pub fn get_category(&self) -> Category {
        if self.denominator != 0 {
            Category::Finite
        } else if self.numerator != 0 {
            Category::Infinity
        } else {
            Category::NaN
        }
    }

    /// Returns true if the number is not infinity or NaN.
    pub fn is_finite(&self) -> bool {
        self.denominator != 0
    }

    /// Returns true if the number is +-inf.
    pub fn is_inf(&self) -> bool {
        self.numerator != 0 && self.denominator == 0
    }

    /// Returns true if the number is NaN.
    pub fn is_nan(&self) -> bool {
        self.numerator == 0 && self.denominator == 0
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator == 0 && self.denominator != 0
    }

    /// Returns true if the number is below zero, including -inf.
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Returns true if the number is a finite whole number.
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Returns the reciprocal of the number. The inverse of zero is infinity,
    /// the inverse of infinity is zero, and the inverse of NaN is NaN.
    pub fn inverse(&self) -> Self {
        Self::new(self.denominator, self.numerator)
    }

    /// Prints the number using the internal representation.
    #[cfg(feature = "std")]
    pub fn dump(&self) {
        use std::println;
        println!(
            "[{:?}] {}/{}",
            self.get_category(),
            self.numerator,
            self.denominator
        );
    }

    // Returns the two sides of the cross multiplication. The products of two
    // i64 values always fit in i128.
    fn cross_multiply(&self, other: &Self) -> (i128, i128) {
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        (lhs, rhs)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Two numbers are equal if their cross products are equal. Both sides are
/// already reduced, so this matches the fields for finite numbers. Applied to
/// the extended values this rule makes all infinities equal to each other,
/// and makes NaN equal to every number.
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.cross_multiply(other);
        lhs == rhs
    }
}

/// The order is the order of the cross products. Denominators are never
/// negative, so this orders all finite numbers, places every finite number
/// between -inf and +inf, and makes NaN equal to everything.
impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (lhs, rhs) = self.cross_multiply(other);
        Some(lhs.cmp(&rhs))
    }
}

/// Hash the canonical fields. Equal finite numbers have identical fields, and
/// therefore identical hashes.
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

#[test]
fn test_canonical_form() {
    let r = Rational::new(4, 8);
    assert_eq!((r.get_numerator(), r.get_denominator()), (1, 2));
    assert_eq!(r, Rational::new(1, 2));

    // The sign moves to the numerator.
    let r = Rational::new(1, -2);
    assert_eq!((r.get_numerator(), r.get_denominator()), (-1, 2));
    let r = Rational::new(-6, -9);
    assert_eq!((r.get_numerator(), r.get_denominator()), (2, 3));

    // Zero reduces to 0/1.
    let r = Rational::new(0, -17);
    assert_eq!((r.get_numerator(), r.get_denominator()), (0, 1));

    // Infinity reduces to +-1/0.
    let r = Rational::new(-42, 0);
    assert_eq!((r.get_numerator(), r.get_denominator()), (-1, 0));
    let r = Rational::new(7, 0);
    assert_eq!((r.get_numerator(), r.get_denominator()), (1, 0));

    // NaN is left alone.
    let r = Rational::new(0, 0);
    assert_eq!((r.get_numerator(), r.get_denominator()), (0, 0));
}

#[test]
fn test_canonical_form_random() {
    use crate::utils::Lfsr;

    let mut lfsr = Lfsr::new();
    for _ in 0..5000 {
        let n = lfsr.get64() as i64 >> 16;
        let d = lfsr.get64() as i64 >> 24;
        if d == 0 {
            continue;
        }
        let r = Rational::new(n, d);
        assert!(r.get_denominator() > 0);
        let g = gcd(r.get_numerator().unsigned_abs(), r.get_denominator() as u64);
        assert_eq!(g, 1);
        // The value did not change.
        assert_eq!(
            r.get_numerator() as i128 * d as i128,
            n as i128 * r.get_denominator() as i128
        );
        // Re-canonicalizing is a no-op.
        let again = Rational::new(r.get_numerator(), r.get_denominator());
        assert_eq!(again.get_numerator(), r.get_numerator());
        assert_eq!(again.get_denominator(), r.get_denominator());
    }
}

#[test]
fn test_canonical_extreme_values() {
    let r = Rational::new(i64::MIN, 2);
    assert_eq!((r.get_numerator(), r.get_denominator()), (i64::MIN / 2, 1));
    let (r, overflow) = Rational::overflowing_new(i64::MIN, i64::MIN);
    assert_eq!((r.get_numerator(), r.get_denominator()), (1, 1));
    assert!(!overflow);
    let (r, overflow) = Rational::overflowing_new(i64::MIN, 1);
    assert_eq!(r.get_numerator(), i64::MIN);
    assert!(!overflow);
    let (r, overflow) = Rational::overflowing_new(i64::MIN, 0);
    assert_eq!((r.get_numerator(), r.get_denominator()), (-1, 0));
    assert!(!overflow);

    // The magnitude 2^63 only fits as a negative numerator.
    let (_, overflow) = Rational::overflowing_new(i64::MIN, -1);
    assert!(overflow);
    let (r, overflow) = Rational::overflowing_new(1, i64::MIN);
    assert!(overflow);
    assert_eq!((r.get_numerator(), r.get_denominator()), (-1, i64::MAX));
    let (_, overflow) = Rational::overflowing_new(i64::MAX, -1);
    assert!(!overflow);
}

#[test]
fn test_classification() {
    assert!(Rational::new(2, 0).is_inf());
    assert!(Rational::new(0, 0).is_nan());
    assert!(Rational::new(3, 7).is_finite());
    assert!(Rational::new(0, 7).is_zero());
    assert!(Rational::new(-3, 7).is_negative());
    assert!(Rational::new(-1, 0).is_negative());
    assert!(Rational::new(14, 7).is_integer());
    assert!(!Rational::new(1, 2).is_integer());
    assert!(!Rational::NAN.is_zero());

    // Exactly one of the predicates holds.
    for (n, d) in [(2, 0), (0, 0), (-5, 0), (0, 3), (3, 4), (-9, -6)] {
        let r = Rational::new(n, d);
        let flags = [r.is_finite(), r.is_inf(), r.is_nan()];
        assert_eq!(flags.iter().filter(|x| **x).count(), 1);
        assert_eq!(r.is_finite(), !(r.is_inf() || r.is_nan()));
        let expected = match r.get_category() {
            Category::Finite => [true, false, false],
            Category::Infinity => [false, true, false],
            Category::NaN => [false, false, true],
        };
        assert_eq!(flags, expected);
    }
}

#[test]
fn test_inverse() {
    let r = Rational::new(-3, 4).inverse();
    assert_eq!((r.get_numerator(), r.get_denominator()), (-4, 3));
    assert!(Rational::ZERO.inverse().is_inf());
    assert!(Rational::INFINITY.inverse().is_zero());
    assert!(Rational::NEG_INFINITY.inverse().is_zero());
    assert!(Rational::NAN.inverse().is_nan());

    use crate::utils::Lfsr;
    let mut lfsr = Lfsr::new_with_seed(7);
    for _ in 0..1000 {
        let n = lfsr.get64() as i64 >> 10;
        let d = lfsr.get64() as i64 >> 10;
        let r = Rational::new(n, d);
        if !r.is_finite() || r.is_zero() {
            continue;
        }
        let back = r.inverse().inverse();
        assert_eq!(back, r);
        assert_eq!(back.get_numerator(), r.get_numerator());
        assert_eq!(back.get_denominator(), r.get_denominator());
    }
}

#[test]
fn test_comparisons() {
    let half = Rational::new(4, 8);
    let three_quarters = Rational::new(3, 4);
    assert!(half < three_quarters);
    assert!(three_quarters > half);
    assert!(half <= Rational::new(1, 2));
    assert_eq!(half, Rational::new(-2, -4));
    assert_ne!(half, three_quarters);
    assert!(Rational::new(-1, 3) < Rational::new(-1, 4));

    // Every finite number is between the infinities.
    for r in [half, Rational::new(-7, 3), Rational::ZERO, Rational::new(i64::MAX, 1)] {
        assert!(r < Rational::new(1, 0));
        assert!(Rational::new(-1, 0) < r);
    }

    // Extreme values don't overflow the cross multiplication.
    assert!(Rational::new(i64::MAX, 1) > Rational::new(i64::MAX - 1, 1));
    assert!(Rational::new(1, i64::MAX) < Rational::new(1, i64::MAX - 1));
    assert!(Rational::new(i64::MIN, 1) < Rational::new(i64::MIN + 1, 1));

    // The extended values follow the cross multiplication rule.
    assert_eq!(Rational::INFINITY, Rational::NEG_INFINITY);
    assert_eq!(Rational::NAN, Rational::NAN);
    assert_eq!(Rational::NAN, Rational::new(5, 3));
    assert_eq!(
        Rational::NAN.partial_cmp(&Rational::ONE),
        Some(Ordering::Equal)
    );
}

#[cfg(feature = "std")]
#[test]
fn test_hash() {
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(r: Rational) -> u64 {
        let mut hasher = DefaultHasher::new();
        r.hash(&mut hasher);
        hasher.finish()
    }

    assert_eq!(hash_of(Rational::new(4, 8)), hash_of(Rational::new(1, 2)));
    assert_eq!(hash_of(Rational::new(3, -9)), hash_of(Rational::new(-1, 3)));
    assert_eq!(hash_of(Rational::new(5, 0)), hash_of(Rational::INFINITY));
    assert_ne!(hash_of(Rational::new(1, 2)), hash_of(Rational::new(2, 1)));
}
