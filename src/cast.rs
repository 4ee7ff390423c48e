use super::rational::Rational;
use core::fmt::{Debug, Display};

impl Rational {
    /// Load the integer `val` into a rational number.
    pub fn from_i64(val: i64) -> Self {
        Self::new(val, 1)
    }

    /// Convert the number to the nearest double. Infinity converts to the
    /// infinity with the same sign, and NaN converts to NaN.
    pub fn as_f64(&self) -> f64 {
        let n = self.get_numerator();
        let d = self.get_denominator();
        if self.is_finite() {
            n as f64 / d as f64
        } else if self.is_inf() {
            if n < 0 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        } else {
            f64::NAN
        }
    }

    /// Converts the number to an integer by truncating the fraction toward
    /// zero.
    ///
    /// # Panics
    ///
    /// Panics with a division by zero if the number is infinity or NaN, just
    /// like integer division. Check `is_finite` first, or use
    /// `i64::try_from`.
    pub fn to_i64(&self) -> i64 {
        self.get_numerator() / self.get_denominator()
    }
}

impl From<i64> for Rational {
    fn from(val: i64) -> Self {
        Self::from_i64(val)
    }
}

impl From<i32> for Rational {
    fn from(val: i32) -> Self {
        Self::from_i64(val as i64)
    }
}

impl From<Rational> for f64 {
    fn from(val: Rational) -> Self {
        val.as_f64()
    }
}

/// Reports why a rational number could not be converted to an integer.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    Infinite,
    NaN,
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConversionError::Infinite => {
                f.write_str("Can't convert infinity to an integer")
            }
            ConversionError::NaN => f.write_str("Can't convert NaN to an integer"),
        }
    }
}

impl Debug for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

impl TryFrom<Rational> for i64 {
    type Error = ConversionError;

    /// Truncates the number toward zero, or fails if it is not finite.
    fn try_from(value: Rational) -> Result<Self, Self::Error> {
        if value.is_inf() {
            return Err(ConversionError::Infinite);
        } else if value.is_nan() {
            return Err(ConversionError::NaN);
        }
        Ok(value.to_i64())
    }
}

#[test]
fn test_cast_from_integers() {
    for val in [0, 1, -1, 7, -7, i64::MAX, i64::MIN] {
        let r = Rational::from_i64(val);
        assert_eq!(r.get_numerator(), val);
        assert_eq!(r.get_denominator(), 1);
        assert_eq!(r.to_i64(), val);
        assert_eq!(Rational::from(val), r);
    }
    assert_eq!(Rational::from(-3i32), Rational::new(-3, 1));
}

#[test]
fn test_as_f64() {
    assert_eq!(Rational::new(-4, 3).as_f64(), -4.0 / 3.0);
    assert_eq!(Rational::new(1, 2).as_f64(), 0.5);
    assert_eq!(Rational::new(355, 113).as_f64(), 355.0 / 113.0);
    assert_eq!(Rational::ZERO.as_f64(), 0.0);
    assert_eq!(Rational::new(7, 0).as_f64(), f64::INFINITY);
    assert_eq!(Rational::new(-7, 0).as_f64(), f64::NEG_INFINITY);
    assert!(Rational::NAN.as_f64().is_nan());
    assert_eq!(f64::from(Rational::new(3, 8)), 0.375);
}

#[test]
fn test_to_i64() {
    assert_eq!(Rational::new(7, 2).to_i64(), 3);
    assert_eq!(Rational::new(-7, 2).to_i64(), -3);
    assert_eq!(Rational::new(1, 3).to_i64(), 0);
    assert_eq!(i64::try_from(Rational::new(-9, 4)), Ok(-2));
    assert_eq!(i64::try_from(Rational::INFINITY), Err(ConversionError::Infinite));
    assert_eq!(i64::try_from(Rational::NAN), Err(ConversionError::NaN));
}

#[test]
#[should_panic]
fn test_to_i64_of_infinity() {
    let _ = Rational::new(1, 0).to_i64();
}

#[cfg(feature = "std")]
#[test]
fn test_conversion_error_message() {
    use std::string::ToString;
    let err = i64::try_from(Rational::NEG_INFINITY).unwrap_err();
    assert_eq!(err.to_string(), "Can't convert infinity to an integer");
    let err: std::boxed::Box<dyn std::error::Error> = std::boxed::Box::new(err);
    assert!(err.to_string().contains("infinity"));
}
