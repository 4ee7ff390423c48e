//! This module contains the implementation of string conversion.

use super::rational::Rational;
use core::fmt::Display;

/// Prints the number as "numerator/denominator", for example "-3/2". Infinity
/// prints as "1/0" or "-1/0", and NaN prints as "0/0".
impl Display for Rational {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.get_numerator(), self.get_denominator())
    }
}

#[cfg(feature = "std")]
#[test]
fn test_convert_to_string() {
    use std::format;
    use std::string::ToString;

    assert_eq!(Rational::new(3, 2).to_string(), "3/2");
    assert_eq!(Rational::new(3, -2).to_string(), "-3/2");
    assert_eq!(Rational::new(-6, -4).to_string(), "3/2");
    assert_eq!(Rational::new(5, 1).to_string(), "5/1");
    assert_eq!(Rational::new(0, 9).to_string(), "0/1");
    assert_eq!(Rational::new(12, 0).to_string(), "1/0");
    assert_eq!(Rational::new(-12, 0).to_string(), "-1/0");
    assert_eq!(Rational::new(0, 0).to_string(), "0/0");
    assert_eq!(
        Rational::new(i64::MIN, 1).to_string(),
        "-9223372036854775808/1"
    );
    assert_eq!(format!("[{}]", Rational::new(1, 3)), "[1/3]");
}

#[cfg(feature = "std")]
#[test]
fn test_print_operations() {
    use std::string::ToString;

    let a = Rational::new(1, -2);
    let b = Rational::new(-3, 4);
    assert_eq!((a + b).to_string(), "-5/4");
    assert_eq!((a - b).to_string(), "1/4");
    assert_eq!((a * b).to_string(), "3/8");
    assert_eq!((a / b).to_string(), "2/3");
    assert_eq!((a % b).to_string(), "-1/2");
    assert_eq!(a.inverse().to_string(), "-2/1");
}
