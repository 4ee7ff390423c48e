//! ratio64 is a library of exact rational numbers over 64-bit integers.
//!
//! Values are always kept in reduced form with a non-negative denominator.
//! Zero denominators encode the extended values: `n/0` is signed infinity and
//! `0/0` is not-a-number. The library also finds the best rational
//! approximation of a float using continued fractions.
//!
//! ```
//! use ratio64::Rational;
//!
//! let a = Rational::new(1, -2);
//! let b = Rational::new(-3, 4);
//! assert_eq!(a * b, Rational::new(3, 8));
//! assert_eq!((a / b).to_string(), "2/3");
//!
//! let pi = ratio64::best_approximation(core::f64::consts::PI, 1e-6);
//! assert_eq!(pi.to_string(), "355/113");
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod arithmetic;
mod cast;
mod operations;
mod rational;
mod string;

#[cfg(test)]
mod utils;

#[cfg(feature = "python")]
mod py;

pub use self::cast::ConversionError;
pub use self::operations::frac::{best_approximation, DEFAULT_EPSILON};
pub use self::operations::integer::{gcd, lcm};
pub use self::rational::{Category, Rational};
