use crate::{best_approximation, gcd, lcm, Rational, DEFAULT_EPSILON};
use pyo3::basic::CompareOp;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::format;
use std::hash::{Hash, Hasher};
use std::string::{String, ToString};

/// A class representing exact rational numbers.
///
/// The number is kept in reduced form with a non-negative denominator. A zero
/// denominator represents infinity (n/0) or NaN (0/0).
#[pyclass(name = "Rational")]
struct PyRational {
    inner: Rational,
}

impl From<Rational> for PyRational {
    fn from(inner: Rational) -> Self {
        PyRational { inner }
    }
}

#[pymethods]
impl PyRational {
    /// Create a new rational number, reduced to canonical form.
    ///
    /// Args:
    ///     numerator: The numerator (integer)
    ///     denominator: The denominator (integer), 1 by default
    #[new]
    #[pyo3(signature = (numerator, denominator=1))]
    fn new(numerator: i64, denominator: i64) -> Self {
        Rational::new(numerator, denominator).into()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
    fn __repr__(&self) -> String {
        format!("Rational({}, {})", self.numerator(), self.denominator())
    }
    /// Returns the numerator, which carries the sign.
    #[getter]
    fn numerator(&self) -> i64 {
        self.inner.get_numerator()
    }
    /// Returns the denominator, which is never negative.
    #[getter]
    fn denominator(&self) -> i64 {
        self.inner.get_denominator()
    }
    /// Returns the category of the number.
    fn get_category(&self) -> String {
        format!("{:?}", self.inner.get_category())
    }
    /// Returns true if the number is not infinity or NaN.
    fn is_finite(&self) -> bool {
        self.inner.is_finite()
    }
    /// Returns true if the number is +-inf.
    fn is_inf(&self) -> bool {
        self.inner.is_inf()
    }
    /// Returns true if the number is NaN.
    fn is_nan(&self) -> bool {
        self.inner.is_nan()
    }
    /// Returns true if the number is zero.
    fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
    /// Returns true if the number is negative.
    fn is_negative(&self) -> bool {
        self.inner.is_negative()
    }
    /// Returns the reciprocal of the number.
    fn inverse(&self) -> PyRational {
        self.inner.inverse().into()
    }
    /// convert to f64.
    fn to_float64(&self) -> f64 {
        self.inner.as_f64()
    }
    /// Truncate the number to an integer. Raises ValueError for inf and NaN.
    fn to_int(&self) -> PyResult<i64> {
        i64::try_from(self.inner)
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    fn __add__(&self, other: &PyRational) -> PyRational {
        (self.inner + other.inner).into()
    }
    fn __sub__(&self, other: &PyRational) -> PyRational {
        (self.inner - other.inner).into()
    }
    fn __mul__(&self, other: &PyRational) -> PyRational {
        (self.inner * other.inner).into()
    }
    fn __truediv__(&self, other: &PyRational) -> PyRational {
        (self.inner / other.inner).into()
    }
    fn __mod__(&self, other: &PyRational) -> PyRational {
        (self.inner % other.inner).into()
    }

    /// Returns the sum, and True if the computation overflowed.
    fn overflowing_add(&self, other: &PyRational) -> (PyRational, bool) {
        let (res, overflow) = self.inner.overflowing_add(other.inner);
        (res.into(), overflow)
    }
    /// Returns the difference, and True if the computation overflowed.
    fn overflowing_sub(&self, other: &PyRational) -> (PyRational, bool) {
        let (res, overflow) = self.inner.overflowing_sub(other.inner);
        (res.into(), overflow)
    }
    /// Returns the product, and True if the computation overflowed.
    fn overflowing_mul(&self, other: &PyRational) -> (PyRational, bool) {
        let (res, overflow) = self.inner.overflowing_mul(other.inner);
        (res.into(), overflow)
    }
    /// Returns the quotient, and True if the computation overflowed.
    fn overflowing_div(&self, other: &PyRational) -> (PyRational, bool) {
        let (res, overflow) = self.inner.overflowing_div(other.inner);
        (res.into(), overflow)
    }
    /// Returns the remainder, and True if the computation overflowed.
    fn overflowing_rem(&self, other: &PyRational) -> (PyRational, bool) {
        let (res, overflow) = self.inner.overflowing_rem(other.inner);
        (res.into(), overflow)
    }

    /// Compares the cross products of the two numbers.
    fn __richcmp__(&self, other: &PyRational, op: CompareOp) -> bool {
        self.inner
            .partial_cmp(&other.inner)
            .is_some_and(|ord| op.matches(ord))
    }
    fn __hash__(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }
} // impl PyRational

/// Returns the rational number with the smallest denominator that is within
/// eps of the float.
///
/// Args:
///     number: The float to approximate
///     eps: The error bound, 1e-15 by default
#[pyfunction]
#[pyo3(name = "best_approximation", signature = (number, eps=DEFAULT_EPSILON))]
fn py_best_approximation(number: f64, eps: f64) -> PyRational {
    best_approximation(number, eps).into()
}

/// Returns a new rational number with the integer value 'val'.
///
/// Args:
///     val: The integer value
#[pyfunction]
fn from_i64(val: i64) -> PyRational {
    Rational::from_i64(val).into()
}

/// Returns the greatest common divisor of two non-negative integers.
#[pyfunction]
#[pyo3(name = "gcd")]
fn py_gcd(a: u64, b: u64) -> u64 {
    gcd(a, b)
}

/// Returns the least common multiple of two non-negative integers.
#[pyfunction]
#[pyo3(name = "lcm")]
fn py_lcm(a: u64, b: u64) -> u64 {
    lcm(a, b)
}

#[pymodule]
fn _ratio64(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRational>()?;

    // Add the functions to the module
    m.add_function(wrap_pyfunction!(py_best_approximation, m)?)?;
    m.add_function(wrap_pyfunction!(from_i64, m)?)?;
    m.add_function(wrap_pyfunction!(py_gcd, m)?)?;
    m.add_function(wrap_pyfunction!(py_lcm, m)?)?;
    Ok(())
}
