//! # Floating point numbers
//!
//! Faster than the rational numbers, but without any guarantee of exactness. Equality is the plain
//! IEEE equality, so zero tests in the matrix algorithms only succeed on values that are exactly
//! zero.
use crate::data::number_types::traits::Field;

impl Field for f64 {
    fn to_real(&self) -> f64 {
        *self
    }

    fn from_real(value: f64) -> Self {
        value
    }

    fn to_approximate(&self) -> Self {
        *self
    }
}
