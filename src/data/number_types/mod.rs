//! # Number types
//!
//! The matrix engine is defined over a field. This module defines that field as a trait and
//! provides implementations.
//!
//! The central implementation is a rational number that is exact as long as its numerator and
//! denominator fit in a fixed size integer, and that falls back to a floating point value as soon
//! as that is no longer guaranteed. Algorithms can be tested well for correctness with these
//! numbers, while the same code is used without adaptation with plain floating point numbers.
pub mod traits;
pub mod rational;
pub mod float;
pub mod complex;

/// Number of decimal digits used when a floating point value is converted into a rational, and
/// when numbers are formatted, unless specified otherwise.
pub const DEFAULT_PRECISION: u32 = 6;

/// Two approximate values are considered equal when their difference is at most this many times
/// the machine epsilon of `f64`.
pub const EQUALITY_TOLERANCE_FACTOR: f64 = 10_f64;

/// Absolute tolerance used by the equality of the number types in this module.
pub fn equality_tolerance() -> f64 {
    EQUALITY_TOLERANCE_FACTOR * f64::EPSILON
}
