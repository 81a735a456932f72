//! # Traits
//!
//! The matrix engine only needs the operations of a field, together with a way to project values
//! onto the real line. The contract that `Field` defines, or its name implies, is not kept
//! precisely by the implementations: finite representations make that impossible. Equality in
//! particular may be approximate, and algorithms should not rely on transitivity of `==`.
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

/// Basic field operations, plus the practicalities that the matrix engine relies on.
///
/// Ordering (through `PartialOrd`) is only a total order on the real projection of the values. It
/// is used for sorting and selection, and is not meaningful for e.g. complex numbers.
pub trait Field:
    PartialEq + // Equivalence relation, possibly with a tolerance
    PartialOrd + // On the real projection
    Zero + // Additive identity
    Neg<Output=Self> + // Additive inverse
    One + // Multiplicative identity
    // First operation
    Add<Self, Output=Self> +
    AddAssign<Self> +
    // First operation inverse
    Sub<Self, Output=Self> +
    SubAssign<Self> +
    // Second operation
    Mul<Self, Output=Self> +
    MulAssign<Self> +
    // Second operation inverse
    Div<Self, Output=Self> +
    DivAssign<Self> +
    // Practicalities
    Clone +
    Debug +
{
    /// Projection of this value onto the real line.
    ///
    /// This is the value used for ordering.
    fn to_real(&self) -> f64;

    /// Create a value from a real number.
    ///
    /// This conversion may lose precision, but should always produce a value.
    fn from_real(value: f64) -> Self;

    /// The same value, without any exact representation.
    fn to_approximate(&self) -> Self;
}
