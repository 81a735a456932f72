//! # Algorithms
//!
//! Algorithms on dense matrices, implemented as methods on `Matrix`. Those that compute a new
//! matrix leave the receiver untouched.
pub mod elimination;
pub mod determinant;
pub mod subspace;
pub mod random;
pub(crate) mod utilities;
