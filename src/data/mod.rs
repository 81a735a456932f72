//! # Data structures
//!
//! This module provides the number types and the matrix type. Algorithms operating on matrices
//! are in `algorithm`.
pub mod number_types;
pub mod linear_algebra;
