//! # Exact linear algebra
//!
//! Dense matrices over rational numbers that are exact as long as their numerator and
//! denominator fit in a fixed size integer, and that silently fall back to floating point values
//! when they no longer do. The same algorithms also work on plain floats and on complex numbers.
//!
//! Supported are triangularization, reduced row echelon form, rank, determinant, inverse, null
//! space and column space.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod io;
