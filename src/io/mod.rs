//! # Input and output
//!
//! Textual representations of numbers and matrices.
pub mod format;
