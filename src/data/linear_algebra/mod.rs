//! # Linear algebra primitives
//!
//! A dense matrix type, generic over the field of its values. The algorithms that operate on it
//! live in `algorithm`.
pub mod matrix;
