//! # Error reporting
//!
//! Failures that depend on the data a caller provides. Violated contracts, like an out of bounds
//! index or a data buffer that doesn't match the dimensions it is said to have, are not represented
//! here: they panic.
use thiserror::Error;

/// Shorthand for results of computations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An `Error` is returned when a computation can't be performed on the values provided.
///
/// None of these are transient: retrying the same operation on the same input gives the same
/// error.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A rational was constructed with a zero denominator, or divided by the exact zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The shapes of two operands are incompatible for the requested operation.
    ///
    /// Both shapes are given as `(rows, columns)`.
    #[error("dimension mismatch: ({}x{}) vs ({}x{})", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        /// Shape of the receiving (or left) operand.
        left: (usize, usize),
        /// Shape of the argument (or right) operand.
        right: (usize, usize),
    },
    /// The operation is only defined for square matrices.
    #[error("the matrix is not square: {rows}x{columns}")]
    NonSquareMatrix {
        /// Number of rows of the offending matrix.
        rows: usize,
        /// Number of columns of the offending matrix.
        columns: usize,
    },
    /// The matrix has no inverse, its determinant equals zero.
    #[error("the matrix is singular")]
    SingularMatrix,
    /// An algorithm produced a result that violates its own postcondition.
    ///
    /// This is a defect in this crate rather than a problem with the input.
    #[error("internal consistency check failed: {0}")]
    InternalConsistency(String),
}
