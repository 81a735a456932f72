//! # Small hand-checked cases
use rela::R64;
use rela::data::linear_algebra::matrix::Matrix;
use rela::data::number_types::rational::Rational64;

#[allow(missing_docs)]
mod test;

/// Exact matrix from integer rows.
fn rational(rows: &[&[i64]]) -> Matrix<Rational64> {
    Matrix::from_rows(rows.iter()
        .map(|row| row.iter().map(|&x| R64!(x, 1)).collect())
        .collect())
}
