//! # Properties on seeded random input
//!
//! Every test draws its matrices from a `ChaCha8Rng` with a fixed seed, so failures reproduce.
use num_traits::Zero;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rela::algorithm::random::RandomConfig;
use rela::data::linear_algebra::matrix::{FastMatrix, Matrix};
use rela::data::number_types::rational::Rational64;

#[allow(missing_docs)]
mod test;

/// Number of random cases per property.
const NR_CASES: u64 = 25;

/// Small integers, a good share of them zero.
fn sparse_integers() -> RandomConfig {
    RandomConfig { min: -4, max: 4, decimals: 0, zero_probability: 0.35 }
}

/// Values with a single decimal.
fn decimals() -> RandomConfig {
    RandomConfig { min: -3, max: 3, decimals: 1, zero_probability: 0.1 }
}

/// A reproducible exact random matrix.
fn random_exact(nr_rows: usize, nr_columns: usize, config: &RandomConfig, seed: u64) -> Matrix<Rational64> {
    Matrix::random(nr_rows, nr_columns, config, &mut ChaCha8Rng::seed_from_u64(seed))
}

/// The same matrix, with floating point values.
fn to_fast(matrix: &Matrix<Rational64>) -> FastMatrix {
    FastMatrix::new(
        matrix.nr_rows(),
        matrix.nr_columns(),
        matrix.data().iter().map(|x| x.to_float()).collect(),
    )
}

/// Whether elimination in floating point finds the same pivots as exact elimination.
///
/// Pivots are chosen by position, so a rounding residue in a position that is exactly zero could
/// be picked as a pivot. That can't happen when exact elimination needs no row swaps and the matrix
/// is not singular.
fn safe_for_floats(matrix: &Matrix<Rational64>) -> bool {
    let no_swaps = matrix.triangularize().is_ok_and(|triangular| triangular.row_swaps() == 0);
    no_swaps && matrix.determinant().is_ok_and(|determinant| !determinant.is_zero())
}
