//! # Random matrices
//!
//! Matrices with values that have a bounded number of decimals, useful for testing. The source of
//! randomness is passed in, so that seeded generators give reproducible matrices.
use rand::Rng;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::Field;

/// Largest number of decimals a random value can have.
pub const MAX_DECIMALS: u32 = 6;

/// Distribution of the values of a random matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomConfig {
    /// Smallest value.
    pub min: i32,
    /// Largest value.
    pub max: i32,
    /// Number of decimals after the point, at most `MAX_DECIMALS`.
    pub decimals: u32,
    /// Probability that a value is zero, between zero and one.
    pub zero_probability: f64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            min: -10,
            max: 10,
            decimals: 0,
            zero_probability: 0_f64,
        }
    }
}

impl<F: Field> Matrix<F> {
    /// Create a matrix with random values.
    ///
    /// Each value is zero with probability `zero_probability`, resolved in thousandths. Otherwise,
    /// it is drawn uniformly from the values between `min` and `max` (inclusive) that have at most
    /// `decimals` decimals.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`, `nr_columns`: Shape of the matrix.
    /// * `config`: Distribution of the values.
    /// * `rng`: Source of randomness.
    pub fn random<R: Rng + ?Sized>(
        nr_rows: usize,
        nr_columns: usize,
        config: &RandomConfig,
        rng: &mut R,
    ) -> Self {
        assert!(config.decimals <= MAX_DECIMALS, "at most {} decimals are supported", MAX_DECIMALS);
        assert!((0_f64..=1_f64).contains(&config.zero_probability), "zero probability should be in [0, 1]");
        assert!(config.min <= config.max);

        let scale = 10_i64.pow(config.decimals);
        let zero_threshold = config.zero_probability * 1000_f64;
        let range = (i64::from(config.min) * scale)..=(i64::from(config.max) * scale);

        let mut matrix = Self::zeros(nr_rows, nr_columns);
        for index in 0..matrix.size() {
            if f64::from(rng.gen_range(0_u32..1000)) < zero_threshold {
                continue;
            }

            let value = rng.gen_range(range.clone()) as f64 / scale as f64;
            matrix[index] = F::from_real(value);
        }

        matrix
    }
}
