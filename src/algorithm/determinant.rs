//! # Determinants and inverses
//!
//! The inverse is computed with the adjugate: every value is a signed minor, which is a
//! determinant of a matrix one size smaller. This is simple and exact, but not fast.
use log::debug;

use crate::algorithm::utilities::{cross_indices, remove_indices};
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::Field;
use crate::error::{Error, Result};

impl<F: Field> Matrix<F> {
    /// Product of the values on the diagonal.
    ///
    /// # Errors
    ///
    /// `Error::NonSquareMatrix` if the matrix is not square.
    pub fn diagonal_product(&self) -> Result<F> {
        self.require_square()?;

        Ok((0..self.nr_rows()).fold(F::one(), |product, i| product * self[(i, i)].clone()))
    }

    /// Compute the determinant.
    ///
    /// A triangular matrix that resulted from triangularization still counts the row swaps that
    /// were needed to get there. Its determinant is that of the matrix it was derived from: the
    /// diagonal product is negated when the number of swaps is odd.
    ///
    /// Other matrices are triangularized, and only the swaps made during that triangularization
    /// determine the sign. Swapping two rows of such a matrix therefore negates its determinant,
    /// unless the swap makes it triangular. The result then counts the swap and keeps the sign of
    /// the matrix before it: swapping the outer rows of the 3x3 anti-diagonal permutation gives a
    /// matrix equal to the identity, with determinant -1. Matrices of size 1 and 2 ignore counted
    /// swaps.
    ///
    /// # Errors
    ///
    /// `Error::NonSquareMatrix` if the matrix is not square, `Error::InternalConsistency` if
    /// triangularization fails.
    pub fn determinant(&self) -> Result<F> {
        self.require_square()?;

        match self.nr_rows() {
            1 => return Ok(self[(0, 0)].clone()),
            2 => {
                let main = self[(0, 0)].clone() * self[(1, 1)].clone();
                let anti = self[(0, 1)].clone() * self[(1, 0)].clone();
                return Ok(main - anti);
            },
            _ => {},
        }

        if self.is_triangular() {
            let product = self.diagonal_product()?;
            return Ok(Self::with_parity(product, self.row_swaps()));
        }

        let triangular = self.triangularize()?;
        let product = triangular.diagonal_product()?;
        Ok(Self::with_parity(product, triangular.row_swaps() - self.row_swaps()))
    }

    /// Compute the inverse with the adjugate matrix.
    ///
    /// # Errors
    ///
    /// `Error::NonSquareMatrix` if the matrix is not square, `Error::SingularMatrix` if the
    /// determinant is zero.
    pub fn inverse(&self) -> Result<Self> {
        let determinant = self.determinant()?;
        if determinant.is_zero() {
            debug!("Refusing to invert a singular {}x{} matrix", self.nr_rows(), self.nr_columns());
            return Err(Error::SingularMatrix);
        }

        let size = self.nr_rows();
        let mut cofactors = Self::zeros(size, size);
        for i in 0..size {
            for j in 0..size {
                let minor = self.sub_matrix_erasing(Some(i), Some(j)).determinant()?;
                cofactors[(i, j)] = Self::with_parity(minor, i + j);
            }
        }

        cofactors.transpose_in_place()?;
        cofactors.div_by_constant(&determinant);

        Ok(cofactors)
    }

    /// A copy without a row and a column.
    ///
    /// # Arguments
    ///
    /// * `row`: Row to leave out, if any.
    /// * `column`: Column to leave out, if any.
    #[must_use]
    pub fn sub_matrix_erasing(&self, row: Option<usize>, column: Option<usize>) -> Self {
        let (nr_rows, nr_columns) = (self.nr_rows(), self.nr_columns());
        assert!(row.is_none_or(|i| i < nr_rows), "row {:?} out of bounds", row);
        assert!(column.is_none_or(|j| j < nr_columns), "column {:?} out of bounds", column);

        let mut data = self.data().to_vec();
        remove_indices(&mut data, &cross_indices(nr_rows, nr_columns, row, column));

        Self::new(
            nr_rows - usize::from(row.is_some()),
            nr_columns - usize::from(column.is_some()),
            data,
        )
    }

    /// Negate a value if a count is odd.
    fn with_parity(value: F, count: usize) -> F {
        if count % 2 == 0 { value } else { -value }
    }
}
