//! # Gaussian elimination
//!
//! Bringing a matrix in (reduced) row echelon form, and reading off its rank.
//!
//! Pivots are chosen by position: the first value in the current column, from the current row
//! downwards, that is not equal to zero. Values that should be eliminated are set to exactly zero
//! (and pivots in the reduced form to exactly one) after the row operation, so that no rounding
//! residue remains in those positions.
use log::error;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::Field;
use crate::error::{Error, Result};

impl<F: Field> Matrix<F> {
    /// Compute a row echelon form of this matrix.
    ///
    /// Row swaps are counted in the returned matrix, on top of the swaps already counted for this
    /// matrix.
    ///
    /// # Errors
    ///
    /// `Error::InternalConsistency` if the result is not in row echelon form.
    pub fn triangularize(&self) -> Result<Self> {
        let mut result = self.clone();

        let (mut i, mut j) = (0, 0);
        while i < result.nr_rows() && j < result.nr_columns() {
            let pivot_row = (i..result.nr_rows()).find(|&k| !result[(k, j)].is_zero());
            let Some(k) = pivot_row else {
                j += 1;
                continue;
            };

            if k != i {
                result.swap_rows(k, i);
            }

            let pivot = result[(i, j)].clone();
            for u in (i + 1)..result.nr_rows() {
                if result[(u, j)].is_zero() {
                    continue;
                }

                let factor = -result[(u, j)].clone() / pivot.clone();
                result.add_scaled_row(i, u, &factor);
                result[(u, j)] = F::zero();
            }

            i += 1;
            j += 1;
        }

        if result.has_row_echelon_form() {
            Ok(result)
        } else {
            error!("Triangularization did not produce a row echelon form: {:?}", result);
            Err(Error::InternalConsistency("triangularization did not produce a row echelon form".into()))
        }
    }

    /// Whether this matrix is in row echelon form.
    ///
    /// Walks through the matrix row by row. A zero value is only acceptable when all values below
    /// it are zero as well. A nonzero value is only acceptable when no pivot was placed in that row
    /// since the last zero column step; it becomes the pivot of its row.
    pub fn has_row_echelon_form(&self) -> bool {
        let (mut i, mut j) = (0, 0);
        let mut can_place_pivot = true;

        while i < self.nr_rows() {
            if j == self.nr_columns() {
                j = 0;
                i += 1;
                continue;
            }

            if self[(i, j)].is_zero() {
                if (i..self.nr_rows()).any(|k| !self[(k, j)].is_zero()) {
                    return false;
                }

                j += 1;
                can_place_pivot = true;
            } else {
                if !can_place_pivot {
                    return false;
                }

                can_place_pivot = false;
                i += 1;
            }
        }

        true
    }

    /// Number of linearly independent rows.
    ///
    /// # Errors
    ///
    /// `Error::InternalConsistency` if triangularization fails.
    pub fn rank(&self) -> Result<usize> {
        Ok(self.triangularize()?.pivot_positions().len())
    }

    /// Compute the reduced row echelon form of this matrix.
    ///
    /// Every pivot is one, and is the only nonzero value in its column.
    ///
    /// # Errors
    ///
    /// `Error::InternalConsistency` if triangularization fails.
    pub fn row_reduce(&self) -> Result<Self> {
        let mut result = self.triangularize()?;
        if result.nr_columns() == 0 {
            return Ok(result);
        }

        for i in (0..result.nr_rows()).rev() {
            // In row echelon form, the pivot of row `i` is not left of the diagonal
            let first = i.min(result.nr_columns() - 1);
            let Some(j) = (first..result.nr_columns()).find(|&j| !result[(i, j)].is_zero()) else {
                continue;
            };

            let pivot = result[(i, j)].clone();
            result.divide_row(i, &pivot);
            result[(i, j)] = F::one();

            for k in (0..i).rev() {
                if result[(k, j)].is_zero() {
                    continue;
                }

                let factor = -result[(k, j)].clone();
                result.add_scaled_row(i, k, &factor);
                result[(k, j)] = F::zero();
            }
        }

        Ok(result)
    }

    /// Positions of the pivots of a matrix in row echelon form, top to bottom.
    ///
    /// Uses the same walk as `has_row_echelon_form`, without checking the values below.
    pub(crate) fn pivot_positions(&self) -> Vec<(usize, usize)> {
        debug_assert!(self.has_row_echelon_form());

        let mut pivots = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.nr_rows() {
            if j == self.nr_columns() {
                j = 0;
                i += 1;
                continue;
            }

            if self[(i, j)].is_zero() {
                j += 1;
            } else {
                pivots.push((i, j));
                i += 1;
            }
        }

        pivots
    }
}

#[cfg(test)]
mod test {
    use crate::R64;
    use crate::data::linear_algebra::matrix::{FastMatrix, Matrix};
    use crate::data::number_types::rational::Rational64;

    /// Rank two, with the first row a third of the second.
    fn approximate_rank_deficient() -> Matrix<Rational64> {
        Matrix::from_rows(vec![
            vec![R64!(1, 3), R64!(1, 7), R64!(2, 9)],
            vec![R64!(2, 3), R64!(2, 7), R64!(4, 9)],
            vec![R64!(1), R64!(1), R64!(1)],
        ]).approximate()
    }

    fn rational(rows: Vec<Vec<i64>>) -> Matrix<Rational64> {
        Matrix::from_rows(rows.into_iter()
            .map(|row| row.into_iter().map(|x| R64!(x, 1)).collect())
            .collect())
    }

    #[test]
    fn echelon_predicate() {
        assert!(rational(vec![vec![1, 2], vec![0, 3]]).has_row_echelon_form());
        assert!(rational(vec![vec![0, 1], vec![0, 0]]).has_row_echelon_form());
        assert!(rational(vec![vec![1, 2, 3], vec![0, 0, 4]]).has_row_echelon_form());
        assert!(rational(vec![vec![0, 0], vec![0, 0]]).has_row_echelon_form());
        assert!(rational(vec![vec![1, 2]]).has_row_echelon_form());
        assert!(FastMatrix::zeros(0, 0).has_row_echelon_form());

        assert!(!rational(vec![vec![1, 2], vec![3, 4]]).has_row_echelon_form());
        assert!(!rational(vec![vec![0, 0], vec![0, 1]]).has_row_echelon_form());
        assert!(!rational(vec![vec![0], vec![1]]).has_row_echelon_form());
        assert!(!rational(vec![vec![1, 1, 1], vec![0, 1, 1], vec![0, 1, 0]]).has_row_echelon_form());
    }

    #[test]
    fn triangularize() {
        let m = rational(vec![vec![1, 2], vec![3, 4]]);
        let t = m.triangularize().unwrap();
        assert_eq!(t, rational(vec![vec![1, 2], vec![0, -2]]));
        assert_eq!(t.row_swaps(), 0);
        // The receiver is not modified
        assert_eq!(m, rational(vec![vec![1, 2], vec![3, 4]]));

        let m = rational(vec![vec![0, 1], vec![2, 3]]);
        let t = m.triangularize().unwrap();
        assert_eq!(t, rational(vec![vec![2, 3], vec![0, 1]]));
        assert_eq!(t.row_swaps(), 1);

        let column = rational(vec![vec![0], vec![5], vec![7]]);
        let t = column.triangularize().unwrap();
        assert_eq!(t, rational(vec![vec![5], vec![0], vec![0]]));
    }

    #[test]
    fn triangularize_skips_zero_columns() {
        let m = rational(vec![vec![0, 1, 2], vec![0, 2, 1], vec![0, 3, 3]]);
        let t = m.triangularize().unwrap();
        assert!(t.has_row_echelon_form());
        assert_eq!(t.row(0), &[R64!(0), R64!(1), R64!(2)]);
        assert_eq!(t.row(1), &[R64!(0), R64!(0), R64!(-3)]);
        assert!(t.is_row_null(2));
    }

    #[test]
    fn triangularize_floats() {
        let m = FastMatrix::new(3, 3, vec![2_f64, 1_f64, -1_f64, -3_f64, -1_f64, 2_f64, -2_f64, 1_f64, 2_f64]);
        let t = m.triangularize().unwrap();
        assert!(t.is_upper_triangular());
    }

    #[test]
    fn rank() {
        assert_eq!(rational(vec![vec![1, 2], vec![3, 4]]).rank(), Ok(2));
        assert_eq!(rational(vec![vec![1, 1], vec![2, 2]]).rank(), Ok(1));
        assert_eq!(rational(vec![vec![0, 0], vec![0, 0]]).rank(), Ok(0));
        assert_eq!(rational(vec![vec![1, 2, 3], vec![2, 4, 7]]).rank(), Ok(2));
        assert_eq!(rational(vec![vec![1], vec![2], vec![3]]).rank(), Ok(1));
        assert_eq!(FastMatrix::identity(4).rank(), Ok(4));
        assert_eq!(FastMatrix::zeros(0, 3).rank(), Ok(0));
    }

    #[test]
    fn row_reduce() {
        let m = rational(vec![vec![1, 1], vec![2, 2]]);
        assert_eq!(m.row_reduce().unwrap(), rational(vec![vec![1, 1], vec![0, 0]]));

        let m = rational(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(m.row_reduce().unwrap(), Matrix::identity(2));

        let m = rational(vec![vec![2, 4, 6], vec![1, 3, 5]]);
        let expected = rational(vec![vec![1, 0, -1], vec![0, 1, 2]]);
        assert_eq!(m.row_reduce().unwrap(), expected);

        let m = rational(vec![vec![0, 3, 6]]);
        assert_eq!(m.row_reduce().unwrap(), rational(vec![vec![0, 1, 2]]));
    }

    #[test]
    fn row_reduce_is_idempotent() {
        let m = Matrix::from_rows(vec![
            vec![R64!(1, 2), R64!(3), R64!(-1), R64!(0)],
            vec![R64!(2), R64!(1, 3), R64!(0), R64!(1)],
            vec![R64!(5, 2), R64!(10, 3), R64!(-1), R64!(1)],
        ]);
        let reduced = m.row_reduce().unwrap();
        assert_eq!(reduced.row_reduce().unwrap(), reduced);
        assert!(reduced.is_row_null(2));
    }

    #[test]
    fn triangularize_approximate() {
        let m = approximate_rank_deficient();
        assert!(m.data().iter().all(Rational64::is_approximate));

        let t = m.triangularize().unwrap();
        assert!(t.has_row_echelon_form());
        assert!(t[(1, 0)].is_exact_zero());
        assert!(t[(2, 0)].is_exact_zero());
        assert!(t.is_row_null(2));
        assert_eq!(m.rank(), Ok(2));
    }

    #[test]
    fn row_reduce_approximate() {
        let reduced = approximate_rank_deficient().row_reduce().unwrap();
        let expected = Matrix::from_rows(vec![
            vec![R64!(1), R64!(0), R64!(5, 12)],
            vec![R64!(0), R64!(1), R64!(7, 12)],
            vec![R64!(0), R64!(0), R64!(0)],
        ]);
        assert_eq!(reduced, expected);

        // Pivots and the values above them are set, not computed
        for (i, j) in [(0, 0), (1, 1)] {
            assert_eq!(reduced[(i, j)].exact_parts(), Some((1, 1)));
        }
        assert!(reduced[(0, 1)].is_exact_zero());
        assert!(reduced[(0, 2)].is_approximate());
    }
}
