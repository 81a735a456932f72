//! # Dense matrices
//!
//! A matrix with a fixed number of rows and columns, storing all of its values in a single
//! row-major `Vec`. The matrix is generic over the field of its values, see
//! `data::number_types::traits::Field`.
//!
//! Besides the values, a matrix counts how often two of its rows were swapped. Only the parity of
//! that count is meaningful: it is the sign of the determinant relative to the matrix the swaps
//! were applied to. Clones carry the count along, freshly constructed matrices start at zero.
use std::ops::{Index, IndexMut};

use crate::data::number_types::complex::Complex;
use crate::data::number_types::rational::Rational64;
use crate::data::number_types::traits::Field;

mod ops;

/// Matrix over plain floating point numbers.
pub type FastMatrix = Matrix<f64>;
/// Matrix over exact complex rationals.
pub type ExactMatrix = Matrix<Complex<Rational64>>;

/// A dense, row-major matrix.
#[derive(Clone, Debug)]
pub struct Matrix<F> {
    nr_rows: usize,
    nr_columns: usize,
    data: Vec<F>,
    row_swaps: usize,
}

impl<F: Field> Matrix<F> {
    /// Create a matrix filled with zeros.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows, may be zero.
    /// * `nr_columns`: Number of columns, may be zero.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            nr_rows,
            nr_columns,
            data: vec![F::zero(); nr_rows * nr_columns],
            row_swaps: 0,
        }
    }

    /// Create a matrix from row-major data.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows.
    /// * `nr_columns`: Number of columns.
    /// * `data`: Values, row by row. Should have length `nr_rows * nr_columns`.
    pub fn new(nr_rows: usize, nr_columns: usize, data: Vec<F>) -> Self {
        assert_eq!(
            data.len(), nr_rows * nr_columns,
            "data of length {} can't fill a {}x{} matrix", data.len(), nr_rows, nr_columns,
        );

        Self { nr_rows, nr_columns, data, row_swaps: 0 }
    }

    /// Create a matrix from a collection of rows of equal length.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Self {
        let nr_rows = rows.len();
        let nr_columns = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|row| row.len() == nr_columns), "rows should have equal length");

        Self::new(nr_rows, nr_columns, rows.into_iter().flatten().collect())
    }

    /// Create a square identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut identity = Self::zeros(size, size);
        for i in 0..size {
            identity[(i, i)] = F::one();
        }

        identity
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Number of values, rows times columns.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// All values, row by row.
    pub fn data(&self) -> &[F] {
        &self.data
    }

    /// How often rows of this matrix, or of the matrix it was cloned from, were swapped.
    pub fn row_swaps(&self) -> usize {
        self.row_swaps
    }

    /// The values of a single row.
    pub fn row(&self, i: usize) -> &[F] {
        assert!(i < self.nr_rows, "row {} out of bounds for {} rows", i, self.nr_rows);

        &self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// The values of a single column, top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item=&F> + '_ {
        assert!(j < self.nr_columns, "column {} out of bounds for {} columns", j, self.nr_columns);

        self.data.iter().skip(j).step_by(self.nr_columns)
    }

    /// Whether the number of rows equals the number of columns.
    pub fn is_square(&self) -> bool {
        self.nr_rows == self.nr_columns
    }

    /// Whether all values above the diagonal are zero.
    ///
    /// Only square matrices can be triangular.
    pub fn is_lower_triangular(&self) -> bool {
        self.is_square() && (0..self.nr_rows)
            .all(|i| ((i + 1)..self.nr_columns).all(|j| self[(i, j)].is_zero()))
    }

    /// Whether all values below the diagonal are zero.
    ///
    /// Only square matrices can be triangular.
    pub fn is_upper_triangular(&self) -> bool {
        self.is_square() && (0..self.nr_rows)
            .all(|i| (0..i).all(|j| self[(i, j)].is_zero()))
    }

    /// Whether the matrix is lower or upper triangular.
    pub fn is_triangular(&self) -> bool {
        self.is_lower_triangular() || self.is_upper_triangular()
    }

    /// Whether all values in a row are zero.
    pub fn is_row_null(&self, i: usize) -> bool {
        self.row(i).iter().all(F::is_zero)
    }

    /// Whether all values in a column are zero.
    pub fn is_column_null(&self, j: usize) -> bool {
        self.column(j).all(F::is_zero)
    }

    /// Column index of the first value in a row that equals `value`.
    pub fn find_in_row(&self, i: usize, value: &F) -> Option<usize> {
        self.row(i).iter().position(|x| x == value)
    }

    /// Row index of the first value in a column that equals `value`.
    pub fn find_in_column(&self, j: usize, value: &F) -> Option<usize> {
        self.column(j).position(|x| x == value)
    }

    /// Row and column of the first value, in row-major order, that equals `value`.
    pub fn find(&self, value: &F) -> Option<(usize, usize)> {
        self.data.iter()
            .position(|x| x == value)
            .map(|index| (index / self.nr_columns, index % self.nr_columns))
    }

    /// A copy with every value in approximate form.
    ///
    /// The row swap count is not copied.
    #[must_use]
    pub fn approximate(&self) -> Self {
        Self::new(self.nr_rows, self.nr_columns, self.data.iter().map(F::to_approximate).collect())
    }

    fn flat_index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.nr_rows && j < self.nr_columns,
            "index ({}, {}) out of bounds for a {}x{} matrix", i, j, self.nr_rows, self.nr_columns,
        );

        i * self.nr_columns + j
    }
}

/// Values are compared with the equality of the field. Row swap counts are ignored.
impl<F: Field> PartialEq for Matrix<F> {
    fn eq(&self, other: &Self) -> bool {
        self.nr_rows == other.nr_rows
            && self.nr_columns == other.nr_columns
            && self.data.iter().zip(&other.data).all(|(x, y)| x == y)
    }
}

impl<F: Field> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[self.flat_index(i, j)]
    }
}

impl<F: Field> IndexMut<(usize, usize)> for Matrix<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        let index = self.flat_index(i, j);
        &mut self.data[index]
    }
}

/// Row-major index into the values.
impl<F: Field> Index<usize> for Matrix<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < self.data.len(), "index {} out of bounds for {} values", index, self.data.len());

        &self.data[index]
    }
}

impl<F: Field> IndexMut<usize> for Matrix<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(index < self.data.len(), "index {} out of bounds for {} values", index, self.data.len());

        &mut self.data[index]
    }
}
