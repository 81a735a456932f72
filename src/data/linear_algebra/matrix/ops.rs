//! # Operations on matrices
//!
//! Elementary row operations and other modifications happen in place. Structural operations that
//! combine matrices return a new matrix.
use std::ops::Mul;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::Field;
use crate::error::{Error, Result};

impl<F: Field> Matrix<F> {
    /// Set all values to zero and reset the row swap count.
    pub fn clear(&mut self) {
        self.row_swaps = 0;
        for value in &mut self.data {
            *value = F::zero();
        }
    }

    /// Overwrite all values with row-major data of the same size.
    pub fn load_data(&mut self, data: &[F]) {
        assert_eq!(data.len(), self.data.len(), "data size should match the matrix size");

        self.data.clone_from_slice(data);
    }

    /// Overwrite this matrix with the identity matrix.
    ///
    /// # Errors
    ///
    /// `Error::NonSquareMatrix` if the matrix is not square, in which case it is not modified.
    pub fn make_identity(&mut self) -> Result<()> {
        self.require_square()?;

        self.clear();
        for i in 0..self.nr_rows {
            self[(i, i)] = F::one();
        }

        Ok(())
    }

    /// Exchange the values at (`i`, `j`) and (`x`, `y`).
    pub fn swap(&mut self, i: usize, j: usize, x: usize, y: usize) {
        let first = self.flat_index(i, j);
        let second = self.flat_index(x, y);
        self.data.swap(first, second);
    }

    /// Exchange two rows and count the swap.
    ///
    /// Swapping a row with itself does nothing and is not counted.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        assert!(i < self.nr_rows && j < self.nr_rows, "rows {} and {} out of bounds", i, j);
        if i == j {
            return;
        }

        for k in 0..self.nr_columns {
            self.data.swap(i * self.nr_columns + k, j * self.nr_columns + k);
        }
        self.row_swaps += 1;
    }

    /// Add a multiple of one row to another row.
    ///
    /// # Arguments
    ///
    /// * `source`: Row that is read.
    /// * `destination`: Row that is modified.
    /// * `factor`: Multiple of `source` that is added to `destination`.
    pub fn add_scaled_row(&mut self, source: usize, destination: usize, factor: &F) {
        assert!(source < self.nr_rows && destination < self.nr_rows);

        for k in 0..self.nr_columns {
            let addition = self.data[source * self.nr_columns + k].clone() * factor.clone();
            self.data[destination * self.nr_columns + k] += addition;
        }
    }

    /// Multiply all values in a row by a factor.
    pub fn scale_row(&mut self, i: usize, factor: &F) {
        assert!(i < self.nr_rows);

        for value in &mut self.data[i * self.nr_columns..(i + 1) * self.nr_columns] {
            *value *= factor.clone();
        }
    }

    /// Divide all values in a row by a divisor.
    pub fn divide_row(&mut self, i: usize, divisor: &F) {
        assert!(i < self.nr_rows);

        for value in &mut self.data[i * self.nr_columns..(i + 1) * self.nr_columns] {
            *value /= divisor.clone();
        }
    }

    /// Multiply every value by a constant.
    pub fn mul_by_constant(&mut self, factor: &F) {
        for value in &mut self.data {
            *value *= factor.clone();
        }
    }

    /// Divide every value by a constant.
    pub fn div_by_constant(&mut self, divisor: &F) {
        for value in &mut self.data {
            *value /= divisor.clone();
        }
    }

    /// Replace this matrix by its product with `other`, with `other` on the right.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` if `other` is not a square matrix with as many rows as this
    /// matrix has columns. The shape of this matrix can't change.
    pub fn in_place_mul(&mut self, other: &Self) -> Result<()> {
        if other.nr_rows != self.nr_columns || other.nr_columns != self.nr_columns {
            return Err(self.mismatch(other));
        }

        let mut row = Vec::with_capacity(self.nr_columns);
        for i in 0..self.nr_rows {
            row.clear();
            row.extend(self.row(i).iter().cloned());
            for j in 0..self.nr_columns {
                self[(i, j)] = Self::inner_product(&row, other.column(j));
            }
        }

        Ok(())
    }

    /// Transpose a square matrix in place.
    ///
    /// # Errors
    ///
    /// `Error::NonSquareMatrix` if the matrix is not square.
    pub fn transpose_in_place(&mut self) -> Result<()> {
        self.require_square()?;

        for i in 0..self.nr_rows {
            for j in 0..i {
                self.swap(i, j, j, i);
            }
        }

        Ok(())
    }

    /// Add another matrix of the same shape to this one.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` if the shapes differ.
    pub fn sum_in_place(&mut self, other: &Self) -> Result<()> {
        self.require_same_shape(other)?;

        for (value, addition) in self.data.iter_mut().zip(&other.data) {
            *value += addition.clone();
        }

        Ok(())
    }

    /// The transposed matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let data = (0..self.nr_columns)
            .flat_map(|j| self.column(j).cloned())
            .collect();

        Self::new(self.nr_columns, self.nr_rows, data)
    }

    /// Sum of two matrices of the same shape.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` if the shapes differ.
    pub fn sum(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.sum_in_place(other)?;

        Ok(result)
    }

    /// This matrix minus another matrix of the same shape.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` if the shapes differ.
    pub fn difference(&self, other: &Self) -> Result<Self> {
        self.require_same_shape(other)?;

        let data = self.data.iter().zip(&other.data)
            .map(|(x, y)| x.clone() - y.clone())
            .collect();

        Ok(Self::new(self.nr_rows, self.nr_columns, data))
    }

    /// Matrix product, with `other` on the right.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` if the number of columns of this matrix differs from the number
    /// of rows of `other`.
    pub fn product(&self, other: &Self) -> Result<Self> {
        if self.nr_columns != other.nr_rows {
            return Err(self.mismatch(other));
        }

        let mut data = Vec::with_capacity(self.nr_rows * other.nr_columns);
        for i in 0..self.nr_rows {
            for j in 0..other.nr_columns {
                data.push(Self::inner_product(self.row(i), other.column(j)));
            }
        }

        Ok(Self::new(self.nr_rows, other.nr_columns, data))
    }

    /// Every value multiplied by a constant.
    #[must_use]
    pub fn scaled(&self, factor: &F) -> Self {
        let data = self.data.iter().map(|x| x.clone() * factor.clone()).collect();

        Self::new(self.nr_rows, self.nr_columns, data)
    }

    /// Copy the values of `other` into this matrix, with its top left value at (`row`, `column`).
    ///
    /// Values that would land outside of this matrix are dropped.
    pub fn attach_sub_matrix(&mut self, other: &Self, row: usize, column: usize) {
        for i in 0..other.nr_rows.min(self.nr_rows.saturating_sub(row)) {
            for j in 0..other.nr_columns.min(self.nr_columns.saturating_sub(column)) {
                self[(row + i, column + j)] = other[(i, j)].clone();
            }
        }
    }

    /// Overwrite a column with a column of another matrix.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` if the matrices don't have the same number of rows.
    pub fn attach_column(&mut self, source: &Self, source_column: usize, column: usize) -> Result<()> {
        if source.nr_rows != self.nr_rows {
            return Err(self.mismatch(source));
        }

        for i in 0..self.nr_rows {
            self[(i, column)] = source[(i, source_column)].clone();
        }

        Ok(())
    }

    /// Overwrite a row with a row of another matrix.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` if the matrices don't have the same number of columns.
    pub fn attach_row(&mut self, source: &Self, source_row: usize, row: usize) -> Result<()> {
        if source.nr_columns != self.nr_columns {
            return Err(self.mismatch(source));
        }

        let values = source.row(source_row).to_vec();
        let start = self.flat_index(row, 0);
        self.data[start..start + self.nr_columns].clone_from_slice(&values);

        Ok(())
    }

    /// A copy with an extra row at the bottom.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` if `row` is not a single row with as many columns as this matrix.
    pub fn with_row(&self, row: &Self) -> Result<Self> {
        if row.nr_rows != 1 || row.nr_columns != self.nr_columns {
            return Err(self.mismatch(row));
        }

        let mut result = Self::zeros(self.nr_rows + 1, self.nr_columns);
        result.attach_sub_matrix(self, 0, 0);
        result.attach_sub_matrix(row, self.nr_rows, 0);

        Ok(result)
    }

    /// A copy with an extra column on the right.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` if `column` is not a single column with as many rows as this
    /// matrix.
    pub fn with_column(&self, column: &Self) -> Result<Self> {
        if column.nr_columns != 1 || column.nr_rows != self.nr_rows {
            return Err(self.mismatch(column));
        }

        let mut result = Self::zeros(self.nr_rows, self.nr_columns + 1);
        result.attach_sub_matrix(self, 0, 0);
        result.attach_sub_matrix(column, 0, self.nr_columns);

        Ok(result)
    }

    fn inner_product<'a>(left: &'a [F], right: impl Iterator<Item=&'a F>) -> F {
        left.iter().zip(right)
            .fold(F::zero(), |total, (x, y)| total + x.clone() * y.clone())
    }

    pub(crate) fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(Error::NonSquareMatrix { rows: self.nr_rows, columns: self.nr_columns })
        }
    }

    fn require_same_shape(&self, other: &Self) -> Result<()> {
        if self.nr_rows == other.nr_rows && self.nr_columns == other.nr_columns {
            Ok(())
        } else {
            Err(self.mismatch(other))
        }
    }

    fn mismatch(&self, other: &Self) -> Error {
        Error::DimensionMismatch {
            left: (self.nr_rows, self.nr_columns),
            right: (other.nr_rows, other.nr_columns),
        }
    }
}

impl<F: Field> Mul<F> for Matrix<F> {
    type Output = Self;

    fn mul(mut self, rhs: F) -> Self::Output {
        self.mul_by_constant(&rhs);
        self
    }
}
