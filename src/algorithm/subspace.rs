//! # Fundamental subspaces
//!
//! Bases for the null space and the column space, both read off from the reduced row echelon form.
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::Field;
use crate::error::Result;

impl<F: Field> Matrix<F> {
    /// Basis of the null space.
    ///
    /// Columns hosting a pivot in the reduced row echelon form belong to dependent variables, the
    /// others to free variables. Each free variable yields one basis vector.
    ///
    /// # Return value
    ///
    /// A matrix with as many rows as this matrix has columns, and one column per basis vector. It
    /// has no columns when the null space is trivial.
    ///
    /// # Errors
    ///
    /// `Error::InternalConsistency` if triangularization fails.
    pub fn null_space(&self) -> Result<Self> {
        let reduced = self.row_reduce()?;

        // For each column, the row of its pivot
        let mut pivot_row = vec![None; self.nr_columns()];
        for (i, j) in reduced.reduced_pivots() {
            pivot_row[j] = Some(i);
        }
        let free = (0..self.nr_columns())
            .filter(|&j| pivot_row[j].is_none())
            .collect::<Vec<_>>();

        let mut basis = Self::zeros(self.nr_columns(), free.len());
        for (k, &free_column) in free.iter().enumerate() {
            for (j, row) in pivot_row.iter().enumerate() {
                basis[(j, k)] = match row {
                    Some(i) => -reduced[(*i, free_column)].clone(),
                    None if j == free_column => F::one(),
                    None => F::zero(),
                };
            }
        }

        Ok(basis)
    }

    /// Basis of the column space, consisting of columns of this matrix.
    ///
    /// # Errors
    ///
    /// `Error::InternalConsistency` if triangularization fails.
    pub fn column_space(&self) -> Result<Self> {
        self.column_space_with_pivots().map(|(basis, _)| basis)
    }

    /// Basis of the column space, together with the indices of the columns it consists of.
    ///
    /// # Return value
    ///
    /// The columns of this matrix that host a pivot in the reduced row echelon form, in order, and
    /// their indices.
    ///
    /// # Errors
    ///
    /// `Error::InternalConsistency` if triangularization fails.
    pub fn column_space_with_pivots(&self) -> Result<(Self, Vec<usize>)> {
        let reduced = self.row_reduce()?;
        let columns = reduced.reduced_pivots().into_iter()
            .map(|(_, j)| j)
            .collect::<Vec<_>>();

        let mut basis = Self::zeros(self.nr_rows(), columns.len());
        for (k, &j) in columns.iter().enumerate() {
            for i in 0..self.nr_rows() {
                basis[(i, k)] = self[(i, j)].clone();
            }
        }

        Ok((basis, columns))
    }

    /// Pivot positions of a matrix in reduced row echelon form: the first nonzero of each row.
    fn reduced_pivots(&self) -> Vec<(usize, usize)> {
        (0..self.nr_rows())
            .filter_map(|i| self.find_pivot(i).map(|j| (i, j)))
            .collect()
    }

    fn find_pivot(&self, i: usize) -> Option<usize> {
        self.row(i).iter().position(|x| !x.is_zero())
    }
}
