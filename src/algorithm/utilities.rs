//! # Utilities
//!
//! Helper functions for algorithms.
use std::collections::HashSet;

/// Reduce the size of the vector by removing values.
///
/// # Arguments
///
/// * `vector` - `Vec` to remove indices from.
/// * `indices` - A set of indices to remove from the vector, assumed sorted.
pub(crate) fn remove_indices<T>(vector: &mut Vec<T>, indices: &[usize]) {
    debug_assert!(indices.len() <= vector.len());
    debug_assert!(indices.is_sorted());
    // All values are unique
    debug_assert!(indices.iter().collect::<HashSet<_>>().len() == indices.len());
    debug_assert!(indices.iter().all(|&i| i < vector.len()));

    let mut i = 0;
    let mut j = 0;
    vector.retain(|_| {
        let keep = i == indices.len() || j < indices[i];
        if !keep {
            i += 1;
        }
        j += 1;
        keep
    });
}

/// Flat, row-major indices of the values in a row or column of a matrix, in increasing order.
///
/// # Arguments
///
/// * `nr_rows`, `nr_columns` - Shape of the matrix.
/// * `row` - Row of which all values are selected, if any.
/// * `column` - Column of which all values are selected, if any.
pub(crate) fn cross_indices(
    nr_rows: usize,
    nr_columns: usize,
    row: Option<usize>,
    column: Option<usize>,
) -> Vec<usize> {
    (0..nr_rows)
        .flat_map(|i| (0..nr_columns).map(move |j| (i, j)))
        .filter(|&(i, j)| Some(i) == row || Some(j) == column)
        .map(|(i, j)| i * nr_columns + j)
        .collect()
}
