//! Reference sparse matrix multiplication
//!
//! Products written next to the generated inputs are the ground truth the
//! downstream multiply tests check against, so this implementation favors
//! an obviously-correct row-by-row accumulator over performance.

use num_traits::Num;
use std::collections::HashMap;
use std::ops::AddAssign;

use crate::error::{GenError, Result};
use crate::matrix::SparseMatrix;

/// Multiplies two sparse matrices with a hashmap row accumulator
///
/// Duplicate stored entries (multi-edges) contribute additively, and exact
/// zeros produced by cancellation are dropped from the result. Output rows
/// are sorted by column.
pub fn reference_spgemm<T>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + AddAssign,
{
    if a.n_cols != b.n_rows {
        return Err(GenError::DimensionMismatch {
            m: a.n_rows,
            k1: a.n_cols,
            k2: b.n_rows,
            n: b.n_cols,
        });
    }

    let n_rows = a.n_rows;
    let n_cols = b.n_cols;

    let mut row_ptr = Vec::with_capacity(n_rows + 1);
    let mut col_idx = Vec::new();
    let mut values = Vec::new();

    row_ptr.push(0);

    for i in 0..n_rows {
        let mut accum: HashMap<usize, T> = HashMap::new();

        // For each non-zero in row i of A
        for (k, &a_val) in a.row_iter(i) {
            // For each non-zero in row k of B
            let b_row_start = b.row_ptr[k];
            let b_row_end = b.row_ptr[k + 1];

            for b_idx in b_row_start..b_row_end {
                let j = b.col_idx[b_idx];
                let b_val = b.values[b_idx];

                let product = a_val * b_val;
                *accum.entry(j).or_insert(T::zero()) += product;
            }
        }

        let mut row_entries: Vec<_> = accum.into_iter().collect();
        row_entries.sort_by_key(|&(col, _)| col);

        for (j, val) in row_entries {
            if !val.is_zero() {
                col_idx.push(j);
                values.push(val);
            }
        }

        row_ptr.push(col_idx.len());
    }

    Ok(SparseMatrix::new(n_rows, n_cols, row_ptr, col_idx, values))
}

/// Computes `(a · b) · c`
///
/// Evaluation order is fixed left-to-right; the expected products must
/// match what the tested library computes for the same chain.
pub fn multiply_chain<T>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    c: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + AddAssign,
{
    let ab = reference_spgemm(a, b)?;
    reference_spgemm(&ab, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Directed path 0 -> 1 -> 2 -> 3 as a 0/1 adjacency matrix
    fn path_of_four() -> SparseMatrix<i64> {
        SparseMatrix::new(4, 4, vec![0, 1, 2, 3, 3], vec![1, 2, 3], vec![1, 1, 1])
    }

    #[test]
    fn test_square_counts_two_step_walks() {
        // The square of a path adjacency holds its length-two walks
        let path = path_of_four();

        let squared = reference_spgemm(&path, &path).unwrap();

        assert_eq!(squared.shape(), (4, 4));
        let triples: Vec<_> = squared.iter().collect();
        assert_eq!(triples, vec![(0, 2, 1), (1, 3, 1)]);
    }

    #[test]
    fn test_permutation_relabels_rows() {
        // P cycles vertices 0 -> 1 -> 2 -> 3 -> 0; P * A moves row k of A
        // to row pi(k)
        let path = path_of_four();
        let perm = SparseMatrix::new(
            4,
            4,
            vec![0, 1, 2, 3, 4],
            vec![3, 0, 1, 2],
            vec![1, 1, 1, 1],
        );

        let relabeled = reference_spgemm(&perm, &path).unwrap();

        // Row i of P*A is row pi_inv(i) of A: row 0 picks up A's empty
        // row 3, rows 1..3 pick up A's rows 0..2
        let triples: Vec<_> = relabeled.iter().collect();
        assert_eq!(triples, vec![(1, 1, 1), (2, 2, 1), (3, 3, 1)]);
    }

    #[test]
    fn test_identity_is_neutral() {
        let path = path_of_four();
        let identity = SparseMatrix::<i64>::identity(4);

        let result = reference_spgemm(&identity, &path).unwrap();
        assert_eq!(result, path);
    }

    #[test]
    fn test_multi_edge_entries_sum() {
        // A row storing the same column twice behaves like a weight-2 edge
        let a = SparseMatrix::new(1, 2, vec![0, 2], vec![1, 1], vec![1, 1]);
        let b = SparseMatrix::new(2, 1, vec![0, 1, 2], vec![0, 0], vec![3, 5]);

        let result = reference_spgemm(&a, &b).unwrap();
        let triples: Vec<_> = result.iter().collect();
        assert_eq!(triples, vec![(0, 0, 10)]);
    }

    #[test]
    fn test_chain_is_left_to_right() {
        let a = SparseMatrix::new(1, 2, vec![0, 2], vec![0, 1], vec![1, 2]);
        let b = SparseMatrix::<i64>::identity(2);
        let c = SparseMatrix::new(2, 1, vec![0, 1, 2], vec![0, 0], vec![3, 4]);

        let abc = multiply_chain(&a, &b, &c).unwrap();
        assert_eq!(abc.shape(), (1, 1));
        assert_eq!(abc.iter().collect::<Vec<_>>(), vec![(0, 0, 11)]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = SparseMatrix::<i64>::identity(2);
        let b = SparseMatrix::<i64>::identity(3);

        assert!(matches!(
            reference_spgemm(&a, &b),
            Err(GenError::DimensionMismatch { .. })
        ));
    }
}
