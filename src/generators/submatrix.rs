//! Submatrix-extraction operator pairs
//!
//! Pre- and post-multiplying a square matrix by these selectors extracts
//! the evenly strided rows and columns: `left · M · right` keeps rows and
//! columns `{0, divisor, 2·divisor, ...}` of `M`, in order.

use crate::error::{GenError, Result};
use crate::matrix::{SparseMatrix, TripleList};

/// Builds the `(left, right)` selector pair for a square `shape` and a
/// stride `divisor`
///
/// `left` has shape `(k, n)` with a single 1 per row at column
/// `i * divisor`, where `k = n / divisor` (floor). `right` is the
/// coordinate transpose of `left`, shape `(n, k)`.
///
/// Fails with [`GenError::ShapeMismatch`] for non-square shapes and
/// [`GenError::InvalidDivisor`] for a zero stride.
pub fn generate_submatrix_extraction(
    shape: (usize, usize),
    divisor: usize,
) -> Result<(SparseMatrix<i64>, SparseMatrix<i64>)> {
    if shape.0 != shape.1 {
        return Err(GenError::ShapeMismatch {
            n_rows: shape.0,
            n_cols: shape.1,
        });
    }
    if divisor == 0 {
        return Err(GenError::InvalidDivisor);
    }

    let n = shape.0;
    let k = n / divisor;

    let mut left_triples = TripleList::with_capacity(k);
    let mut right_triples = TripleList::with_capacity(k);
    for i in 0..k {
        left_triples.push(i, i * divisor, 1);
        right_triples.push(i * divisor, i, 1);
    }

    let left = left_triples.build((k, n), false)?;
    let right = right_triples.build((n, k), false)?;

    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::multiply_chain;

    #[test]
    fn test_four_by_four_divisor_two() {
        let (left, right) = generate_submatrix_extraction((4, 4), 2).unwrap();

        assert_eq!(left.shape(), (2, 4));
        assert_eq!(left.iter().collect::<Vec<_>>(), vec![(0, 0, 1), (1, 2, 1)]);

        assert_eq!(right.shape(), (4, 2));
        assert_eq!(right.iter().collect::<Vec<_>>(), vec![(0, 0, 1), (2, 1, 1)]);
    }

    #[test]
    fn test_right_is_left_transposed() {
        let (left, right) = generate_submatrix_extraction((9, 9), 3).unwrap();

        assert_eq!(right, left.transpose());
    }

    #[test]
    fn test_extraction_selects_strided_submatrix() {
        // M[i][j] = 10*i + j over a 6x6 grid, stored dense
        let n = 6usize;
        let mut rows = Vec::new();
        let mut cols = Vec::new();
        let mut vals = Vec::new();
        for i in 0..n {
            for j in 0..n {
                rows.push(i);
                cols.push(j);
                vals.push((10 * i + j) as i64);
            }
        }
        let m = crate::matrix::from_triples(rows, cols, vals, (n, n), false).unwrap();

        let divisor = 2;
        let (left, right) = generate_submatrix_extraction((n, n), divisor).unwrap();
        let extracted = multiply_chain(&left, &m, &right).unwrap();

        assert_eq!(extracted.shape(), (3, 3));
        for (i, j, val) in extracted.iter() {
            assert_eq!(val, (10 * i * divisor + j * divisor) as i64);
        }
    }

    #[test]
    fn test_non_square_is_rejected() {
        let err = generate_submatrix_extraction((4, 5), 2).unwrap_err();

        assert!(matches!(
            err,
            GenError::ShapeMismatch { n_rows: 4, n_cols: 5 }
        ));
    }

    #[test]
    fn test_zero_divisor_is_rejected() {
        let err = generate_submatrix_extraction((4, 4), 0).unwrap_err();

        assert!(matches!(err, GenError::InvalidDivisor));
    }

    #[test]
    fn test_floor_division_drops_remainder() {
        let (left, right) = generate_submatrix_extraction((5, 5), 2).unwrap();

        assert_eq!(left.shape(), (2, 5));
        assert_eq!(right.shape(), (5, 2));
    }
}
