//! Compressed Sparse Row (CSR) matrix storage

use num_traits::Num;
use std::fmt;

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// Storage is three arrays:
/// - row_ptr: size n_rows + 1, indices into col_idx and values
/// - col_idx: size nnz, column index of each stored entry
/// - values: size nnz, the stored entries
///
/// A row may hold more than one entry for the same column (multi-edge
/// semantics); multiplication sums such contributions. Matrices are never
/// mutated after construction — every generator produces a fresh value.
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrix<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Stored entries (size: nnz)
    pub values: Vec<T>,
}

impl<T> SparseMatrix<T>
where
    T: Copy + Num,
{
    /// Creates a CSR matrix from raw arrays
    ///
    /// # Panics
    ///
    /// Panics if the arrays are inconsistent:
    /// - row_ptr.len() must be n_rows + 1
    /// - col_idx.len() must equal values.len()
    /// - row_ptr[n_rows] must equal col_idx.len()
    /// - every column index must be < n_cols
    ///
    /// Callers assembling matrices from untrusted coordinates should go
    /// through [`crate::matrix::from_triples`], which reports out-of-range
    /// coordinates as errors instead.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        assert_eq!(row_ptr.len(), n_rows + 1, "row_ptr.len() must be n_rows + 1");
        assert_eq!(col_idx.len(), values.len(), "col_idx.len() must equal values.len()");
        assert_eq!(
            row_ptr[n_rows],
            col_idx.len(),
            "row_ptr[n_rows] must equal col_idx.len()"
        );

        for &col in &col_idx {
            assert!(col < n_cols, "Column index {} out of bounds (n_cols = {})", col, n_cols);
        }

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Returns the number of stored entries in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns (n_rows, n_cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns an iterator over the stored entries in row i as (col, value)
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Returns an iterator over all stored entries as (row, col, value)
    /// triples in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.n_rows).flat_map(move |i| self.row_iter(i).map(move |(j, &v)| (i, j, v)))
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let row_ptr = (0..=n).collect();
        let col_idx = (0..n).collect();
        let values = vec![T::one(); n];

        Self {
            n_rows: n,
            n_cols: n,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Returns the transpose as a new matrix
    ///
    /// Uses a counting pass over column indices, so output rows come out
    /// sorted by column even if the input rows were not.
    pub fn transpose(&self) -> Self {
        let mut row_ptr = vec![0usize; self.n_cols + 1];

        for &col in &self.col_idx {
            row_ptr[col + 1] += 1;
        }
        for i in 0..self.n_cols {
            row_ptr[i + 1] += row_ptr[i];
        }

        let mut col_idx = vec![0usize; self.nnz()];
        let mut values = vec![T::zero(); self.nnz()];
        let mut next = row_ptr.clone();

        for (i, j, v) in self.iter() {
            let dst = next[j];
            col_idx[dst] = i;
            values[dst] = v;
            next[j] += 1;
        }

        Self {
            n_rows: self.n_cols,
            n_cols: self.n_rows,
            row_ptr,
            col_idx,
            values,
        }
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SAMPLE: usize = 8;

        write!(
            f,
            "SparseMatrix {}x{}, nnz {}",
            self.n_rows,
            self.n_cols,
            self.nnz()
        )?;

        for (count, (i, j, v)) in self.iter().enumerate() {
            if count == SAMPLE {
                write!(f, " ...")?;
                break;
            }
            write!(f, " ({i}, {j}, {v:?})")?;
        }

        Ok(())
    }
}
