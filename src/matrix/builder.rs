//! Construction of sparse matrices from coordinate triples
//!
//! All generators assemble a [`TripleList`] and hand it to
//! [`from_triples`]. Duplicate handling follows unweighted-adjacency
//! semantics: when dedupe is requested, duplicate coordinates are
//! consolidated and the surviving entry is reset to 1.

use num_traits::Num;

use crate::error::{GenError, Result};
use crate::matrix::SparseMatrix;

/// Mutable coordinate-triple accumulator used while a matrix is being
/// generated. Three parallel sequences of equal length; not a matrix
/// itself — it only lives until [`from_triples`] consumes it.
#[derive(Debug, Clone, Default)]
pub struct TripleList<T> {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub vals: Vec<T>,
}

impl<T: Copy + Num> TripleList<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            cols: Vec::new(),
            vals: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            cols: Vec::with_capacity(capacity),
            vals: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: usize, col: usize, val: T) {
        self.rows.push(row);
        self.cols.push(col);
        self.vals.push(val);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consumes the list into a matrix of the given shape
    pub fn build(self, shape: (usize, usize), dedupe: bool) -> Result<SparseMatrix<T>> {
        from_triples(self.rows, self.cols, self.vals, shape, dedupe)
    }
}

/// Builds a CSR matrix from parallel coordinate sequences
///
/// Entries are sorted by (row, column). With `dedupe = true`, repeated
/// coordinates are consolidated by summing and every surviving value is
/// then reset to 1 — the builder serves unweighted adjacency generators,
/// so a collapsed multi-edge stores 1, not its multiplicity. With
/// `dedupe = false`, repeated coordinates stay as separate stored entries
/// and multiplication sums their contributions.
///
/// Any coordinate outside the shape fails with
/// [`GenError::InvalidCoordinate`].
pub fn from_triples<T: Copy + Num>(
    rows: Vec<usize>,
    cols: Vec<usize>,
    vals: Vec<T>,
    shape: (usize, usize),
    dedupe: bool,
) -> Result<SparseMatrix<T>> {
    assert_eq!(rows.len(), cols.len(), "rows.len() must equal cols.len()");
    assert_eq!(rows.len(), vals.len(), "rows.len() must equal vals.len()");

    let (n_rows, n_cols) = shape;

    for (&row, &col) in rows.iter().zip(&cols) {
        if row >= n_rows || col >= n_cols {
            return Err(GenError::InvalidCoordinate {
                row,
                col,
                n_rows,
                n_cols,
            });
        }
    }

    // Sort by row, then column
    let mut triples: Vec<(usize, usize, T)> = rows
        .into_iter()
        .zip(cols)
        .zip(vals)
        .map(|((row, col), val)| (row, col, val))
        .collect();
    triples.sort_unstable_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

    if dedupe {
        let mut combined: Vec<(usize, usize, T)> = Vec::new();
        for (row, col, val) in triples {
            if let Some(last) = combined.last_mut() {
                if last.0 == row && last.1 == col {
                    last.2 = last.2 + val;
                    continue;
                }
            }
            combined.push((row, col, val));
        }
        // Unweighted semantics: consolidated entries store 1
        for entry in &mut combined {
            entry.2 = T::one();
        }
        triples = combined;
    }

    // Assemble CSR, filling pointers for empty rows
    let mut row_ptr = Vec::with_capacity(n_rows + 1);
    row_ptr.push(0);
    let mut col_idx = Vec::with_capacity(triples.len());
    let mut values = Vec::with_capacity(triples.len());

    let mut current_row = 0;
    for (row, col, val) in triples {
        while current_row < row {
            row_ptr.push(col_idx.len());
            current_row += 1;
        }
        col_idx.push(col);
        values.push(val);
    }
    while current_row < n_rows {
        row_ptr.push(col_idx.len());
        current_row += 1;
    }

    Ok(SparseMatrix::new(n_rows, n_cols, row_ptr, col_idx, values))
}
