//! Torus graph adjacency matrices
//!
//! A torus lattice has no boundary: stepping off one edge of an axis wraps
//! to the opposite edge. Vertices are flattened to linear indices in
//! mixed-radix base `n_axis`, and each neighbor relation becomes a copy of
//! the main diagonal shifted by a fixed offset, taken modulo the vertex
//! count.

use crate::error::Result;
use crate::matrix::{SparseMatrix, TripleList};

/// Builds the adjacency matrix of a `dim`-dimensional torus with `n_axis`
/// vertices per axis, shape `(n_axis^dim, n_axis^dim)`
///
/// Each vertex gets a self-loop plus one edge per axis direction. In the
/// flattened index, moving along axis 0 is an offset of ±1 and moving
/// along axis `d > 0` is an offset of ±(n_axis^d − 1) once digit carries
/// are folded into the modular wraparound.
///
/// Entries are not deduplicated: for `n_axis <= 2` opposing offsets land
/// on the same coordinate and are stored as separate multi-edge entries,
/// matching the multiply-time convention that duplicate entries sum.
pub fn generate_torus(dim: u32, n_axis: usize) -> Result<SparseMatrix<i64>> {
    let n = n_axis.pow(dim);

    // Neighbor links are copies of the main diagonal at these offsets
    let mut col_offsets: Vec<isize> = if dim == 0 { vec![0] } else { vec![0, 1, -1] };
    for d in 1..dim {
        let step = n_axis.pow(d) as isize - 1;
        col_offsets.push(step);
        col_offsets.push(-step);
    }

    let mut triples = TripleList::with_capacity(n * col_offsets.len());
    for &offset in &col_offsets {
        for i in 0..n {
            let col = (i as isize + offset).rem_euclid(n as isize) as usize;
            triples.push(i, col, 1);
        }
    }

    triples.build((n, n), false)
}

/// 2D torus: self-loop plus north, west, south, and east neighbors
pub fn generate_2d_torus(n_axis: usize) -> Result<SparseMatrix<i64>> {
    generate_torus(2, n_axis)
}

/// 3D torus: self-loop plus north, west, south, east, front, and back
/// neighbors
pub fn generate_3d_torus(n_axis: usize) -> Result<SparseMatrix<i64>> {
    generate_torus(3, n_axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_nnz(m: &SparseMatrix<i64>, i: usize) -> usize {
        m.row_ptr[i + 1] - m.row_ptr[i]
    }

    #[test]
    fn test_zero_dim_is_single_self_loop() {
        let m = generate_torus(0, 5).unwrap();

        assert_eq!(m.shape(), (1, 1));
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![(0, 0, 1)]);
    }

    #[test]
    fn test_one_axis_collapses_to_self_loops() {
        // n_axis = 1 means every offset reduces to 0 mod 1
        let m = generate_torus(3, 1).unwrap();

        assert_eq!(m.shape(), (1, 1));
        for (row, col, _) in m.iter() {
            assert_eq!((row, col), (0, 0));
        }
    }

    #[test]
    fn test_ring_of_four() {
        // dim=1, n_axis=4: a 4-cycle with self-loops
        let m = generate_torus(1, 4).unwrap();

        assert_eq!(m.shape(), (4, 4));
        assert_eq!(m.nnz(), 12);

        for i in 0..4 {
            let mut cols: Vec<_> = m.row_iter(i).map(|(j, _)| j).collect();
            cols.sort_unstable();
            let mut expected = vec![i, (i + 1) % 4, (i + 3) % 4];
            expected.sort_unstable();
            assert_eq!(cols, expected);
        }
    }

    #[test]
    fn test_2d_torus_shape_and_degree() {
        let m = generate_2d_torus(3).unwrap();

        assert_eq!(m.shape(), (9, 9));
        // Self plus 4 neighbors on every row
        for i in 0..9 {
            assert_eq!(row_nnz(&m, i), 5);
        }
        assert_eq!(m.nnz(), 45);
    }

    #[test]
    fn test_3d_torus_shape_and_degree() {
        let m = generate_3d_torus(3).unwrap();

        assert_eq!(m.shape(), (27, 27));
        // Self plus 6 neighbors on every row
        for i in 0..27 {
            assert_eq!(row_nnz(&m, i), 7);
        }
    }

    #[test]
    fn test_offset_closure() {
        // The coordinate set must be exactly the declared diagonals mod n
        let n_axis = 4usize;
        let m = generate_2d_torus(n_axis).unwrap();
        let n = n_axis * n_axis;

        let offsets: Vec<isize> = vec![0, 1, -1, n_axis as isize - 1, -(n_axis as isize - 1)];

        for (row, col, _) in m.iter() {
            let matches_offset = offsets
                .iter()
                .any(|&o| (row as isize + o).rem_euclid(n as isize) as usize == col);
            assert!(matches_offset, "unexpected edge ({row}, {col})");
        }
    }

    #[test]
    fn test_small_axis_keeps_multi_edges() {
        // n_axis=2: +1 and -1 coincide, stored as two entries per row
        let m = generate_torus(1, 2).unwrap();

        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.nnz(), 6);
        assert_eq!(row_nnz(&m, 0), 3);
    }
}
