//! Fixed small graphs used by the unit-size problem set

use crate::error::Result;
use crate::matrix::{from_triples, SparseMatrix};

/// Comment written into the serialized Kepner-Gilbert fixtures
pub const KEPNER_GILBERT_COMMENT: &str = " This directed graph appears on the cover of \
\"Graph Algorithms in the Language of Linear Algebra\" \
edited by Jeremy Kepner and John Gilbert";

/// The 7-node, 12-edge directed graph from the cover of "Graph Algorithms
/// in the Language of Linear Algebra"
pub fn kepner_gilbert_graph() -> Result<SparseMatrix<i64>> {
    let rows = vec![1, 3, 4, 6, 5, 0, 2, 5, 2, 2, 3, 4];
    let cols = vec![0, 0, 1, 1, 2, 3, 3, 4, 5, 6, 6, 6];
    let vals = vec![1; 12];

    from_triples(rows, cols, vals, (7, 7), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kepner_gilbert_shape_and_edges() {
        let m = kepner_gilbert_graph().unwrap();

        assert_eq!(m.shape(), (7, 7));
        assert_eq!(m.nnz(), 12);

        // Spot-check a few edges from the cover drawing
        let triples: Vec<_> = m.iter().collect();
        assert!(triples.contains(&(1, 0, 1)));
        assert!(triples.contains(&(0, 3, 1)));
        assert!(triples.contains(&(4, 6, 1)));
        // No self-loops on this graph
        assert!(triples.iter().all(|&(i, j, _)| i != j));
    }
}
