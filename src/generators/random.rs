//! Seeded random matrix generators
//!
//! The RNG is always passed in by the caller; reseeding before each group
//! of related matrices is what makes fixture sets reproducible across
//! runs.

use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::matrix::{SparseMatrix, TripleList};

/// Generates an Erdos-Renyi matrix of shape `(m, n)` by drawing `nnn`
/// coordinate pairs uniformly and independently, each with value 1
///
/// With `dedupe = true` colliding draws are consolidated, so the result
/// holds at most `nnn` entries; with `dedupe = false` every draw is stored
/// and the matrix represents a multi-edge graph with exactly `nnn`
/// entries.
pub fn generate_er<R: Rng>(
    rng: &mut R,
    m: usize,
    n: usize,
    nnn: usize,
    dedupe: bool,
) -> Result<SparseMatrix<i64>> {
    // An empty axis admits no coordinates, and zero draws need no
    // sampling; both degenerate to the empty matrix of the given shape
    if m == 0 || n == 0 || nnn == 0 {
        return Ok(SparseMatrix::zeros(m, n));
    }

    let row_dist = Uniform::from(0..m);
    let col_dist = Uniform::from(0..n);

    let mut triples = TripleList::with_capacity(nnn);
    for _ in 0..nnn {
        triples.push(row_dist.sample(rng), col_dist.sample(rng), 1);
    }

    triples.build((m, n), dedupe)
}

/// Generates a uniformly random n×n permutation matrix
///
/// Shuffles the rows of the identity: with `pi` the sampled bijection the
/// stored coordinates are `(pi(i), i)`, all 1. No dedupe is needed — a
/// bijection cannot produce duplicate coordinates. The result is
/// orthogonal as a 0/1 matrix, so its transpose is its inverse.
pub fn generate_permutation<R: Rng>(rng: &mut R, n: usize) -> Result<SparseMatrix<i64>> {
    let mut pi: Vec<usize> = (0..n).collect();
    pi.shuffle(rng);

    let mut triples = TripleList::with_capacity(n);
    for (col, &row) in pi.iter().enumerate() {
        triples.push(row, col, 1);
    }

    triples.build((n, n), false)
}
