//! # mtxgen: sparse matrix multiply fixture generator
//!
//! Generates families of structured and random sparse matrices, computes
//! their reference products, and serializes everything to Matrix Market
//! files that a sparse linear-algebra test harness reads back as ground
//! truth.
//!
//! ## Components
//!
//! 1. **Matrix core**: an owned CSR [`SparseMatrix`] with coordinate-triple
//!    construction and a reference multiplication.
//!
//! 2. **Generators**:
//!    - Torus adjacency matrices of any dimension (wraparound lattices)
//!    - Erdos-Renyi random matrices
//!    - Random permutation matrices
//!    - Submatrix-extraction operator pairs
//!
//! 3. **Problem assembly**: named bundles of inputs plus expected product,
//!    laid out one directory per problem.
//!
//! Everything random takes an explicit seeded RNG, so the generated
//! fixture tree is identical across runs.
//!
//! ## Usage
//!
//! ```
//! use mtxgen::generators::generate_2d_torus;
//! use mtxgen::matrix::reference_spgemm;
//!
//! let torus = generate_2d_torus(3).unwrap();
//! assert_eq!(torus.shape(), (9, 9));
//!
//! let squared = reference_spgemm(&torus, &torus).unwrap();
//! assert_eq!(squared.shape(), (9, 9));
//! ```

pub mod error;
pub mod generators;
pub mod market;
pub mod matrix;
pub mod problem;
pub mod sets;

// Re-export primary components
pub use error::{GenError, Result};
pub use market::{read_matrix, write_matrix, MmField, MmSymmetry};
pub use matrix::{from_triples, multiply_chain, reference_spgemm, SparseMatrix, TripleList};
pub use problem::{MatrixMeta, MultiplyProblem, ProblemWriter};
pub use sets::{generate_medium_problems, generate_unit_problems};

/// Version information for the mtxgen crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
