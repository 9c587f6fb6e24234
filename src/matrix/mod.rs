// Sparse matrix storage, construction, and the reference product

pub mod builder;
pub mod csr;
pub mod multiply;

pub use builder::{from_triples, TripleList};
pub use csr::SparseMatrix;
pub use multiply::{multiply_chain, reference_spgemm};
