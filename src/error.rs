//! Error types for fixture generation

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("coordinate ({row}, {col}) out of bounds for {n_rows} x {n_cols} matrix")]
    InvalidCoordinate {
        row: usize,
        col: usize,
        n_rows: usize,
        n_cols: usize,
    },

    #[error("expected a square matrix, got {n_rows} x {n_cols}")]
    ShapeMismatch { n_rows: usize, n_cols: usize },

    #[error("matrix dimensions {m} x {k1} and {k2} x {n} are incompatible for multiplication")]
    DimensionMismatch {
        m: usize,
        k1: usize,
        k2: usize,
        n: usize,
    },

    #[error("submatrix stride divisor must be at least 1")]
    InvalidDivisor,

    #[error("problem name already used in this run: {0:?}")]
    DuplicateProblemName(String),

    #[error("bad Matrix Market file {path:?}: {reason}")]
    BadMatrixMarket { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
