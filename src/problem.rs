//! Multiply-problem assembly
//!
//! A problem bundles input matrices A, B, and sometimes C with the
//! expected product, and serializes all of them into one directory the
//! downstream multiply tests read back.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{GenError, Result};
use crate::market::{write_matrix, MmField, MmSymmetry};
use crate::matrix::{multiply_chain, reference_spgemm, SparseMatrix};

/// Serialization metadata attached to one input matrix
#[derive(Debug, Clone)]
pub struct MatrixMeta {
    pub field: MmField,
    pub symmetry: MmSymmetry,
    pub comment: Option<String>,
}

impl Default for MatrixMeta {
    fn default() -> Self {
        Self {
            field: MmField::Integer,
            symmetry: MmSymmetry::General,
            comment: None,
        }
    }
}

/// A named multiply test case: inputs plus the expected product
///
/// The product is computed at write time with the reference
/// multiplication, strictly left-to-right for three-matrix chains.
#[derive(Debug, Clone)]
pub struct MultiplyProblem {
    pub name: String,
    pub a: SparseMatrix<i64>,
    pub b: SparseMatrix<i64>,
    pub c: Option<SparseMatrix<i64>>,
    pub a_meta: MatrixMeta,
    pub b_meta: MatrixMeta,
    pub c_meta: MatrixMeta,
    /// Prefixes the directory name with a marker telling version control
    /// to skip the fixture (used for outputs too large to check in)
    pub gitignored: bool,
}

impl MultiplyProblem {
    pub fn new(
        name: impl Into<String>,
        a: SparseMatrix<i64>,
        b: SparseMatrix<i64>,
    ) -> Self {
        Self {
            name: name.into(),
            a,
            b,
            c: None,
            a_meta: MatrixMeta::default(),
            b_meta: MatrixMeta::default(),
            c_meta: MatrixMeta::default(),
            gitignored: false,
        }
    }

    pub fn with_c(mut self, c: SparseMatrix<i64>) -> Self {
        self.c = Some(c);
        self
    }

    /// Attaches the same comment to both A and B
    pub fn with_input_comment(mut self, comment: &str) -> Self {
        self.a_meta.comment = Some(comment.to_string());
        self.b_meta.comment = Some(comment.to_string());
        self
    }

    pub fn gitignored(mut self, gitignored: bool) -> Self {
        self.gitignored = gitignored;
        self
    }

    /// Directory name this problem serializes under
    pub fn dir_name(&self) -> String {
        if self.gitignored {
            format!("gitignored - {}", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Declared field of the product: the operands' common field if they
    /// all agree, otherwise inferred from the stored values (integer —
    /// every generated value is)
    fn product_field(&self) -> MmField {
        let fields = [
            Some(self.a_meta.field),
            Some(self.b_meta.field),
            self.c.as_ref().map(|_| self.c_meta.field),
        ];
        let mut declared = fields.into_iter().flatten();
        let first = self.a_meta.field;
        if declared.all(|f| f == first) {
            first
        } else {
            MmField::Integer
        }
    }

    /// Computes the product and writes the whole problem under
    /// `basedir/<dir_name>/`
    ///
    /// Rewriting an existing directory overwrites its files; that is the
    /// prescribed recovery path after an interrupted run.
    pub fn write(&self, basedir: &Path) -> Result<PathBuf> {
        let dir = basedir.join(self.dir_name());
        fs::create_dir_all(&dir)?;

        write_matrix(
            dir.join("a.mtx"),
            &self.a,
            self.a_meta.field,
            self.a_meta.symmetry,
            self.a_meta.comment.as_deref(),
        )?;
        write_matrix(
            dir.join("b.mtx"),
            &self.b,
            self.b_meta.field,
            self.b_meta.symmetry,
            self.b_meta.comment.as_deref(),
        )?;

        // Product symmetry is always declared general; no structural
        // inference is attempted for a derived matrix.
        match &self.c {
            None => {
                let ab = reference_spgemm(&self.a, &self.b)?;
                write_matrix(
                    dir.join("product_ab.mtx"),
                    &ab,
                    self.product_field(),
                    MmSymmetry::General,
                    None,
                )?;
            }
            Some(c) => {
                write_matrix(
                    dir.join("c.mtx"),
                    c,
                    self.c_meta.field,
                    self.c_meta.symmetry,
                    self.c_meta.comment.as_deref(),
                )?;
                let abc = multiply_chain(&self.a, &self.b, c)?;
                write_matrix(
                    dir.join("product_abc.mtx"),
                    &abc,
                    self.product_field(),
                    MmSymmetry::General,
                    None,
                )?;
            }
        }

        info!(problem = %self.name, dir = %dir.display(), "wrote multiply problem");
        Ok(dir)
    }
}

/// Writes problems under one base directory, rejecting duplicate names
///
/// Problem identity is the human-readable directory name; a repeated name
/// within a run would silently clobber an earlier problem, so it fails
/// fast instead.
pub struct ProblemWriter {
    basedir: PathBuf,
    seen: HashSet<String>,
}

impl ProblemWriter {
    pub fn new(basedir: impl Into<PathBuf>) -> Self {
        Self {
            basedir: basedir.into(),
            seen: HashSet::new(),
        }
    }

    pub fn basedir(&self) -> &Path {
        &self.basedir
    }

    pub fn write(&mut self, problem: &MultiplyProblem) -> Result<PathBuf> {
        let dir_name = problem.dir_name();
        if !self.seen.insert(dir_name.clone()) {
            return Err(GenError::DuplicateProblemName(dir_name));
        }
        problem.write(&self.basedir)
    }
}
