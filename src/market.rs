//! Matrix Market coordinate-format serialization
//!
//! The persisted format is line oriented: a `%%MatrixMarket` banner,
//! optional `%` comment lines, a `rows cols nnz` line, then one
//! `row col value` line per stored entry. Indices are 1-based on disk and
//! 0-based in memory; this module owns the conversion in both directions.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{GenError, Result};
use crate::matrix::{from_triples, SparseMatrix};

/// Declared value domain of the serialized entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MmField {
    Integer,
    Real,
    /// Structure only; entry lines carry no value and read back as 1
    Pattern,
}

impl MmField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MmField::Integer => "integer",
            MmField::Real => "real",
            MmField::Pattern => "pattern",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "integer" => Some(MmField::Integer),
            "real" => Some(MmField::Real),
            "pattern" => Some(MmField::Pattern),
            _ => None,
        }
    }
}

/// Declared structural symmetry of the serialized matrix
///
/// Metadata only — `General` is never verified against the entries, and a
/// `Symmetric` file stores just the lower triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MmSymmetry {
    General,
    Symmetric,
}

impl MmSymmetry {
    pub fn as_str(&self) -> &'static str {
        match self {
            MmSymmetry::General => "general",
            MmSymmetry::Symmetric => "symmetric",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "general" => Some(MmSymmetry::General),
            "symmetric" => Some(MmSymmetry::Symmetric),
            _ => None,
        }
    }
}

fn bad<P: AsRef<Path>>(path: P, reason: impl Into<String>) -> GenError {
    GenError::BadMatrixMarket {
        path: path.as_ref().to_path_buf(),
        reason: reason.into(),
    }
}

/// Writes a matrix in Matrix Market coordinate format
///
/// The comment, if any, is emitted as `%`-prefixed lines between the
/// banner and the dimensions line. Entries are written 1-indexed in
/// row-major order; for [`MmField::Pattern`] the value column is omitted.
pub fn write_matrix<P: AsRef<Path>>(
    path: P,
    matrix: &SparseMatrix<i64>,
    field: MmField,
    symmetry: MmSymmetry,
    comment: Option<&str>,
) -> Result<()> {
    let mut file = BufWriter::new(File::create(&path)?);

    writeln!(
        file,
        "%%MatrixMarket matrix coordinate {} {}",
        field.as_str(),
        symmetry.as_str()
    )?;

    if let Some(comment) = comment {
        for line in comment.lines() {
            writeln!(file, "%{}", line)?;
        }
    }

    writeln!(file, "{} {} {}", matrix.n_rows, matrix.n_cols, matrix.nnz())?;

    for (row, col, val) in matrix.iter() {
        match field {
            MmField::Pattern => writeln!(file, "{} {}", row + 1, col + 1)?,
            _ => writeln!(file, "{} {} {}", row + 1, col + 1, val)?,
        }
    }

    file.flush()?;
    Ok(())
}

/// Reads a Matrix Market coordinate file
///
/// Returns the matrix together with its declared field and symmetry.
/// Symmetric storage is expanded to full general storage (off-diagonal
/// entries mirrored), pattern entries read as value 1, and real entries
/// must be integral — this reader serves fixtures whose values are all
/// small integers.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<(SparseMatrix<i64>, MmField, MmSymmetry)> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let banner = match lines.next() {
        Some(line) => line?,
        None => return Err(bad(path, "empty file")),
    };

    let (field, symmetry) = parse_banner(path, &banner)?;

    // Skip comments, find the dimensions line
    let mut dims_line = String::new();
    for line in lines.by_ref() {
        let line = line?;
        if line.starts_with('%') || line.trim().is_empty() {
            continue;
        }
        dims_line = line;
        break;
    }

    let dims: Vec<&str> = dims_line.split_whitespace().collect();
    if dims.len() != 3 {
        return Err(bad(path, format!("bad dimensions line: {dims_line:?}")));
    }
    let n_rows: usize = dims[0]
        .parse()
        .map_err(|_| bad(path, "bad row count"))?;
    let n_cols: usize = dims[1]
        .parse()
        .map_err(|_| bad(path, "bad column count"))?;
    let nnz: usize = dims[2]
        .parse()
        .map_err(|_| bad(path, "bad nonzero count"))?;

    let mut rows = Vec::with_capacity(nnz);
    let mut cols = Vec::with_capacity(nnz);
    let mut vals = Vec::with_capacity(nnz);

    for line in lines {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('%') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(bad(path, format!("bad entry line: {line:?}")));
        }

        let row = parse_index(path, parts[0])?;
        let col = parse_index(path, parts[1])?;
        let val = match field {
            MmField::Pattern => 1,
            _ => parse_value(path, parts.get(2).copied())?,
        };

        rows.push(row);
        cols.push(col);
        vals.push(val);

        if symmetry == MmSymmetry::Symmetric && row != col {
            rows.push(col);
            cols.push(row);
            vals.push(val);
        }
    }

    let matrix = from_triples(rows, cols, vals, (n_rows, n_cols), false)?;
    Ok((matrix, field, symmetry))
}

fn parse_banner(path: &Path, banner: &str) -> Result<(MmField, MmSymmetry)> {
    let tokens: Vec<String> = banner.split_whitespace().map(str::to_lowercase).collect();
    if tokens.len() != 5 || tokens[0] != "%%matrixmarket" {
        return Err(bad(path, format!("bad banner: {banner:?}")));
    }
    if tokens[1] != "matrix" || tokens[2] != "coordinate" {
        return Err(bad(path, "only coordinate matrices are supported"));
    }

    let field = MmField::parse(&tokens[3])
        .ok_or_else(|| bad(path, format!("unsupported field {:?}", tokens[3])))?;
    let symmetry = MmSymmetry::parse(&tokens[4])
        .ok_or_else(|| bad(path, format!("unsupported symmetry {:?}", tokens[4])))?;

    Ok((field, symmetry))
}

fn parse_index(path: &Path, token: &str) -> Result<usize> {
    let index: usize = token
        .parse()
        .map_err(|_| bad(path, format!("bad index {token:?}")))?;
    if index == 0 {
        return Err(bad(path, "indices are 1-based; found 0"));
    }
    Ok(index - 1)
}

fn parse_value(path: &Path, token: Option<&str>) -> Result<i64> {
    let token = token.ok_or_else(|| bad(path, "missing entry value"))?;
    if let Ok(v) = token.parse::<i64>() {
        return Ok(v);
    }
    // Real-field files written by other tools may format integers as 1.0
    let v: f64 = token
        .parse()
        .map_err(|_| bad(path, format!("bad value {token:?}")))?;
    if v.fract() != 0.0 {
        return Err(bad(path, format!("non-integral value {token:?}")));
    }
    Ok(v as i64)
}
