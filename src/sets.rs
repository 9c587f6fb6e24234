//! Unit and medium problem sets
//!
//! Each family of related matrices gets its own RNG seeded with the
//! family's scale, so a regenerated fixture tree is bit-identical run to
//! run.

use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::error::Result;
use crate::generators::{
    generate_3d_torus, generate_er, generate_permutation, generate_submatrix_extraction,
    kepner_gilbert_graph, KEPNER_GILBERT_COMMENT,
};
use crate::matrix::multiply_chain;
use crate::problem::{MultiplyProblem, ProblemWriter};

/// Default fill factor for Erdos-Renyi problems: target entries per row
pub const ER_FILL_FACTOR: usize = 32;

/// Generates the unit-size problems under `root/unit/multiply`
///
/// These are small enough to run in milliseconds with unoptimized code
/// and are checked in to version control.
pub fn generate_unit_problems(root: &Path) -> Result<()> {
    let basedir = root.join("unit").join("multiply");
    info!(dir = %basedir.display(), "generating unit multiply problems");
    let mut writer = ProblemWriter::new(basedir);

    generate_kepner_gilbert_square(&mut writer)?;
    generate_er_problems(&mut writer, 5, ER_FILL_FACTOR, false)?;
    generate_torus_problems(&mut writer, 4, false)?;

    Ok(())
}

/// Generates the medium-size problems under `root/medium/multiply`
///
/// These should multiply in a second or two at most; they are too large
/// for version control, so every directory carries the gitignored marker.
pub fn generate_medium_problems(root: &Path) -> Result<()> {
    let basedir = root.join("medium").join("multiply");
    info!(dir = %basedir.display(), "generating medium multiply problems");
    let mut writer = ProblemWriter::new(basedir);

    for er_scale in [12, 14] {
        generate_er_problems(&mut writer, er_scale, ER_FILL_FACTOR, true)?;
    }

    for torus_scale in [25, 50] {
        generate_torus_problems(&mut writer, torus_scale, true)?;
    }

    Ok(())
}

/// The square of the Kepner-Gilbert cover graph
fn generate_kepner_gilbert_square(writer: &mut ProblemWriter) -> Result<()> {
    let m = kepner_gilbert_graph()?;

    let problem = MultiplyProblem::new("square Kepner-Gilbert graph", m.clone(), m)
        .with_input_comment(KEPNER_GILBERT_COMMENT);
    writer.write(&problem)?;

    Ok(())
}

/// Erdos-Renyi family at one scale: the matrix squared, row-permuted, and
/// submatrix-extracted
fn generate_er_problems(
    writer: &mut ProblemWriter,
    scale: u32,
    fill_factor: usize,
    gitignored: bool,
) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(scale as u64);

    let n = 1usize << scale;
    let er = generate_er(&mut rng, n, n, n * fill_factor, true)?;
    let perm = generate_permutation(&mut rng, er.n_rows)?;
    let (left_sub, right_sub) = generate_submatrix_extraction(er.shape(), 2)?;

    writer.write(
        &MultiplyProblem::new(format!("square ER scale {scale}"), er.clone(), er.clone())
            .gitignored(gitignored),
    )?;

    writer.write(
        &MultiplyProblem::new(format!("row_perm ER scale {scale}"), perm, er.clone())
            .gitignored(gitignored),
    )?;

    writer.write(
        &MultiplyProblem::new(format!("submatrix ER scale {scale}"), left_sub, er)
            .with_c(right_sub)
            .gitignored(gitignored),
    )?;

    Ok(())
}

/// 3D-torus family at one scale, plain and under a random relabeling
fn generate_torus_problems(
    writer: &mut ProblemWriter,
    scale: usize,
    gitignored: bool,
) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(scale as u64);

    let torus = generate_3d_torus(scale)?;
    let perm = generate_permutation(&mut rng, torus.n_rows)?;
    // Same graph with vertices relabeled by a random permutation
    let torus_rp = multiply_chain(&perm, &torus, &perm.transpose())?;

    writer.write(
        &MultiplyProblem::new(
            format!("square 3Dtorus scale {scale}"),
            torus.clone(),
            torus.clone(),
        )
        .gitignored(gitignored),
    )?;

    writer.write(
        &MultiplyProblem::new(
            format!("square 3DtorusRP scale {scale}"),
            torus_rp.clone(),
            torus_rp.clone(),
        )
        .gitignored(gitignored),
    )?;

    writer.write(
        &MultiplyProblem::new(format!("row_perm 3Dtorus scale {scale}"), perm.clone(), torus)
            .gitignored(gitignored),
    )?;

    writer.write(
        &MultiplyProblem::new(format!("row_perm 3DtorusRP scale {scale}"), perm, torus_rp)
            .gitignored(gitignored),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::read_matrix;
    use tempfile::tempdir;

    #[test]
    fn test_unit_set_layout() {
        let root = tempdir().unwrap();
        generate_unit_problems(root.path()).unwrap();

        let multiply = root.path().join("unit/multiply");
        for name in [
            "square Kepner-Gilbert graph",
            "square ER scale 5",
            "row_perm ER scale 5",
            "submatrix ER scale 5",
            "square 3Dtorus scale 4",
            "square 3DtorusRP scale 4",
            "row_perm 3Dtorus scale 4",
            "row_perm 3DtorusRP scale 4",
        ] {
            assert!(multiply.join(name).join("a.mtx").is_file(), "missing {name}");
        }
    }

    #[test]
    fn test_unit_set_is_reproducible() {
        let root_a = tempdir().unwrap();
        let root_b = tempdir().unwrap();
        generate_unit_problems(root_a.path()).unwrap();
        generate_unit_problems(root_b.path()).unwrap();

        let rel = "unit/multiply/square ER scale 5/a.mtx";
        let a = std::fs::read_to_string(root_a.path().join(rel)).unwrap();
        let b = std::fs::read_to_string(root_b.path().join(rel)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_kepner_gilbert_square_round_trips() {
        let root = tempdir().unwrap();
        generate_unit_problems(root.path()).unwrap();

        let dir = root.path().join("unit/multiply/square Kepner-Gilbert graph");
        let (a, _, _) = read_matrix(dir.join("a.mtx")).unwrap();
        let (product, _, _) = read_matrix(dir.join("product_ab.mtx")).unwrap();

        let expected = crate::matrix::reference_spgemm(&a, &a).unwrap();
        assert_eq!(product, expected);
    }
}
