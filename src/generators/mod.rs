// Matrix generators for the fixture families

pub mod canned;
pub mod random;
pub mod submatrix;
pub mod torus;

pub use canned::{kepner_gilbert_graph, KEPNER_GILBERT_COMMENT};
pub use random::{generate_er, generate_permutation};
pub use submatrix::generate_submatrix_extraction;
pub use torus::{generate_2d_torus, generate_3d_torus, generate_torus};
