//! Facelet model and move engine for the 3x3x3 Rubik's cube.
//!
//! The cube is stored as six 3x3 grids of facelets. Every face turn is a
//! permutation of those 54 facelets, so colors are never created or destroyed:
//! each color always appears exactly 9 times.
//!
//! The [canonical facelet string](Cube::to_facelet_string) is the format
//! consumed by two-phase solvers. Solvers themselves live outside this crate
//! and are reached through the [`Solver`] trait.

mod canonical;
mod color;
mod cube;
mod face;
mod moves;
mod scramble;
mod solver;
mod twist;


pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::canonical::{ExportError, FaceletCountError, ImportError, check_facelet_counts};
    pub use crate::color::{Color, ColorScheme};
    pub use crate::cube::{Cube, CubeState};
    pub use crate::face::{FaceId, Grid};
    pub use crate::moves::{Move, MoveSeq, ParseMoveError, Turn};
    pub use crate::scramble::{ScrambleParams, ScrambledCube};
    pub use crate::solver::{SolveError, Solver};
}

/// Number of facelets on one face.
pub const FACELETS_PER_FACE: usize = 9;
/// Number of facelets on the whole cube.
pub const FACELET_COUNT: usize = 6 * FACELETS_PER_FACE;

/// Default number of moves in a shuffle.
///
/// **Changing this changes the scramble produced for a given seed.**
pub const DEFAULT_SCRAMBLE_LENGTH: u32 = 30;

/// Canonical facelet string of the solved cube.
pub const SOLVED_FACELETS: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// Version string such as `rubik3_core v1.2.3`.
pub const ENGINE_VERSION_STRING: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));
