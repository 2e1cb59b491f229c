use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::twist::{self, Cell};
use crate::{Color, FaceId, Grid, Move, MoveSeq, ParseMoveError};

/// Cube state with facelets labeled by sticker color.
pub type CubeState = Cube<Color>;

/// State of a 3x3x3 cube: one 3x3 [`Grid`] of facelets per face.
///
/// The facelet type is generic so that the same move engine can track
/// arbitrary labels. Use [`CubeState`] for an ordinary colored cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cube<T = Color> {
    /// Faces, indexed by `FaceId as usize`.
    faces: [Grid<T>; 6],
}

impl Default for Cube<Color> {
    fn default() -> Self {
        Self::solved()
    }
}

impl Cube<Color> {
    /// Constructs a solved cube.
    pub fn solved() -> Self {
        Self::from_fn(|face, _, _| face.solved_color())
    }

    /// Returns whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|grid| grid.cells().all(|c| c == grid.center()))
    }

    /// Returns how many facelets of each color there are, in the order of
    /// [`Color::iter()`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in self.facelets() {
            counts[color as usize] += 1;
        }
        counts
    }
}

impl<T: Copy> Cube<T> {
    /// Constructs a cube by calling `f(face, row, col)` for every facelet.
    pub fn from_fn(mut f: impl FnMut(FaceId, usize, usize) -> T) -> Self {
        Self {
            faces: FaceId::ALL.map(|face| Grid::from_fn(|row, col| f(face, row, col))),
        }
    }

    /// Returns the grid for one face.
    pub fn face(&self, face: FaceId) -> &Grid<T> {
        &self.faces[face as usize]
    }

    /// Returns an iterator over every facelet, face by face in canonical
    /// order (`U R F D L B`), row-major within each face.
    pub fn facelets(&self) -> impl '_ + Iterator<Item = T> {
        self.faces.iter().flat_map(|grid| grid.cells())
    }

    /// Turns `face` 90 degrees clockwise.
    pub fn quarter_turn(&mut self, face: FaceId) {
        self.faces[face as usize].rotate_cw();

        let strips = twist::neighbour_strips(face);
        let contents = strips.map(|strip| strip.map(|cell| self[cell]));
        for (i, strip) in strips.iter().enumerate() {
            let source = &contents[(i + 3) % 4];
            for (&cell, &value) in strip.iter().zip(source) {
                self[cell] = value;
            }
        }
    }

    /// Applies a single move.
    ///
    /// Counterclockwise and half turns are applied as repeated clockwise
    /// quarter turns.
    pub fn apply_move(&mut self, m: Move) {
        for _ in 0..m.turn.quarter_turns() {
            self.quarter_turn(m.face);
        }
    }

    /// Applies a sequence of moves in order.
    pub fn apply_seq<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &m in moves {
            self.apply_move(m);
        }
    }

    /// Applies a whitespace-separated sequence of move tokens, skipping any
    /// token that is not a valid move.
    ///
    /// Returns the skipped tokens.
    pub fn apply_str(&mut self, moves: &str) -> Vec<String> {
        let (seq, skipped) = MoveSeq::parse_lenient(moves);
        for token in &skipped {
            log::warn!("skipping unrecognized move token {token:?}");
        }
        log::debug!("applying {seq}");
        self.apply_seq(&seq);
        skipped
    }

    /// Applies a whitespace-separated sequence of move tokens.
    ///
    /// The whole sequence is parsed before any move is applied, so the cube is
    /// unchanged if any token is invalid.
    pub fn try_apply_str(&mut self, moves: &str) -> Result<MoveSeq, ParseMoveError> {
        let seq: MoveSeq = moves.parse()?;
        log::debug!("applying {seq}");
        self.apply_seq(&seq);
        Ok(seq)
    }

    /// Returns a copy of the cube with `moves` applied.
    #[must_use]
    pub fn with_moves<'a>(mut self, moves: impl IntoIterator<Item = &'a Move>) -> Self {
        self.apply_seq(moves);
        self
    }
}

impl<T> Index<Cell> for Cube<T> {
    type Output = T;

    fn index(&self, (face, row, col): Cell) -> &Self::Output {
        &self.faces[face as usize][(row, col)]
    }
}
impl<T> IndexMut<Cell> for Cube<T> {
    fn index_mut(&mut self, (face, row, col): Cell) -> &mut Self::Output {
        &mut self.faces[face as usize][(row, col)]
    }
}

/// Renders the unfolded net:
///
/// ```text
///     U
///   L F R B
///     D
/// ```
impl fmt::Display for Cube<Color> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FaceId::*;

        let row_str = |face: FaceId, row: usize| -> String {
            self.face(face).row(row).iter().map(|c| c.symbol()).collect()
        };
        let pad = " ".repeat(4);

        for row in 0..3 {
            writeln!(f, "{pad}{}", row_str(U, row))?;
        }
        for row in 0..3 {
            let strips = [L, F, R, B].map(|face| row_str(face, row));
            writeln!(f, "{}", strips.join(" "))?;
        }
        for row in 0..3 {
            writeln!(f, "{pad}{}", row_str(D, row))?;
        }
        Ok(())
    }
}
