use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};

use crate::Color;

/// One of the six faces of the cube, named by the standard face letters.
///
/// The discriminant order (`U R F D L B`) is the order in which faces appear
/// in the canonical facelet string.
#[derive(
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[repr(u8)]
pub enum FaceId {
    /// Up
    U = 0,
    /// Right
    R = 1,
    /// Front
    F = 2,
    /// Down
    D = 3,
    /// Left
    L = 4,
    /// Back
    B = 5,
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FaceId {
    /// All faces in canonical order.
    pub const ALL: [FaceId; 6] = [FaceId::U, FaceId::R, FaceId::F, FaceId::D, FaceId::L, FaceId::B];

    /// Returns an iterator over all faces in canonical order.
    pub fn iter() -> impl Iterator<Item = FaceId> + Clone {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the face letter.
    pub fn symbol(self) -> char {
        use FaceId::*;

        match self {
            U => 'U',
            R => 'R',
            F => 'F',
            D => 'D',
            L => 'L',
            B => 'B',
        }
    }

    /// Returns the face whose letter is `c`, if any.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::iter().find(|face| face.symbol() == c)
    }

    /// Returns the human-friendly name of the face.
    pub fn name(self) -> &'static str {
        use FaceId::*;

        match self {
            U => "Up",
            R => "Right",
            F => "Front",
            D => "Down",
            L => "Left",
            B => "Back",
        }
    }

    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        use FaceId::*;

        match self {
            U => D,
            D => U,
            R => L,
            L => R,
            F => B,
            B => F,
        }
    }

    /// Returns the color of this face on a solved cube.
    pub fn solved_color(self) -> Color {
        use FaceId::*;

        match self {
            U => Color::White,
            D => Color::Yellow,
            L => Color::Orange,
            R => Color::Red,
            F => Color::Blue,
            B => Color::Green,
        }
    }
}

/// 3x3 grid of facelets, addressed by `(row, col)`.
///
/// Row 0 is the edge nearest the Up face (or, for Up and Down, the edge
/// nearest Back and Front respectively). Column 0 is the left edge when
/// looking straight at the face from outside the cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T>(pub [[T; 3]; 3]);

impl<T: Copy> Grid<T> {
    /// Constructs a grid by calling `f(row, col)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self(std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))))
    }

    /// Rotates the grid 90 degrees clockwise in place: the cell at
    /// `(row, col)` moves to `(col, 2 - row)`.
    pub fn rotate_cw(&mut self) {
        let old = self.0;
        *self = Self::from_fn(|row, col| old[2 - col][row]);
    }

    /// Returns the cells in row-major order.
    pub fn cells(&self) -> impl '_ + Iterator<Item = T> {
        self.0.iter().flatten().copied()
    }

    /// Returns the cell at the center of the grid.
    pub fn center(&self) -> T {
        self.0[1][1]
    }

    /// Returns one row of the grid.
    pub fn row(&self, row: usize) -> [T; 3] {
        self.0[row]
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}
impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}
