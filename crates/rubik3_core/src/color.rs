use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{Cube, FaceId};

/// Sticker color.
#[derive(
    EnumIter, Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// White (Up on a solved cube)
    White,
    /// Yellow (Down on a solved cube)
    Yellow,
    /// Orange (Left on a solved cube)
    Orange,
    /// Red (Right on a solved cube)
    Red,
    /// Blue (Front on a solved cube)
    Blue,
    /// Green (Back on a solved cube)
    Green,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Color {
    /// Returns an iterator over all colors.
    pub fn iter() -> impl Iterator<Item = Color> + Clone {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the single-letter abbreviation for the color.
    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    /// Returns the color with the given single-letter abbreviation.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::iter().find(|color| color.symbol() == c)
    }
}

/// Table translating sticker colors to the face letters used in the canonical
/// facelet string.
///
/// The default scheme maps each color to the face it occupies on a solved
/// cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ColorScheme {
    faces: BTreeMap<Color, FaceId>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::from_centers(&Cube::solved())
    }
}

impl FromIterator<(Color, FaceId)> for ColorScheme {
    fn from_iter<I: IntoIterator<Item = (Color, FaceId)>>(iter: I) -> Self {
        Self {
            faces: iter.into_iter().collect(),
        }
    }
}

impl ColorScheme {
    /// Constructs the scheme implied by the center facelets of `cube`.
    ///
    /// Face turns never move centers, so this works for any state reached
    /// from a solved cube.
    pub fn from_centers(cube: &Cube<Color>) -> Self {
        FaceId::iter()
            .map(|face| (cube.face(face).center(), face))
            .collect()
    }

    /// Returns the face letter for `color`, or `None` if the color is not in
    /// the scheme.
    pub fn face_of(&self, color: Color) -> Option<FaceId> {
        self.faces.get(&color).copied()
    }

    /// Returns the color that maps to `face`, or `None` if no color does.
    pub fn color_of(&self, face: FaceId) -> Option<Color> {
        self.faces
            .iter()
            .find(|&(_, &f)| f == face)
            .map(|(&color, _)| color)
    }

    /// Maps `color` to `face`, replacing any previous mapping for `color`.
    pub fn set(&mut self, color: Color, face: FaceId) {
        self.faces.insert(color, face);
    }

    /// Removes `color` from the scheme, returning the face it mapped to.
    pub fn remove(&mut self, color: Color) -> Option<FaceId> {
        self.faces.remove(&color)
    }

    /// Returns whether every color maps to a distinct face.
    pub fn is_complete(&self) -> bool {
        let mut seen = [false; 6];
        for color in Color::iter() {
            match self.face_of(color) {
                Some(face) if !seen[face as usize] => seen[face as usize] = true,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_scheme_matches_solved_colors() {
        let scheme = ColorScheme::default();
        assert!(scheme.is_complete());
        for face in FaceId::iter() {
            assert_eq!(Some(face), scheme.face_of(face.solved_color()));
            assert_eq!(Some(face.solved_color()), scheme.color_of(face));
        }
    }

    #[test]
    fn test_partial_scheme() {
        let scheme: ColorScheme = [(Color::White, FaceId::U), (Color::Red, FaceId::R)]
            .into_iter()
            .collect();
        assert!(!scheme.is_complete());
        assert_eq!(None, scheme.face_of(Color::Green));
        assert_eq!(None, scheme.color_of(FaceId::B));

        let mut scheme = ColorScheme::default();
        assert_eq!(Some(FaceId::B), scheme.remove(Color::Green));
        assert!(!scheme.is_complete());
        scheme.set(Color::Green, FaceId::F);
        assert!(!scheme.is_complete()); // Blue and Green both map to F
    }

    #[test]
    fn test_color_symbols() {
        for color in Color::iter() {
            assert_eq!(Some(color), Color::from_symbol(color.symbol()));
        }
    }
}
