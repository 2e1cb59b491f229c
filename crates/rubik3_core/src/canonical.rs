//! Conversion to and from the canonical facelet string.
//!
//! The string lists the faces in the order `U R F D L B`, each face row-major
//! starting from row 0, and spells every facelet with the letter of the face
//! whose center has the same color.

use itertools::Itertools;
use thiserror::Error;

use crate::{Color, ColorScheme, Cube, FACELET_COUNT, FaceId};

/// Error produced when exporting a cube to a facelet string.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ExportError {
    /// A facelet has a color that is missing from the color scheme
    #[error("facelet {face}({row}, {col}) has color {color} which has no face in the color scheme")]
    UnmappableFacelet {
        /// Face containing the facelet.
        face: FaceId,
        /// Row of the facelet.
        row: usize,
        /// Column of the facelet.
        col: usize,
        /// Color of the facelet.
        color: Color,
    },
}

/// Error produced when importing a cube from a facelet string.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportError {
    /// The string does not contain exactly 54 facelets
    #[error("expected {FACELET_COUNT} facelets; got {0}")]
    WrongLength(usize),
    /// A character is not a face letter
    #[error("invalid facelet {letter:?} at index {index}")]
    UnknownLetter {
        /// Index into the string.
        index: usize,
        /// Offending character.
        letter: char,
    },
    /// No color in the scheme maps to a face letter
    #[error("no color in the color scheme maps to face {0}")]
    UnmappedLetter(FaceId),
}

/// Error produced when a facelet string does not have 9 of each face letter.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("facelet counts are not 9 of each face: {}", counts_string(.counts))]
pub struct FaceletCountError {
    /// Number of facelets for each face letter, in canonical face order.
    pub counts: [usize; 6],
}

fn counts_string(counts: &[usize; 6]) -> String {
    FaceId::iter()
        .zip(counts)
        .map(|(face, n)| format!("{face}={n}"))
        .join(", ")
}

/// Checks that a facelet string consists of 54 face letters with exactly 9 of
/// each. This is necessary (but not sufficient) for the cube to be solvable.
pub fn check_facelet_counts(facelets: &str) -> Result<(), FaceletCountError> {
    let mut counts = [0; 6];
    let mut total = 0;
    for c in facelets.chars() {
        total += 1;
        if let Some(face) = FaceId::from_symbol(c) {
            counts[face as usize] += 1;
        }
    }
    if total == FACELET_COUNT && counts == [9; 6] {
        Ok(())
    } else {
        Err(FaceletCountError { counts })
    }
}

impl Cube<Color> {
    /// Returns the canonical 54-character facelet string, translating colors
    /// to face letters using `scheme`.
    pub fn to_facelet_string(&self, scheme: &ColorScheme) -> Result<String, ExportError> {
        let mut ret = String::with_capacity(FACELET_COUNT);
        for face in FaceId::iter() {
            for row in 0..3 {
                for col in 0..3 {
                    let color = self[(face, row, col)];
                    let letter = scheme
                        .face_of(color)
                        .ok_or(ExportError::UnmappableFacelet {
                            face,
                            row,
                            col,
                            color,
                        })?;
                    ret.push(letter.symbol());
                }
            }
        }
        Ok(ret)
    }

    /// Constructs a cube from a canonical facelet string, translating face
    /// letters to colors using `scheme`.
    ///
    /// This does not check whether the cube is solvable.
    pub fn from_facelet_string(facelets: &str, scheme: &ColorScheme) -> Result<Self, ImportError> {
        let letters = facelets.chars().collect_vec();
        if letters.len() != FACELET_COUNT {
            return Err(ImportError::WrongLength(letters.len()));
        }

        let mut colors = Vec::with_capacity(FACELET_COUNT);
        for (index, &letter) in letters.iter().enumerate() {
            let face =
                FaceId::from_symbol(letter).ok_or(ImportError::UnknownLetter { index, letter })?;
            let color = scheme
                .color_of(face)
                .ok_or(ImportError::UnmappedLetter(face))?;
            colors.push(color);
        }

        Ok(Self::from_fn(|face, row, col| {
            colors[face as usize * 9 + row * 3 + col]
        }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Move, SOLVED_FACELETS};

    #[test]
    fn test_solved_export() {
        let scheme = ColorScheme::default();
        let s = Cube::solved().to_facelet_string(&scheme).unwrap();
        assert_eq!(SOLVED_FACELETS, s);
        assert_eq!(Ok(()), check_facelet_counts(&s));
    }

    #[test]
    fn test_export_after_u() {
        let mut cube = Cube::solved();
        cube.apply_move(Move::cw(FaceId::U));
        let s = cube.to_facelet_string(&ColorScheme::default()).unwrap();
        assert_eq!(
            "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB",
            s,
        );
    }

    #[test]
    fn test_export_unmappable_facelet() {
        let mut scheme = ColorScheme::default();
        scheme.remove(Color::Green);
        let err = Cube::solved().to_facelet_string(&scheme).unwrap_err();
        assert_eq!(
            ExportError::UnmappableFacelet {
                face: FaceId::B,
                row: 0,
                col: 0,
                color: Color::Green,
            },
            err,
        );
    }

    #[test]
    fn test_import_errors() {
        let scheme = ColorScheme::default();
        assert_eq!(
            Err(ImportError::WrongLength(53)),
            Cube::from_facelet_string(&SOLVED_FACELETS[1..], &scheme),
        );

        let mut bad = SOLVED_FACELETS.to_owned();
        bad.replace_range(10..11, "x");
        assert_eq!(
            Err(ImportError::UnknownLetter {
                index: 10,
                letter: 'x',
            }),
            Cube::from_facelet_string(&bad, &scheme),
        );

        let mut partial = scheme.clone();
        partial.remove(Color::Red);
        assert_eq!(
            Err(ImportError::UnmappedLetter(FaceId::R)),
            Cube::from_facelet_string(SOLVED_FACELETS, &partial),
        );
    }

    #[test]
    fn test_facelet_counts() {
        let mut bad = SOLVED_FACELETS.to_owned();
        bad.replace_range(0..1, "R");
        let err = check_facelet_counts(&bad).unwrap_err();
        assert_eq!([8, 10, 9, 9, 9, 9], err.counts);
        assert_eq!(
            "facelet counts are not 9 of each face: U=8, R=10, F=9, D=9, L=9, B=9",
            err.to_string(),
        );
        assert!(check_facelet_counts(&SOLVED_FACELETS[9..]).is_err());
    }
}
