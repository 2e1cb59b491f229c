use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::FaceId;

/// Error produced when parsing a move token.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseMoveError {
    /// Token is not one of the 18 face turns
    #[error("invalid move token {0:?}")]
    InvalidToken(String),
}

/// Amount by which a face is turned.
#[derive(EnumIter, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    /// 90 degrees clockwise
    #[default]
    Cw,
    /// 90 degrees counterclockwise
    Ccw,
    /// 180 degrees
    Half,
}

impl Turn {
    /// Returns the suffix used in move notation.
    pub fn suffix(self) -> &'static str {
        match self {
            Turn::Cw => "",
            Turn::Ccw => "'",
            Turn::Half => "2",
        }
    }

    /// Returns the number of clockwise quarter turns equivalent to this turn.
    pub fn quarter_turns(self) -> usize {
        match self {
            Turn::Cw => 1,
            Turn::Half => 2,
            Turn::Ccw => 3,
        }
    }

    /// Returns the turn that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Turn::Cw => Turn::Ccw,
            Turn::Ccw => Turn::Cw,
            Turn::Half => Turn::Half,
        }
    }
}

/// Single face turn, such as `R`, `U'`, or `F2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face being turned.
    pub face: FaceId,
    /// Turn amount, viewed from outside the cube looking at `face`.
    pub turn: Turn,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMoveError::InvalidToken(s.to_owned());

        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(FaceId::from_symbol)
            .ok_or_else(invalid)?;
        let turn = match chars.as_str() {
            "" => Turn::Cw,
            "'" => Turn::Ccw,
            "2" => Turn::Half,
            _ => return Err(invalid()),
        };
        Ok(Move { face, turn })
    }
}

impl Serialize for Move {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl Move {
    /// Pool of moves used for shuffling: every quarter turn and its inverse.
    ///
    /// **Changing the order changes the scramble produced for a given seed.**
    pub const SCRAMBLE_POOL: [Move; 12] = {
        use FaceId::*;

        [
            Move::cw(U),
            Move::ccw(U),
            Move::cw(D),
            Move::ccw(D),
            Move::cw(R),
            Move::ccw(R),
            Move::cw(L),
            Move::ccw(L),
            Move::cw(F),
            Move::ccw(F),
            Move::cw(B),
            Move::ccw(B),
        ]
    };

    /// Constructs a clockwise quarter turn.
    pub const fn cw(face: FaceId) -> Self {
        Self {
            face,
            turn: Turn::Cw,
        }
    }
    /// Constructs a counterclockwise quarter turn.
    pub const fn ccw(face: FaceId) -> Self {
        Self {
            face,
            turn: Turn::Ccw,
        }
    }
    /// Constructs a half turn.
    pub const fn half(face: FaceId) -> Self {
        Self {
            face,
            turn: Turn::Half,
        }
    }

    /// Returns an iterator over all 18 moves.
    pub fn all() -> impl Iterator<Item = Move> {
        FaceId::iter().cartesian_product(Turn::iter()).map(|(face, turn)| Move { face, turn })
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            face: self.face,
            turn: self.turn.rev(),
        }
    }
}

/// Sequence of moves, applied left to right.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MoveSeq(pub Vec<Move>);

impl fmt::Display for MoveSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

/// Parses strictly: any unrecognized token is an error.
impl FromStr for MoveSeq {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map(MoveSeq)
    }
}

impl FromIterator<Move> for MoveSeq {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveSeq {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> IntoIterator for &'a MoveSeq {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl MoveSeq {
    /// Parses a sequence, skipping tokens that are not valid moves.
    ///
    /// Returns the sequence of valid moves along with the skipped tokens.
    pub fn parse_lenient(s: &str) -> (Self, Vec<String>) {
        let mut skipped = vec![];
        let moves = s
            .split_whitespace()
            .filter_map(|token| match token.parse() {
                Ok(m) => Some(m),
                Err(_) => {
                    skipped.push(token.to_owned());
                    None
                }
            })
            .collect();
        (moves, skipped)
    }

    /// Returns the number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the sequence that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.0.iter().rev().map(|m| m.inverse()).collect()
    }
}
