use std::time::{SystemTime, UNIX_EPOCH};

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{Cube, CubeState, Move, MoveSeq};

/// Parameters to deterministically generate a shuffle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Number of moves to apply.
    pub length: u32,
    /// Random seed. The same seed always produces the same shuffle.
    pub seed: String,
}

impl ScrambleParams {
    /// Constructs parameters from an explicit seed.
    pub fn new(length: u32, seed: impl Into<String>) -> Self {
        Self {
            length,
            seed: seed.into(),
        }
    }

    /// Constructs parameters with a fresh seed based on the current time and
    /// the thread-local random number generator.
    pub fn random(length: u32) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let random_u64: u64 = rand::rng().random();
        Self::new(length, format!("{millis}_{random_u64}"))
    }

    /// Returns the random number generator for this scramble.
    ///
    /// The seed string is hashed with SHA-256 so that any string (including
    /// short or empty ones) yields a well-distributed 256-bit seed.
    pub fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = Sha256::new();
        sha256.update((self.seed.len() as u64).to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let mut seed = [0_u8; 32];
        seed.copy_from_slice(&sha256.finalize());
        rand_chacha::ChaCha12Rng::from_seed(seed)
    }

    /// Generates a scrambled cube.
    pub fn scramble(&self) -> ScrambledCube {
        let mut state = CubeState::solved();
        let moves = state.shuffle(self.length, &mut self.rng());
        log::debug!("scrambled with seed {:?}: {moves}", self.seed);
        ScrambledCube {
            params: self.clone(),
            moves,
            state,
        }
    }
}

/// Cube along with the shuffle that produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambledCube {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Moves applied to the solved cube.
    pub moves: MoveSeq,
    /// Resulting state.
    pub state: CubeState,
}

impl<T: Copy> Cube<T> {
    /// Applies `count` moves, each chosen independently and uniformly from
    /// [`Move::SCRAMBLE_POOL`], and returns them.
    ///
    /// Half turns are never chosen directly.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, count: u32, rng: &mut R) -> MoveSeq {
        let moves: MoveSeq = (0..count)
            .filter_map(|_| Move::SCRAMBLE_POOL.choose(&mut *rng).copied())
            .collect();
        self.apply_seq(&moves);
        moves
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Turn;

    #[test]
    fn test_shuffle_zero_moves() {
        let scrambled = ScrambleParams::new(0, "seed").scramble();
        assert!(scrambled.moves.is_empty());
        assert!(scrambled.state.is_solved());
    }

    #[test]
    fn test_shuffle_is_reproducible() {
        let a = ScrambleParams::new(30, "reproducible").scramble();
        let b = ScrambleParams::new(30, "reproducible").scramble();
        assert_eq!(a, b);
        assert_eq!(30, a.moves.len());
        assert!(!a.state.is_solved());
        assert!(a.moves.0.iter().all(|m| m.turn != Turn::Half));
    }

    #[test]
    fn test_shuffle_replays_through_moves() {
        let scrambled = ScrambleParams::new(30, "replay").scramble();
        let replayed = CubeState::solved().with_moves(&scrambled.moves);
        assert_eq!(scrambled.state, replayed);

        let mut undone = scrambled.state;
        undone.apply_seq(&scrambled.moves.inverse());
        assert!(undone.is_solved());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = ScrambleParams::new(30, "one").scramble();
        let b = ScrambleParams::new(30, "two").scramble();
        assert_ne!(a.moves, b.moves);
    }

    #[test]
    fn test_shuffle_with_caller_rng() {
        let params = ScrambleParams::new(0, "caller");
        let mut rng = params.rng();
        let mut cube = CubeState::solved();
        let moves = cube.shuffle(12, &mut rng);
        assert_eq!(12, moves.len());
        assert_eq!(CubeState::solved().with_moves(&moves), cube);
    }
}
