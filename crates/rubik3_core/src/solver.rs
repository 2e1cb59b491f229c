use thiserror::Error;

use crate::{ColorScheme, CubeState, ExportError, MoveSeq, ParseMoveError};

/// Error produced while asking a solver for a solution.
///
/// All of these are recoverable; the cube is never modified when solving
/// fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The cube could not be exported
    #[error("cannot export cube: {0}")]
    Export(#[from] ExportError),
    /// The solver reported that the facelets do not form a solvable cube
    #[error("unsolvable cube: {0}")]
    Unsolvable(String),
    /// The solver returned something that is not a move sequence
    #[error("solver returned invalid moves: {0}")]
    Parse(#[from] ParseMoveError),
    /// The solver could not be reached
    #[error("solver failed: {0}")]
    Io(String),
}

/// Solving algorithm that maps a canonical facelet string to a move sequence.
///
/// The solver is treated as an opaque, synchronous collaborator.
pub trait Solver {
    /// Returns a sequence of moves that solves the cube described by
    /// `facelets`.
    fn solve(&mut self, facelets: &str) -> Result<MoveSeq, SolveError>;
}

impl<F: FnMut(&str) -> Result<MoveSeq, SolveError>> Solver for F {
    fn solve(&mut self, facelets: &str) -> Result<MoveSeq, SolveError> {
        self(facelets)
    }
}

impl CubeState {
    /// Asks `solver` for a solution and applies it.
    ///
    /// On success, returns the solution that was applied. On failure, the cube
    /// is left unchanged.
    pub fn solve_with(
        &mut self,
        solver: &mut (impl Solver + ?Sized),
        scheme: &ColorScheme,
    ) -> Result<MoveSeq, SolveError> {
        let facelets = self.to_facelet_string(scheme)?;
        log::debug!("requesting solution for {facelets}");
        let solution = solver.solve(&facelets)?;
        log::debug!("applying solution {solution}");
        self.apply_seq(&solution);
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Color, ScrambleParams, check_facelet_counts};

    #[test]
    fn test_solver_solution_is_applied() {
        let scrambled = ScrambleParams::new(20, "solve").scramble();
        let expected_facelets = scrambled
            .state
            .to_facelet_string(&ColorScheme::default())
            .unwrap();

        let inverse = scrambled.moves.inverse();
        let mut solver = |facelets: &str| -> Result<MoveSeq, SolveError> {
            assert_eq!(expected_facelets, facelets);
            Ok(inverse.clone())
        };

        let mut cube = scrambled.state;
        let solution = cube.solve_with(&mut solver, &ColorScheme::default()).unwrap();
        assert_eq!(inverse, solution);
        assert!(cube.is_solved());
    }

    #[test]
    fn test_solver_failure_leaves_cube_unchanged() {
        let scrambled = ScrambleParams::new(20, "fail").scramble();
        let mut solver = |facelets: &str| -> Result<MoveSeq, SolveError> {
            match check_facelet_counts(facelets) {
                Ok(()) => Err(SolveError::Unsolvable("corner parity".to_owned())),
                Err(e) => Err(SolveError::Unsolvable(e.to_string())),
            }
        };

        let mut cube = scrambled.state;
        let result = cube.solve_with(&mut solver, &ColorScheme::default());
        assert_eq!(
            Err(SolveError::Unsolvable("corner parity".to_owned())),
            result,
        );
        assert_eq!(scrambled.state, cube);
    }

    #[test]
    fn test_unmappable_cube_never_reaches_solver() {
        let mut scheme = ColorScheme::default();
        scheme.remove(Color::White);
        let mut solver = |_: &str| -> Result<MoveSeq, SolveError> {
            panic!("solver should not be called");
        };

        let mut cube = CubeState::solved();
        let result = cube.solve_with(&mut solver, &scheme);
        assert!(matches!(result, Err(SolveError::Export(_))));
        assert!(cube.is_solved());
    }
}
