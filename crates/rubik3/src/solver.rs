use std::process::Command;

use rubik3_core::{MoveSeq, SolveError, Solver};

use crate::settings::SolverConfig;

/// Solver that runs an external program.
///
/// The facelet string is passed as the last argument and the solution is read
/// from standard output as a space-separated move sequence.
#[derive(Debug, Clone)]
pub(crate) struct CommandSolver {
    program: String,
    args: Vec<String>,
}

impl CommandSolver {
    /// Returns the configured solver, or `None` if no command is configured.
    pub fn from_settings(settings: &SolverConfig) -> Option<Self> {
        Some(Self {
            program: settings.command.clone()?,
            args: settings.args.clone(),
        })
    }
}

impl Solver for CommandSolver {
    fn solve(&mut self, facelets: &str) -> Result<MoveSeq, SolveError> {
        log::info!("running solver {:?}", self.program);
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(facelets)
            .output()
            .map_err(|e| SolveError::Io(format!("cannot run {:?}: {e}", self.program)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let msg = [stderr.trim(), stdout.trim()]
                .into_iter()
                .find(|s| !s.is_empty())
                .unwrap_or("solver exited with an error");
            return Err(SolveError::Unsolvable(msg.to_owned()));
        }
        parse_solver_output(&stdout)
    }
}

/// Parses the standard output of a solver.
///
/// Solvers report unsolvable cubes with a line starting with `Error`.
pub(crate) fn parse_solver_output(stdout: &str) -> Result<MoveSeq, SolveError> {
    let stdout = stdout.trim();
    if stdout.starts_with("Error") {
        return Err(SolveError::Unsolvable(stdout.to_owned()));
    }
    Ok(stdout.parse()?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rubik3_core::ParseMoveError;

    use super::*;

    #[test]
    fn test_parse_solver_output() {
        assert_eq!(
            Ok("R U R' U2".parse::<MoveSeq>().unwrap()),
            parse_solver_output("R U R' U2 \n"),
        );
        assert_eq!(Ok(MoveSeq::default()), parse_solver_output("\n"));
        assert_eq!(
            Err(SolveError::Unsolvable(
                "Error. Probably cubie is twisted".to_owned()
            )),
            parse_solver_output("Error. Probably cubie is twisted\n"),
        );
        assert_eq!(
            Err(SolveError::Parse(ParseMoveError::InvalidToken("Rw".to_owned()))),
            parse_solver_output("R Rw"),
        );
    }

    #[test]
    fn test_unconfigured_solver() {
        assert!(CommandSolver::from_settings(&SolverConfig::default()).is_none());
    }

    #[test]
    fn test_missing_program() {
        let mut solver = CommandSolver {
            program: "rubik3-test-solver-that-does-not-exist".to_owned(),
            args: vec![],
        };
        assert!(matches!(
            solver.solve(rubik3_core::SOLVED_FACELETS),
            Err(SolveError::Io(_)),
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_solver() {
        // `sh -c SCRIPT FACELETS` binds the facelets to `$0`.
        let mut solver = CommandSolver {
            program: "sh".to_owned(),
            args: vec!["-c".to_owned(), "echo \"F2 B'\"".to_owned()],
        };
        assert_eq!(
            Ok("F2 B'".parse::<MoveSeq>().unwrap()),
            solver.solve(rubik3_core::SOLVED_FACELETS),
        );

        let mut failing = CommandSolver {
            program: "sh".to_owned(),
            args: vec!["-c".to_owned(), "echo \"bad cube $0\" >&2; exit 1".to_owned()],
        };
        assert_eq!(
            Err(SolveError::Unsolvable(format!(
                "bad cube {}",
                rubik3_core::SOLVED_FACELETS
            ))),
            failing.solve(rubik3_core::SOLVED_FACELETS),
        );
    }
}
