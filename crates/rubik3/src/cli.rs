use std::path::PathBuf;

use eyre::{Context, OptionExt, Result};
use itertools::Itertools;
use rubik3_core::{CubeState, ScrambleParams};
use serde::Serialize;

use crate::settings::Settings;
use crate::solver::CommandSolver;

/// 3x3x3 Rubik's cube simulator
///
/// Cube states are printed as canonical facelet strings, which list the faces
/// in the order U R F D L B.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Configuration file to load on top of the defaults and user config.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

/// Where to start from before applying moves.
#[derive(clap::Args, Debug, Default)]
pub(crate) struct StartArgs {
    /// Start from this facelet string instead of a solved cube.
    #[arg(long, value_name = "FACELETS", conflicts_with = "seed")]
    pub from: Option<String>,
    /// Start from the shuffle generated by this seed.
    #[arg(long)]
    pub seed: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Shuffle a solved cube and print the result as JSON.
    Scramble {
        /// Number of random moves (default from config).
        #[arg(short, long)]
        length: Option<u32>,
        /// Random seed; the same seed always gives the same shuffle.
        #[arg(short, long)]
        seed: Option<String>,
    },
    /// Apply moves and print the resulting cube.
    Apply {
        #[command(flatten)]
        start: StartArgs,
        /// Reject unrecognized move tokens instead of skipping them.
        #[arg(long)]
        strict: bool,
        /// Moves to apply, such as `R U R' U'`.
        moves: Vec<String>,
    },
    /// Apply moves and print only the facelet string.
    Export {
        #[command(flatten)]
        start: StartArgs,
        /// Moves to apply, such as `R U R' U'`.
        moves: Vec<String>,
    },
    /// Solve a cube using the configured external solver and print the
    /// solution as JSON.
    Solve {
        #[command(flatten)]
        start: StartArgs,
        /// Moves to apply before solving.
        moves: Vec<String>,
    },
    /// Print the effective configuration as YAML.
    Config,
}

#[derive(Serialize, Debug)]
struct ScrambleOutput {
    seed: String,
    length: u32,
    moves: String,
    facelets: String,
}

#[derive(Serialize, Debug)]
struct SolveOutput {
    facelets: String,
    solution: String,
    solved: bool,
}

pub(crate) fn exec(subcommand: Subcommand, settings: &Settings) -> Result<()> {
    match subcommand {
        Subcommand::Scramble { length, seed } => {
            let length = length.unwrap_or(settings.scramble_length);
            let params = match seed {
                Some(seed) => ScrambleParams::new(length, seed),
                None => ScrambleParams::random(length),
            };
            let scrambled = params.scramble();
            write_json_output(&ScrambleOutput {
                facelets: scrambled.state.to_facelet_string(&settings.colors)?,
                seed: scrambled.params.seed,
                length: scrambled.params.length,
                moves: scrambled.moves.to_string(),
            })
        }

        Subcommand::Apply {
            start,
            strict,
            moves,
        } => {
            let cube = start_cube(&start, &moves, strict || settings.strict_notation, settings)?;
            print!("{cube}");
            println!("{}", cube.to_facelet_string(&settings.colors)?);
            Ok(())
        }

        Subcommand::Export { start, moves } => {
            let cube = start_cube(&start, &moves, settings.strict_notation, settings)?;
            println!("{}", cube.to_facelet_string(&settings.colors)?);
            Ok(())
        }

        Subcommand::Solve { start, moves } => {
            let mut solver = CommandSolver::from_settings(&settings.solver)
                .ok_or_eyre("no solver configured; set `solver.command`")?;
            let mut cube = start_cube(&start, &moves, settings.strict_notation, settings)?;
            let facelets = cube.to_facelet_string(&settings.colors)?;
            let solution = cube
                .solve_with(&mut solver, &settings.colors)
                .wrap_err("error solving cube")?;
            if !cube.is_solved() {
                log::warn!("solver returned `{solution}` which does not solve the cube");
            }
            write_json_output(&SolveOutput {
                facelets,
                solution: solution.to_string(),
                solved: cube.is_solved(),
            })
        }

        Subcommand::Config => {
            let yaml =
                serde_norway::to_string(settings).context("error serializing configuration")?;
            print!("{yaml}");
            Ok(())
        }
    }
}

/// Builds the starting cube and applies `moves` to it.
fn start_cube(
    start: &StartArgs,
    moves: &[String],
    strict: bool,
    settings: &Settings,
) -> Result<CubeState> {
    let mut cube = match (&start.from, &start.seed) {
        (Some(facelets), _) => CubeState::from_facelet_string(facelets, &settings.colors)
            .wrap_err("error reading facelet string")?,
        (None, Some(seed)) => {
            ScrambleParams::new(settings.scramble_length, seed.clone())
                .scramble()
                .state
        }
        (None, None) => CubeState::solved(),
    };

    let moves = moves.iter().join(" ");
    if strict {
        cube.try_apply_str(&moves)
            .wrap_err("error parsing moves")?;
    } else {
        let skipped = cube.apply_str(&moves);
        if !skipped.is_empty() {
            eprintln!("skipped unrecognized moves: {}", skipped.join(" "));
        }
    }
    Ok(cube)
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
