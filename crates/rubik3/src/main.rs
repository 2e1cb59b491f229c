//! Command-line front end for the 3x3x3 Rubik's cube engine.

mod cli;
mod settings;
mod solver;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;

    // Initialize logging.
    env_logger::builder().init();

    let args = cli::Args::parse();
    log::debug!("{}", rubik3_core::ENGINE_VERSION_STRING);

    let settings = settings::load(args.config.as_deref())?;
    cli::exec(args.subcommand, &settings)
}
