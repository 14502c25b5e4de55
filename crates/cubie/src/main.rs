//! Command-line driver for the cubie move engine.

use clap::Parser;

mod cli;

fn main() -> eyre::Result<()> {
    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install()?;

    let args = cli::Args::parse();
    cli::exec(args.subcommand)
}
