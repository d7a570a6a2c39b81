use anyhow::Result;
use clap::Parser;
use std::process;
use tracing::debug;

mod cli;
mod error;
mod format;
mod geo;

use cli::{Cli, USAGE};
use error::HaversineError;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let report = match cli::run(&cli) {
        Err(HaversineError::Usage { found }) => {
            debug!(found, "wrong number of coordinate arguments");
            println!("{}", USAGE);
            process::exit(1);
        }
        result => result?,
    };
    print!("{}", report);

    Ok(())
}
