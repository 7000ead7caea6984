//! Level pack and random level inspector (default binary).

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

use bubble_levels::cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if cli.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}
