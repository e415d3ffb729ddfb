// src/main.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use tracescan::{Args, run};

fn setup_logger(level: LevelFilter) -> Result<()> {
    // Stderr only, so the report on stdout stays clean.
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialise logger")
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logger(args.log_level())?;
    run()?;
    Ok(())
}
