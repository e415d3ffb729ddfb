// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser};
use log::{LevelFilter, info};

use crate::config::ScanConfig;
use crate::core::scanner::Scanner;
use crate::models::ScanReport;
use crate::utils::print_findings;

/// Looks for files and folders left behind by PrimoCache, Romex Software and
/// L2 cache tools in the usual install and application-data locations.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Scans the built-in locations and prints the report to stdout.
///
/// Finding nothing is not an error; the report says so.
///
/// # Errors
///
/// Fails only if the report cannot be written to stdout.
pub fn run() -> Result<ScanReport> {
    run_with_config(ScanConfig::from_env())
}

/// [`run`] against an explicit configuration.
///
/// # Errors
///
/// Fails only if the report cannot be written to stdout.
pub fn run_with_config(config: ScanConfig) -> Result<ScanReport> {
    let scanner = Scanner::new(config);
    let report = scanner.run();

    print_findings(&report.findings).context("Failed to write scan report to stdout")?;

    info!(
        "Scanned {} of {} root(s): {} finding(s), {} entries skipped",
        report.roots_scanned,
        scanner.config().roots.len(),
        report.findings.len(),
        report.skipped.len()
    );

    Ok(report)
}
