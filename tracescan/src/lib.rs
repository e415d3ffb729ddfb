// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run, run_with_config};
pub use crate::config::{DEFAULT_KEYWORDS, ScanConfig};
pub use crate::core::scanner::matcher::KeywordMatcher;
pub use crate::core::scanner::{Scanner, scan};
pub use crate::models::{Finding, ScanReport, SkippedEntry};
pub use crate::utils::{print_findings, write_findings};
