// src/models.rs
mod finding;
mod scan_report;

pub use finding::{Finding, SkippedEntry};
pub use scan_report::ScanReport;
