// src/models/scan_report.rs
use super::{Finding, SkippedEntry};
use std::path::PathBuf;

/// Outcome of a full pass over every configured root.
///
/// `findings` keeps discovery order. Roots that did not exist end up in
/// `missing_roots`; entries that could not be read end up in `skipped`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub findings: Vec<Finding>,
    pub skipped: Vec<SkippedEntry>,
    pub missing_roots: Vec<PathBuf>,
    pub roots_scanned: u64,
    pub entries_visited: u64,
}

impl ScanReport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            findings: Vec::new(),
            skipped: Vec::new(),
            missing_roots: Vec::new(),
            roots_scanned: 0,
            entries_visited: 0,
        }
    }

    #[must_use]
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Paths of all findings, in discovery order.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.findings.iter().map(|f| f.path.clone()).collect()
    }

    #[must_use]
    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}
