// src/core/scanner.rs
pub mod matcher;
#[cfg(test)]
pub mod test_utils;

use crate::config::ScanConfig;
use crate::models::{Finding, ScanReport, SkippedEntry};
use log::{debug, trace};
use matcher::KeywordMatcher;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks every configured root and collects entries whose names contain a
/// keyword.
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScanConfig,
    matcher: KeywordMatcher,
}

impl Scanner {
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        let matcher = KeywordMatcher::new(&config.keywords);
        Self { config, matcher }
    }

    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scans the roots in the order they were configured.
    ///
    /// Never fails: missing roots and unreadable entries are recorded on the
    /// report and the walk carries on.
    #[must_use]
    pub fn run(&self) -> ScanReport {
        let mut report = ScanReport::new();
        for root in &self.config.roots {
            self.scan_root(root, &mut report);
        }
        debug!(
            "Scan finished: {} finding(s), {} entries visited, {} skipped, {} missing root(s)",
            report.findings.len(),
            report.entries_visited,
            report.skipped.len(),
            report.missing_roots.len()
        );
        report
    }

    fn scan_root(&self, root: &Path, report: &mut ScanReport) {
        if !root.exists() {
            debug!("Skipping missing root: {}", root.display());
            report.missing_roots.push(root.to_path_buf());
            return;
        }

        debug!("Scanning root: {}", root.display());
        report.roots_scanned = report.roots_scanned.saturating_add(1);

        // Depth 0 is the root itself, which is not a candidate.
        for entry in WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.config.follow_links)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let skipped = SkippedEntry::from(&err);
                    let location = skipped.path.as_deref().unwrap_or(root);
                    debug!(
                        "Skipping unreadable entry {}: {}",
                        location.display(),
                        skipped.reason
                    );
                    report.skipped.push(skipped);
                    continue;
                }
            };

            report.entries_visited = report.entries_visited.saturating_add(1);

            if let Some(keyword) = self.matcher.matching_keyword(entry.file_name()) {
                trace!("Match '{keyword}': {}", entry.path().display());
                let finding = Finding::new(entry.into_path(), keyword);
                report.findings.push(finding);
            }
        }
    }
}

/// Scans `roots` for entries whose base name contains any of `keywords`,
/// ignoring case.
///
/// Returns full paths in discovery order. Roots that do not exist and
/// entries that cannot be read are skipped silently.
#[must_use]
pub fn scan<R, K>(roots: R, keywords: K) -> Vec<Finding>
where
    R: IntoIterator,
    R::Item: Into<PathBuf>,
    K: IntoIterator,
    K::Item: AsRef<str>,
{
    Scanner::new(ScanConfig::new(roots, keywords))
        .run()
        .into_findings()
}
