// src/models/finding.rs
use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem entry whose base name contained one of the configured keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub path: PathBuf,
    pub keyword: String,
}

impl Finding {
    #[must_use]
    pub fn new(path: PathBuf, keyword: &str) -> Self {
        Self {
            path,
            keyword: keyword.to_owned(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// An entry the walker could not read. Its subtree is left out of the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: Option<PathBuf>,
    pub reason: String,
}

impl From<&walkdir::Error> for SkippedEntry {
    fn from(err: &walkdir::Error) -> Self {
        let reason = err
            .io_error()
            .map_or_else(|| err.to_string(), ToString::to_string);
        Self {
            path: err.path().map(Path::to_path_buf),
            reason,
        }
    }
}
