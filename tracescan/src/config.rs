// src/config.rs
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Name fragments of the software whose traces we look for.
pub const DEFAULT_KEYWORDS: [&str; 3] = ["primocache", "romex", "l2cache"];

/// Install locations that are the same on every machine.
pub const FIXED_ROOTS: [&str; 3] = [
    r"C:\Program Files",
    r"C:\Program Files (x86)",
    r"C:\ProgramData",
];

/// Per-user application data locations (roaming, then local).
pub const ROOT_ENV_VARS: [&str; 2] = ["APPDATA", "LOCALAPPDATA"];

/// Roots and keywords handed to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub roots: Vec<PathBuf>,
    /// Always lowercase.
    pub keywords: Vec<String>,
    pub follow_links: bool,
}

impl ScanConfig {
    /// Builds a configuration from arbitrary roots and keywords.
    ///
    /// Keywords are lowercased here so matching only has to lowercase the
    /// entry name.
    #[must_use]
    pub fn new<R, K>(roots: R, keywords: K) -> Self
    where
        R: IntoIterator,
        R::Item: Into<PathBuf>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            follow_links: false,
        }
    }

    /// The compiled-in roots and keywords, resolved against the process
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_env_lookup(|name| env::var_os(name))
    }

    /// Same as [`ScanConfig::from_env`] but reads variables through `lookup`.
    ///
    /// An unset variable gives an empty root, which never exists and is
    /// therefore skipped by the scanner.
    #[must_use]
    pub fn with_env_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let env_roots = ROOT_ENV_VARS
            .into_iter()
            .map(|name| lookup(name).map(PathBuf::from).unwrap_or_default());

        let roots = FIXED_ROOTS
            .into_iter()
            .map(PathBuf::from)
            .chain(env_roots)
            .collect::<Vec<_>>();

        Self::new(roots, DEFAULT_KEYWORDS)
    }

    /// Descend into symbolic links. Link cycles are then reported as skipped
    /// entries instead of being walked forever.
    #[must_use]
    pub const fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
