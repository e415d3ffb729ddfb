// src/core/scanner/matcher.rs
use std::ffi::OsStr;

/// Case-insensitive substring test of entry names against a keyword list.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl KeywordMatcher {
    #[must_use]
    pub fn new<K>(keywords: K) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns the first keyword contained in the lowercased `name`.
    ///
    /// Names that are not valid UTF-8 are compared lossily.
    #[must_use]
    pub fn matching_keyword(&self, name: &OsStr) -> Option<&str> {
        let lower = name.to_string_lossy().to_lowercase();
        self.keywords
            .iter()
            .find(|keyword| lower.contains(keyword.as_str()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn matches(&self, name: &OsStr) -> bool {
        self.matching_keyword(name).is_some()
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
