//! Stopword sets for Vietnamese and English note text.
//!
//! # Responsibility
//! - Parse the bundled newline-delimited stopword resource.
//! - Load caller-provided stopword files with a logged fallback.
//!
//! # Invariants
//! - A `StopwordSet` is immutable after construction.
//! - Stored words are trimmed, lowercase and NFC-normalized.
//! - The built-in set is initialized at most once per process and never empty.

use log::{info, warn};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

const BUNDLED_STOPWORDS: &str = include_str!("../../resources/stopwords.txt");

/// Used only when the bundled resource yields no words.
const FALLBACK_STOPWORDS: &[&str] = &[
    "và", "của", "là", "có", "được", "cho", "không", "những", "các", "này", "một", "với",
    "trong", "tôi", "the", "a", "an", "and", "or", "is", "are", "to", "of", "in", "on", "for",
    "with", "it", "this", "that",
];

static BUILTIN: Lazy<Arc<StopwordSet>> = Lazy::new(|| {
    let parsed = StopwordSet::parse(BUNDLED_STOPWORDS);
    if parsed.is_empty() {
        warn!(
            "event=stopwords_load module=text status=fallback source=bundled words={}",
            FALLBACK_STOPWORDS.len()
        );
        return Arc::new(StopwordSet::fallback());
    }
    info!(
        "event=stopwords_load module=text status=ok source=bundled words={}",
        parsed.len()
    );
    Arc::new(parsed)
});

/// Failure while reading a stopword file from disk.
#[derive(Debug)]
pub enum StopwordError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File was readable but contained no words.
    Empty { path: PathBuf },
}

impl Display for StopwordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read stopwords `{}`: {source}", path.display())
            }
            Self::Empty { path } => {
                write!(f, "stopword file `{}` contains no words", path.display())
            }
        }
    }
}

impl Error for StopwordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Immutable set of low-information words excluded from frequency analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Returns the shared bundled set (Vietnamese core + common English).
    pub fn builtin() -> Arc<StopwordSet> {
        Arc::clone(&BUILTIN)
    }

    /// Returns the small hardcoded list used when no resource is usable.
    pub fn fallback() -> Self {
        Self::from_words(FALLBACK_STOPWORDS.iter().copied())
    }

    /// Builds a set from arbitrary words, normalizing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| normalize_word(word.as_ref()))
            .collect();
        Self { words }
    }

    /// Parses newline-delimited resource text; `#` lines are comments.
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Reads and parses a stopword file.
    ///
    /// # Errors
    /// - `StopwordError::Io` when the file cannot be read as UTF-8.
    /// - `StopwordError::Empty` when no words remain after parsing.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, StopwordError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StopwordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = Self::parse(&text);
        if parsed.is_empty() {
            return Err(StopwordError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(parsed)
    }

    /// Loads a stopword file, falling back to the built-in set on any failure.
    ///
    /// Failures are logged as warnings and never surfaced.
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Arc<StopwordSet> {
        match Self::load_from_path(path.as_ref()) {
            Ok(set) => {
                info!(
                    "event=stopwords_load module=text status=ok source=file words={}",
                    set.len()
                );
                Arc::new(set)
            }
            Err(err) => {
                warn!(
                    "event=stopwords_load module=text status=fallback source=file error={}",
                    err
                );
                Self::builtin()
            }
        }
    }

    /// Returns whether `word` is a stopword. Expects a lowercase token.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.nfc().collect::<String>().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::StopwordSet;

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let set = StopwordSet::parse("# header\n\nVà\n  the  \n#và\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("và"));
        assert!(set.contains("the"));
    }

    #[test]
    fn builtin_covers_both_languages() {
        let set = StopwordSet::builtin();
        assert!(set.contains("của"));
        assert!(set.contains("the"));
        assert!(!set.contains("java"));
    }

    #[test]
    fn fallback_is_not_empty() {
        assert!(!StopwordSet::fallback().is_empty());
    }

    #[test]
    fn decomposed_input_matches_composed_lookup() {
        // "và" written as `a` + combining grave accent.
        let set = StopwordSet::parse("va\u{0300}");
        assert!(set.contains("và"));
    }
}
