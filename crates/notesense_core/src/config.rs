//! Tuning constants for the text-analysis pipeline.
//!
//! # Responsibility
//! - Collect every threshold used by tokenization, scoring, summarization,
//!   tagging and title suggestion in one serializable value.
//! - Reject configurations that would make the pipeline contracts unsatisfiable.
//!
//! # Invariants
//! - `AnalysisConfig::default()` always passes `validate()`.
//! - Missing fields in serialized form fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Thresholds and bounds shared by all analysis components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum characters for a sentence to take part in summarization.
    pub min_sentence_chars: usize,
    /// Minimum characters for a segment to count as a sentence at all.
    pub min_valid_sentence_chars: usize,
    /// Minimum characters for a general token.
    pub min_token_chars: usize,
    /// Minimum characters for a keyword/tag-worthy token.
    pub min_keyword_chars: usize,
    pub summary_min_sentences: usize,
    pub summary_max_sentences: usize,
    /// Character cap for the truncation fallback of `summarize`.
    pub summary_fallback_chars: usize,
    pub first_sentence_boost: f64,
    pub last_sentence_boost: f64,
    pub min_tags: usize,
    pub max_tags: usize,
    /// Occurrences required before a frequent term becomes a tag.
    pub min_tag_occurrences: usize,
    pub title_min_words: usize,
    pub title_max_words: usize,
    /// Extra words allowed for a title that was a complete punctuated sentence.
    pub title_punctuated_tolerance: usize,
    /// Extra words allowed for any other title candidate.
    pub title_plain_tolerance: usize,
    /// Number of top keywords used to pick the keyword-richest sentence.
    pub title_keyword_pool: usize,
    /// Number of top keywords joined by the keyword-concatenation fallback.
    pub title_concat_keywords: usize,
    pub max_title_candidates: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: 10,
            min_valid_sentence_chars: 3,
            min_token_chars: 2,
            min_keyword_chars: 3,
            summary_min_sentences: 3,
            summary_max_sentences: 5,
            summary_fallback_chars: 200,
            first_sentence_boost: 1.2,
            last_sentence_boost: 1.1,
            min_tags: 3,
            max_tags: 7,
            min_tag_occurrences: 2,
            title_min_words: 3,
            title_max_words: 20,
            title_punctuated_tolerance: 15,
            title_plain_tolerance: 8,
            title_keyword_pool: 10,
            title_concat_keywords: 5,
            max_title_candidates: 5,
        }
    }
}

impl AnalysisConfig {
    /// Validates bound ordering and non-zero requirements.
    ///
    /// # Errors
    /// - Returns `ConfigError::Zero` for thresholds that must be positive.
    /// - Returns `ConfigError::InvertedBounds` when a `min_*` exceeds its `max_*`.
    /// - Returns `ConfigError::InvalidBoost` for non-finite or non-positive boosts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("min_token_chars", self.min_token_chars),
            ("min_keyword_chars", self.min_keyword_chars),
            ("summary_min_sentences", self.summary_min_sentences),
            ("summary_fallback_chars", self.summary_fallback_chars),
            ("min_tags", self.min_tags),
            ("min_tag_occurrences", self.min_tag_occurrences),
            ("title_min_words", self.title_min_words),
            ("title_keyword_pool", self.title_keyword_pool),
            ("title_concat_keywords", self.title_concat_keywords),
            ("max_title_candidates", self.max_title_candidates),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::Zero(field));
            }
        }

        check_bounds(
            "summary_sentences",
            self.summary_min_sentences,
            self.summary_max_sentences,
        )?;
        check_bounds("tags", self.min_tags, self.max_tags)?;
        check_bounds("title_words", self.title_min_words, self.title_max_words)?;

        for (field, value) in [
            ("first_sentence_boost", self.first_sentence_boost),
            ("last_sentence_boost", self.last_sentence_boost),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidBoost { field, value });
            }
        }

        Ok(())
    }

    /// Clamps a requested summary length into the configured bounds.
    pub fn clamp_summary_sentences(&self, requested: usize) -> usize {
        requested.clamp(self.summary_min_sentences, self.summary_max_sentences)
    }

    /// Clamps a requested tag count into the configured bounds.
    pub fn clamp_tags(&self, requested: usize) -> usize {
        requested.clamp(self.min_tags, self.max_tags)
    }

    /// Clamps a requested number of title candidates into `[1, max_title_candidates]`.
    pub fn clamp_title_candidates(&self, requested: usize) -> usize {
        requested.clamp(1, self.max_title_candidates)
    }
}

fn check_bounds(name: &'static str, min: usize, max: usize) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedBounds { name, min, max });
    }
    Ok(())
}

/// Validation error for [`AnalysisConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Zero(&'static str),
    InvertedBounds {
        name: &'static str,
        min: usize,
        max: usize,
    },
    InvalidBoost {
        field: &'static str,
        value: f64,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zero(field) => write!(f, "config field `{field}` must be greater than zero"),
            Self::InvertedBounds { name, min, max } => {
                write!(f, "config bounds `{name}` are inverted: min {min} > max {max}")
            }
            Self::InvalidBoost { field, value } => {
                write!(f, "config field `{field}` must be a positive number, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{AnalysisConfig, ConfigError};

    #[test]
    fn default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_tag_bounds() {
        let config = AnalysisConfig {
            min_tags: 8,
            max_tags: 7,
            ..AnalysisConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvertedBounds {
                name: "tags",
                min: 8,
                max: 7
            }
        );
    }

    #[test]
    fn rejects_zero_keyword_length() {
        let config = AnalysisConfig {
            min_keyword_chars: 0,
            ..AnalysisConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::Zero("min_keyword_chars")
        );
    }

    #[test]
    fn rejects_nan_boost() {
        let config = AnalysisConfig {
            last_sentence_boost: f64::NAN,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::InvalidBoost {
                field: "last_sentence_boost",
                ..
            }
        ));
    }

    #[test]
    fn clamps_requested_counts() {
        let config = AnalysisConfig::default();
        assert_eq!(config.clamp_tags(1), 3);
        assert_eq!(config.clamp_tags(50), 7);
        assert_eq!(config.clamp_summary_sentences(0), 3);
        assert_eq!(config.clamp_summary_sentences(9), 5);
        assert_eq!(config.clamp_title_candidates(0), 1);
        assert_eq!(config.clamp_title_candidates(8), 5);
    }
}
