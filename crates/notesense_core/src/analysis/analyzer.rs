//! Text-analysis facade consumed by note and assistant callers.
//!
//! # Responsibility
//! - Bind one immutable stopword set and one config into a reusable analyzer.
//! - Convert unexpected internal panics into each operation's fallback output.
//! - Offer free functions backed by a lazily built default analyzer.
//!
//! # Invariants
//! - No public operation panics or returns an error for text input.
//! - `TextAnalyzer` is `Send + Sync`; clones share the same stopword set.
//! - Logs carry sizes and counts only, never note text.

use crate::analysis::{keywords, summarizer, title};
use crate::config::{AnalysisConfig, ConfigError};
use crate::model::insight::NoteInsights;
use crate::text::stopwords::StopwordSet;
use crate::text::tokenizer::{
    self, is_valid_sentence, normalize_text, split_sentences, truncate_chars, word_count,
};
use log::{debug, error};
use once_cell::sync::Lazy;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Keywords included in [`NoteInsights`].
const INSIGHT_KEYWORDS: usize = 10;
/// Key phrases included in [`NoteInsights`].
const INSIGHT_PHRASES: usize = 5;

static DEFAULT_ANALYZER: Lazy<TextAnalyzer> = Lazy::new(TextAnalyzer::default);

/// Stateless analysis service over an immutable stopword set.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    stopwords: Arc<StopwordSet>,
    config: AnalysisConfig,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(StopwordSet::builtin(), AnalysisConfig::default())
    }
}

impl TextAnalyzer {
    /// Creates an analyzer without validating `config`.
    pub fn new(stopwords: Arc<StopwordSet>, config: AnalysisConfig) -> Self {
        Self { stopwords, config }
    }

    /// Creates an analyzer over the built-in stopwords with a validated config.
    ///
    /// # Errors
    /// - Returns `ConfigError` when `config.validate()` fails.
    pub fn with_config(config: AnalysisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(StopwordSet::builtin(), config))
    }

    /// Creates an analyzer whose stopwords come from a file.
    ///
    /// A missing or empty file falls back to the built-in set with a warning.
    ///
    /// # Errors
    /// - Returns `ConfigError` when `config.validate()` fails.
    pub fn with_stopwords_file(
        path: impl AsRef<Path>,
        config: AnalysisConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(StopwordSet::load_or_builtin(path), config))
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Extractive summary, or a placeholder/truncation for degenerate input.
    pub fn summarize(&self, text: &str) -> String {
        guarded(
            "summarize",
            text,
            || summarizer::summarize(text, &self.stopwords, &self.config),
            || self.degraded_summary(text),
        )
    }

    /// Top sentences without bullet markers, count clamped to `[3, 5]`.
    pub fn summarize_to_bullet_points(&self, text: &str, num_points: usize) -> Vec<String> {
        guarded(
            "summarize_bullets",
            text,
            || {
                summarizer::summarize_to_bullet_points(
                    text,
                    num_points,
                    &self.stopwords,
                    &self.config,
                )
            },
            Vec::new,
        )
    }

    pub fn suggest_title(&self, text: &str) -> String {
        guarded(
            "suggest_title",
            text,
            || title::suggest_title(text, &self.stopwords, &self.config),
            || title::UNTITLED_NOTE.to_string(),
        )
    }

    pub fn suggest_multiple_titles(&self, text: &str, count: usize) -> Vec<String> {
        guarded(
            "suggest_titles",
            text,
            || title::suggest_multiple_titles(text, count, &self.stopwords, &self.config),
            || vec![title::UNTITLED_NOTE.to_string()],
        )
    }

    pub fn suggest_tags(&self, text: &str, max_tags: usize) -> Vec<String> {
        guarded(
            "suggest_tags",
            text,
            || keywords::suggest_tags(text, max_tags, &self.stopwords, &self.config),
            || self.degraded_tags(text),
        )
    }

    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        guarded(
            "extract_keywords",
            text,
            || keywords::extract_keywords(text, top_n, &self.stopwords, &self.config),
            Vec::new,
        )
    }

    pub fn extract_key_phrases(&self, text: &str, top_n: usize) -> Vec<String> {
        guarded(
            "extract_key_phrases",
            text,
            || keywords::extract_key_phrases(text, top_n, &self.stopwords, &self.config),
            Vec::new,
        )
    }

    pub fn strip_html(&self, html: &str) -> String {
        guarded(
            "strip_html",
            html,
            || tokenizer::strip_html(html),
            || normalize_text(html),
        )
    }

    /// Returns whether text holds at least one valid sentence or keyword.
    pub fn has_meaningful_content(&self, text: &str) -> bool {
        guarded(
            "meaningful_content",
            text,
            || {
                is_valid_sentence(text, self.config.min_valid_sentence_chars)
                    || !keywords::extract_keywords(text, 1, &self.stopwords, &self.config)
                        .is_empty()
            },
            || false,
        )
    }

    /// Runs every capability once and bundles the results.
    pub fn analyze_note(&self, text: &str) -> NoteInsights {
        if text.trim().is_empty() {
            return NoteInsights::empty(
                title::UNTITLED_NOTE,
                summarizer::EMPTY_SUMMARY,
                vec![keywords::EMPTY_TAG.to_string()],
            );
        }

        let started_at = Instant::now();
        let insights = NoteInsights {
            title: self.suggest_title(text),
            summary: self.summarize(text),
            bullet_points: self
                .summarize_to_bullet_points(text, self.config.summary_max_sentences),
            tags: self.suggest_tags(text, self.config.max_tags),
            keywords: self.extract_keywords(text, INSIGHT_KEYWORDS),
            key_phrases: self.extract_key_phrases(text, INSIGHT_PHRASES),
            category: guarded(
                "detect_category",
                text,
                || keywords::detect_category(text).map(|(category, _)| category),
                || None,
            ),
            word_count: word_count(text),
            sentence_count: split_sentences(text, self.config.min_valid_sentence_chars).len(),
        };
        debug!(
            "event=analyze_note module=analysis status=ok input_chars={} sentences={} tags={} duration_us={}",
            text.len(),
            insights.sentence_count,
            insights.tags.len(),
            started_at.elapsed().as_micros()
        );
        insights
    }

    fn degraded_summary(&self, text: &str) -> String {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return summarizer::EMPTY_SUMMARY.to_string();
        }
        truncate_chars(&normalized, self.config.summary_fallback_chars)
    }

    fn degraded_tags(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return vec![keywords::EMPTY_TAG.to_string()];
        }
        keywords::FALLBACK_TAGS
            .iter()
            .take(self.config.min_tags)
            .map(|tag| (*tag).to_string())
            .collect()
    }
}

/// Runs `operation`, returning `fallback()` if it panics.
fn guarded<T>(
    operation: &'static str,
    input: &str,
    run: impl FnOnce() -> T,
    fallback: impl FnOnce() -> T,
) -> T {
    let started_at = Instant::now();
    match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(value) => {
            debug!(
                "event={} module=analysis status=ok input_chars={} duration_us={}",
                operation,
                input.len(),
                started_at.elapsed().as_micros()
            );
            value
        }
        Err(_) => {
            error!(
                "event={} module=analysis status=fallback error_code=internal_panic input_chars={}",
                operation,
                input.len()
            );
            fallback()
        }
    }
}

/// Summarizes with the default analyzer.
pub fn summarize(text: &str) -> String {
    DEFAULT_ANALYZER.summarize(text)
}

/// Bullet-point summary with the default analyzer.
pub fn summarize_to_bullet_points(text: &str, num_points: usize) -> Vec<String> {
    DEFAULT_ANALYZER.summarize_to_bullet_points(text, num_points)
}

/// Suggests a title with the default analyzer.
pub fn suggest_title(text: &str) -> String {
    DEFAULT_ANALYZER.suggest_title(text)
}

/// Suggests several titles with the default analyzer.
pub fn suggest_multiple_titles(text: &str, count: usize) -> Vec<String> {
    DEFAULT_ANALYZER.suggest_multiple_titles(text, count)
}

/// Suggests tags with the default analyzer.
pub fn suggest_tags(text: &str, max_tags: usize) -> Vec<String> {
    DEFAULT_ANALYZER.suggest_tags(text, max_tags)
}

/// Extracts keywords with the default analyzer.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    DEFAULT_ANALYZER.extract_keywords(text, top_n)
}

/// Extracts two-word phrases with the default analyzer.
pub fn extract_key_phrases(text: &str, top_n: usize) -> Vec<String> {
    DEFAULT_ANALYZER.extract_key_phrases(text, top_n)
}

/// Converts HTML note content to plain text.
pub fn strip_html(html: &str) -> String {
    DEFAULT_ANALYZER.strip_html(html)
}

/// Full insight bundle with the default analyzer.
pub fn analyze_note(text: &str) -> NoteInsights {
    DEFAULT_ANALYZER.analyze_note(text)
}

#[cfg(test)]
mod tests {
    use super::{guarded, TextAnalyzer};
    use crate::config::{AnalysisConfig, ConfigError};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn analyzer_is_thread_safe() {
        assert_send_sync::<TextAnalyzer>();
    }

    #[test]
    fn guarded_returns_fallback_on_panic() {
        let value = guarded("test_op", "input", || -> u32 { panic!("boom") }, || 7);
        assert_eq!(value, 7);
    }

    #[test]
    fn with_config_rejects_invalid_bounds() {
        let config = AnalysisConfig {
            summary_min_sentences: 6,
            ..AnalysisConfig::default()
        };
        let err = TextAnalyzer::with_config(config).unwrap_err();
        assert!(matches!(err, ConfigError::InvertedBounds { .. }));
    }

    #[test]
    fn missing_stopword_file_falls_back_to_builtin() {
        let analyzer = TextAnalyzer::with_stopwords_file(
            "/nonexistent/notesense/stopwords.txt",
            AnalysisConfig::default(),
        )
        .unwrap();
        assert!(analyzer.stopwords().contains("the"));
    }

    #[test]
    fn meaningful_content_detection() {
        let analyzer = TextAnalyzer::default();
        assert!(analyzer.has_meaningful_content("Buy milk"));
        assert!(!analyzer.has_meaningful_content("!!"));
        assert!(!analyzer.has_meaningful_content(""));
    }
}
