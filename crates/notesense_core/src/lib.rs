//! Offline text analysis for note content.
//! Summaries, titles, tags and keywords from TF-IDF heuristics, with no
//! network access and no learned models.

pub mod analysis;
pub mod config;
pub mod logging;
pub mod model;
pub mod text;

pub use analysis::analyzer::{
    analyze_note, extract_key_phrases, extract_keywords, strip_html, suggest_multiple_titles,
    suggest_tags, suggest_title, summarize, summarize_to_bullet_points, TextAnalyzer,
};
pub use analysis::keywords::{normalize_tag, EMPTY_TAG, FALLBACK_TAGS};
pub use analysis::summarizer::{BULLET_MARKER, EMPTY_SUMMARY};
pub use analysis::title::UNTITLED_NOTE;
pub use config::{AnalysisConfig, ConfigError};
pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget,
};
pub use model::insight::{NoteInsights, TagCategory};
pub use text::stopwords::{StopwordError, StopwordSet};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
