//! FFI text-analysis API for the desktop UI.
//!
//! # Responsibility
//! - Expose note analysis as sync, use-case-level functions via FRB.
//! - Translate UI-sized integers into core counts.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every function returns a defined value for any input string.
//!
//! # See also
//! - notesense_core::analysis::analyzer

use log::{info, warn};
use notesense_core::{
    analyze_note as analyze_note_inner, core_version as core_version_inner,
    extract_key_phrases as extract_key_phrases_inner, extract_keywords as extract_keywords_inner,
    init_logging as init_logging_inner, strip_html as strip_html_inner,
    suggest_multiple_titles as suggest_multiple_titles_inner, suggest_tags as suggest_tags_inner,
    suggest_title as suggest_title_inner, summarize as summarize_inner,
    summarize_to_bullet_points as summarize_to_bullet_points_inner, NoteInsights,
};

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => {
            // Only reaches a sink when an earlier init already succeeded.
            warn!("event=ffi_init_logging module=ffi status=error level={level}");
            err
        }
    }
}

/// Analysis bundle returned to the AI-assistant dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInsightsResponse {
    pub title: String,
    pub summary: String,
    pub bullet_points: Vec<String>,
    pub tags: Vec<String>,
    pub keywords: Vec<String>,
    pub key_phrases: Vec<String>,
    /// Category name (`programming|work|study|personal|idea`), if detected.
    pub category: Option<String>,
    pub word_count: u32,
    pub sentence_count: u32,
}

impl From<NoteInsights> for NoteInsightsResponse {
    fn from(value: NoteInsights) -> Self {
        Self {
            title: value.title,
            summary: value.summary,
            bullet_points: value.bullet_points,
            tags: value.tags,
            keywords: value.keywords,
            key_phrases: value.key_phrases,
            category: value.category.map(|category| category.as_str().to_string()),
            word_count: saturating_u32(value.word_count),
            sentence_count: saturating_u32(value.sentence_count),
        }
    }
}

/// Summarizes note text.
///
/// # FFI contract
/// - Sync call; CPU-bound, linear in input size.
/// - Blank input returns a fixed placeholder.
#[flutter_rust_bridge::frb(sync)]
pub fn summarize(text: String) -> String {
    summarize_inner(&text)
}

/// Returns top sentences for bullet display; `count` is clamped to `[3, 5]`.
#[flutter_rust_bridge::frb(sync)]
pub fn summarize_to_bullet_points(text: String, count: u32) -> Vec<String> {
    summarize_to_bullet_points_inner(&text, count as usize)
}

/// Suggests one title; blank input yields `Untitled note`.
#[flutter_rust_bridge::frb(sync)]
pub fn suggest_title(text: String) -> String {
    suggest_title_inner(&text)
}

/// Suggests up to `count` titles (clamped to `[1, 5]`), never empty.
#[flutter_rust_bridge::frb(sync)]
pub fn suggest_multiple_titles(text: String, count: u32) -> Vec<String> {
    suggest_multiple_titles_inner(&text, count as usize)
}

/// Suggests 3 to 7 tags; blank input yields `["general"]`.
#[flutter_rust_bridge::frb(sync)]
pub fn suggest_tags(text: String, max_tags: u32) -> Vec<String> {
    suggest_tags_inner(&text, max_tags as usize)
}

#[flutter_rust_bridge::frb(sync)]
pub fn extract_keywords(text: String, top_n: u32) -> Vec<String> {
    extract_keywords_inner(&text, top_n as usize)
}

#[flutter_rust_bridge::frb(sync)]
pub fn extract_key_phrases(text: String, top_n: u32) -> Vec<String> {
    extract_key_phrases_inner(&text, top_n as usize)
}

/// Converts rich-text note HTML into plain text.
#[flutter_rust_bridge::frb(sync)]
pub fn strip_html(html: String) -> String {
    strip_html_inner(&html)
}

/// Runs every analysis once.
///
/// # FFI contract
/// - Set `is_html` for rich-text notes; markup is stripped first.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn analyze_note(text: String, is_html: bool) -> NoteInsightsResponse {
    let input_chars = text.len();
    let plain = if is_html {
        strip_html_inner(&text)
    } else {
        text
    };
    let response = NoteInsightsResponse::from(analyze_note_inner(&plain));
    info!(
        "event=ffi_analyze_note module=ffi status=ok input_chars={} is_html={} sentences={}",
        input_chars, is_html, response.sentence_count
    );
    response
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        analyze_note, core_version, init_logging, strip_html, suggest_tags, suggest_title,
        summarize, summarize_to_bullet_points,
    };

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/notesense-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn blank_text_gets_placeholders() {
        assert!(!summarize(String::new()).is_empty());
        assert_eq!(suggest_title(String::new()), "Untitled note");
        assert_eq!(suggest_tags(String::new(), 5), vec!["general".to_string()]);
        assert!(summarize_to_bullet_points(String::new(), 3).is_empty());
    }

    #[test]
    fn html_analysis_strips_markup_first() {
        let response = analyze_note(
            "<p>Sprint planning with the team.</p><p>Fix the login bug before Friday.</p>"
                .to_string(),
            true,
        );
        assert_eq!(response.sentence_count, 2);
        assert_eq!(response.category.as_deref(), Some("programming"));
        assert!(!response.title.contains('<'));
    }

    #[test]
    fn analyze_note_decodes_entities_in_html_notes() {
        let response = analyze_note(
            "<p>Caf&eacute; s&aacute;ng nay r&#7845;t ngon.</p>".to_string(),
            true,
        );
        assert!(response.summary.contains("Café"));
        assert!(!response.summary.contains('&'));
    }

    #[test]
    fn strip_html_separates_paragraphs() {
        assert_eq!(
            strip_html("<p>Hello</p><p>World</p>".to_string()),
            "Hello World"
        );
    }
}
