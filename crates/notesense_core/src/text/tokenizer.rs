//! Sentence and word segmentation for note text.
//!
//! # Responsibility
//! - Split plain text into sentences and lowercase word tokens.
//! - Remove stopwords and reject noise segments.
//! - Convert rich-text (HTML) note bodies into plain text.
//!
//! # Invariants
//! - No function here panics for any UTF-8 input.
//! - Input is NFC-normalized before segmentation, so composed and decomposed
//!   Vietnamese diacritics tokenize identically.
//! - Sentence indexes are dense and follow document order.

use crate::text::stopwords::StopwordSet;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Elements whose text never belongs to the note body.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '…'];

/// One sentence of a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Zero-based position among the kept sentences.
    pub index: usize,
    /// Trimmed text, including its terminal punctuation when present.
    pub text: String,
}

impl Sentence {
    /// Returns whether the sentence ended with `.`, `!`, `?` or an ellipsis.
    pub fn is_terminated(&self) -> bool {
        self.text.ends_with(SENTENCE_TERMINATORS)
    }

    /// Returns the text without trailing punctuation and whitespace.
    pub fn without_terminal(&self) -> &str {
        strip_trailing_punctuation(&self.text)
    }
}

/// NFC-normalizes text and collapses whitespace runs into single spaces.
pub fn normalize_text(text: &str) -> String {
    let composed = text.nfc().collect::<String>();
    WHITESPACE_RE.replace_all(&composed, " ").trim().to_string()
}

/// Splits text into sentences using Unicode sentence boundaries.
///
/// Segments shorter than `min_chars` characters or without any letter are
/// dropped. Text without terminal punctuation yields a single segment.
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<Sentence> {
    let normalized = normalize_text(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    normalized
        .unicode_sentences()
        .map(str::trim)
        .filter(|segment| is_valid_sentence(segment, min_chars))
        .enumerate()
        .map(|(index, segment)| Sentence {
            index,
            text: segment.to_string(),
        })
        .collect()
}

/// Returns whether a segment is long enough and contains at least one letter.
pub fn is_valid_sentence(segment: &str, min_chars: usize) -> bool {
    let trimmed = segment.trim();
    trimmed.chars().count() >= min_chars && trimmed.chars().any(char::is_alphabetic)
}

/// Lowercases and splits text into word tokens of at least `min_chars` characters.
pub fn tokenize(text: &str, min_chars: usize) -> Vec<String> {
    let lowered = text.nfc().collect::<String>().to_lowercase();
    lowered
        .unicode_words()
        .filter(|word| word.chars().count() >= min_chars)
        .map(str::to_string)
        .collect()
}

/// Drops every token contained in `stopwords`, keeping order.
pub fn remove_stopwords(tokens: Vec<String>, stopwords: &StopwordSet) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !stopwords.contains(token))
        .collect()
}

/// Returns whether a token is a number such as `2024` or `3.5`.
pub fn is_numeric_token(token: &str) -> bool {
    token.chars().any(|c| c.is_numeric())
        && token
            .chars()
            .all(|c| c.is_numeric() || c == '.' || c == ',')
}

/// Counts Unicode words in text.
pub fn word_count(text: &str) -> usize {
    text.unicode_words().count()
}

/// Converts an HTML note body into plain text.
///
/// The body is parsed as an HTML fragment, so entities are decoded and a
/// literal `<` that does not open a tag stays text. Text nodes under
/// script-like elements are dropped; the rest are joined with spaces and
/// whitespace is collapsed.
pub fn strip_html(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    let fragment = Html::parse_fragment(html);
    let pieces = fragment
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
            });
            (!hidden).then_some(&**text)
        })
        .collect::<Vec<_>>();
    WHITESPACE_RE
        .replace_all(&pieces.join(" "), " ")
        .trim()
        .to_string()
}

/// Trims trailing punctuation and whitespace from a segment.
pub fn strip_trailing_punctuation(text: &str) -> &str {
    text.trim_end_matches(|c: char| c.is_whitespace() || (c.is_ascii_punctuation() || c == '…'))
}

/// Keeps at most `max_chars` characters, appending `...` when text was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated = text.chars().take(max_chars).collect::<String>();
    truncated.truncate(truncated.trim_end().len());
    truncated.push_str("...");
    truncated
}

/// Keeps at most `max_words` whitespace-separated words.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}
