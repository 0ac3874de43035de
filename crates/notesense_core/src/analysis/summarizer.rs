//! Extractive summarization.
//!
//! # Responsibility
//! - Rank sentences by TF-IDF weight with positional boosts.
//! - Emit a bounded selection in original document order.
//!
//! # Invariants
//! - Selected sentences are never reordered by score in the output.
//! - `summarize` returns at most `summary_max_sentences` extracted sentences.
//! - Blank input yields [`EMPTY_SUMMARY`]; input without usable sentences
//!   yields a truncated copy of itself.

use crate::config::AnalysisConfig;
use crate::text::scorer::{calculate_tfidf, score_sentence};
use crate::text::stopwords::StopwordSet;
use crate::text::tokenizer::{normalize_text, split_sentences, truncate_chars, Sentence};
use log::debug;

/// Placeholder returned for blank input.
pub const EMPTY_SUMMARY: &str = "No content to summarize.";
/// Prefix of every line of a ranked summary.
pub const BULLET_MARKER: &str = "• ";

/// A sentence with its ranking score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: f64,
}

/// Summarizes note text into at most `summary_max_sentences` sentences.
pub fn summarize(content: &str, stopwords: &StopwordSet, config: &AnalysisConfig) -> String {
    if content.trim().is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    let sentences = split_sentences(content, config.min_sentence_chars);
    if sentences.is_empty() {
        return truncate_chars(&normalize_text(content), config.summary_fallback_chars);
    }

    if sentences.len() <= config.summary_min_sentences {
        return sentences
            .iter()
            .map(|sentence| with_terminal(&sentence.text))
            .collect::<Vec<_>>()
            .join(" ");
    }

    let count = config.clamp_summary_sentences(sentences.len() / 3);
    let selected = select_top_sentences(&sentences, count, stopwords, config);
    debug!(
        "event=summarize module=analysis status=ok sentences={} selected={}",
        sentences.len(),
        selected.len()
    );

    selected
        .iter()
        .map(|sentence| format!("{BULLET_MARKER}{}", with_terminal(&sentence.text)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns the top `num_points` sentences (clamped) in document order.
///
/// Blank input yields an empty list; input without usable sentences yields
/// its truncated text as the single point.
pub fn summarize_to_bullet_points(
    content: &str,
    num_points: usize,
    stopwords: &StopwordSet,
    config: &AnalysisConfig,
) -> Vec<String> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let sentences = split_sentences(content, config.min_sentence_chars);
    if sentences.is_empty() {
        return vec![truncate_chars(
            &normalize_text(content),
            config.summary_fallback_chars,
        )];
    }

    let count = config.clamp_summary_sentences(num_points);
    if sentences.len() <= count {
        return sentences.into_iter().map(|sentence| sentence.text).collect();
    }

    select_top_sentences(&sentences, count, stopwords, config)
        .into_iter()
        .map(|sentence| sentence.text.clone())
        .collect()
}

/// Scores every sentence, applying the first/last positional boosts.
///
/// Output keeps document order.
pub fn rank_sentences(
    sentences: &[Sentence],
    stopwords: &StopwordSet,
    config: &AnalysisConfig,
) -> Vec<ScoredSentence> {
    let stats = calculate_tfidf(sentences, stopwords, config.min_token_chars);
    let last_index = sentences.len().saturating_sub(1);

    sentences
        .iter()
        .map(|sentence| {
            let mut score = score_sentence(&sentence.text, &stats, stopwords, config.min_token_chars);
            if sentence.index == 0 {
                score *= config.first_sentence_boost;
            } else if sentence.index == last_index {
                score *= config.last_sentence_boost;
            }
            ScoredSentence {
                sentence: sentence.clone(),
                score,
            }
        })
        .collect()
}

fn select_top_sentences<'a>(
    sentences: &'a [Sentence],
    count: usize,
    stopwords: &StopwordSet,
    config: &AnalysisConfig,
) -> Vec<&'a Sentence> {
    let mut ranked = rank_sentences(sentences, stopwords, config);
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.sentence.index.cmp(&b.sentence.index))
    });

    let mut chosen = ranked
        .iter()
        .take(count)
        .map(|scored| scored.sentence.index)
        .collect::<Vec<_>>();
    chosen.sort_unstable();

    chosen
        .into_iter()
        .filter_map(|index| sentences.iter().find(|sentence| sentence.index == index))
        .collect()
}

fn with_terminal(text: &str) -> String {
    if text.ends_with(['.', '!', '?', '…']) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}
