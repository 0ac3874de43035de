//! Heuristic title suggestion.
//!
//! # Responsibility
//! - Pick a note title through a fixed priority chain:
//!   first sentence or clause, keyword-richest sentence, joined keywords,
//!   truncated content.
//! - Produce several distinct candidates for the title picker dialog.
//!
//! # Invariants
//! - Blank input yields [`UNTITLED_NOTE`].
//! - Every returned title is non-empty and capitalized.
//! - `suggest_multiple_titles` returns at least one title.

use crate::analysis::keywords::extract_keywords;
use crate::config::AnalysisConfig;
use crate::text::stopwords::StopwordSet;
use crate::text::tokenizer::{
    normalize_text, split_sentences, strip_trailing_punctuation, tokenize, truncate_words,
    Sentence,
};
use std::collections::HashSet;

/// Placeholder title for blank notes.
pub const UNTITLED_NOTE: &str = "Untitled note";

/// Suggests one title for note content.
pub fn suggest_title(content: &str, stopwords: &StopwordSet, config: &AnalysisConfig) -> String {
    let text = normalize_text(content);
    if text.is_empty() {
        return UNTITLED_NOTE.to_string();
    }

    let candidates = TitleCandidates::new(&text, stopwords, config);
    let chosen = candidates
        .first_sentence()
        .or_else(|| candidates.keyword_richest_sentence())
        .or_else(|| candidates.joined_keywords())
        .unwrap_or_else(|| truncate_words(&text, config.title_max_words));

    let title = capitalize_title(&chosen);
    if title.is_empty() {
        UNTITLED_NOTE.to_string()
    } else {
        title
    }
}

/// Suggests up to `count` distinct titles (clamped to `[1, max_title_candidates]`).
///
/// Candidates compare case-insensitively. Falls back to [`suggest_title`]
/// when no heuristic produces a candidate.
pub fn suggest_multiple_titles(
    content: &str,
    count: usize,
    stopwords: &StopwordSet,
    config: &AnalysisConfig,
) -> Vec<String> {
    let text = normalize_text(content);
    if text.is_empty() {
        return vec![UNTITLED_NOTE.to_string()];
    }

    let limit = config.clamp_title_candidates(count);
    let candidates = TitleCandidates::new(&text, stopwords, config);
    let mut raw = [
        candidates.first_sentence(),
        candidates.keyword_richest_sentence(),
        candidates.joined_keywords(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();
    raw.extend(candidates.qualifying_sentences());

    let mut seen = HashSet::new();
    let titles = raw
        .iter()
        .map(|candidate| capitalize_title(candidate))
        .filter(|title| !title.is_empty() && seen.insert(title.to_lowercase()))
        .take(limit)
        .collect::<Vec<_>>();

    if titles.is_empty() {
        return vec![suggest_title(content, stopwords, config)];
    }
    titles
}

/// Upper-cases the first word and every word longer than three characters.
///
/// Shorter connector words are lowercased unless they look like acronyms
/// (`API`, `iOS`, `I`). Text with no lowercase letter at all is treated as
/// shouted and lowercased first, so its short words do not pass as acronyms.
pub fn capitalize_title(text: &str) -> String {
    let shouted = text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase);
    let source = if shouted {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    source
        .split_whitespace()
        .enumerate()
        .map(|(position, word)| {
            if position == 0 || word.chars().count() > 3 {
                upper_first(word)
            } else if is_acronym(word) {
                word.to_string()
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_acronym(word: &str) -> bool {
    let letters = word.chars().filter(|c| c.is_alphabetic()).collect::<Vec<_>>();
    !letters.is_empty()
        && (letters.iter().all(|c| c.is_uppercase())
            || letters.iter().skip(1).any(|c| c.is_uppercase()))
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

struct TitleCandidates<'a> {
    sentences: Vec<Sentence>,
    keywords: Vec<String>,
    config: &'a AnalysisConfig,
}

impl<'a> TitleCandidates<'a> {
    fn new(text: &str, stopwords: &StopwordSet, config: &'a AnalysisConfig) -> Self {
        let pool = config.title_keyword_pool.max(config.title_concat_keywords);
        Self {
            sentences: split_sentences(text, config.min_valid_sentence_chars),
            keywords: extract_keywords(text, pool, stopwords, config),
            config,
        }
    }

    fn accepts(&self, candidate: &str, punctuated: bool) -> bool {
        let words = candidate.split_whitespace().count();
        let tolerance = if punctuated {
            self.config.title_punctuated_tolerance
        } else {
            self.config.title_plain_tolerance
        };
        words >= self.config.title_min_words && words <= self.config.title_max_words + tolerance
    }

    /// First sentence, or its first comma clause when the sentence is rejected.
    fn first_sentence(&self) -> Option<String> {
        let first = self.sentences.first()?;
        let stripped = first.without_terminal();
        if self.accepts(stripped, first.is_terminated()) {
            return Some(stripped.to_string());
        }

        let (clause, _) = stripped.split_once(',')?;
        let clause = strip_trailing_punctuation(clause.trim());
        self.accepts(clause, false).then(|| clause.to_string())
    }

    /// Sentence with the most top-keyword occurrences; ties prefer shorter text.
    fn keyword_richest_sentence(&self) -> Option<String> {
        let pool = self
            .keywords
            .iter()
            .take(self.config.title_keyword_pool)
            .map(String::as_str)
            .collect::<HashSet<_>>();
        if pool.is_empty() {
            return None;
        }

        let mut best: Option<(&Sentence, usize)> = None;
        for sentence in &self.sentences {
            let hits = tokenize(&sentence.text, 1)
                .iter()
                .filter(|token| pool.contains(token.as_str()))
                .count();
            if hits == 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((current, current_hits)) => {
                    hits > current_hits
                        || (hits == current_hits
                            && sentence.text.chars().count() < current.text.chars().count())
                }
            };
            if better {
                best = Some((sentence, hits));
            }
        }

        let (sentence, _) = best?;
        let stripped = sentence.without_terminal();
        self.accepts(stripped, sentence.is_terminated())
            .then(|| stripped.to_string())
    }

    fn joined_keywords(&self) -> Option<String> {
        if self.keywords.is_empty() {
            return None;
        }
        Some(
            self.keywords
                .iter()
                .take(self.config.title_concat_keywords)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    fn qualifying_sentences(&self) -> Vec<String> {
        self.sentences
            .iter()
            .filter(|sentence| self.accepts(sentence.without_terminal(), sentence.is_terminated()))
            .map(|sentence| sentence.without_terminal().to_string())
            .collect()
    }
}
