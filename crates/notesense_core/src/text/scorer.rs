//! TF-IDF scoring with sentences as the document corpus.
//!
//! # Invariants
//! - IDF is `ln(N / (df + 1)) + 1`, which stays positive for every `df <= N`.
//! - Scores only matter for ranking; absolute values carry no contract.

use crate::text::stopwords::StopwordSet;
use crate::text::tokenizer::{remove_stopwords, tokenize, Sentence};
use std::collections::{HashMap, HashSet};

/// Term statistics for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermScores {
    /// Token -> occurrences across the document.
    pub term_frequency: HashMap<String, usize>,
    /// Token -> number of sentences containing it.
    pub document_frequency: HashMap<String, usize>,
    /// Token -> TF × IDF.
    pub scores: HashMap<String, f64>,
    pub total_tokens: usize,
    pub sentence_count: usize,
}

impl TermScores {
    /// Returns the score of a token, `0.0` when unknown.
    pub fn score(&self, token: &str) -> f64 {
        self.scores.get(token).copied().unwrap_or(0.0)
    }
}

/// Tokenizes `text` and keeps only content-bearing tokens.
pub fn content_tokens(text: &str, stopwords: &StopwordSet, min_chars: usize) -> Vec<String> {
    remove_stopwords(tokenize(text, min_chars), stopwords)
}

/// Computes TF-IDF for every content token of the given sentences.
pub fn calculate_tfidf(
    sentences: &[Sentence],
    stopwords: &StopwordSet,
    min_token_chars: usize,
) -> TermScores {
    let mut stats = TermScores {
        sentence_count: sentences.len(),
        ..TermScores::default()
    };

    for sentence in sentences {
        let tokens = content_tokens(&sentence.text, stopwords, min_token_chars);
        let unique = tokens.iter().cloned().collect::<HashSet<_>>();
        for token in unique {
            *stats.document_frequency.entry(token).or_insert(0) += 1;
        }
        stats.total_tokens += tokens.len();
        for token in tokens {
            *stats.term_frequency.entry(token).or_insert(0) += 1;
        }
    }

    if stats.total_tokens == 0 {
        return stats;
    }

    let total = stats.total_tokens as f64;
    let sentence_count = stats.sentence_count as f64;
    stats.scores = stats
        .term_frequency
        .iter()
        .map(|(token, count)| {
            let tf = *count as f64 / total;
            let df = stats.document_frequency.get(token).copied().unwrap_or(0) as f64;
            let idf = (sentence_count / (df + 1.0)).ln() + 1.0;
            (token.clone(), tf * idf)
        })
        .collect();
    stats
}

/// Scores a sentence as the length-normalized sum of its token scores.
///
/// Returns `0.0` when the sentence has no content tokens.
pub fn score_sentence(
    sentence: &str,
    scores: &TermScores,
    stopwords: &StopwordSet,
    min_token_chars: usize,
) -> f64 {
    let tokens = content_tokens(sentence, stopwords, min_token_chars);
    if tokens.is_empty() {
        return 0.0;
    }
    let sum: f64 = tokens.iter().map(|token| scores.score(token)).sum();
    sum / (tokens.len() as f64).sqrt()
}
