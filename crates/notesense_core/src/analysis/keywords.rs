//! Keyword, key-phrase and tag extraction.
//!
//! # Responsibility
//! - Rank frequent content terms and two-word phrases.
//! - Suggest normalized tags, led by a coarse category when one is detected.
//!
//! # Invariants
//! - Ranking is deterministic: frequency first, then first occurrence.
//! - `suggest_tags` returns between `min_tags` and `max_tags` tags for
//!   non-blank input and `["general"]` for blank input.
//! - `normalize_tag` is idempotent.

use crate::config::AnalysisConfig;
use crate::model::insight::TagCategory;
use crate::text::scorer::content_tokens;
use crate::text::stopwords::StopwordSet;
use crate::text::tokenizer::{is_numeric_token, split_sentences, tokenize};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use unicode_normalization::UnicodeNormalization;

/// Tag returned alone for blank input.
pub const EMPTY_TAG: &str = "general";
/// Generic tags used to pad short suggestions, in order.
pub const FALLBACK_TAGS: &[&str] = &["note", "general", "memo", "misc"];

static TAG_DISALLOWED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "[^a-z0-9àáạảãâầấậẩẫăằắặẳẵèéẹẻẽêềếệểễìíịỉĩòóọỏõôồốộổỗơờớợởỡùúụủũưừứựửữỳýỵỷỹđ]",
    )
    .expect("valid tag alphabet regex")
});

/// Keyword set matched against whole tokens for one category.
fn category_keywords(category: TagCategory) -> &'static [&'static str] {
    match category {
        TagCategory::Programming => &[
            "lập trình", "thuật toán", "mã nguồn", "code", "coding", "java", "python", "rust",
            "javascript", "sql", "api", "bug", "debug", "git", "database", "server", "frontend",
            "backend", "algorithm", "compiler",
        ],
        TagCategory::Work => &[
            "công việc", "dự án", "báo cáo", "khách hàng", "nhiệm vụ", "họp", "meeting",
            "project", "deadline", "report", "client", "task", "team", "office",
        ],
        TagCategory::Study => &[
            "học", "bài tập", "bài giảng", "khóa học", "ôn tập", "sinh viên", "thi", "study",
            "exam", "homework", "lecture", "course", "student", "revision",
        ],
        TagCategory::Personal => &[
            "gia đình", "sức khỏe", "bạn bè", "du lịch", "nấu ăn", "mua sắm", "sinh nhật",
            "family", "health", "friend", "travel", "cooking", "shopping", "birthday",
        ],
        TagCategory::Idea => &[
            "ý tưởng", "kế hoạch", "sáng kiến", "dự định", "cảm hứng", "idea", "plan",
            "brainstorm", "concept", "inspiration",
        ],
    }
}

/// Returns content terms with their counts, most frequent first.
///
/// Terms are non-stopword, non-numeric tokens of at least
/// `min_keyword_chars` characters. Ties keep first-occurrence order.
pub fn keyword_counts(
    content: &str,
    stopwords: &StopwordSet,
    config: &AnalysisConfig,
) -> Vec<(String, usize)> {
    let terms = content_tokens(content, stopwords, config.min_keyword_chars)
        .into_iter()
        .filter(|token| !is_numeric_token(token));
    rank_by_frequency(terms, |_| 0)
}

/// Returns the `top_n` most frequent content terms.
pub fn extract_keywords(
    content: &str,
    top_n: usize,
    stopwords: &StopwordSet,
    config: &AnalysisConfig,
) -> Vec<String> {
    if top_n == 0 || content.trim().is_empty() {
        return Vec::new();
    }
    keyword_counts(content, stopwords, config)
        .into_iter()
        .take(top_n)
        .map(|(term, _)| term)
        .collect()
}

/// Returns the `top_n` most frequent two-word phrases.
///
/// A phrase is two adjacent tokens of one sentence, both keyword-worthy.
/// A stopword between words breaks adjacency. Ties prefer longer phrases,
/// then first occurrence.
pub fn extract_key_phrases(
    content: &str,
    top_n: usize,
    stopwords: &StopwordSet,
    config: &AnalysisConfig,
) -> Vec<String> {
    if top_n == 0 || content.trim().is_empty() {
        return Vec::new();
    }

    let qualifies = |token: &str| {
        token.chars().count() >= config.min_keyword_chars
            && !stopwords.contains(token)
            && !is_numeric_token(token)
    };

    let phrases = split_sentences(content, config.min_valid_sentence_chars)
        .into_iter()
        .flat_map(|sentence| {
            tokenize(&sentence.text, 1)
                .windows(2)
                .filter(|pair| qualifies(&pair[0]) && qualifies(&pair[1]))
                .map(|pair| format!("{} {}", pair[0], pair[1]))
                .collect::<Vec<_>>()
        });

    rank_by_frequency(phrases, |phrase| phrase.chars().count())
        .into_iter()
        .take(top_n)
        .map(|(phrase, _)| phrase)
        .collect()
}

/// Detects the category with the most keyword hits.
///
/// Returns `None` when no category keyword occurs. Ties resolve in
/// [`TagCategory::ALL`] order.
pub fn detect_category(content: &str) -> Option<(TagCategory, usize)> {
    let tokens = tokenize(content, 1);
    if tokens.is_empty() {
        return None;
    }
    let haystack = format!(" {} ", tokens.join(" "));

    let mut best: Option<(TagCategory, usize)> = None;
    for category in TagCategory::ALL {
        let hits = category_keywords(category)
            .iter()
            .filter(|keyword| haystack.contains(&format!(" {keyword} ")))
            .count();
        if hits == 0 {
            continue;
        }
        if best.map_or(true, |(_, best_hits)| hits > best_hits) {
            best = Some((category, hits));
        }
    }
    best
}

/// Lowercases a tag and drops characters outside the Latin/Vietnamese alphabet.
pub fn normalize_tag(raw: &str) -> String {
    let lowered = raw.nfc().collect::<String>().to_lowercase();
    TAG_DISALLOWED_RE.replace_all(&lowered, "").into_owned()
}

/// Suggests between `min_tags` and `max_tags` tags for note content.
///
/// `max_tags` is clamped into the configured bounds first.
pub fn suggest_tags(
    content: &str,
    max_tags: usize,
    stopwords: &StopwordSet,
    config: &AnalysisConfig,
) -> Vec<String> {
    if content.trim().is_empty() {
        return vec![EMPTY_TAG.to_string()];
    }

    let limit = config.clamp_tags(max_tags);
    let category = detect_category(content);
    let mut candidates = Vec::new();
    if let Some((category, _)) = category {
        candidates.push(category.as_str().to_string());
    }
    candidates.extend(
        keyword_counts(content, stopwords, config)
            .into_iter()
            .filter(|(_, count)| *count >= config.min_tag_occurrences)
            .map(|(term, _)| term),
    );

    let mut seen = HashSet::new();
    let mut tags = candidates
        .iter()
        .map(|candidate| normalize_tag(candidate))
        .filter(|tag| !tag.is_empty() && seen.insert(tag.clone()))
        .take(limit)
        .collect::<Vec<_>>();

    for fallback in FALLBACK_TAGS {
        if tags.len() >= config.min_tags {
            break;
        }
        if seen.insert((*fallback).to_string()) {
            tags.push((*fallback).to_string());
        }
    }

    debug!(
        "event=suggest_tags module=analysis status=ok category={} tags={}",
        category.map_or("none", |(category, _)| category.as_str()),
        tags.len()
    );
    tags
}

/// Counts items and sorts by count desc, then `secondary` desc, then first occurrence.
fn rank_by_frequency<I, F>(items: I, secondary: F) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> usize,
{
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, item) in items.into_iter().enumerate() {
        counts.entry(item).or_insert((0, position)).0 += 1;
    }

    let mut ranked = counts.into_iter().collect::<Vec<_>>();
    ranked.sort_by(|(a_term, (a_count, a_first)), (b_term, (b_count, b_first))| {
        b_count
            .cmp(a_count)
            .then_with(|| secondary(b_term).cmp(&secondary(a_term)))
            .then(a_first.cmp(b_first))
    });
    ranked
        .into_iter()
        .map(|(term, (count, _))| (term, count))
        .collect()
}
