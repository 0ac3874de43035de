use notesense_core::{extract_key_phrases, extract_keywords, normalize_tag, suggest_tags};

const JAVA_NOTE: &str = "Hôm nay tôi học Java. Java là ngôn ngữ lập trình. Tôi thích Java rất nhiều.";
const REPEATED_TERMS: &str = "alpha alpha bravo bravo charlie charlie delta delta \
                              echo echo foxtrot foxtrot golf golf hotel hotel";

#[test]
fn most_frequent_term_ranks_first() {
    let keywords = extract_keywords(JAVA_NOTE, 5);
    assert_eq!(keywords.first().map(String::as_str), Some("java"));
    assert!(keywords.len() <= 5);
}

#[test]
fn keywords_exclude_stopwords_numbers_and_short_tokens() {
    let keywords = extract_keywords("The 2024 plan is to ship it and the plan is ok", 10);
    assert_eq!(keywords, vec!["plan", "ship"]);
}

#[test]
fn keywords_for_empty_or_zero_limit_are_empty() {
    assert!(extract_keywords("", 5).is_empty());
    assert!(extract_keywords(JAVA_NOTE, 0).is_empty());
}

#[test]
fn tags_lead_with_detected_category() {
    assert_eq!(
        suggest_tags(JAVA_NOTE, 5),
        vec!["programming", "java", "note"]
    );
}

#[test]
fn tags_for_blank_content_fall_back_to_general() {
    assert_eq!(suggest_tags("", 5), vec!["general"]);
    assert_eq!(suggest_tags("  \t", 5), vec!["general"]);
}

#[test]
fn tag_count_is_clamped_between_three_and_seven() {
    assert_eq!(suggest_tags(REPEATED_TERMS, 100).len(), 7);
    assert_eq!(suggest_tags(REPEATED_TERMS, 0).len(), 3);
    assert_eq!(suggest_tags(REPEATED_TERMS, 5).len(), 5);
}

#[test]
fn sparse_content_is_padded_to_minimum() {
    let tags = suggest_tags("quick reminder", 7);
    assert_eq!(tags, vec!["note", "general", "memo"]);
}

#[test]
fn tags_are_normalized_and_unique() {
    let tags = suggest_tags("Meeting meeting MEETING about the project project.", 7);
    assert_eq!(tags[0], "work");
    let unique = tags.iter().collect::<std::collections::HashSet<_>>();
    assert_eq!(unique.len(), tags.len());
    assert!(tags.iter().all(|tag| normalize_tag(tag) == *tag));
}

#[test]
fn normalize_tag_is_idempotent() {
    for raw in ["Java", "C#", "lập trình", "Ý-tưởng!", "rust_2024", "already"] {
        let once = normalize_tag(raw);
        assert_eq!(normalize_tag(&once), once);
    }
    assert_eq!(normalize_tag("already"), "already");
}

#[test]
fn repeated_bigram_ranks_first() {
    let content = "Machine learning models need data. Machine learning is fun. \
                   Data pipelines feed machine learning.";
    let phrases = extract_key_phrases(content, 3);
    assert_eq!(phrases.first().map(String::as_str), Some("machine learning"));
    assert_eq!(phrases.len(), 3);
}

#[test]
fn stopwords_break_phrase_adjacency() {
    assert!(extract_key_phrases("Rust and Python", 5).is_empty());
}
