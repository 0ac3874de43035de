use notesense_core::{
    analyze_note, AnalysisConfig, NoteInsights, TagCategory, TextAnalyzer, EMPTY_SUMMARY,
    UNTITLED_NOTE,
};

const JAVA_NOTE: &str = "Hôm nay tôi học Java. Java là ngôn ngữ lập trình. Tôi thích Java rất nhiều.";

#[test]
fn analyze_note_bundles_every_capability() {
    let insights = analyze_note(JAVA_NOTE);

    assert_eq!(insights.title, "Hôm nay tôi học Java");
    assert_eq!(insights.summary, JAVA_NOTE);
    assert_eq!(insights.bullet_points.len(), 3);
    assert_eq!(insights.tags, vec!["programming", "java", "note"]);
    assert_eq!(insights.keywords.first().map(String::as_str), Some("java"));
    assert_eq!(insights.category, Some(TagCategory::Programming));
    assert_eq!(insights.sentence_count, 3);
    assert_eq!(insights.word_count, 16);
}

#[test]
fn analyze_blank_note_uses_placeholders() {
    let insights = analyze_note(" ");
    assert_eq!(insights.title, UNTITLED_NOTE);
    assert_eq!(insights.summary, EMPTY_SUMMARY);
    assert_eq!(insights.tags, vec!["general"]);
    assert!(insights.keywords.is_empty());
    assert_eq!(insights.category, None);
}

#[test]
fn insights_serialize_with_stable_field_names() {
    let insights = analyze_note(JAVA_NOTE);
    let json = serde_json::to_value(&insights).unwrap();

    assert_eq!(json["category"], "programming");
    assert_eq!(json["title"], "Hôm nay tôi học Java");
    assert_eq!(json["sentence_count"], 3);
    assert!(json["tags"].is_array());

    let decoded: NoteInsights = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, insights);
}

#[test]
fn partial_config_json_keeps_defaults() {
    let config: AnalysisConfig = serde_json::from_str(r#"{ "max_tags": 5 }"#).unwrap();
    assert_eq!(config.max_tags, 5);
    assert_eq!(config.min_tags, AnalysisConfig::default().min_tags);
    assert!(config.validate().is_ok());
}

#[test]
fn custom_config_changes_tag_bounds() {
    let config = AnalysisConfig {
        min_tags: 2,
        max_tags: 2,
        ..AnalysisConfig::default()
    };
    let analyzer = TextAnalyzer::with_config(config).unwrap();
    assert_eq!(analyzer.suggest_tags(JAVA_NOTE, 7), vec!["programming", "java"]);
}

#[test]
fn custom_config_changes_summary_fallback_length() {
    let config = AnalysisConfig {
        summary_fallback_chars: 4,
        ..AnalysisConfig::default()
    };
    let analyzer = TextAnalyzer::with_config(config).unwrap();
    assert_eq!(analyzer.summarize("2024 2025 2026"), "2024...");
}
