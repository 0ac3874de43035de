use notesense_core::{strip_html, AnalysisConfig, StopwordError, StopwordSet, TextAnalyzer};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn block_tags_become_word_separators() {
    assert_eq!(strip_html("<p>Hello</p><p>World</p>"), "Hello World");
    assert_eq!(strip_html("one<br>two<br/>three"), "one two three");
}

#[test]
fn rich_text_note_becomes_analyzable_plain_text() {
    let html = r#"<html><head><style>.x { color: red; }</style></head>
        <body><h1>Sprint notes</h1><ul><li>Fix login bug</li><li>Review API docs</li></ul>
        <script type="text/javascript">var leaked = "secret";</script>
        <p>Ship &quot;v2&quot; on Friday &amp; celebrate.</p></body></html>"#;
    let plain = strip_html(html);
    assert_eq!(
        plain,
        "Sprint notes Fix login bug Review API docs Ship \"v2\" on Friday & celebrate."
    );
    assert!(!plain.contains("secret"));
    assert!(!plain.contains("color"));
}

#[test]
fn empty_html_yields_empty_text() {
    assert_eq!(strip_html(""), "");
    assert_eq!(strip_html("<div><br/></div>"), "");
}

#[test]
fn stopword_file_replaces_builtin_list() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# project specific noise words").unwrap();
    writeln!(file, "java").unwrap();
    writeln!(file, "tôi").unwrap();

    let analyzer =
        TextAnalyzer::with_stopwords_file(file.path(), AnalysisConfig::default()).unwrap();
    let keywords = analyzer.extract_keywords(
        "Hôm nay tôi học Java. Java là ngôn ngữ lập trình. Tôi thích Java rất nhiều.",
        3,
    );
    assert!(!keywords.contains(&"java".to_string()));
    assert!(!keywords.contains(&"tôi".to_string()));
}

#[test]
fn load_from_path_reports_missing_and_empty_files() {
    let dir = TempDir::new().unwrap();

    let missing = StopwordSet::load_from_path(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(missing, StopwordError::Io { .. }));

    let empty_path = dir.path().join("empty.txt");
    std::fs::write(&empty_path, "# only a comment\n\n").unwrap();
    let empty = StopwordSet::load_from_path(&empty_path).unwrap_err();
    assert!(matches!(empty, StopwordError::Empty { .. }));
    assert!(empty.to_string().contains("contains no words"));
}

#[test]
fn empty_stopword_file_falls_back_to_builtin() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.txt");
    std::fs::write(&path, "").unwrap();

    let set = StopwordSet::load_or_builtin(&path);
    assert_eq!(*set, *StopwordSet::builtin());
}
