use notesense_core::{suggest_multiple_titles, suggest_title, UNTITLED_NOTE};
use std::collections::HashSet;

const MEETING_NOTE: &str = "Project kickoff meeting with the design team. \
                            We agreed on the launch timeline. \
                            Marketing will prepare the landing page.";

#[test]
fn empty_content_is_untitled() {
    assert_eq!(suggest_title(""), UNTITLED_NOTE);
    assert_eq!(suggest_title("   "), UNTITLED_NOTE);
    assert_eq!(suggest_multiple_titles("", 3), vec![UNTITLED_NOTE]);
}

#[test]
fn first_sentence_becomes_capitalized_title() {
    assert_eq!(
        suggest_title(MEETING_NOTE),
        "Project Kickoff Meeting With the Design Team"
    );
}

#[test]
fn vietnamese_first_sentence_keeps_short_syllables() {
    let content = "Hôm nay tôi học Java. Java là ngôn ngữ lập trình.";
    assert_eq!(suggest_title(content), "Hôm nay tôi học Java");
}

#[test]
fn keyword_richest_sentence_wins_when_first_is_too_short() {
    let content = "Hi there. Rust ownership rules make Rust memory safety simple. Lunch was good.";
    assert_eq!(
        suggest_title(content),
        "Rust Ownership Rules Make Rust Memory Safety Simple"
    );
}

#[test]
fn multiple_titles_are_distinct_and_bounded() {
    let titles = suggest_multiple_titles(MEETING_NOTE, 10);
    assert!(titles.len() >= 2 && titles.len() <= 5, "{titles:?}");
    assert_eq!(titles[0], suggest_title(MEETING_NOTE));

    let lowered = titles
        .iter()
        .map(|title| title.to_lowercase())
        .collect::<HashSet<_>>();
    assert_eq!(lowered.len(), titles.len());
}

#[test]
fn multiple_titles_respect_minimum_of_one() {
    assert_eq!(suggest_multiple_titles(MEETING_NOTE, 0).len(), 1);
}

#[test]
fn degenerate_input_still_yields_one_title() {
    let titles = suggest_multiple_titles("!!!", 3);
    assert_eq!(titles.len(), 1);
    assert!(!titles[0].is_empty());
}
