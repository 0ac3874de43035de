//! Note insight model.
//!
//! # Responsibility
//! - Bundle every derived analysis output for one note body.
//! - Name the coarse categories used for tag suggestion.
//!
//! # Invariants
//! - `NoteInsights` is plain data; it holds no reference to the analyzer.
//! - Category names serialize as stable snake_case strings.

use serde::{Deserialize, Serialize};

/// Coarse topic category detected from fixed keyword sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    Programming,
    Work,
    Study,
    Personal,
    Idea,
}

impl TagCategory {
    /// All categories in tie-break priority order.
    pub const ALL: [TagCategory; 5] = [
        TagCategory::Programming,
        TagCategory::Work,
        TagCategory::Study,
        TagCategory::Personal,
        TagCategory::Idea,
    ];

    /// Tag text emitted when this category wins.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::Work => "work",
            Self::Study => "study",
            Self::Personal => "personal",
            Self::Idea => "idea",
        }
    }
}

/// Every analysis output for one note body.
///
/// Serialized as-is by the CLI `analyze --json` command and mirrored by the
/// FFI response type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteInsights {
    /// Best title candidate (placeholder for blank input).
    pub title: String,
    /// Extractive summary text.
    pub summary: String,
    /// Top sentences without bullet markers, in document order.
    pub bullet_points: Vec<String>,
    pub tags: Vec<String>,
    pub keywords: Vec<String>,
    /// Two-word phrases built from adjacent content tokens.
    pub key_phrases: Vec<String>,
    /// Detected category, if any category keyword was present.
    pub category: Option<TagCategory>,
    pub word_count: usize,
    pub sentence_count: usize,
}

impl NoteInsights {
    /// Insights for a blank note.
    pub fn empty(title: impl Into<String>, summary: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            bullet_points: Vec::new(),
            tags,
            keywords: Vec::new(),
            key_phrases: Vec::new(),
            category: None,
            word_count: 0,
            sentence_count: 0,
        }
    }
}
