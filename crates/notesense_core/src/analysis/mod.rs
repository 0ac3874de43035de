//! Note analysis capabilities.
//!
//! # Responsibility
//! - Summaries, keywords, tags and titles derived from note text.
//! - The [`analyzer::TextAnalyzer`] facade that callers use.
//!
//! # Invariants
//! - One canonical algorithm per capability.
//! - No capability surfaces an error for text input.

pub mod analyzer;
pub mod keywords;
pub mod summarizer;
pub mod title;
