//! Text primitives shared by every analysis capability.
//!
//! # Responsibility
//! - Segment note text into sentences and tokens.
//! - Own the stopword sets and TF-IDF statistics.
//!
//! Everything here is a pure function of its inputs.

pub mod scorer;
pub mod stopwords;
pub mod tokenizer;
