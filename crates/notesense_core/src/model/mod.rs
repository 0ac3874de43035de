//! Value types produced by the analysis pipeline.
//!
//! # Responsibility
//! - Define serializable results handed to UI, FFI and CLI callers.
//!
//! # Invariants
//! - Every value is derived per request and never persisted by core.

pub mod insight;
