//! Flutter-facing bindings for the note analysis core.
//!
//! Only `api` is scanned by the FRB code generator.

pub mod api;
