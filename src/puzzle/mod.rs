//! Puzzle catalog
//!
//! Three fixed stages, each pairing a cipher with a plaintext. Payloads are
//! built once on first access and never recomputed.

pub mod catalog;
pub mod stage;

pub use catalog::{catalog, hint, plaintext, reveal, stage, verify};
pub use stage::{Difficulty, Stage, StageId, StageKind, View};
