//! Game rules: the engine and the outcomes it reports.
//!
//! `GameEngine` is the only thing that mutates a `GameState`. Each roll
//! returns a `MoveOutcome` describing the full transition so renderers
//! never need to re-derive anything.

pub mod engine;
pub mod outcome;

pub use engine::GameEngine;
pub use outcome::{MoveKind, MoveOutcome, MoveRecord};
