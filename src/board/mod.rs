//! Board layout: cell count, row width and the hazards.
//!
//! Ladders and snakes live in one cell-effect table so each cell holds at
//! most one effect. Boards are immutable once built.

mod board;
mod cell;

pub use board::{Board, BoardBuilder, CLASSIC_LADDERS, CLASSIC_SNAKES};
pub use cell::CellEffect;
