//! # snakes-ladders
//!
//! A deterministic Snakes and Ladders game-state engine.
//!
//! ## Design Principles
//!
//! 1. **Synchronous transitions**: one `roll` computes the whole move:
//!    landing, ladder or snake, win check and turn rotation. Renderers
//!    animate from the returned `MoveOutcome`, never the other way round.
//!
//! 2. **Injected randomness**: the engine accepts die values. Randomness
//!    comes from a `DiceSource`, seeded `GameRng` in play and
//!    `ScriptedDice` in tests.
//!
//! 3. **N-player model**: the classic game has two players, but nothing
//!    in the engine assumes the count.
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::{GameEngine, MoveKind};
//!
//! let mut engine = GameEngine::classic();
//! let outcome = engine.roll(4).unwrap();
//!
//! assert_eq!(outcome.kind, MoveKind::Ladder { from: 4, to: 14 });
//! assert_eq!(outcome.to_string(), "Climbed ladder from 4 to 14!");
//! assert_eq!(engine.current_player().label, "Player 2 (Blue)");
//! ```
//!
//! ## Modules
//!
//! - `core`: players, state, RNG, die sources, configuration
//! - `board`: board layout and cell effects
//! - `rules`: the game engine and move outcomes
//! - `persist`: snapshots, save slots and autosaving sessions
//! - `sim`: headless simulation of complete games
//! - `error`: error types

pub mod core;
pub mod board;
pub mod rules;
pub mod persist;
pub mod sim;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    DiceSource, GameConfig, GameRng, GameState, Player, PlayerId, PlayerMap, ScriptedDice,
};

pub use crate::board::{Board, BoardBuilder, CellEffect};

pub use crate::rules::{GameEngine, MoveKind, MoveOutcome, MoveRecord};

pub use crate::persist::{MemoryStore, PlayerSnapshot, Session, Snapshot, SnapshotStore};

pub use crate::sim::{GameSummary, SimConfig, SimulationStats, Simulator};

pub use crate::error::{BoardError, ConfigError, RollError, SessionError, SnapshotError};
