//! Core engine types: players, state, RNG, die sources, configuration.

pub mod player;
pub mod rng;
pub mod dice;
pub mod config;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use dice::{DiceSource, ScriptedDice, DIE_MAX, DIE_MIN};
pub use config::{GameConfig, CLASSIC_PLAYERS};
pub use state::GameState;
