//! Flat persisted form of a game.
//!
//! Only positions, the turn and the terminal flag are saved. Labels and
//! the board come from the configuration the game is reopened with.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::SnapshotError;

/// One player's saved position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub position: u16,
}

/// Saved game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<PlayerSnapshot>,
    /// Index into `players` of whoever rolls next.
    pub active_player: usize,
    pub game_over: bool,
}

impl Snapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Decode bytes produced by `to_bytes`.
    ///
    /// Decoding checks shape only. Bounds are checked when the snapshot
    /// is restored into an engine.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))
    }
}
