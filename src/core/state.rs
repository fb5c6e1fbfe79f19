//! Game state: token positions, turn, terminal flag and move history.
//!
//! Fields are private; only the engine mutates them, so the invariants
//! below always hold for a `GameState` observed from outside:
//! - exactly one player holds the turn while the game is running
//! - no position exceeds the board's final cell
//! - once `is_over()` is true nothing changes until `reset`

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Player, PlayerId};
use crate::rules::MoveRecord;

/// Mutable state of one game.
///
/// History uses an `im` vector so cloning a state mid-game stays O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: SmallVec<[Player; 2]>,
    active: PlayerId,
    game_over: bool,
    last_roll: Option<u8>,
    turn_number: u32,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Fresh state: everyone off the board, first player to roll.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let players = labels
            .iter()
            .enumerate()
            .map(|(i, label)| Player::new(PlayerId::new(i as u8), label.as_ref()))
            .collect();

        Self {
            players,
            active: PlayerId::new(0),
            game_over: false,
            last_roll: None,
            turn_number: 0,
            history: Vector::new(),
        }
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Whose turn it is. After a win this stays on the winner.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// The player holding the turn.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.active.index()]
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Last accepted die value, `None` before the first roll.
    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    /// Number of accepted rolls since the last reset.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Accepted rolls, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Engine-side mutation ===

    pub(crate) fn set_position(&mut self, id: PlayerId, position: u16) {
        self.players[id.index()].position = position;
    }

    pub(crate) fn set_active(&mut self, id: PlayerId) {
        self.active = id;
    }

    pub(crate) fn set_over(&mut self, over: bool) {
        self.game_over = over;
    }

    /// Record an accepted roll and advance the turn counter.
    pub(crate) fn record(&mut self, record: MoveRecord) {
        self.last_roll = Some(record.outcome.rolled);
        self.turn_number += 1;
        self.history.push_back(record);
    }

    /// Drop the per-game counters that are not part of a snapshot.
    pub(crate) fn clear_history(&mut self) {
        self.last_roll = None;
        self.turn_number = 0;
        self.history = Vector::new();
    }

    /// Back to the fresh state, keeping the players and their labels.
    pub(crate) fn reset(&mut self) {
        for player in self.players.iter_mut() {
            player.position = 0;
        }
        self.active = PlayerId::new(0);
        self.game_over = false;
        self.clear_history();
    }
}
