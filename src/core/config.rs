//! Game configuration.
//!
//! A `GameConfig` names the board, the players in turn order, and the one
//! rule that is a product decision rather than a fixed law of the game:
//! whether an overshooting roll still hands the turn over.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::ConfigError;

/// Labels of the two classic players.
pub const CLASSIC_PLAYERS: [&str; 2] = ["Player 1 (Red)", "Player 2 (Blue)"];

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board layout, fixed for the session.
    pub board: Board,

    /// Player labels in turn order.
    pub players: Vec<String>,

    /// Does an overshoot end the roller's turn?
    ///
    /// `true` keeps the classic behaviour: the token stays put and the
    /// next player rolls.
    pub overshoot_passes_turn: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: Board::classic(),
            players: CLASSIC_PLAYERS.iter().map(|s| s.to_string()).collect(),
            overshoot_passes_turn: true,
        }
    }
}

impl GameConfig {
    /// The classic two-player game on the classic board.
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with `count` players labelled "Player 1".."Player N".
    pub fn with_player_count(count: usize) -> Self {
        Self {
            players: (1..=count).map(|n| format!("Player {}", n)).collect(),
            ..Self::default()
        }
    }

    /// Replace the board.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the player labels.
    #[must_use]
    pub fn with_players<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether an overshoot passes the turn.
    #[must_use]
    pub fn with_overshoot_passes_turn(mut self, passes: bool) -> Self {
        self.overshoot_passes_turn = passes;
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.players.len() > 255 {
            return Err(ConfigError::TooManyPlayers(self.players.len()));
        }
        self.board.validate()?;
        Ok(())
    }
}
