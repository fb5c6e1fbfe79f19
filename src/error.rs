//! Error types.
//!
//! Every error is a local precondition violation reported to the caller.
//! None of them leave the engine in a modified state.

/// Errors from a single roll.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    #[error("game is over, no further rolls are accepted")]
    GameOver,

    #[error("die value {0} is outside 1..=6")]
    InvalidDieValue(u8),
}

/// Errors from malformed board data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have at least 2 cells, got {0}")]
    TooSmall(u16),

    #[error("cell table has {found} entries, expected {expected}")]
    CellTableMismatch { expected: usize, found: usize },

    #[error("hazard {from}->{to} leaves the board 1..={total}")]
    HazardOutOfRange { from: u16, to: u16, total: u16 },

    #[error("hazard may not start on cell {0}")]
    HazardOnBoundary(u16),

    #[error("ladder {from}->{to} must climb")]
    LadderNotAscending { from: u16, to: u16 },

    #[error("snake {from}->{to} must descend")]
    SnakeNotDescending { from: u16, to: u16 },

    #[error("hazard {from}->{to} ends on another hazard")]
    ChainedHazard { from: u16, to: u16 },

    #[error("cell {0} already holds a hazard")]
    DuplicateHazard(u16),
}

/// Errors when building a game configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

/// Errors when encoding, decoding or restoring a persisted snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot has {found} players, game has {expected}")]
    PlayerCountMismatch { expected: usize, found: usize },

    #[error("player {index} position {position} exceeds final cell {total}")]
    PositionOutOfRange { index: usize, position: u16, total: u16 },

    #[error("snapshot slot {index} holds player id {id}")]
    PlayerIdMismatch { index: usize, id: usize },

    #[error("active player index {index} out of range for {players} players")]
    ActivePlayerOutOfRange { index: usize, players: usize },

    #[error("failed to encode snapshot: {0}")]
    Encode(String),

    #[error("failed to decode snapshot: {0}")]
    Decode(String),
}

/// Errors from an autosaving session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Roll(#[from] RollError),

    #[error("failed to persist game: {0}")]
    Snapshot(#[from] SnapshotError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_error_display() {
        assert_eq!(
            RollError::InvalidDieValue(9).to_string(),
            "die value 9 is outside 1..=6"
        );
        assert_eq!(
            RollError::GameOver.to_string(),
            "game is over, no further rolls are accepted"
        );
    }

    #[test]
    fn test_config_error_wraps_board_error() {
        let err: ConfigError = BoardError::ChainedHazard { from: 4, to: 16 }.into();
        assert_eq!(
            err.to_string(),
            "invalid board: hazard 4->16 ends on another hazard"
        );
    }

    #[test]
    fn test_session_error_is_transparent_for_rolls() {
        let err: SessionError = RollError::GameOver.into();
        assert_eq!(err.to_string(), RollError::GameOver.to_string());
    }

    #[test]
    fn test_snapshot_error_display() {
        let err = SnapshotError::PositionOutOfRange {
            index: 1,
            position: 140,
            total: 100,
        };
        assert_eq!(
            err.to_string(),
            "player 1 position 140 exceeds final cell 100"
        );
    }
}
