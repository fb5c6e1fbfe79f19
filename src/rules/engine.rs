//! The game engine: turns a die value into a new canonical state.
//!
//! A roll resolves in one synchronous step:
//! 1. reject if the game is over or the die value is off the die
//! 2. overshoot past the final cell leaves the token where it is
//! 3. otherwise land, then follow a ladder or snake on the landing cell
//! 4. landing exactly on the final cell ends the game; otherwise the
//!    turn moves round-robin to the next player
//!
//! The engine never animates or waits. Renderers replay the returned
//! `MoveOutcome` at their own pace.

use tracing::{debug, info, warn};

use super::outcome::{MoveKind, MoveOutcome, MoveRecord};
use crate::board::{Board, CellEffect};
use crate::core::{DiceSource, GameConfig, GameState, Player, PlayerId, CLASSIC_PLAYERS, DIE_MAX, DIE_MIN};
use crate::error::{ConfigError, RollError, SnapshotError};
use crate::persist::{PlayerSnapshot, Snapshot};

/// Owns the board and the state of one game.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    overshoot_passes_turn: bool,
    state: GameState,
}

impl GameEngine {
    /// Create an engine from a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config.players.as_slice()),
            board: config.board,
            overshoot_passes_turn: config.overshoot_passes_turn,
        })
    }

    /// The classic two-player game on the classic board.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            board: Board::classic(),
            overshoot_passes_turn: true,
            state: GameState::new(&CLASSIC_PLAYERS),
        }
    }

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.state.current_player()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// The player standing on the final cell, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        if !self.state.is_over() {
            return None;
        }
        let total = self.board.total_cells();
        self.state.players().iter().find(|p| p.position == total)
    }

    /// Advance the game by one die value.
    ///
    /// Fails without touching the state if the game is over or `die`
    /// is outside `1..=6`.
    pub fn roll(&mut self, die: u8) -> Result<MoveOutcome, RollError> {
        if self.state.is_over() {
            warn!(die, "roll rejected: game is over");
            return Err(RollError::GameOver);
        }
        if !(DIE_MIN..=DIE_MAX).contains(&die) {
            warn!(die, "roll rejected: invalid die value");
            return Err(RollError::InvalidDieValue(die));
        }

        let total = self.board.total_cells();
        let roller = self.state.current_player();
        let player = roller.id;
        let label = roller.label.clone();
        let current = roller.position;
        let target = current.checked_add(u16::from(die)).filter(|t| *t <= total);

        let (landing, kind) = if let Some(target) = target {
            let kind = match self.board.effect(target) {
                CellEffect::LadderTo(to) => MoveKind::Ladder { from: target, to },
                CellEffect::SnakeTo(to) => MoveKind::Snake { from: target, to },
                CellEffect::None => MoveKind::Plain,
            };
            (target, kind)
        } else {
            (current, MoveKind::Overshoot { required: total - current })
        };

        let final_position = match kind {
            MoveKind::Ladder { to, .. } | MoveKind::Snake { to, .. } => to,
            MoveKind::Plain | MoveKind::Overshoot { .. } => landing,
        };
        self.state.set_position(player, final_position);

        let is_win = final_position == total;
        let next_player = if is_win {
            self.state.set_over(true);
            None
        } else if matches!(kind, MoveKind::Overshoot { .. }) && !self.overshoot_passes_turn {
            Some(player)
        } else {
            let next = player.next(self.state.player_count());
            self.state.set_active(next);
            Some(next)
        };

        let outcome = MoveOutcome {
            player,
            label,
            previous_position: current,
            rolled: die,
            landing_position: landing,
            final_position,
            kind,
            is_win,
            next_player,
        };

        debug!(
            player = player.index(),
            die,
            from = current,
            landing,
            to = final_position,
            kind = ?kind,
            "roll resolved"
        );
        if is_win {
            info!(player = player.index(), label = %outcome.label, "game won");
        }

        self.state.record(MoveRecord {
            turn: self.state.turn_number() + 1,
            outcome: outcome.clone(),
        });

        Ok(outcome)
    }

    /// Draw a die value from `dice` and roll it.
    ///
    /// A finished game rejects the roll before drawing, so scripted
    /// sources are not advanced.
    pub fn roll_with<D: DiceSource + ?Sized>(&mut self, dice: &mut D) -> Result<MoveOutcome, RollError> {
        if self.state.is_over() {
            return Err(RollError::GameOver);
        }
        let die = dice.roll_die();
        self.roll(die)
    }

    /// Return every token to the start and hand the turn to the first player.
    pub fn reset(&mut self) {
        self.state.reset();
        info!("game reset");
    }

    /// Flat persisted form of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self
                .state
                .players()
                .iter()
                .map(|p| PlayerSnapshot {
                    id: p.id,
                    position: p.position,
                })
                .collect(),
            active_player: self.state.active_player().index(),
            game_over: self.state.is_over(),
        }
    }

    /// Replace positions, turn and terminal flag from a snapshot.
    ///
    /// Checks bounds and that each saved player sits at its own turn
    /// order slot. On error the engine is unchanged.
    /// Move history starts over after a restore.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if let Err(err) = self.check_snapshot(snapshot) {
            warn!(%err, "snapshot rejected");
            return Err(err);
        }

        for (index, saved) in snapshot.players.iter().enumerate() {
            self.state.set_position(PlayerId::new(index as u8), saved.position);
        }
        self.state.set_active(PlayerId::new(snapshot.active_player as u8));
        self.state.set_over(snapshot.game_over);
        self.state.clear_history();

        info!(
            active = snapshot.active_player,
            game_over = snapshot.game_over,
            "game restored"
        );
        Ok(())
    }

    fn check_snapshot(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let expected = self.state.player_count();
        if snapshot.players.len() != expected {
            return Err(SnapshotError::PlayerCountMismatch {
                expected,
                found: snapshot.players.len(),
            });
        }
        let total = self.board.total_cells();
        if let Some((index, saved)) = snapshot
            .players
            .iter()
            .enumerate()
            .find(|(_, p)| p.position > total)
        {
            return Err(SnapshotError::PositionOutOfRange {
                index,
                position: saved.position,
                total,
            });
        }
        if let Some((index, saved)) = snapshot
            .players
            .iter()
            .enumerate()
            .find(|(index, p)| p.id.index() != *index)
        {
            return Err(SnapshotError::PlayerIdMismatch {
                index,
                id: saved.id.index(),
            });
        }
        if snapshot.active_player >= expected {
            return Err(SnapshotError::ActivePlayerOutOfRange {
                index: snapshot.active_player,
                players: expected,
            });
        }
        Ok(())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;

    fn engine_at(position: u16) -> GameEngine {
        let mut engine = GameEngine::classic();
        engine.state.set_position(PlayerId::new(0), position);
        engine
    }

    #[test]
    fn test_plain_move_passes_turn() {
        let mut engine = GameEngine::classic();
        let outcome = engine.roll(5).unwrap();

        assert_eq!(outcome.kind, MoveKind::Plain);
        assert_eq!(outcome.landing_position, 5);
        assert_eq!(outcome.final_position, 5);
        assert_eq!(outcome.next_player, Some(PlayerId::new(1)));
        assert_eq!(engine.current_player().id, PlayerId::new(1));
        assert_eq!(engine.state().last_roll(), Some(5));
    }

    #[test]
    fn test_ladder_climb() {
        let mut engine = GameEngine::classic();
        let outcome = engine.roll(4).unwrap();

        assert_eq!(outcome.kind, MoveKind::Ladder { from: 4, to: 14 });
        assert_eq!(outcome.landing_position, 4);
        assert_eq!(outcome.final_position, 14);
        assert_eq!(engine.state().players()[0].position, 14);
    }

    #[test]
    fn test_snake_slide() {
        let mut engine = engine_at(62);
        let outcome = engine.roll(2).unwrap();

        assert_eq!(outcome.kind, MoveKind::Snake { from: 64, to: 60 });
        assert_eq!(outcome.final_position, 60);
        assert_eq!(outcome.next_player, Some(PlayerId::new(1)));
    }

    #[test]
    fn test_overshoot_keeps_position_and_passes_turn() {
        let mut engine = engine_at(97);
        let outcome = engine.roll(5).unwrap();

        assert_eq!(outcome.kind, MoveKind::Overshoot { required: 3 });
        assert_eq!(outcome.landing_position, 97);
        assert_eq!(outcome.final_position, 97);
        assert!(!outcome.is_win);
        assert_eq!(engine.state().players()[0].position, 97);
        assert_eq!(engine.current_player().id, PlayerId::new(1));
    }

    #[test]
    fn test_overshoot_can_keep_turn() {
        let config = GameConfig::new().with_overshoot_passes_turn(false);
        let mut engine = GameEngine::new(config).unwrap();
        engine.state.set_position(PlayerId::new(0), 97);

        let outcome = engine.roll(6).unwrap();
        assert_eq!(outcome.next_player, Some(PlayerId::new(0)));
        assert_eq!(engine.current_player().id, PlayerId::new(0));
    }

    #[test]
    fn test_exact_landing_wins() {
        let mut engine = engine_at(95);
        let outcome = engine.roll(5).unwrap();

        assert!(outcome.is_win);
        assert_eq!(outcome.final_position, 100);
        assert_eq!(outcome.next_player, None);
        assert!(engine.is_over());
        assert_eq!(engine.current_player().id, PlayerId::new(0));
        assert_eq!(engine.winner().map(|p| p.id), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_no_roll_after_win() {
        let mut engine = engine_at(95);
        engine.roll(5).unwrap();
        let before = engine.state().clone();

        assert_eq!(engine.roll(3), Err(RollError::GameOver));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_invalid_die_rejected() {
        let mut engine = GameEngine::classic();
        let before = engine.state().clone();

        assert_eq!(engine.roll(0), Err(RollError::InvalidDieValue(0)));
        assert_eq!(engine.roll(7), Err(RollError::InvalidDieValue(7)));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_roll_with_does_not_draw_after_game_over() {
        let mut engine = engine_at(95);
        let mut dice = ScriptedDice::new([5, 1]);

        engine.roll_with(&mut dice).unwrap();
        assert_eq!(engine.roll_with(&mut dice), Err(RollError::GameOver));
        assert_eq!(dice.rolls(), 1);
    }

    #[test]
    fn test_history_records_accepted_rolls() {
        let mut engine = GameEngine::classic();
        engine.roll(3).unwrap();
        let _ = engine.roll(9);
        engine.roll(4).unwrap();

        let history = engine.state().history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].turn, 1);
        assert_eq!(history[1].turn, 2);
        assert_eq!(history[1].outcome.player, PlayerId::new(1));
        assert_eq!(engine.state().turn_number(), 2);
    }

    #[test]
    fn test_reset() {
        let mut engine = engine_at(95);
        engine.roll(5).unwrap();

        engine.reset();

        assert!(!engine.is_over());
        assert_eq!(engine.current_player().id, PlayerId::new(0));
        assert!(engine.state().players().iter().all(|p| p.position == 0));
        assert_eq!(engine.state().last_roll(), None);
        assert!(engine.state().history().is_empty());
        assert!(engine.winner().is_none());
    }

    #[test]
    fn test_snapshot_and_restore() {
        let mut engine = GameEngine::classic();
        engine.roll(4).unwrap();
        engine.roll(5).unwrap();
        engine.roll(2).unwrap();
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.players[0].position, 6);
        assert_eq!(snapshot.active_player, 1);

        let mut other = GameEngine::classic();
        other.restore(&snapshot).unwrap();
        assert_eq!(other.snapshot(), snapshot);
        assert!(other.state().history().is_empty());
    }

    #[test]
    fn test_restore_rejects_out_of_range() {
        let mut engine = GameEngine::classic();
        let mut snapshot = engine.snapshot();
        snapshot.players[1].position = 101;

        assert_eq!(
            engine.restore(&snapshot),
            Err(SnapshotError::PositionOutOfRange {
                index: 1,
                position: 101,
                total: 100
            })
        );

        let mut snapshot = engine.snapshot();
        snapshot.active_player = 2;
        assert!(matches!(
            engine.restore(&snapshot),
            Err(SnapshotError::ActivePlayerOutOfRange { index: 2, players: 2 })
        ));

        let mut snapshot = engine.snapshot();
        snapshot.players.pop();
        assert!(matches!(
            engine.restore(&snapshot),
            Err(SnapshotError::PlayerCountMismatch { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_overshoot_on_largest_board() {
        let board = Board::builder(u16::MAX).build().unwrap();
        let mut engine = GameEngine::new(GameConfig::new().with_board(board)).unwrap();
        engine.state.set_position(PlayerId::new(0), u16::MAX - 2);

        let outcome = engine.roll(6).unwrap();
        assert_eq!(outcome.kind, MoveKind::Overshoot { required: 2 });
        assert_eq!(outcome.final_position, u16::MAX - 2);
        assert_eq!(outcome.path().count(), 0);

        engine.roll(1).unwrap();
        let outcome = engine.roll(2).unwrap();
        assert!(outcome.is_win);
        assert_eq!(outcome.path().last(), Some(u16::MAX));
        assert_eq!(engine.winner().map(|p| p.id), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_restore_rejects_swapped_player_ids() {
        let mut engine = GameEngine::classic();
        let mut snapshot = engine.snapshot();
        snapshot.players[0].position = 30;
        snapshot.players.swap(0, 1);

        assert_eq!(
            engine.restore(&snapshot),
            Err(SnapshotError::PlayerIdMismatch { index: 0, id: 1 })
        );
        assert_eq!(engine.snapshot(), GameEngine::classic().snapshot());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig::new().with_players(Vec::<String>::new());
        assert!(matches!(GameEngine::new(config), Err(ConfigError::NoPlayers)));
    }
}
