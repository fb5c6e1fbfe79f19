//! The result of one roll, for the renderer to animate.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a roll resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Landed on a plain cell.
    Plain,
    /// Landed on a ladder foot and climbed.
    Ladder { from: u16, to: u16 },
    /// Landed on a snake head and slid down.
    Snake { from: u16, to: u16 },
    /// Roll would pass the final cell; the token did not move.
    Overshoot { required: u16 },
}

impl MoveKind {
    /// The cell a hazard was triggered on, if any.
    #[must_use]
    pub fn hazard_cell(self) -> Option<u16> {
        match self {
            MoveKind::Ladder { from, .. } | MoveKind::Snake { from, .. } => Some(from),
            _ => None,
        }
    }
}

/// Everything that changed during one roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Who rolled.
    pub player: PlayerId,
    /// Display label of the roller.
    pub label: String,
    pub previous_position: u16,
    pub rolled: u8,
    /// Cell reached by the die alone. Equal to `previous_position` on overshoot.
    pub landing_position: u16,
    /// Cell after any ladder or snake.
    pub final_position: u16,
    pub kind: MoveKind,
    pub is_win: bool,
    /// Who rolls next; `None` once the game is won.
    pub next_player: Option<PlayerId>,
}

impl MoveOutcome {
    /// Cells the token steps through from its previous cell to the
    /// landing cell, excluding the start. Empty on overshoot.
    ///
    /// ```
    /// use snakes_ladders::rules::GameEngine;
    ///
    /// let mut engine = GameEngine::classic();
    /// let outcome = engine.roll(4).unwrap();
    /// assert_eq!(outcome.path().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// assert_eq!(outcome.final_position, 14);
    /// ```
    pub fn path(&self) -> impl Iterator<Item = u16> {
        if self.landing_position > self.previous_position {
            (self.previous_position + 1)..=self.landing_position
        } else {
            // empty
            1..=0
        }
    }

    /// Did the token end somewhere other than where it started?
    #[must_use]
    pub fn moved(&self) -> bool {
        self.final_position != self.previous_position
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_win {
            return write!(f, "{} wins!", self.label);
        }
        match self.kind {
            MoveKind::Overshoot { required } => {
                write!(f, "{} needs exactly {} to win!", self.label, required)
            }
            MoveKind::Ladder { from, to } => write!(f, "Climbed ladder from {} to {}!", from, to),
            MoveKind::Snake { from, to } => write!(f, "Slid down snake from {} to {}!", from, to),
            MoveKind::Plain => write!(f, "{} moved to {}", self.label, self.final_position),
        }
    }
}

/// One accepted roll in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number of this roll, starting at 1.
    pub turn: u32,
    pub outcome: MoveOutcome,
}
