//! Cell effects.

use serde::{Deserialize, Serialize};

/// What happens to a token that lands on a cell.
///
/// One effect per cell, so a cell can never be both a ladder and a snake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellEffect {
    /// Plain cell.
    #[default]
    None,
    /// Bottom of a ladder; climb to the given cell.
    LadderTo(u16),
    /// Head of a snake; slide to the given cell.
    SnakeTo(u16),
}

impl CellEffect {
    /// Destination cell, if this effect redirects.
    #[must_use]
    pub fn target(self) -> Option<u16> {
        match self {
            CellEffect::None => None,
            CellEffect::LadderTo(to) | CellEffect::SnakeTo(to) => Some(to),
        }
    }

    #[must_use]
    pub fn is_hazard(self) -> bool {
        !matches!(self, CellEffect::None)
    }
}
