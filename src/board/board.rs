//! The board: cell count, row width and the cell-effect table.

use serde::{Deserialize, Serialize};

use super::cell::CellEffect;
use crate::error::BoardError;

/// Ladders on the classic board, bottom to top.
pub const CLASSIC_LADDERS: [(u16, u16); 6] = [(4, 14), (9, 31), (21, 42), (28, 84), (51, 67), (72, 91)];

/// Snakes on the classic board, head to tail.
pub const CLASSIC_SNAKES: [(u16, u16); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Immutable board layout.
///
/// Cells are numbered `1..=total`. Cell 0 is the off-board start and
/// never carries an effect. Lookups are a single index into `cells`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    total: u16,
    width: u16,
    cells: Vec<CellEffect>,
}

impl Board {
    /// The classic 10x10 board.
    #[must_use]
    pub fn classic() -> Self {
        let mut cells = vec![CellEffect::None; 101];
        for (from, to) in CLASSIC_LADDERS {
            cells[from as usize] = CellEffect::LadderTo(to);
        }
        for (from, to) in CLASSIC_SNAKES {
            cells[from as usize] = CellEffect::SnakeTo(to);
        }
        Self {
            total: 100,
            width: 10,
            cells,
        }
    }

    /// Start building a custom board with `total` cells.
    pub fn builder(total: u16) -> BoardBuilder {
        BoardBuilder::new(total)
    }

    /// Final cell number. Landing here exactly wins.
    #[must_use]
    pub fn total_cells(&self) -> u16 {
        self.total
    }

    /// Cells per row, used for grid coordinates.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Effect of the given cell. Out-of-range cells are plain.
    #[must_use]
    pub fn effect(&self, cell: u16) -> CellEffect {
        self.cells.get(cell as usize).copied().unwrap_or_default()
    }

    /// Iterate over ladders as `(from, to)`.
    pub fn ladders(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.hazards().filter_map(|(from, effect)| match effect {
            CellEffect::LadderTo(to) => Some((from, to)),
            _ => None,
        })
    }

    /// Iterate over snakes as `(from, to)`.
    pub fn snakes(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.hazards().filter_map(|(from, effect)| match effect {
            CellEffect::SnakeTo(to) => Some((from, to)),
            _ => None,
        })
    }

    /// Iterate over every cell carrying an effect.
    pub fn hazards(&self) -> impl Iterator<Item = (u16, CellEffect)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, effect)| effect.is_hazard())
            .map(|(cell, &effect)| (cell as u16, effect))
    }

    /// Row and column of a cell on the rendered grid, row 0 at the top.
    ///
    /// Rows alternate direction so consecutive cells stay adjacent.
    /// Returns `None` for cell 0 and cells past the end.
    #[must_use]
    pub fn grid_coordinates(&self, cell: u16) -> Option<(u16, u16)> {
        if cell == 0 || cell > self.total || self.width == 0 {
            return None;
        }
        let row = (self.total - cell) / self.width;
        let col = (cell - 1) % self.width;
        let col = if row % 2 == 0 { col } else { self.width - 1 - col };
        Some((row, col))
    }

    /// Check the layout rules.
    ///
    /// Boards built through `BoardBuilder` are already valid; this exists
    /// for boards that arrive through deserialization.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.total < 2 {
            return Err(BoardError::TooSmall(self.total));
        }
        let expected = self.total as usize + 1;
        if self.cells.len() != expected {
            return Err(BoardError::CellTableMismatch {
                expected,
                found: self.cells.len(),
            });
        }

        for (from, effect) in self.hazards() {
            if from == 0 || from == self.total {
                return Err(BoardError::HazardOnBoundary(from));
            }
            let to = match effect {
                CellEffect::LadderTo(to) | CellEffect::SnakeTo(to) => to,
                CellEffect::None => continue,
            };
            if to == 0 || to > self.total {
                return Err(BoardError::HazardOutOfRange {
                    from,
                    to,
                    total: self.total,
                });
            }
            match effect {
                CellEffect::LadderTo(_) if to <= from => {
                    return Err(BoardError::LadderNotAscending { from, to });
                }
                CellEffect::SnakeTo(_) if to >= from => {
                    return Err(BoardError::SnakeNotDescending { from, to });
                }
                _ => {}
            }
            if self.effect(to).is_hazard() {
                return Err(BoardError::ChainedHazard { from, to });
            }
        }

        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

/// Builder for custom boards.
///
/// ```
/// use snakes_ladders::board::{Board, CellEffect};
///
/// let board = Board::builder(30)
///     .width(5)
///     .ladder(3, 22)
///     .snake(27, 1)
///     .build()
///     .unwrap();
///
/// assert_eq!(board.effect(3), CellEffect::LadderTo(22));
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    total: u16,
    width: u16,
    ladders: Vec<(u16, u16)>,
    snakes: Vec<(u16, u16)>,
}

impl BoardBuilder {
    fn new(total: u16) -> Self {
        Self {
            total,
            width: 10,
            ladders: Vec::new(),
            snakes: Vec::new(),
        }
    }

    /// Set cells per row.
    #[must_use]
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Add a ladder.
    #[must_use]
    pub fn ladder(mut self, from: u16, to: u16) -> Self {
        self.ladders.push((from, to));
        self
    }

    /// Add a snake.
    #[must_use]
    pub fn snake(mut self, from: u16, to: u16) -> Self {
        self.snakes.push((from, to));
        self
    }

    /// Lay out the cells and validate the result.
    pub fn build(self) -> Result<Board, BoardError> {
        if self.total < 2 {
            return Err(BoardError::TooSmall(self.total));
        }

        let mut cells = vec![CellEffect::None; self.total as usize + 1];
        let placements = self
            .ladders
            .iter()
            .map(|&(from, to)| (from, CellEffect::LadderTo(to)))
            .chain(self.snakes.iter().map(|&(from, to)| (from, CellEffect::SnakeTo(to))));

        for (from, effect) in placements {
            let slot = cells.get_mut(from as usize).ok_or(BoardError::HazardOutOfRange {
                from,
                to: effect.target().unwrap_or_default(),
                total: self.total,
            })?;
            if slot.is_hazard() {
                return Err(BoardError::DuplicateHazard(from));
            }
            *slot = effect;
        }

        let board = Board {
            total: self.total,
            width: self.width,
            cells,
        };
        board.validate()?;
        Ok(board)
    }
}
