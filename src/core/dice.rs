//! Die sources.
//!
//! The engine never rolls dice itself. Callers pass a value, or hand over
//! a `DiceSource` so tests can script exact sequences.

use super::rng::GameRng;

/// Smallest face on the die.
pub const DIE_MIN: u8 = 1;

/// Largest face on the die.
pub const DIE_MAX: u8 = 6;

/// Supplier of die values.
pub trait DiceSource {
    /// Produce the next die value. Well-behaved sources stay in `1..=6`.
    fn roll_die(&mut self) -> u8;
}

impl DiceSource for GameRng {
    /// Uniform over 1..=6.
    fn roll_die(&mut self) -> u8 {
        self.gen_range(DIE_MIN..=DIE_MAX)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// ```
/// use snakes_ladders::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([3, 5]);
/// assert_eq!(dice.roll_die(), 3);
/// assert_eq!(dice.roll_die(), 5);
/// assert_eq!(dice.roll_die(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    values: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a scripted die. An empty script always yields `DIE_MIN`.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        if self.values.is_empty() {
            return DIE_MIN;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
