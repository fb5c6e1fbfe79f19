//! Headless simulator.
//!
//! Plays complete games with a seeded die and aggregates what happened.
//! Useful for checking that a custom board finishes in a sensible number
//! of turns, and for benchmarking the engine.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::rules::{GameEngine, MoveKind};

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of games to play.
    pub games: usize,

    /// Maximum rolls per game before it is abandoned as unfinished.
    pub max_turns: u32,

    /// Seed of the master RNG. Each game forks its own stream.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            max_turns: 1000,
            seed: 0,
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set maximum rolls per game.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// What happened in one simulated game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameSummary {
    /// `None` if the game hit `max_turns` first.
    pub winner: Option<PlayerId>,
    pub turns: u32,
    pub ladders: u32,
    pub snakes: u32,
    pub overshoots: u32,
    /// Cells whose ladder or snake fired, in order.
    pub hazards_hit: Vec<u16>,
}

/// Aggregate over many games.
#[derive(Clone, Debug)]
pub struct SimulationStats {
    pub games: usize,
    pub wins: PlayerMap<u32>,
    pub unfinished: usize,
    pub total_turns: u64,
    pub ladders: u64,
    pub snakes: u64,
    pub overshoots: u64,
    /// How often each hazard cell fired.
    pub hazard_hits: FxHashMap<u16, u32>,
}

impl SimulationStats {
    fn new(player_count: usize) -> Self {
        Self {
            games: 0,
            wins: PlayerMap::with_value(player_count, 0),
            unfinished: 0,
            total_turns: 0,
            ladders: 0,
            snakes: 0,
            overshoots: 0,
            hazard_hits: FxHashMap::default(),
        }
    }

    fn absorb(&mut self, summary: &GameSummary) {
        self.games += 1;
        match summary.winner {
            Some(player) => self.wins[player] += 1,
            None => self.unfinished += 1,
        }
        self.total_turns += u64::from(summary.turns);
        self.ladders += u64::from(summary.ladders);
        self.snakes += u64::from(summary.snakes);
        self.overshoots += u64::from(summary.overshoots);
        for &cell in &summary.hazards_hit {
            *self.hazard_hits.entry(cell).or_insert(0) += 1;
        }
    }

    /// Mean rolls per game, 0.0 for an empty run.
    #[must_use]
    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games as f64
    }

    /// Fraction of all games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.wins[player]) / self.games as f64
    }

    /// The hazard cell that fired most often, with its count.
    ///
    /// Ties resolve to the lowest cell number.
    #[must_use]
    pub fn hottest_hazard(&self) -> Option<(u16, u32)> {
        self.hazard_hits
            .iter()
            .map(|(&cell, &hits)| (cell, hits))
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
    }
}

/// Plays games on copies of a template engine.
#[derive(Clone, Debug)]
pub struct Simulator {
    engine: GameEngine,
    config: SimConfig,
}

impl Simulator {
    /// Create a simulator. The template is reset before every game.
    pub fn new(engine: GameEngine, config: SimConfig) -> Self {
        Self { engine, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Play one game from the fresh state.
    pub fn play_game(&self, rng: &mut GameRng) -> GameSummary {
        let mut engine = self.engine.clone();
        engine.reset();
        let mut summary = GameSummary::default();

        while summary.turns < self.config.max_turns {
            let Ok(outcome) = engine.roll_with(rng) else {
                break;
            };
            summary.turns += 1;

            match outcome.kind {
                MoveKind::Ladder { from, .. } => {
                    summary.ladders += 1;
                    summary.hazards_hit.push(from);
                }
                MoveKind::Snake { from, .. } => {
                    summary.snakes += 1;
                    summary.hazards_hit.push(from);
                }
                MoveKind::Overshoot { .. } => summary.overshoots += 1,
                MoveKind::Plain => {}
            }

            if outcome.is_win {
                summary.winner = Some(outcome.player);
                break;
            }
        }

        summary
    }

    /// Play `config.games` games, each on its own fork of the master RNG.
    pub fn run(&self) -> SimulationStats {
        let mut master = GameRng::new(self.config.seed);
        let mut stats = SimulationStats::new(self.engine.state().player_count());

        for _ in 0..self.config.games {
            let mut rng = master.fork();
            let summary = self.play_game(&mut rng);
            stats.absorb(&summary);
        }

        debug!(
            games = stats.games,
            unfinished = stats.unfinished,
            average_turns = stats.average_turns(),
            "simulation finished"
        );
        stats
    }
}
