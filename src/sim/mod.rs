//! Headless simulation of complete games.

mod simulator;

pub use simulator::{GameSummary, SimConfig, SimulationStats, Simulator};
