//! Simulation configuration.

use crate::core::constants::TICK_INTERVAL_MS;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of rounds to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Chance the autopilot picks the right bin (0.0-1.0)
    pub accuracy: f64,

    /// Seconds the autopilot waits between throws
    pub throw_interval: f64,

    /// Frame length fed to the game loop, in seconds
    pub frame_seconds: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per round)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            accuracy: 0.9,
            throw_interval: 0.35,
            frame_seconds: TICK_INTERVAL_MS as f64 / 1000.0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// A flawless player throwing as fast as the batches allow.
    pub fn perfect_player() -> Self {
        Self {
            accuracy: 1.0,
            throw_interval: 0.0,
            ..Default::default()
        }
    }

    /// A player who guesses.
    pub fn random_player() -> Self {
        Self {
            accuracy: 0.5,
            ..Default::default()
        }
    }
}
