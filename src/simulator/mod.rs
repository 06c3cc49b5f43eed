//! Headless round simulator for tuning the win threshold.
//!
//! Plays full rounds through the same `process_frame` call the terminal game
//! uses each frame, with an autopilot standing in for the player.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_round};
