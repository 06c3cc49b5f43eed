//! Trash Toss - terminal recycling sorting game.
//!
//! This module exposes the game logic for testing and the simulator.

pub mod core;
pub mod game;
pub mod simulator;

pub use crate::core::config::GameConfig;
pub use crate::core::constants::*;
pub use crate::game::state::TrashGame;
