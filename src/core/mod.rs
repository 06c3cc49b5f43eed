//! Constants, configuration, persistence and the virtual clock.

pub mod config;
pub mod constants;
pub mod persistence;
pub mod scheduler;

pub use config::*;
pub use constants::*;
