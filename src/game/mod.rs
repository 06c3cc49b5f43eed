//! Trash sorting game.
//!
//! Items spawn in batches of three. The player throws the active item at the
//! recycle bin (Left) or the non-recycle bin (Right) before the countdown
//! runs out; correct sorts score a point, wrong ones lose a point and bounce
//! away from the bin.

pub mod batch;
pub mod history;
pub mod logic;
pub mod physics;
pub mod presenter;
pub mod state;
pub mod types;

pub use logic::*;
pub use state::*;
pub use types::*;
