//! Session state for one player at the sorting table.

use super::batch::{Batch, Spawner};
use super::presenter::Hud;
use super::types::{ItemId, RoundResult, SessionPhase, Sound};
use crate::core::config::GameConfig;
use crate::core::scheduler::{Scheduler, VirtualClock};

/// A delayed effect queued by a throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    PlaySound(Sound),
    /// Rotate the item's velocity mid-flight.
    Deflect(ItemId),
    Destroy(ItemId),
    /// One batch slot is done; spawns the next batch once all are.
    SlotResolved,
}

/// Everything that changes over a session.
pub struct TrashGame {
    pub config: GameConfig,
    pub phase: SessionPhase,
    /// Final result of the last finished round.
    pub result: Option<RoundResult>,

    // Scoring
    pub score: i32,
    pub correct_streak: u32,
    pub wrong_streak: u32,
    pub correct_throws: u32,
    pub wrong_throws: u32,

    /// Seconds left in the round. Can dip below zero on the final tick.
    pub timer: f64,

    pub batch: Batch,
    pub spawner: Spawner,

    // Timing
    pub clock: VirtualClock,
    pub scheduler: Scheduler<ScheduledAction>,

    pub hud: Hud,
}

impl TrashGame {
    /// Build a session on the title screen. `config` must already be validated.
    pub fn new(config: GameConfig) -> Self {
        let round_seconds = config.round_seconds;
        Self {
            config,
            phase: SessionPhase::NotStarted,
            result: None,
            score: 0,
            correct_streak: 0,
            wrong_streak: 0,
            correct_throws: 0,
            wrong_throws: 0,
            timer: round_seconds,
            batch: Batch::default(),
            spawner: Spawner::new(),
            clock: VirtualClock::new(),
            scheduler: Scheduler::new(),
            hud: Hud::new(round_seconds),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Whether a throw input would be accepted right now.
    pub fn can_throw(&self) -> bool {
        self.is_running() && !self.batch.all_thrown()
    }
}
