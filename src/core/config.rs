//! Game configuration loaded from ~/.trash_toss/config.json.
//!
//! Every field has a default, so a missing file or a partial file both load
//! cleanly. A loaded config must pass [`GameConfig::validate`] before a game
//! is built from it.

use crate::core::constants::*;
use crate::core::persistence::{data_path, load_json_or_default};
use crate::game::types::{Bin, TrashKind};
use anyhow::{bail, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Audio cue settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Ring the bell on correct throws too, not just wrong ones.
    pub bell_on_correct: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bell_on_correct: false,
        }
    }
}

/// Round rules, world layout and trash catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Countdown length in seconds.
    pub round_seconds: f64,
    /// Final score needed for a win.
    pub win_score: i32,
    pub correct_streak_reset: u32,
    pub wrong_streak_reset: u32,
    /// World position of the recycle bin.
    pub recycle_bin: Vec2,
    /// World position of the non-recycle bin.
    pub non_recycle_bin: Vec2,
    /// One spawn point per batch slot, in slot order.
    pub spawn_points: Vec<Vec2>,
    /// Spawnable trash kinds, picked uniformly.
    pub catalog: Vec<TrashKind>,
    /// Vertical acceleration applied to thrown items.
    pub gravity: f32,
    pub audio: AudioConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_SECONDS,
            win_score: WIN_SCORE,
            correct_streak_reset: CORRECT_STREAK_RESET,
            wrong_streak_reset: WRONG_STREAK_RESET,
            recycle_bin: Vec2::new(-7.0, 1.0),
            non_recycle_bin: Vec2::new(7.0, 1.0),
            spawn_points: vec![
                Vec2::new(-2.0, 6.0),
                Vec2::new(0.0, 6.0),
                Vec2::new(2.0, 6.0),
            ],
            catalog: default_catalog(),
            gravity: DEFAULT_GRAVITY,
            audio: AudioConfig::default(),
        }
    }
}

fn default_catalog() -> Vec<TrashKind> {
    vec![
        TrashKind::new("Plastic Bottle", 'b', true),
        TrashKind::new("Tin Can", 'c', true),
        TrashKind::new("Newspaper", 'n', true),
        TrashKind::new("Glass Jar", 'j', true),
        TrashKind::new("Banana Peel", '~', false),
        TrashKind::new("Greasy Pizza Box", 'p', false),
        TrashKind::new("Chip Bag", 'x', false),
        TrashKind::new("Used Tissue", 't', false),
    ]
}

impl GameConfig {
    /// Load from ~/.trash_toss/config.json and validate.
    pub fn load() -> Result<Self> {
        let path = data_path(CONFIG_FILE)?;
        Self::load_from(&path)
    }

    /// Load from an explicit path and validate. Missing files yield defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: GameConfig = load_json_or_default(path);
        config.validate()?;
        Ok(config)
    }

    /// Reject layouts the spawner and evaluator cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.is_empty() {
            bail!("trash catalog is empty");
        }
        if self.spawn_points.len() < BATCH_SIZE {
            bail!(
                "need at least {} spawn points, found {}",
                BATCH_SIZE,
                self.spawn_points.len()
            );
        }
        if !(self.round_seconds > 0.0) {
            bail!("round_seconds must be positive, got {}", self.round_seconds);
        }
        if self.correct_streak_reset == 0 || self.wrong_streak_reset == 0 {
            bail!("streak thresholds must be at least 1");
        }
        Ok(())
    }

    /// World position of a bin.
    pub fn bin_position(&self, bin: Bin) -> Vec2 {
        match bin {
            Bin::Recycle => self.recycle_bin,
            Bin::NonRecycle => self.non_recycle_bin,
        }
    }
}
