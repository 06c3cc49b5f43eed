//! Trash sorting data structures.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Target bin for a throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bin {
    Recycle,
    NonRecycle,
}

impl Bin {
    pub const ALL: [Bin; 2] = [Bin::Recycle, Bin::NonRecycle];

    pub fn name(self) -> &'static str {
        match self {
            Bin::Recycle => "Recycle",
            Bin::NonRecycle => "Trash",
        }
    }

    /// The bin an item with this recyclability belongs in.
    pub fn for_recyclable(recyclable: bool) -> Self {
        if recyclable {
            Bin::Recycle
        } else {
            Bin::NonRecycle
        }
    }

    pub fn other(self) -> Self {
        match self {
            Bin::Recycle => Bin::NonRecycle,
            Bin::NonRecycle => Bin::Recycle,
        }
    }
}

/// A spawnable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashKind {
    pub name: String,
    /// Character drawn for the item in the play field.
    pub glyph: char,
    pub recyclable: bool,
}

impl TrashKind {
    pub fn new(name: &str, glyph: char, recyclable: bool) -> Self {
        Self {
            name: name.to_string(),
            glyph,
            recyclable,
        }
    }
}

/// Unique id for a spawned item, stable across batches.
pub type ItemId = u64;

/// A live trash object in the play field.
#[derive(Debug, Clone, PartialEq)]
pub struct TrashItem {
    pub id: ItemId,
    pub kind: TrashKind,
    pub recyclable: bool,
    /// World position (+y up).
    pub position: Vec2,
    /// World units per second.
    pub velocity: Vec2,
    /// Thrown items are affected by gravity; resting items are not.
    pub thrown: bool,
    pub destroyed: bool,
}

impl TrashItem {
    pub fn new(id: ItemId, kind: TrashKind, position: Vec2) -> Self {
        Self {
            id,
            recyclable: kind.recyclable,
            kind,
            position,
            velocity: Vec2::ZERO,
            thrown: false,
            destroyed: false,
        }
    }

    pub fn is_live(&self) -> bool {
        !self.destroyed
    }
}

/// Audio cue emitted by a throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    Correct,
    Wrong,
}

/// Classification of a throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowOutcome {
    Correct,
    Incorrect,
}

impl ThrowOutcome {
    pub fn score_delta(self) -> i32 {
        match self {
            ThrowOutcome::Correct => 1,
            ThrowOutcome::Incorrect => -1,
        }
    }
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    NotStarted,
    Running,
    Ended,
}

/// Final result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Win,
    Loss,
}

impl RoundResult {
    pub fn from_score(score: i32, win_score: i32) -> Self {
        if score >= win_score {
            RoundResult::Win
        } else {
            RoundResult::Loss
        }
    }

    /// End-of-round banner text.
    pub fn message(self) -> &'static str {
        match self {
            RoundResult::Win => "Win!",
            RoundResult::Loss => "Game Over",
        }
    }
}
