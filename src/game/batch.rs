//! Batch spawning and bookkeeping.

use super::types::{ItemId, TrashItem, TrashKind};
use crate::core::constants::BATCH_SIZE;
use glam::Vec2;
use rand::Rng;

/// The current group of items. Only `items[cursor]` may be thrown next.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub items: Vec<TrashItem>,
    /// Index of the next item to throw.
    pub cursor: usize,
    /// Items not yet resolved (destroyed after a throw).
    pub remaining: i32,
}

impl Batch {
    /// The item that the next throw applies to, if any are left to throw.
    pub fn active(&self) -> Option<&TrashItem> {
        self.items.get(self.cursor)
    }

    pub fn active_mut(&mut self) -> Option<&mut TrashItem> {
        self.items.get_mut(self.cursor)
    }

    /// True once every item has been thrown, even if some are still in flight.
    pub fn all_thrown(&self) -> bool {
        self.cursor >= self.items.len()
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut TrashItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Items still present in the play field.
    pub fn live_items(&self) -> impl Iterator<Item = &TrashItem> {
        self.items.iter().filter(|item| item.is_live())
    }

    /// Destroy every item and empty the batch.
    pub fn clear(&mut self) {
        for item in &mut self.items {
            item.destroyed = true;
        }
        self.items.clear();
        self.cursor = 0;
    }
}

/// Spawns batches from a catalog at fixed spawn points.
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    next_id: ItemId,
}

impl Spawner {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Build a fresh batch of [`BATCH_SIZE`] items, one per spawn point, each a
    /// uniformly random catalog entry at rest.
    ///
    /// `catalog` must be non-empty and `spawn_points` must hold at least
    /// [`BATCH_SIZE`] entries; `GameConfig::validate` guarantees both.
    pub fn spawn_batch<R: Rng>(
        &mut self,
        rng: &mut R,
        catalog: &[TrashKind],
        spawn_points: &[Vec2],
    ) -> Batch {
        let items: Vec<TrashItem> = spawn_points
            .iter()
            .take(BATCH_SIZE)
            .map(|&position| {
                let kind = catalog[rng.gen_range(0..catalog.len())].clone();
                let id = self.next_id;
                self.next_id += 1;
                TrashItem::new(id, kind, position)
            })
            .collect();

        tracing::debug!(
            items = ?items.iter().map(|i| i.kind.name.as_str()).collect::<Vec<_>>(),
            "spawned batch"
        );

        Batch {
            remaining: items.len() as i32,
            items,
            cursor: 0,
        }
    }
}
