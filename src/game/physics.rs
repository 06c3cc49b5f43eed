//! Point-mass motion for thrown trash.
//!
//! Forces act for a single fixed physics step, so a one-off force changes
//! velocity by `force * FIXED_PHYSICS_STEP / ITEM_MASS`.

use super::types::TrashItem;
use crate::core::constants::{DEFLECT_SPEED, FIXED_PHYSICS_STEP, ITEM_MASS};
use glam::Vec2;

/// Apply a one-step force to an item.
pub fn apply_force(item: &mut TrashItem, force: Vec2) {
    item.velocity += force * FIXED_PHYSICS_STEP / ITEM_MASS;
}

/// Advance a live thrown item by `dt` seconds (semi-implicit Euler).
pub fn integrate(item: &mut TrashItem, dt: f32, gravity: f32) {
    if item.destroyed || !item.thrown || dt <= 0.0 {
        return;
    }
    item.velocity.y += gravity * dt;
    item.position += item.velocity * dt;
}

/// Rotate a velocity 90° counter-clockwise and rescale it to the deflect speed.
/// A zero velocity stays zero.
pub fn deflect(velocity: Vec2) -> Vec2 {
    velocity.perp().normalize_or_zero() * DEFLECT_SPEED
}
