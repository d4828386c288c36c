//! Fixed-capacity enemy storage.
//!
//! Enemies live in a fixed array of optional slots. A `None` slot is simply
//! unused; renderers and systems skip it.

use bevy_ecs::prelude::Resource;

use crate::components::enemy::Enemy;

/// Maximum number of enemies alive at once.
pub const MAX_ENEMIES: usize = 10;

#[derive(Resource, Clone, Debug)]
pub struct EnemySlots {
    pub slots: [Option<Enemy>; MAX_ENEMIES],
    /// Enemy animation speed in frames per second.
    pub fps: f32,
    /// Frames in the enemy sheet.
    pub frame_count: usize,
}

impl EnemySlots {
    pub fn new(fps: f32, frame_count: usize) -> Self {
        Self {
            slots: [None; MAX_ENEMIES],
            fps,
            frame_count,
        }
    }

    /// Put `enemy` in the first free slot. Returns the slot index, or `None` when full.
    pub fn spawn(&mut self, enemy: Enemy) -> Option<usize> {
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(enemy);
        Some(index)
    }

    /// Empty slot `index`, returning what was there.
    pub fn despawn(&mut self, index: usize) -> Option<Enemy> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Enemy> {
        self.slots.iter_mut().flatten()
    }
}
