//! Enemy record.
//!
//! Each enemy keeps its own animation frame; there is no shared enemy clock,
//! so enemies spawned at different times animate out of phase.

use crate::components::mapposition::MapPosition;
use crate::systems::animation::step_frame;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Enemy {
    pub pos: MapPosition,
    /// Index into the enemy sheet's frame table.
    pub current_frame: usize,
    /// Seconds spent on the current frame.
    pub frame_elapsed: f32,
}

impl Enemy {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            pos: MapPosition::new(x, y),
            ..Default::default()
        }
    }

    pub fn with_frame(mut self, frame: usize) -> Self {
        self.current_frame = frame;
        self
    }

    /// Advance this enemy's own animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32, fps: f32, frame_count: usize) {
        step_frame(
            &mut self.current_frame,
            &mut self.frame_elapsed,
            dt,
            fps,
            frame_count,
        );
    }
}
