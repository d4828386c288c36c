//! Character animation clock.
//!
//! Holds the character's current animation frame. Render code receives the
//! frame from here instead of reading a global.

use bevy_ecs::prelude::Resource;

use crate::systems::animation::step_frame;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    pub frame: usize,
    pub elapsed: f32,
    pub fps: f32,
    pub frame_count: usize,
}

impl AnimationClock {
    pub fn new(fps: f32, frame_count: usize) -> Self {
        Self {
            frame: 0,
            elapsed: 0.0,
            fps,
            frame_count,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        step_frame(
            &mut self.frame,
            &mut self.elapsed,
            dt,
            self.fps,
            self.frame_count,
        );
    }
}
