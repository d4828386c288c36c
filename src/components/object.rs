//! Placeholder world object.
//!
//! Objects have no art yet; they are drawn as solid rectangles.

use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;
use crate::resources::spritesheet::FrameRect;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Object {
    pub pos: MapPosition,
    pub width: i32,
    pub height: i32,
}

impl Object {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: MapPosition::new(x, y),
            width,
            height,
        }
    }

    /// Screen rectangle covered by the object.
    pub fn rect(&self) -> FrameRect {
        FrameRect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}
