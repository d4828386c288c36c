use bevy_ecs::prelude::Component;

/// Marker for the player character entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;
