//! Animation frame stepping.
//!
//! The character animates from the shared [`AnimationClock`]; every enemy
//! steps its own frame. Both use [`step_frame`].

use bevy_ecs::prelude::*;

use crate::resources::animationclock::AnimationClock;
use crate::resources::enemyslots::EnemySlots;
use crate::resources::worldtime::WorldTime;

/// Advance `frame` by whole frame durations contained in `elapsed + dt`.
///
/// The frame wraps inside `[0, frame_count)`. Non-positive `fps` or an empty
/// sheet leaves the frame untouched.
pub fn step_frame(frame: &mut usize, elapsed: &mut f32, dt: f32, fps: f32, frame_count: usize) {
    if fps <= 0.0 || frame_count == 0 {
        return;
    }
    let frame_time = 1.0 / fps;
    *elapsed += dt;
    while *elapsed >= frame_time {
        *elapsed -= frame_time;
        *frame = (*frame + 1) % frame_count;
    }
}

pub fn advance_character_frame(time: Res<WorldTime>, mut clock: ResMut<AnimationClock>) {
    clock.advance(time.delta);
}

pub fn advance_enemy_frames(time: Res<WorldTime>, mut enemies: ResMut<EnemySlots>) {
    let (fps, frame_count) = (enemies.fps, enemies.frame_count);
    for enemy in enemies.iter_mut() {
        enemy.advance(time.delta, fps, frame_count);
    }
}
