//! Time update.
//!
//! Writes the frame delta into [`WorldTime`] before the animation systems run.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Longest frame the simulation accepts, in seconds.
///
/// A stalled frame (window drag, blocking load) would otherwise fast-forward
/// every animation by many frames at once.
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in seconds; it is clamped to
/// `[0, MAX_FRAME_DELTA]` before `time_scale` is applied.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.clamp(0.0, MAX_FRAME_DELTA) * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
}
