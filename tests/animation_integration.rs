//! Animation stepping driven through a bevy_ecs schedule.

use bevy_ecs::prelude::*;

use survival_render::components::enemy::Enemy;
use survival_render::resources::animationclock::AnimationClock;
use survival_render::resources::enemyslots::EnemySlots;
use survival_render::resources::worldtime::WorldTime;
use survival_render::systems::animation::{advance_character_frame, advance_enemy_frames};
use survival_render::systems::time::update_world_time;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(AnimationClock::new(10.0, 4));
    world.insert_resource(EnemySlots::new(5.0, 6));
    world
}

fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems((advance_character_frame, advance_enemy_frames));
    schedule.run(world);
}

#[test]
fn character_clock_advances_with_world_time() {
    let mut world = make_world();
    tick(&mut world, 0.25);
    assert_eq!(world.resource::<AnimationClock>().frame, 2);
    tick(&mut world, 0.2);
    assert_eq!(world.resource::<AnimationClock>().frame, 0);
}

#[test]
fn enemies_keep_independent_frames() {
    let mut world = make_world();
    {
        let mut slots = world.resource_mut::<EnemySlots>();
        slots.slots[0] = Some(Enemy::new(0, 0).with_frame(0));
        slots.slots[2] = Some(Enemy::new(0, 0).with_frame(3));
        slots.slots[4] = Some(Enemy::new(0, 0).with_frame(5));
    }

    tick(&mut world, 0.25);

    let slots = world.resource::<EnemySlots>();
    assert_eq!(slots.slots[0].unwrap().current_frame, 1);
    assert_eq!(slots.slots[2].unwrap().current_frame, 4);
    assert_eq!(slots.slots[4].unwrap().current_frame, 0);
    assert!(slots.slots[1].is_none());
    assert!(slots.slots[3].is_none());
}

#[test]
fn time_scale_slows_animation() {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(0.5));
    world.insert_resource(AnimationClock::new(10.0, 4));
    world.insert_resource(EnemySlots::new(5.0, 6));

    tick(&mut world, 0.15);
    assert_eq!(world.resource::<AnimationClock>().frame, 0);
    tick(&mut world, 0.1);
    assert_eq!(world.resource::<AnimationClock>().frame, 1);
    assert!((world.resource::<WorldTime>().elapsed - 0.125).abs() < 1e-6);
}
