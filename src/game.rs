//! Demo scene setup.
//!
//! Inserts the resources the render and animation systems read and spawns a
//! player, a few placeholder objects and some enemies. A full wave is spawned,
//! then thinned out so the survivors are spread across the slot array with
//! empty slots between them.

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::object::Object;
use crate::components::player::Player;
use crate::resources::animationclock::AnimationClock;
use crate::resources::enemyslots::{EnemySlots, MAX_ENEMIES};
use crate::resources::gameconfig::GameConfig;
use crate::resources::spritesheet::SheetKind;
use crate::resources::worldtime::WorldTime;

/// Slot index for the `i`-th of `count` enemies, spread over the slot array.
pub fn spread_slot(i: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (i * MAX_ENEMIES) / count
}

pub fn setup(
    world: &mut World,
    config: &GameConfig,
    enemy_count: usize,
    rng: &mut fastrand::Rng,
) {
    let (w, h) = (config.window_width as i32, config.window_height as i32);
    let character = config.sheet(SheetKind::Character);
    let enemy = config.sheet(SheetKind::Enemy);

    world.insert_resource(WorldTime::default());
    world.insert_resource(config.clone());
    world.insert_resource(AnimationClock::new(
        character.fps,
        character.geometry.total_frames,
    ));

    world.spawn((
        Player,
        MapPosition::new(
            (w - character.geometry.frame_width) / 2,
            (h - character.geometry.frame_height) / 2,
        ),
    ));

    // Crates in the four quadrants
    for (qx, qy) in [(1, 1), (3, 1), (1, 3), (3, 3)] {
        world.spawn(Object::new(qx * w / 4 - 20, qy * h / 4 - 20, 40, 40));
    }

    let enemy_count = enemy_count.min(MAX_ENEMIES);
    let mut slots = EnemySlots::new(enemy.fps, enemy.geometry.total_frames);
    let max_x = (w - enemy.geometry.frame_width).max(1);
    let max_y = (h - enemy.geometry.frame_height).max(1);
    loop {
        let spawned = Enemy::new(rng.i32(0..max_x), rng.i32(0..max_y))
            .with_frame(rng.usize(0..enemy.geometry.total_frames));
        if slots.spawn(spawned).is_none() {
            break;
        }
    }

    let survivors: Vec<usize> = (0..enemy_count)
        .map(|i| spread_slot(i, enemy_count))
        .collect();
    for index in (0..MAX_ENEMIES).filter(|index| !survivors.contains(index)) {
        slots.despawn(index);
    }

    if slots.is_empty() {
        warn!("Scene ready without enemies");
    } else {
        info!("Scene ready: {} enemies in {} slots", slots.len(), MAX_ENEMIES);
    }
    world.insert_resource(slots);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_slot_leaves_gaps() {
        let slots: Vec<_> = (0..4).map(|i| spread_slot(i, 4)).collect();
        assert_eq!(slots, vec![0, 2, 5, 7]);
    }

    #[test]
    fn test_spread_slot_full_is_identity() {
        for i in 0..MAX_ENEMIES {
            assert_eq!(spread_slot(i, MAX_ENEMIES), i);
        }
    }

    #[test]
    fn test_setup_populates_world() {
        let mut world = World::new();
        let mut rng = fastrand::Rng::with_seed(7);
        setup(&mut world, &GameConfig::new(), 4, &mut rng);

        let slots = world.resource::<EnemySlots>();
        assert_eq!(slots.len(), 4);
        assert!(slots.slots[1].is_none());
        for enemy in slots.iter() {
            assert!(enemy.current_frame < 6);
        }

        let mut players = world.query_filtered::<&MapPosition, With<Player>>();
        assert_eq!(players.iter(&world).count(), 1);
        let mut objects = world.query::<&Object>();
        assert_eq!(objects.iter(&world).count(), 4);
    }

    #[test]
    fn test_setup_keeps_spread_slots_only() {
        let mut world = World::new();
        let mut rng = fastrand::Rng::with_seed(11);
        setup(&mut world, &GameConfig::new(), 4, &mut rng);

        let slots = world.resource::<EnemySlots>();
        let occupied: Vec<usize> = (0..MAX_ENEMIES)
            .filter(|&i| slots.slots[i].is_some())
            .collect();
        assert_eq!(occupied, vec![0, 2, 5, 7]);
    }

    #[test]
    fn test_setup_without_enemies_leaves_slots_empty() {
        let mut world = World::new();
        let mut rng = fastrand::Rng::with_seed(7);
        setup(&mut world, &GameConfig::new(), 0, &mut rng);
        assert!(world.resource::<EnemySlots>().is_empty());
    }

    #[test]
    fn test_setup_caps_enemies_at_slot_capacity() {
        let mut world = World::new();
        let mut rng = fastrand::Rng::with_seed(7);
        setup(&mut world, &GameConfig::new(), 25, &mut rng);
        assert_eq!(world.resource::<EnemySlots>().len(), MAX_ENEMIES);
    }
}
