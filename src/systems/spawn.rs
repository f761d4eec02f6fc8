//! Monster spawning.
//!
//! All placement goes through [`MonsterSpawner`], so positions come from a
//! single RNG and stay inside the play area.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::monster::{MONSTER_SIZE, Monster, MonsterKind};
use crate::components::sprite::Sprite;
use crate::resources::screensize::ScreenSize;
use crate::resources::spawner::MonsterSpawner;
use crate::resources::worldtime::WorldTime;

pub fn monster_bundle(kind: MonsterKind, x: f32, y: f32) -> (Monster, MapPosition, Sprite, BoxCollider) {
    (
        Monster::new(kind),
        MapPosition::new(x, y),
        Sprite::textured(kind.texture_key(), MONSTER_SIZE, MONSTER_SIZE),
        BoxCollider::new(MONSTER_SIZE, MONSTER_SIZE),
    )
}

/// Spawn one monster of `kind` at a random position.
pub fn spawn_monster(
    commands: &mut Commands,
    spawner: &mut MonsterSpawner,
    screen: &ScreenSize,
    kind: MonsterKind,
) -> Entity {
    let (x, y) = spawner.random_position(screen);
    let entity = commands.spawn(monster_bundle(kind, x, y)).id();
    debug!("Spawned {:?} monster at ({}, {})", kind, x, y);
    entity
}

/// Bulk population: one monster of every kind.
pub fn populate_monsters(commands: &mut Commands, spawner: &mut MonsterSpawner, screen: &ScreenSize) {
    for kind in MonsterKind::ALL {
        spawn_monster(commands, spawner, screen, kind);
    }
    info!("Populated {} monsters", MonsterKind::ALL.len());
}

/// Periodic top-up: every `spawn_delay` seconds spawn one monster while the
/// collection is below capacity.
pub fn monster_spawn_system(
    mut commands: Commands,
    mut spawner: ResMut<MonsterSpawner>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    monsters: Query<(), With<Monster>>,
) {
    if !spawner.tick(time.delta) {
        return;
    }
    if !spawner.has_capacity(monsters.iter().count()) {
        return;
    }
    let kind = spawner.next_spawn_kind();
    spawn_monster(&mut commands, &mut spawner, &screen, kind);
}
