//! Parry resolution against a headless world: target selection, no-op
//! cases, kills, replacement and the unclamped lunge.

use std::sync::Arc;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use fastrand::Rng;

use parrybound::components::mapposition::MapPosition;
use parrybound::components::monster::{Monster, MonsterKind};
use parrybound::components::player::{Facing, Player, PlayerState};
use parrybound::events::input::{InputAction, InputEvent};
use parrybound::events::monster::MonsterKilledEvent;
use parrybound::resources::animationstore::{AnimationResource, AnimationStore};
use parrybound::resources::gameconfig::GameConfig;
use parrybound::resources::input::InputState;
use parrybound::resources::screensize::ScreenSize;
use parrybound::resources::session::SessionState;
use parrybound::resources::spawner::MonsterSpawner;
use parrybound::resources::worldtime::WorldTime;
use parrybound::systems::parry::parry_observer;
use parrybound::systems::player::{player_bundle, player_update};
use parrybound::systems::spawn::monster_bundle;

const SCREEN: ScreenSize = ScreenSize { w: 2000, h: 2000 };

#[derive(Resource, Default)]
struct Kills(Vec<MonsterKilledEvent>);

fn record_kills(trigger: On<MonsterKilledEvent>, mut kills: ResMut<Kills>) {
    kills.0.push(*trigger.event());
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(SCREEN);
    world.insert_resource(SessionState::new());
    world.insert_resource(MonsterSpawner::from_config(&GameConfig::new(), Rng::with_seed(7)));
    world.insert_resource(Kills::default());
    world.spawn(Observer::new(parry_observer));
    world.spawn(Observer::new(record_kills));
    world.flush();
    world
}

fn spawn_player_at(world: &mut World, x: f32, y: f32) -> Entity {
    let (player, _, sprite, animation, collider) = player_bundle(&GameConfig::new(), &SCREEN);
    world
        .spawn((player, MapPosition::new(x, y), sprite, animation, collider))
        .id()
}

fn spawn_monster_at(world: &mut World, kind: MonsterKind, x: f32, y: f32) -> Entity {
    world.spawn(monster_bundle(kind, x, y)).id()
}

fn press_parry(world: &mut World) {
    world.trigger(InputEvent::press(InputAction::Parry));
    world.flush();
}

fn monster_kinds(world: &mut World) -> Vec<MonsterKind> {
    world.query::<&Monster>().iter(world).map(|m| m.kind).collect()
}

#[test]
fn only_the_monster_within_range_is_damaged() {
    let mut world = make_world();
    let player = spawn_player_at(&mut world, 0.0, 0.0);
    let near = spawn_monster_at(&mut world, MonsterKind::Moving, 300.0, 400.0);
    let far = spawn_monster_at(&mut world, MonsterKind::Moving, 1200.0, 0.0);

    press_parry(&mut world);

    assert_eq!(world.get::<Monster>(near).unwrap().health(), 1);
    assert_eq!(world.get::<Monster>(far).unwrap().health(), 2);
    let player = world.get::<Player>(player).unwrap();
    assert!(player.parry.is_parrying);
    assert!((player.parry.timer - 0.6).abs() < 1e-6);
}

#[test]
fn closest_monster_wins() {
    let mut world = make_world();
    spawn_player_at(&mut world, 0.0, 200.0);
    let mid = spawn_monster_at(&mut world, MonsterKind::Charging, 0.0, 900.0);
    let close = spawn_monster_at(&mut world, MonsterKind::Charging, 0.0, 450.0);

    press_parry(&mut world);

    assert_eq!(world.get::<Monster>(close).unwrap().health(), 2);
    assert_eq!(world.get::<Monster>(mid).unwrap().health(), 3);
}

#[test]
fn parry_without_target_is_a_noop() {
    let mut world = make_world();
    let player = spawn_player_at(&mut world, 0.0, 0.0);
    let far = spawn_monster_at(&mut world, MonsterKind::Moving, 1200.0, 0.0);

    press_parry(&mut world);

    assert_eq!(world.get::<Monster>(far).unwrap().health(), 2);
    let p = world.get::<Player>(player).unwrap();
    assert!(!p.parry.is_parrying);
    assert_eq!(p.parry.timer, 0.0);
    let pos = world.get::<MapPosition>(player).unwrap();
    assert_eq!((pos.pos.x, pos.pos.y), (0.0, 0.0));
}

#[test]
fn parry_on_cooldown_is_a_noop() {
    let mut world = make_world();
    let player = spawn_player_at(&mut world, 500.0, 500.0);
    let monster = spawn_monster_at(&mut world, MonsterKind::Charging, 600.0, 500.0);
    {
        let mut p = world.get_mut::<Player>(player).unwrap();
        p.parry.start();
        p.parry.tick(0.2);
    }
    let timer_before = world.get::<Player>(player).unwrap().parry.timer;

    press_parry(&mut world);

    assert_eq!(world.get::<Monster>(monster).unwrap().health(), 3);
    assert_eq!(world.get::<Player>(player).unwrap().parry.timer, timer_before);
    let pos = world.get::<MapPosition>(player).unwrap();
    assert_eq!((pos.pos.x, pos.pos.y), (500.0, 500.0));
}

#[test]
fn release_event_does_not_parry() {
    let mut world = make_world();
    let player = spawn_player_at(&mut world, 500.0, 500.0);
    let monster = spawn_monster_at(&mut world, MonsterKind::Ranged, 600.0, 500.0);

    world.trigger(InputEvent::release(InputAction::Parry));
    world.trigger(InputEvent::press(InputAction::ArmPortal));
    world.flush();

    assert_eq!(world.get::<Monster>(monster).unwrap().health(), 1);
    assert!(world.get::<Player>(player).unwrap().parry.ready());
}

#[test]
fn kill_below_cap_is_replaced() {
    let mut world = make_world();
    spawn_player_at(&mut world, 500.0, 500.0);
    let target = spawn_monster_at(&mut world, MonsterKind::Ranged, 550.0, 500.0);
    spawn_monster_at(&mut world, MonsterKind::Charging, 1400.0, 500.0);
    spawn_monster_at(&mut world, MonsterKind::Charging, 500.0, 1400.0);

    press_parry(&mut world);

    assert!(world.get_entity(target).is_err());
    assert_eq!(world.resource::<SessionState>().kill_count, 1);
    let mut kinds = monster_kinds(&mut world);
    kinds.sort_by_key(|k| *k as u8);
    assert_eq!(
        kinds,
        vec![MonsterKind::Moving, MonsterKind::Charging, MonsterKind::Charging]
    );

    let kills = &world.resource::<Kills>().0;
    assert_eq!(kills.len(), 1);
    assert_eq!(kills[0].kind, MonsterKind::Ranged);
    assert_eq!(kills[0].remaining, 3);
    assert!(kills[0].replaced);
}

#[test]
fn replacement_kind_follows_post_removal_parity() {
    let mut world = make_world();
    spawn_player_at(&mut world, 500.0, 500.0);
    spawn_monster_at(&mut world, MonsterKind::Ranged, 550.0, 500.0);
    spawn_monster_at(&mut world, MonsterKind::Charging, 1400.0, 500.0);

    press_parry(&mut world);

    let mut kinds = monster_kinds(&mut world);
    kinds.sort_by_key(|k| *k as u8);
    assert_eq!(kinds, vec![MonsterKind::Ranged, MonsterKind::Charging]);
}

#[test]
fn replacement_spawns_inside_play_area() {
    let mut world = make_world();
    spawn_player_at(&mut world, 500.0, 500.0);
    spawn_monster_at(&mut world, MonsterKind::Ranged, 550.0, 500.0);

    press_parry(&mut world);

    let positions: Vec<MapPosition> = world
        .query_filtered::<&MapPosition, With<Monster>>()
        .iter(&world)
        .copied()
        .collect();
    assert_eq!(positions.len(), 1);
    let pos = positions[0];
    assert!(pos.pos.x >= 0.0 && pos.pos.x <= 2000.0 - 128.0);
    assert!(pos.pos.y >= 0.0 && pos.pos.y <= 2000.0 - 128.0);
}

#[test]
fn kill_at_cap_is_not_replaced() {
    let mut world = make_world();
    spawn_player_at(&mut world, 1000.0, 1000.0);
    let target = spawn_monster_at(&mut world, MonsterKind::Ranged, 1050.0, 1000.0);
    for i in 0..6 {
        spawn_monster_at(&mut world, MonsterKind::Charging, 200.0 + i as f32 * 150.0, 1800.0);
    }
    assert_eq!(monster_kinds(&mut world).len(), 7);

    press_parry(&mut world);

    assert!(world.get_entity(target).is_err());
    assert_eq!(world.resource::<SessionState>().kill_count, 1);
    assert_eq!(monster_kinds(&mut world).len(), 6);
    let kills = &world.resource::<Kills>().0;
    assert!(!kills[0].replaced);
    assert_eq!(kills[0].remaining, 6);
}

#[test]
fn surviving_target_still_lunges_player() {
    let mut world = make_world();
    let player = spawn_player_at(&mut world, 500.0, 500.0);
    let monster = spawn_monster_at(&mut world, MonsterKind::Charging, 500.0, 700.0);
    world.get_mut::<Player>(player).unwrap().facing = Facing::Right;

    press_parry(&mut world);

    assert_eq!(world.get::<Monster>(monster).unwrap().health(), 2);
    let pos = world.get::<MapPosition>(player).unwrap();
    assert_eq!((pos.pos.x, pos.pos.y), (600.0, 500.0));
    assert_eq!(world.resource::<SessionState>().kill_count, 0);
}

#[test]
fn lunge_overshoot_is_clamped_on_next_update() {
    let mut world = make_world();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    let mut store = AnimationStore::new();
    for state in PlayerState::ALL {
        store.insert(
            state.animation_key(),
            AnimationResource {
                frames: vec![Arc::from(state.asset_name())],
                frame_duration: 0.1,
            },
        );
    }
    world.insert_resource(store);

    let player = spawn_player_at(&mut world, 30.0, 500.0);
    spawn_monster_at(&mut world, MonsterKind::Charging, 300.0, 500.0);
    world.get_mut::<Player>(player).unwrap().facing = Facing::Left;

    press_parry(&mut world);
    assert_eq!(world.get::<MapPosition>(player).unwrap().pos.x, -70.0);

    let mut schedule = Schedule::default();
    schedule.add_systems(player_update);
    schedule.run(&mut world);

    assert_eq!(world.get::<MapPosition>(player).unwrap().pos.x, 0.0);
    assert_eq!(world.get::<Player>(player).unwrap().state, PlayerState::Parry);
}
