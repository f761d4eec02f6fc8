//! Parry resolution.
//!
//! A parry press targets the closest monster within the player's parry
//! range. A hit starts the parry timer, takes one point of health and lunges
//! the player toward its facing. A monster that dies is despawned, counted
//! as a kill and, while the collection is below the replacement cap, replaced
//! by a new monster.
//!
//! The lunge is not clamped here; [`player_update`](super::player::player_update)
//! pulls the player back inside the play area on the next tick.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::mapposition::MapPosition;
use crate::components::monster::Monster;
use crate::components::player::Player;
use crate::events::input::{InputAction, InputEvent};
use crate::events::monster::MonsterKilledEvent;
use crate::resources::screensize::ScreenSize;
use crate::resources::session::SessionState;
use crate::resources::spawner::{MonsterSpawner, replacement_kind};
use crate::systems::spawn::spawn_monster;

/// Closest candidate with `distance <= range`, with its distance.
///
/// Only a strictly smaller distance replaces the current best, so ties keep
/// the candidate seen first.
pub fn select_parry_target<T>(
    origin: &MapPosition,
    candidates: impl IntoIterator<Item = (T, MapPosition)>,
    range: f32,
) -> Option<(T, f32)> {
    let mut best: Option<(T, f32)> = None;
    for (id, position) in candidates {
        let distance = origin.distance_to(&position);
        if distance > range {
            continue;
        }
        match &best {
            Some((_, best_distance)) if distance >= *best_distance => {}
            _ => best = Some((id, distance)),
        }
    }
    best
}

pub fn parry_observer(
    trigger: On<InputEvent>,
    mut commands: Commands,
    mut players: Query<(&mut Player, &mut MapPosition), Without<Monster>>,
    mut monsters: Query<(Entity, &mut Monster, &MapPosition), Without<Player>>,
    mut session: ResMut<SessionState>,
    mut spawner: ResMut<MonsterSpawner>,
    screen: Res<ScreenSize>,
) {
    let event = trigger.event();
    if event.action != InputAction::Parry || !event.pressed {
        return;
    }

    let mut population = monsters.iter().count();
    let mut killed: Vec<Entity> = Vec::new();

    for (mut player, mut position) in players.iter_mut() {
        if !player.parry.ready() {
            debug!("Parry ignored, {:.2}s of cooldown left", player.parry.timer);
            continue;
        }

        let candidates = monsters
            .iter()
            .filter(|(entity, _, _)| !killed.contains(entity))
            .map(|(entity, _, pos)| (entity, *pos));
        let Some((target, distance)) =
            select_parry_target(&position, candidates, player.tuning.parry_range)
        else {
            debug!("Parry ignored, no monster in range");
            continue;
        };

        player.parry.start();

        if let Ok((_, mut monster, _)) = monsters.get_mut(target) {
            let health = monster.health() - 1;
            monster.set_health(health);
            debug!(
                "Parried {:?} monster at {:.1}px, health now {}",
                monster.kind, distance, health
            );

            if monster.is_dead() {
                let kind = monster.kind;
                commands.entity(target).despawn();
                killed.push(target);
                session.record_kill();

                let replaced = population < player.tuning.replacement_cap;
                population -= 1;
                if replaced {
                    let replacement = replacement_kind(population);
                    spawn_monster(&mut commands, &mut spawner, &screen, replacement);
                    population += 1;
                }
                info!(
                    "Killed {:?} monster (kills: {}, replaced: {})",
                    kind, session.kill_count, replaced
                );
                commands.trigger(MonsterKilledEvent {
                    kind,
                    remaining: population,
                    replaced,
                });
            }
        }

        player.lunge(&mut position);
    }
}
