//! Per-kind monster movement.
//!
//! - Moving monsters walk straight at the nearest player.
//! - Ranged monsters back off inside [`RANGED_PREFERRED_DISTANCE`] and close
//!   in beyond it.
//! - Charging monsters rest for [`CHARGE_REST`] seconds, then dash toward the
//!   player for [`CHARGE_DASH`] seconds.
//!
//! Every monster is clamped to the play area after moving.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::monster::{Monster, MonsterKind};
use crate::components::player::{Player, clamp_to_screen};
use crate::components::sprite::Sprite;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

pub const RANGED_PREFERRED_DISTANCE: f32 = 350.0;
/// Slack around the preferred distance where a ranged monster holds still.
pub const RANGED_DEADZONE: f32 = 25.0;
pub const CHARGE_REST: f32 = 1.5;
pub const CHARGE_DASH: f32 = 0.35;

/// Unit vector from `from` to `to`, or zero when they coincide.
fn direction(from: Vector2, to: Vector2) -> (Vector2, f32) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len <= f32::EPSILON {
        return (Vector2::new(0.0, 0.0), 0.0);
    }
    (Vector2::new(dx / len, dy / len), len)
}

/// Displacement of one monster for this tick, given the player position.
pub fn monster_step(monster: &mut Monster, position: Vector2, target: Vector2, dt: f32) -> Vector2 {
    let (dir, distance) = direction(position, target);
    let speed = monster.kind.speed() * dt;
    match monster.kind {
        MonsterKind::Moving => Vector2::new(dir.x * speed.min(distance), dir.y * speed.min(distance)),
        MonsterKind::Ranged => {
            if distance < RANGED_PREFERRED_DISTANCE - RANGED_DEADZONE {
                Vector2::new(-dir.x * speed, -dir.y * speed)
            } else if distance > RANGED_PREFERRED_DISTANCE + RANGED_DEADZONE {
                Vector2::new(dir.x * speed, dir.y * speed)
            } else {
                Vector2::new(0.0, 0.0)
            }
        }
        MonsterKind::Charging => {
            monster.behavior_timer += dt;
            if monster.behavior_timer < CHARGE_REST {
                return Vector2::new(0.0, 0.0);
            }
            if monster.behavior_timer >= CHARGE_REST + CHARGE_DASH {
                monster.behavior_timer = 0.0;
            }
            Vector2::new(dir.x * speed.min(distance), dir.y * speed.min(distance))
        }
    }
}

pub fn monster_behavior(
    mut monsters: Query<(&mut Monster, &mut MapPosition, &Sprite), Without<Player>>,
    players: Query<&MapPosition, With<Player>>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
) {
    let dt = time.delta;
    for (mut monster, mut position, sprite) in monsters.iter_mut() {
        let target = players
            .iter()
            .min_by(|a, b| {
                position
                    .distance_to(a)
                    .total_cmp(&position.distance_to(b))
            })
            .map(|p| p.pos);
        let Some(target) = target else {
            continue;
        };
        let step = monster_step(&mut monster, position.pos, target, dt);
        position.pos.x += step.x;
        position.pos.y += step.y;
        clamp_to_screen(&mut position, sprite.width, sprite.height, &screen);
    }
}
