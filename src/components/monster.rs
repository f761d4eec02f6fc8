//! Monster components.
//!
//! Every monster is an entity with [`Monster`], a
//! [`MapPosition`](super::mapposition::MapPosition) and a
//! [`Sprite`](super::sprite::Sprite); together they form the monster
//! collection the parry logic and the spawner work on. The variant is a tag
//! ([`MonsterKind`]) instead of a type, so the spawner picks a kind by value.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Sprite footprint of every monster, in pixels.
pub const MONSTER_SIZE: f32 = 128.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterKind {
    /// Walks straight at the player.
    Moving,
    /// Keeps its distance.
    Ranged,
    /// Rests, then dashes toward the player.
    Charging,
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 3] = [MonsterKind::Moving, MonsterKind::Ranged, MonsterKind::Charging];

    pub fn initial_health(self) -> i32 {
        match self {
            MonsterKind::Moving => 2,
            MonsterKind::Ranged => 1,
            MonsterKind::Charging => 3,
        }
    }

    /// Movement speed in pixels per second.
    pub fn speed(self) -> f32 {
        match self {
            MonsterKind::Moving => 120.0,
            MonsterKind::Ranged => 90.0,
            MonsterKind::Charging => 600.0,
        }
    }

    pub fn texture_key(self) -> &'static str {
        match self {
            MonsterKind::Moving => "monster_moving",
            MonsterKind::Ranged => "monster_ranged",
            MonsterKind::Charging => "monster_charging",
        }
    }

    /// Path relative to the asset directory.
    pub fn texture_path(self) -> &'static str {
        match self {
            MonsterKind::Moving => "Character/monster/MovingMonster.png",
            MonsterKind::Ranged => "Character/monster/RangedMonster.png",
            MonsterKind::Charging => "Character/monster/ChargingMonster.png",
        }
    }

    /// Fill colour used when the texture is not available.
    pub fn fallback_color(self) -> Color {
        match self {
            MonsterKind::Moving => Color::MAROON,
            MonsterKind::Ranged => Color::DARKPURPLE,
            MonsterKind::Charging => Color::ORANGE,
        }
    }
}

/// Health and per-kind behaviour state of a monster.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Monster {
    pub kind: MonsterKind,
    health: i32,
    /// Seconds spent in the current behaviour step (used by charging monsters).
    pub behavior_timer: f32,
}

impl Monster {
    pub fn new(kind: MonsterKind) -> Self {
        Self {
            kind,
            health: kind.initial_health(),
            behavior_timer: 0.0,
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_kind_health() {
        for kind in MonsterKind::ALL {
            let monster = Monster::new(kind);
            assert_eq!(monster.health(), kind.initial_health());
            assert!(!monster.is_dead());
        }
    }

    #[test]
    fn test_dead_at_zero_or_below() {
        let mut monster = Monster::new(MonsterKind::Ranged);
        monster.set_health(monster.health() - 1);
        assert!(monster.is_dead());
        monster.set_health(-3);
        assert!(monster.is_dead());
    }
}
