//! Monster spawn policy resource.
//!
//! [`MonsterSpawner`] holds the scene's spawn capacity and period, the
//! monotonically increasing counter that drives round-robin variant
//! selection, and the RNG every spawn path draws positions from.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

use crate::components::monster::{MONSTER_SIZE, MonsterKind};
use crate::resources::gameconfig::GameConfig;
use crate::resources::screensize::ScreenSize;

#[derive(Resource, Debug, Clone)]
pub struct MonsterSpawner {
    /// Spawn capacity.
    pub max_monsters: usize,
    /// Seconds between periodic spawns.
    pub spawn_delay: f32,
    /// Seconds accumulated toward the next periodic spawn.
    pub elapsed: f32,
    /// Number of periodic spawns so far; selects the next variant.
    pub death_count: u32,
    /// Sprite footprint subtracted from the placement range.
    pub footprint: i32,
    pub rng: Rng,
}

impl MonsterSpawner {
    pub fn new(max_monsters: usize, spawn_delay: f32, rng: Rng) -> Self {
        Self {
            max_monsters,
            spawn_delay,
            elapsed: 0.0,
            death_count: 0,
            footprint: MONSTER_SIZE as i32,
            rng,
        }
    }

    pub fn from_config(config: &GameConfig, rng: Rng) -> Self {
        Self::new(config.max_monsters, config.spawn_delay, rng)
    }

    /// Uniform integer position with the whole sprite inside the play area.
    pub fn random_position(&mut self, screen: &ScreenSize) -> (f32, f32) {
        let max_x = (screen.w - self.footprint).max(0);
        let max_y = (screen.h - self.footprint).max(0);
        let x = self.rng.i32(0..=max_x);
        let y = self.rng.i32(0..=max_y);
        (x as f32, y as f32)
    }

    /// Advance the counter and pick the variant round-robin.
    pub fn next_spawn_kind(&mut self) -> MonsterKind {
        self.death_count += 1;
        match self.death_count % 3 {
            1 => MonsterKind::Moving,
            2 => MonsterKind::Ranged,
            _ => MonsterKind::Charging,
        }
    }

    pub fn has_capacity(&self, current: usize) -> bool {
        current < self.max_monsters
    }

    /// Accumulate `dt`; returns `true` once per elapsed spawn period.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.spawn_delay {
            self.elapsed -= self.spawn_delay;
            return true;
        }
        false
    }
}

/// Variant of the monster that replaces a parried kill, by the size of the
/// collection after the removal.
pub fn replacement_kind(remaining: usize) -> MonsterKind {
    if remaining % 2 == 0 {
        MonsterKind::Moving
    } else {
        MonsterKind::Ranged
    }
}
