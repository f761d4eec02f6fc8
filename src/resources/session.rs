//! Session counters and the current game phase.
//!
//! [`SessionState`] holds the kill counter, player health and phase selector.
//! Systems read and write it through `Res`/`ResMut`, so the timing of every
//! read and write is fixed by the schedule.

use bevy_ecs::prelude::Resource;
use std::fmt;

/// Player health restored when a new phase starts.
pub const STARTING_PLAYER_HEALTH: i32 = 10;

/// Fixed game segments. Every phase after [`GamePhase::Tutorial`] is a room or
/// boss encounter, visited in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Tutorial,
    Entrance,
    KimSuHwan,
    Hall,
    Nicols1,
    Nicols2,
    Nicols3,
    Maria,
    Virtus,
    Bambino,
    Dasol,
    Sophiebara,
    Michael,
    LastBoss,
}

impl GamePhase {
    pub const ALL: [GamePhase; 14] = [
        GamePhase::Tutorial,
        GamePhase::Entrance,
        GamePhase::KimSuHwan,
        GamePhase::Hall,
        GamePhase::Nicols1,
        GamePhase::Nicols2,
        GamePhase::Nicols3,
        GamePhase::Maria,
        GamePhase::Virtus,
        GamePhase::Bambino,
        GamePhase::Dasol,
        GamePhase::Sophiebara,
        GamePhase::Michael,
        GamePhase::LastBoss,
    ];

    /// Phase that follows this one, or `None` after the last boss.
    pub fn next(self) -> Option<GamePhase> {
        let index = Self::ALL.iter().position(|p| *p == self)?;
        Self::ALL.get(index + 1).copied()
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Per-session counters shared by the combat and phase logic.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Monsters killed by parries since the phase started.
    pub kill_count: u32,
    pub player_health: i32,
    pub current_phase: GamePhase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            kill_count: 0,
            player_health: STARTING_PLAYER_HEALTH,
            current_phase: GamePhase::Tutorial,
        }
    }

    /// Reset counters and move to `phase`. Returns the phase that was left.
    pub fn reset_for_phase(&mut self, phase: GamePhase) -> GamePhase {
        let previous = self.current_phase;
        self.kill_count = 0;
        self.player_health = STARTING_PLAYER_HEALTH;
        self.current_phase = phase;
        previous
    }

    pub fn record_kill(&mut self) {
        self.kill_count += 1;
    }
}
