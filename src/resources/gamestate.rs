//! High-level game flow resources.
//!
//! [`GameState`] is the authoritative flow state; [`NextGameState`] holds a
//! pending request. The request is applied by
//! [`observe_gamestate_change_event`](crate::events::gamestate::observe_gamestate_change_event),
//! which also runs the enter hooks registered in
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore).

use bevy_ecs::prelude::Resource;

/// Discrete flow states of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    /// Assets are loaded and the player is spawned.
    Setup,
    /// The frame loop drives the current phase.
    Playing,
    Quitting,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }

    pub fn get(&self) -> GameStates {
        self.current
    }

    /// Update the current state immediately, skipping enter hooks.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    pub fn get(&self) -> NextGameStates {
        self.next
    }

    /// Request a transition to `next`; `check_pending_state` emits the change event.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_state_pending_then_reset() {
        let mut next = NextGameState::new();
        assert_eq!(next.get(), NextGameStates::Unchanged);
        next.set(GameStates::Playing);
        assert_eq!(next.get(), NextGameStates::Pending(GameStates::Playing));
        next.reset();
        assert_eq!(next.get(), NextGameStates::Unchanged);
    }

    #[test]
    fn test_game_state_starts_at_none() {
        let mut state = GameState::new();
        assert_eq!(state.get(), GameStates::None);
        state.set(GameStates::Setup);
        assert_eq!(state.get(), GameStates::Setup);
    }
}
