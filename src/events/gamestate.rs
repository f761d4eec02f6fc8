//! Game state transition event and observer.
//!
//! Systems request a change of [`GameStates`] through [`NextGameState`];
//! triggering [`GameStateChangedEvent`] applies it to [`GameState`] and runs
//! the matching hook registered in [`SystemsStore`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, info, warn};

/// Apply the pending value of [`NextGameState`], if any.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Copies the pending state into [`GameState`], clears [`NextGameState`] and
/// runs the enter hook stored under `"setup"`, `"enter_play"` or
/// `"quit_game"`. Missing resources or hooks are logged and skipped.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match next_game_state.get() {
        Pending(new_state) => {
            info!("Transitioning from {:?} to {:?}", game_state.get(), new_state);
            game_state.set(new_state);
            next_game_state.reset();
            match systems_store.as_deref() {
                Some(store) => on_state_enter(new_state, &mut commands, store),
                None => warn!("SystemsStore missing; no enter hook for {:?}", new_state),
            }
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

fn on_state_enter(state: GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let hook = match state {
        GameStates::None => {
            debug!("Entered None state");
            return;
        }
        GameStates::Setup => "setup",
        GameStates::Playing => "enter_play",
        GameStates::Quitting => "quit_game",
    };
    match systems_store.get(hook) {
        Some(id) => commands.run_system(*id),
        None => error!("System '{}' not found in SystemsStore", hook),
    }
}
