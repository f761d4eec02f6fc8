//! Keyboard polling.
//!
//! [`update_input_state`] reads raylib once per frame, refreshes every
//! [`BoolState`](crate::resources::input::BoolState) in
//! [`InputState`] and triggers one [`InputEvent`] per press or release. The
//! debug key also toggles the overlay through
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for action in InputAction::ALL {
        let state = input.state_mut(action);
        let key = state.key_binding;
        state.active = rl.is_key_down(key);
        state.just_pressed = rl.is_key_pressed(key);
        state.just_released = rl.is_key_released(key);

        if state.just_pressed {
            commands.trigger(InputEvent::press(action));
            if action == InputAction::ToggleDebug {
                commands.trigger(SwitchDebugEvent {});
            }
        }
        if state.just_released {
            commands.trigger(InputEvent::release(action));
        }
    }
}
