//! Per-frame input snapshot resource.
//!
//! Captures the keys the game cares about and exposes them to systems via
//! [`InputState`]. The four directional holds are read by the player update;
//! parry and portal arming are consumed as discrete
//! [`InputEvent`](crate::events::input::InputEvent)s.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::input::{InputAction, InputEvent};

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key was pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was released this frame.
    pub just_released: bool,
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_up: BoolState,
    pub move_down: BoolState,
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub parry: BoolState,
    pub arm_portal: BoolState,
    pub toggle_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            move_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            move_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            move_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            parry: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            arm_portal: BoolState::bound_to(KeyboardKey::KEY_C),
            toggle_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Key state for a logical action.
    pub fn state_mut(&mut self, action: InputAction) -> &mut BoolState {
        match action {
            InputAction::MoveUp => &mut self.move_up,
            InputAction::MoveDown => &mut self.move_down,
            InputAction::MoveLeft => &mut self.move_left,
            InputAction::MoveRight => &mut self.move_right,
            InputAction::Parry => &mut self.parry,
            InputAction::ArmPortal => &mut self.arm_portal,
            InputAction::ToggleDebug => &mut self.toggle_debug,
        }
    }

    /// Fold one discrete key event into the snapshot.
    pub fn apply(&mut self, event: &InputEvent) {
        let state = self.state_mut(event.action);
        state.active = event.pressed;
        state.just_pressed = event.pressed;
        state.just_released = !event.pressed;
    }

    /// Hold the given direction keys, release every other one.
    pub fn hold(&mut self, up: bool, down: bool, left: bool, right: bool) {
        self.move_up.active = up;
        self.move_down.active = down;
        self.move_left.active = left;
        self.move_right.active = right;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.move_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.move_down.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.move_left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.move_right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.parry.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.arm_portal.key_binding, KeyboardKey::KEY_C);
        assert_eq!(input.toggle_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_apply_press_and_release() {
        let mut input = InputState::default();
        input.apply(&InputEvent {
            action: InputAction::MoveLeft,
            pressed: true,
        });
        assert!(input.move_left.active);
        assert!(input.move_left.just_pressed);

        input.apply(&InputEvent {
            action: InputAction::MoveLeft,
            pressed: false,
        });
        assert!(!input.move_left.active);
        assert!(input.move_left.just_released);
        assert!(!input.move_right.active);
    }
}
