//! Input action events.
//!
//! [`InputEvent`] is triggered once per key press or release of a bound key.
//! Observers react to the discrete actions (parry, portal arming, debug
//! toggle); movement systems read the held state from
//! [`InputState`](crate::resources::input::InputState) instead.

use bevy_ecs::prelude::*;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Default: Up arrow.
    MoveUp,
    /// Default: Down arrow.
    MoveDown,
    /// Default: Left arrow.
    MoveLeft,
    /// Default: Right arrow.
    MoveRight,
    /// Default: Space.
    Parry,
    /// Reveals the phase portal. Default: C.
    ArmPortal,
    /// Default: F11.
    ToggleDebug,
}

impl InputAction {
    pub const ALL: [InputAction; 7] = [
        InputAction::MoveUp,
        InputAction::MoveDown,
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::Parry,
        InputAction::ArmPortal,
        InputAction::ToggleDebug,
    ];
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: InputAction,
    /// `true` on press, `false` on release.
    pub pressed: bool,
}

impl InputEvent {
    pub fn press(action: InputAction) -> Self {
        Self {
            action,
            pressed: true,
        }
    }

    pub fn release(action: InputAction) -> Self {
        Self {
            action,
            pressed: false,
        }
    }
}
