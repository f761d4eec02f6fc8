use bevy_ecs::prelude::Component;

use crate::resources::session::GamePhase;

/// Default portal rectangle (x, y, w, h) in play-area pixels.
pub const PORTAL_RECT: (f32, f32, f32, f32) = (350.0, 500.0, 100.0, 100.0);

/// Phase-transition trigger.
///
/// Hidden and inert until armed; while armed the portal is drawn and any
/// overlap with the player's collision rectangle moves the session to
/// `target_phase`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Portal {
    pub armed: bool,
    pub target_phase: GamePhase,
}

impl Portal {
    pub fn new(target_phase: GamePhase) -> Self {
        Self {
            armed: false,
            target_phase,
        }
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Hide the portal again (done when the scene changes).
    pub fn disarm(&mut self) {
        self.armed = false;
    }
}
