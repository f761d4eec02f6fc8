//! Phase change event.
//!
//! Triggered by the portal once the session has moved to a new
//! [`GamePhase`]. The observer cloaks every portal again and points it at
//! the phase after the new one.
use bevy_ecs::prelude::*;
use log::info;

use crate::components::portal::Portal;
use crate::resources::session::GamePhase;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChangedEvent {
    pub from: GamePhase,
    pub to: GamePhase,
}

pub fn phase_changed_observer(trigger: On<PhaseChangedEvent>, mut portals: Query<&mut Portal>) {
    let event = trigger.event();
    info!("Phase changed: {} -> {}", event.from, event.to);
    for mut portal in portals.iter_mut() {
        portal.disarm();
        portal.target_phase = event.to.next().unwrap_or(event.to);
    }
}
