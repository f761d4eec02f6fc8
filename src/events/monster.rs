//! Monster lifecycle events.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::monster::MonsterKind;

/// A monster was removed from the collection by a parry.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct MonsterKilledEvent {
    pub kind: MonsterKind,
    /// Collection size after the removal.
    pub remaining: usize,
    /// Whether a replacement was spawned for it.
    pub replaced: bool,
}

pub fn monster_killed_observer(trigger: On<MonsterKilledEvent>) {
    let event = trigger.event();
    debug!(
        "{:?} monster killed, {} left, replaced: {}",
        event.kind, event.remaining, event.replaced
    );
}
