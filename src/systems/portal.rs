//! Phase portal.
//!
//! The portal is inert until [`InputAction::ArmPortal`] arms it. While armed,
//! [`portal_trigger_system`] tests it against each player's collision
//! rectangle. On overlap the session is reset for the portal's target phase,
//! the player is moved back to the play area centre and a
//! [`PhaseChangedEvent`] is triggered.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::portal::{PORTAL_RECT, Portal};
use crate::events::input::{InputAction, InputEvent};
use crate::events::phase::PhaseChangedEvent;
use crate::resources::screensize::ScreenSize;
use crate::resources::session::SessionState;

pub const PORTAL_TEXTURE_KEY: &str = "portal";

pub fn portal_bundle(portal: Portal) -> (Portal, MapPosition, BoxCollider) {
    let (x, y, w, h) = PORTAL_RECT;
    (portal, MapPosition::new(x, y), BoxCollider::new(w, h))
}

pub fn portal_arm_observer(trigger: On<InputEvent>, mut portals: Query<&mut Portal>) {
    let event = trigger.event();
    if event.action != InputAction::ArmPortal || !event.pressed {
        return;
    }
    for mut portal in portals.iter_mut() {
        if !portal.armed {
            portal.arm();
            info!("Portal to {} armed", portal.target_phase);
        }
    }
}

pub fn portal_trigger_system(
    mut commands: Commands,
    portals: Query<(&Portal, &MapPosition, &BoxCollider), Without<Player>>,
    mut players: Query<(&mut Player, &mut MapPosition, &BoxCollider), Without<Portal>>,
    mut session: ResMut<SessionState>,
    screen: Res<ScreenSize>,
) {
    for (portal, portal_pos, portal_collider) in portals.iter() {
        if !portal.armed {
            continue;
        }
        for (mut player, mut player_pos, player_collider) in players.iter_mut() {
            if !player_collider.overlaps(player_pos.pos, portal_collider, portal_pos.pos) {
                continue;
            }
            let from = session.reset_for_phase(portal.target_phase);
            let (x, y) = screen.center();
            player.reset_position(&mut player_pos, x, y);
            debug!("Player teleported to ({}, {})", x, y);
            info!(
                "Entered portal: {} -> {} (kills and health reset)",
                from, portal.target_phase
            );
            commands.trigger(PhaseChangedEvent {
                from,
                to: portal.target_phase,
            });
            // the observer disarms the portal; one transition per tick
            return;
        }
    }
}
