//! Play area size resource.
//!
//! Stores the visible play area in pixels. The player's bounds clamp, monster
//! placement and the portal spawn point are all expressed against it.

use bevy_ecs::prelude::Resource;

/// Current play area size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    /// Midpoint of the play area. The player spawns with its top-left corner here.
    pub fn center(&self) -> (f32, f32) {
        ((self.w / 2) as f32, (self.h / 2) as f32)
    }
}
