//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that debug rendering should
//! be enabled. Remove it to disable the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer outlines colliders and prints session counters.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
