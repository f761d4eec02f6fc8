//! Simulation clock resource.
//!
//! [`WorldTime`] is advanced once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time). Every
//! gameplay system reads `delta` instead of querying the backend, so the
//! whole simulation can be stepped headless in tests.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Total scaled seconds since start.
    pub elapsed: f32,
    /// Scaled seconds of the current frame.
    pub delta: f32,
    pub time_scale: f32,
    /// Frames stepped so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
