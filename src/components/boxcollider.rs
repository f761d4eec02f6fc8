use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned collision rectangle relative to an entity's [`MapPosition`](super::mapposition::MapPosition).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::new(0.0, 0.0),
        }
    }

    /// Collider covering `width_factor`×`height_factor` of a sprite, anchored
    /// at its top-left corner.
    pub fn shrunk(width: f32, height: f32, width_factor: f32, height_factor: f32) -> Self {
        Self::new(width * width_factor, height * height_factor)
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// (x, y, w, h) of the collider in world space.
    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Strict AABB overlap; rectangles that only share an edge do not intersect.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}
