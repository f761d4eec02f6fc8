use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Top-left corner of an entity in play-area pixels.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// Euclidean distance between two positions.
    pub fn distance_to(&self, other: &MapPosition) -> f32 {
        let dx = other.pos.x - self.pos.x;
        let dy = other.pos.y - self.pos.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to() {
        let a = MapPosition::new(0.0, 0.0);
        let b = MapPosition::new(300.0, 400.0);
        assert_eq!(a.distance_to(&b), 500.0);
        assert_eq!(b.distance_to(&a), 500.0);
    }
}
