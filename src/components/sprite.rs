use bevy_ecs::prelude::Component;

/// Drawn size of an entity, plus an optional static texture.
///
/// Animated entities leave `tex_key` empty; their texture comes from the
/// [`Animation`](super::animation::Animation) frame instead.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub tex_key: Option<String>,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn animated(width: f32, height: f32) -> Self {
        Self {
            tex_key: None,
            width,
            height,
        }
    }

    pub fn textured(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: Some(tex_key.into()),
            width,
            height,
        }
    }
}
