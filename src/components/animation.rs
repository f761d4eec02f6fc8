use bevy_ecs::prelude::Component;

use crate::resources::animationstore::AnimationResource;

/// Playback state of an entity's current animation.
///
/// `animation_key` addresses an [`AnimationResource`] in the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
#[derive(Debug, Clone, Component, PartialEq)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    /// Seconds accumulated toward the next frame.
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Switch to another track and rewind to its first frame. The elapsed
    /// time keeps accumulating.
    pub fn restart(&mut self, animation_key: &str) {
        if self.animation_key != animation_key {
            self.animation_key = animation_key.to_string();
        }
        self.frame_index = 0;
    }

    /// Accumulate `dt` and step one frame once the frame duration is reached.
    ///
    /// Returns `true` if the frame changed. A missing or empty track never
    /// advances.
    pub fn advance(&mut self, dt: f32, track: Option<&AnimationResource>) -> bool {
        self.elapsed_time += dt;
        let Some(track) = track else {
            return false;
        };
        if track.frames.is_empty() || self.elapsed_time < track.frame_duration {
            return false;
        }
        self.elapsed_time = 0.0;
        self.frame_index = (self.frame_index + 1) % track.frames.len();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn track(frames: usize, frame_duration: f32) -> AnimationResource {
        AnimationResource {
            frames: (0..frames)
                .map(|i| Arc::<str>::from(format!("frame{}", i)))
                .collect(),
            frame_duration,
        }
    }

    #[test]
    fn test_advance_waits_for_frame_duration() {
        let t = track(3, 0.1);
        let mut anim = Animation::new("idle");
        assert!(!anim.advance(0.05, Some(&t)));
        assert_eq!(anim.frame_index, 0);
        assert!(anim.advance(0.05, Some(&t)));
        assert_eq!(anim.frame_index, 1);
        assert_eq!(anim.elapsed_time, 0.0);
    }

    #[test]
    fn test_advance_wraps_modulo_frame_count() {
        let t = track(2, 0.1);
        let mut anim = Animation::new("idle");
        anim.advance(0.1, Some(&t));
        anim.advance(0.1, Some(&t));
        assert_eq!(anim.frame_index, 0);
        anim.advance(0.25, Some(&t));
        assert_eq!(anim.frame_index, 1);
    }

    #[test]
    fn test_empty_or_missing_track_never_advances() {
        let empty = track(0, 0.1);
        let mut anim = Animation::new("idle");
        assert!(!anim.advance(1.0, Some(&empty)));
        assert!(!anim.advance(1.0, None));
        assert_eq!(anim.frame_index, 0);
        assert_eq!(anim.elapsed_time, 2.0);
    }

    #[test]
    fn test_restart_rewinds_but_keeps_elapsed() {
        let mut anim = Animation::new("idle");
        anim.frame_index = 4;
        anim.elapsed_time = 0.07;
        anim.restart("move");
        assert_eq!(anim.animation_key, "move");
        assert_eq!(anim.frame_index, 0);
        assert_eq!(anim.elapsed_time, 0.07);
    }
}
