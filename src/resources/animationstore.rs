//! Animation resource registry.
//!
//! The [`AnimationStore`] is built once during setup and then shared
//! read-only by every animated entity. Each [`AnimationResource`] is an
//! ordered list of texture keys (into
//! [`TextureStore`](crate::resources::texturestore::TextureStore)) with a fixed
//! per-frame duration.
//!
//! Frames are loaded through a [`FrameLoader`]. A frame that fails to load is
//! logged and skipped, so a track may end up partial or empty; consumers treat
//! an empty track as a fault at draw time (see [`FrameError`]).

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::{error, info};
use rustc_hash::FxHashMap;

use crate::components::animation::Animation;
use crate::components::player::PlayerState;

/// Seconds each player frame stays on screen.
pub const PLAYER_FRAME_DURATION: f32 = 0.1;

/// Loads one drawable frame from disk and returns the key it is stored under.
pub trait FrameLoader {
    fn load_frame(&mut self, path: &str) -> Result<Arc<str>, String>;
}

/// Ordered frames of one animation track.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture keys, in playback order.
    pub frames: Vec<Arc<str>>,
    /// Seconds per frame.
    pub frame_duration: f32,
}

/// Reasons a frame cannot be drawn this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// No track registered under the key.
    MissingAnimation(String),
    /// The track loaded zero frames.
    NoFrames(String),
    FrameOutOfBounds {
        key: String,
        index: usize,
        len: usize,
    },
    /// The frame's texture handle is not present in the texture store.
    MissingTexture(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::MissingAnimation(key) => write!(f, "no animation registered for '{}'", key),
            FrameError::NoFrames(key) => write!(f, "no frames available for '{}'", key),
            FrameError::FrameOutOfBounds { key, index, len } => write!(
                f,
                "frame {} is out of bounds for '{}' ({} frames)",
                index, key, len
            ),
            FrameError::MissingTexture(key) => write!(f, "texture '{}' is not loaded", key),
        }
    }
}

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Debug, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
    player_loaded: bool,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    /// Load `frame_count` frames named `{base_path}{i}.png` (1-based) into a
    /// track stored under `key`. Returns the number of frames loaded.
    pub fn load_animation(
        &mut self,
        key: &str,
        base_path: &str,
        frame_count: usize,
        frame_duration: f32,
        loader: &mut dyn FrameLoader,
    ) -> usize {
        let mut animation = AnimationResource {
            frames: Vec::with_capacity(frame_count),
            frame_duration,
        };
        for i in 1..=frame_count {
            let path = format!("{}{}.png", base_path, i);
            match loader.load_frame(&path) {
                Ok(tex_key) => animation.frames.push(tex_key),
                Err(e) => error!("Failed to load frame {}: {}", path, e),
            }
        }
        let loaded = animation.frames.len();
        if loaded == 0 {
            error!("No frames loaded for animation '{}'", key);
        } else {
            info!("Loaded {} frames for animation '{}'", loaded, key);
        }
        self.animations.insert(key.to_string(), animation);
        loaded
    }

    /// Load every player track from `asset_dir` unless they are already loaded.
    ///
    /// Returns `true` if this call performed the load.
    pub fn ensure_player_animations(&mut self, asset_dir: &Path, loader: &mut dyn FrameLoader) -> bool {
        if self.player_loaded {
            return false;
        }
        for state in PlayerState::ALL {
            let base_path = asset_dir
                .join("Character")
                .join("player")
                .join(format!("{}_", state.asset_name()));
            self.load_animation(
                state.animation_key(),
                &base_path.to_string_lossy(),
                state.frame_count(),
                PLAYER_FRAME_DURATION,
                loader,
            );
        }
        self.player_loaded = true;
        true
    }

    pub fn player_loaded(&self) -> bool {
        self.player_loaded
    }

    /// Texture key of the frame `animation` currently points at.
    pub fn frame_key(&self, animation: &Animation) -> Result<&Arc<str>, FrameError> {
        let key = &animation.animation_key;
        let track = self
            .animations
            .get(key)
            .ok_or_else(|| FrameError::MissingAnimation(key.clone()))?;
        if track.frames.is_empty() {
            return Err(FrameError::NoFrames(key.clone()));
        }
        track
            .frames
            .get(animation.frame_index)
            .ok_or_else(|| FrameError::FrameOutOfBounds {
                key: key.clone(),
                index: animation.frame_index,
                len: track.frames.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Loader that fails for paths containing any of `missing`.
    struct FakeLoader {
        calls: Vec<String>,
        missing: Vec<&'static str>,
    }

    impl FrameLoader for FakeLoader {
        fn load_frame(&mut self, path: &str) -> Result<Arc<str>, String> {
            self.calls.push(path.to_string());
            if self.missing.iter().any(|m| path.contains(m)) {
                Err("file not found".into())
            } else {
                Ok(Arc::from(path))
            }
        }
    }

    #[test]
    fn test_load_animation_builds_one_based_paths() {
        let mut loader = FakeLoader {
            calls: Vec::new(),
            missing: Vec::new(),
        };
        let mut store = AnimationStore::new();
        let loaded = store.load_animation("idle", "assets/Idle_", 3, 0.1, &mut loader);
        assert_eq!(loaded, 3);
        assert_eq!(
            loader.calls,
            vec!["assets/Idle_1.png", "assets/Idle_2.png", "assets/Idle_3.png"]
        );
        assert_eq!(store.get("idle").unwrap().frames.len(), 3);
    }

    #[test]
    fn test_failed_frames_are_skipped() {
        let mut loader = FakeLoader {
            calls: Vec::new(),
            missing: vec!["Idle_2"],
        };
        let mut store = AnimationStore::new();
        let loaded = store.load_animation("idle", "Idle_", 3, 0.1, &mut loader);
        assert_eq!(loaded, 2);
        assert_eq!(loader.calls.len(), 3);
        let frames = &store.get("idle").unwrap().frames;
        assert_eq!(frames[0].as_ref(), "Idle_1.png");
        assert_eq!(frames[1].as_ref(), "Idle_3.png");
    }

    #[test]
    fn test_all_frames_failing_registers_empty_track() {
        let mut loader = FakeLoader {
            calls: Vec::new(),
            missing: vec!["Death_"],
        };
        let mut store = AnimationStore::new();
        assert_eq!(store.load_animation("death", "Death_", 6, 0.1, &mut loader), 0);
        let anim = Animation::new("death");
        assert_eq!(
            store.frame_key(&anim),
            Err(FrameError::NoFrames("death".into()))
        );
    }

    #[test]
    fn test_ensure_player_animations_loads_once() {
        let mut loader = FakeLoader {
            calls: Vec::new(),
            missing: Vec::new(),
        };
        let mut store = AnimationStore::new();
        assert!(store.ensure_player_animations(Path::new("res"), &mut loader));
        let first_pass = loader.calls.len();
        assert_eq!(first_pass, 8 + 5 + 6 + 8 + 6);
        assert!(!store.ensure_player_animations(Path::new("res"), &mut loader));
        assert_eq!(loader.calls.len(), first_pass);
        assert!(store.player_loaded());
        assert_eq!(store.get(PlayerState::Move.animation_key()).unwrap().frames.len(), 5);
    }

    #[test]
    fn test_frame_key_errors() {
        let mut store = AnimationStore::new();
        store.insert(
            "idle",
            AnimationResource {
                frames: vec![Arc::from("a"), Arc::from("b")],
                frame_duration: 0.1,
            },
        );

        let mut anim = Animation::new("idle");
        anim.frame_index = 1;
        assert_eq!(store.frame_key(&anim).unwrap().as_ref(), "b");

        anim.frame_index = 2;
        assert_eq!(
            store.frame_key(&anim),
            Err(FrameError::FrameOutOfBounds {
                key: "idle".into(),
                index: 2,
                len: 2
            })
        );

        let missing = Animation::new("walk");
        assert_eq!(
            store.frame_key(&missing),
            Err(FrameError::MissingAnimation("walk".into()))
        );
    }
}
