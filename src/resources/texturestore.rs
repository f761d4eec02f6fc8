//! Loaded GPU textures, keyed by string.
//!
//! Animation frames are stored under their file path; static textures (map
//! background, portal, monsters) under a short name. [`RaylibFrameLoader`]
//! is the [`FrameLoader`] used at setup time.
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::warn;
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

use crate::resources::animationstore::FrameLoader;

#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Load `path` and store it under `key`. Failures are logged and leave
    /// the store unchanged.
    pub fn load_into(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: &str,
        path: &str,
    ) -> bool {
        match rl.load_texture(thread, path) {
            Ok(texture) => {
                self.insert(key, texture);
                true
            }
            Err(e) => {
                warn!("Failed to load texture '{}' from {}: {}", key, path, e);
                false
            }
        }
    }
}

/// Loads frame textures with raylib and files them in a [`TextureStore`].
pub struct RaylibFrameLoader<'a> {
    pub rl: &'a mut RaylibHandle,
    pub thread: &'a RaylibThread,
    pub textures: &'a mut TextureStore,
}

impl FrameLoader for RaylibFrameLoader<'_> {
    fn load_frame(&mut self, path: &str) -> Result<Arc<str>, String> {
        let texture = self
            .rl
            .load_texture(self.thread, path)
            .map_err(|e| e.to_string())?;
        self.textures.insert(path, texture);
        Ok(Arc::from(path))
    }
}
