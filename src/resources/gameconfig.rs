//! Game configuration resource.
//!
//! Tunable values are read from an INI file at start-up. Every key is
//! optional; a missing file or key keeps the built-in default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//!
//! [assets]
//! dir = ./assets
//!
//! [player]
//! acceleration = 3000
//! deceleration = 3000
//! max_speed = 500
//!
//! [parry]
//! range = 1000
//! lunge = 100
//! cooldown = 0.5
//! duration = 0.1
//! replacement_cap = 7
//!
//! [spawn]
//! max_monsters = 3
//! delay = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_ASSET_DIR: &str = "./assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

const DEFAULT_ACCELERATION: f32 = 3000.0;
const DEFAULT_DECELERATION: f32 = 3000.0;
const DEFAULT_MAX_SPEED: f32 = 500.0;

const DEFAULT_PARRY_RANGE: f32 = 1000.0;
const DEFAULT_PARRY_LUNGE: f32 = 100.0;
const DEFAULT_PARRY_COOLDOWN: f32 = 0.5;
const DEFAULT_PARRY_DURATION: f32 = 0.1;
const DEFAULT_REPLACEMENT_CAP: usize = 7;

const DEFAULT_MAX_MONSTERS: usize = 3;
const DEFAULT_SPAWN_DELAY: f32 = 1.0;

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window (and play area) width in pixels.
    pub window_width: u32,
    /// Window (and play area) height in pixels.
    pub window_height: u32,
    pub target_fps: u32,
    /// Root directory of textures.
    pub asset_dir: PathBuf,
    /// Velocity gained per second while a direction is held.
    pub acceleration: f32,
    /// Velocity lost per second on an axis with no input.
    pub deceleration: f32,
    /// Per-axis speed cap.
    pub max_speed: f32,
    /// Maximum distance at which a monster can be parried.
    pub parry_range: f32,
    /// Displacement applied toward the facing direction after a parry.
    pub parry_lunge: f32,
    pub parry_cooldown: f32,
    pub parry_duration: f32,
    /// A killed monster is replaced only while the collection is below this size.
    pub replacement_cap: usize,
    /// Spawn capacity of the scene.
    pub max_monsters: usize,
    /// Seconds between two periodic spawns.
    pub spawn_delay: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            acceleration: DEFAULT_ACCELERATION,
            deceleration: DEFAULT_DECELERATION,
            max_speed: DEFAULT_MAX_SPEED,
            parry_range: DEFAULT_PARRY_RANGE,
            parry_lunge: DEFAULT_PARRY_LUNGE,
            parry_cooldown: DEFAULT_PARRY_COOLDOWN,
            parry_duration: DEFAULT_PARRY_DURATION,
            replacement_cap: DEFAULT_REPLACEMENT_CAP,
            max_monsters: DEFAULT_MAX_MONSTERS,
            spawn_delay: DEFAULT_SPAWN_DELAY,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, assets={:?}, max_speed={}, parry range={} lunge={}, max_monsters={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.asset_dir,
            self.max_speed,
            self.parry_range,
            self.parry_lunge,
            self.max_monsters
        );

        Ok(())
    }

    /// Load configuration from INI text (same format as the file).
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.asset_dir = PathBuf::from(dir);
        }

        // [player] section
        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();
        if let Some(v) = float("player", "acceleration") {
            self.acceleration = v as f32;
        }
        if let Some(v) = float("player", "deceleration") {
            self.deceleration = v as f32;
        }
        if let Some(v) = float("player", "max_speed") {
            self.max_speed = v as f32;
        }

        // [parry] section
        if let Some(v) = float("parry", "range") {
            self.parry_range = v as f32;
        }
        if let Some(v) = float("parry", "lunge") {
            self.parry_lunge = v as f32;
        }
        if let Some(v) = float("parry", "cooldown") {
            self.parry_cooldown = v as f32;
        }
        if let Some(v) = float("parry", "duration") {
            self.parry_duration = v as f32;
        }
        if let Some(v) = config.getuint("parry", "replacement_cap").ok().flatten() {
            self.replacement_cap = v as usize;
        }

        // [spawn] section
        if let Some(v) = config.getuint("spawn", "max_monsters").ok().flatten() {
            self.max_monsters = v as usize;
        }
        if let Some(v) = float("spawn", "delay") {
            self.spawn_delay = v as f32;
        }
    }

    /// Save configuration to the INI file.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set(
            "assets",
            "dir",
            Some(self.asset_dir.to_string_lossy().into_owned()),
        );

        config.set("player", "acceleration", Some(self.acceleration.to_string()));
        config.set("player", "deceleration", Some(self.deceleration.to_string()));
        config.set("player", "max_speed", Some(self.max_speed.to_string()));

        config.set("parry", "range", Some(self.parry_range.to_string()));
        config.set("parry", "lunge", Some(self.parry_lunge.to_string()));
        config.set("parry", "cooldown", Some(self.parry_cooldown.to_string()));
        config.set("parry", "duration", Some(self.parry_duration.to_string()));
        config.set(
            "parry",
            "replacement_cap",
            Some(self.replacement_cap.to_string()),
        );

        config.set("spawn", "max_monsters", Some(self.max_monsters.to_string()));
        config.set("spawn", "delay", Some(self.spawn_delay.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tuning() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.max_speed, 500.0);
        assert_eq!(config.parry_range, 1000.0);
        assert_eq!(config.parry_lunge, 100.0);
        assert_eq!(config.replacement_cap, 7);
        assert_eq!(config.max_monsters, 3);
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\nwidth = 800\n\n[parry]\nrange = 250.5\n\n[spawn]\nmax_monsters = 5\n")
            .unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.parry_range, 250.5);
        assert_eq!(config.parry_lunge, 100.0);
        assert_eq!(config.max_monsters, 5);
    }

    #[test]
    fn test_load_from_missing_file_fails_and_keeps_defaults() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, 1280);
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!("parrybound-config-{}.ini", std::process::id()));
        let mut saved = GameConfig::with_path(&path);
        saved.window_width = 1024;
        saved.parry_cooldown = 0.75;
        saved.asset_dir = PathBuf::from("/tmp/assets");
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.window_width, 1024);
        assert_eq!(loaded.parry_cooldown, 0.75);
        assert_eq!(loaded.asset_dir, PathBuf::from("/tmp/assets"));
    }
}
