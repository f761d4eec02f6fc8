//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – shared animation tracks, loaded once at setup
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – tunables loaded from `config.ini`
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard snapshot
//! - `screensize` – play area dimensions in pixels
//! - `session` – kill count, player health and current phase
//! - `spawner` – monster spawn capacity, period and RNG
//! - `systemsstore` – registry of state hook systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod screensize;
pub mod session;
pub mod spawner;
pub mod systemsstore;
pub mod texturestore;
pub mod worldtime;
