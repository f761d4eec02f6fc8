//! Game systems.
//!
//! Submodules overview
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`monster`] – per-kind monster movement
//! - [`parry`] – parry target selection and resolution
//! - [`player`] – player movement, state and animation
//! - [`portal`] – portal arming and phase transitions
//! - [`render`] – draw the scene and the debug overlay using Raylib
//! - [`spawn`] – monster placement, bulk population and periodic spawns
//! - [`time`] – update simulation time and delta

pub mod gamestate;
pub mod input;
pub mod monster;
pub mod parry;
pub mod player;
pub mod portal;
pub mod render;
pub mod spawn;
pub mod time;
