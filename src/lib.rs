//! Parrybound library.
//!
//! Exposes the game's ECS components, resources, systems and events for
//! integration tests and the binary.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
