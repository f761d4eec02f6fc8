//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – playback state of an entity's current animation track
//! - [`boxcollider`] – axis-aligned rectangle used for portal overlap and debug outlines
//! - [`mapposition`] – top-left position of an entity in the play area
//! - [`monster`] – monster kinds and health
//! - [`player`] – the controlled character, its state machine and parry timer
//! - [`portal`] – armed/cloaked phase portal
//! - [`sprite`] – drawn size and optional static texture

pub mod animation;
pub mod boxcollider;
pub mod mapposition;
pub mod monster;
pub mod player;
pub mod portal;
pub mod sprite;
