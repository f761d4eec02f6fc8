//! Event types and observers.
//!
//! Submodules:
//! - [`gamestate`] – application flow transitions (setup, playing, quitting)
//! - [`input`] – discrete key press/release notifications
//! - [`monster`] – parry kills
//! - [`phase`] – session phase changes triggered by the portal
//! - [`switchdebug`] – toggle the debug overlay
pub mod gamestate;
pub mod input;
pub mod monster;
pub mod phase;
pub mod switchdebug;
