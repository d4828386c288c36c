//! Engine systems.
//!
//! Submodules overview
//! - [`animation`] – step the character clock and each enemy's own frame
//! - [`render`] – draw sprites, floor, objects and the game over overlay
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod render;
pub mod time;
