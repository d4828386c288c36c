//! Entity data read by the renderer.
//!
//! Submodules overview:
//! - [`enemy`] – enemy position and its own animation frame
//! - [`mapposition`] – integer screen position of an entity
//! - [`object`] – placeholder rectangle object
//! - [`player`] – marker for the player character

pub mod enemy;
pub mod mapposition;
pub mod object;
pub mod player;
