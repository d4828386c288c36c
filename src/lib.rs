//! Survival game rendering library.
//!
//! Spritesheet frame mapping, floor tiling, placeholder objects and the game
//! over overlay, drawn through the [`backend::Canvas`] abstraction with a
//! raylib implementation.

pub mod backend;
pub mod components;
pub mod error;
pub mod game;
pub mod resources;
pub mod systems;
