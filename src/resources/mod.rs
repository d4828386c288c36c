//! Long-lived data used by the renderer and the demo scene.
//!
//! Overview
//! - `animationclock` – the character's current animation frame
//! - `enemyslots` – fixed-capacity enemy storage with empty slots
//! - `floor` – floor tile layout and a cached floor texture
//! - `gameconfig` – INI-backed window, sheet and overlay settings
//! - `overlay` – game over text settings
//! - `spritesheet` – frame geometry, frame tables and loaded sheets
//! - `worldtime` – simulation time and delta
pub mod animationclock;
pub mod enemyslots;
pub mod floor;
pub mod gameconfig;
pub mod overlay;
pub mod spritesheet;
pub mod worldtime;
