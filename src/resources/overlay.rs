//! Game over overlay settings.

use std::path::PathBuf;
use std::time::Duration;

use raylib::prelude::Color;

pub const GAME_OVER_TEXT: &str = "Game Over";
pub const DEFAULT_OVERLAY_FONT: &str = "./assets/fonts/AntonSC-Regular.ttf";
pub const DEFAULT_OVERLAY_FONT_SIZE: i32 = 64;
pub const DEFAULT_OVERLAY_HOLD_MS: u64 = 3000;

/// What the game over screen shows and for how long it holds the thread.
#[derive(Clone, Debug)]
pub struct GameOverOverlay {
    pub font_path: PathBuf,
    pub font_size: i32,
    pub text: String,
    pub color: Color,
    pub hold: Duration,
}

impl Default for GameOverOverlay {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_OVERLAY_FONT),
            font_size: DEFAULT_OVERLAY_FONT_SIZE,
            text: GAME_OVER_TEXT.to_string(),
            color: Color::new(255, 0, 0, 255),
            hold: Duration::from_millis(DEFAULT_OVERLAY_HOLD_MS),
        }
    }
}
