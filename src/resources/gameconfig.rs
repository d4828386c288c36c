//! Game configuration resource.
//!
//! Manages window, spritesheet and overlay settings loaded from an INI
//! configuration file. Provides defaults for safe startup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//! title = Survival
//!
//! [character]
//! path = ./assets/textures/character.png
//! frame_width = 64
//! frame_height = 64
//! columns = 8
//! rows = 2
//! frames = 16
//! fps = 12
//!
//! [enemy]
//! path = ./assets/textures/enemy.png
//! frame_width = 48
//! frame_height = 48
//! columns = 6
//! rows = 1
//! frames = 6
//! fps = 8
//!
//! [floor]
//! path = ./assets/textures/floor.png
//!
//! [overlay]
//! font = ./assets/fonts/AntonSC-Regular.ttf
//! font_size = 64
//! hold_ms = 3000
//! ```

use std::path::PathBuf;
use std::time::Duration;

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};

use crate::resources::overlay::GameOverOverlay;
use crate::resources::spritesheet::{FrameGeometry, SheetKind};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Survival";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_FLOOR_PATH: &str = "./assets/textures/floor.png";

/// Where a spritesheet lives and how its frames are laid out and played.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    pub path: PathBuf,
    pub geometry: FrameGeometry,
    /// Animation playback speed in frames per second.
    pub fps: f32,
}

impl SheetConfig {
    pub fn default_for(kind: SheetKind) -> Self {
        match kind {
            SheetKind::Character => Self {
                path: PathBuf::from("./assets/textures/character.png"),
                geometry: FrameGeometry::new(kind, 64, 64, 8, 2, 16),
                fps: 12.0,
            },
            SheetKind::Enemy => Self {
                path: PathBuf::from("./assets/textures/enemy.png"),
                geometry: FrameGeometry::new(kind, 48, 48, 6, 1, 6),
                fps: 8.0,
            },
        }
    }

    /// Overwrite fields present in `section`. Rejects the whole section when
    /// the resulting geometry is unusable.
    fn apply(&mut self, config: &Ini, section: &str) {
        if let Some(path) = config.get(section, "path") {
            self.path = PathBuf::from(path);
        }
        if let Some(fps) = config.getfloat(section, "fps").ok().flatten() {
            if fps > 0.0 {
                self.fps = fps as f32;
            } else {
                warn!("[{}] fps must be positive, keeping {}", section, self.fps);
            }
        }

        match read_geometry(config, section, self.geometry) {
            Ok(geometry) => self.geometry = geometry,
            Err(e) => warn!("[{}] invalid frame geometry ({}), keeping defaults", section, e),
        }
    }
}

/// Overlay `section`'s geometry keys on `geometry` and validate the result.
fn read_geometry(
    config: &Ini,
    section: &str,
    mut geometry: FrameGeometry,
) -> Result<FrameGeometry, String> {
    if let Some(w) = config.getint(section, "frame_width").ok().flatten() {
        geometry.frame_width =
            i32::try_from(w).map_err(|_| format!("frame_width {} out of range", w))?;
    }
    if let Some(h) = config.getint(section, "frame_height").ok().flatten() {
        geometry.frame_height =
            i32::try_from(h).map_err(|_| format!("frame_height {} out of range", h))?;
    }
    if let Some(columns) = config.getuint(section, "columns").ok().flatten() {
        geometry.columns =
            usize::try_from(columns).map_err(|_| format!("columns {} out of range", columns))?;
    }
    if let Some(rows) = config.getuint(section, "rows").ok().flatten() {
        geometry.rows = usize::try_from(rows).map_err(|_| format!("rows {} out of range", rows))?;
    }
    if let Some(frames) = config.getuint(section, "frames").ok().flatten() {
        geometry.total_frames =
            usize::try_from(frames).map_err(|_| format!("frames {} out of range", frames))?;
    }
    geometry.validate()?;
    Ok(geometry)
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    pub title: String,
    pub character: SheetConfig,
    pub enemy: SheetConfig,
    /// Background image the floor tile is cut from.
    pub floor_path: PathBuf,
    pub overlay: GameOverOverlay,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            character: SheetConfig::default_for(SheetKind::Character),
            enemy: SheetConfig::default_for(SheetKind::Enemy),
            floor_path: PathBuf::from(DEFAULT_FLOOR_PATH),
            overlay: GameOverOverlay::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Sheet settings for `kind`.
    pub fn sheet(&self, kind: SheetKind) -> &SheetConfig {
        match kind {
            SheetKind::Character => &self.character,
            SheetKind::Enemy => &self.enemy,
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, character {:?}, enemy {:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.character.path,
            self.enemy.path
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // sheet sections
        self.character.apply(config, "character");
        self.enemy.apply(config, "enemy");

        // [floor] section
        if let Some(path) = config.get("floor", "path") {
            self.floor_path = PathBuf::from(path);
        }

        // [overlay] section
        if let Some(font) = config.get("overlay", "font") {
            self.overlay.font_path = PathBuf::from(font);
        }
        if let Some(size) = config.getuint("overlay", "font_size").ok().flatten() {
            self.overlay.font_size = size as i32;
        }
        if let Some(ms) = config.getuint("overlay", "hold_ms").ok().flatten() {
            self.overlay.hold = Duration::from_millis(ms);
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
