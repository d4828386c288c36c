//! Spritesheet loading and frame mapping.
//!
//! A [`SpriteSheet`] owns its uploaded texture and a frame table computed once
//! at load time. Frame `i` of a sheet with `C` columns lives at row `i / C`,
//! column `i % C`, shifted by the sheet's pixel offset.
//!
//! Two sheets are used by the game: the character grid and the enemy grid.
//! Both go through the same code; only their [`FrameGeometry`] differs.

use std::path::Path;

use log::info;

use crate::backend::AssetLoader;
use crate::error::RenderError;

/// Horizontal correction for the enemy art, whose frames sit 5px to the left.
pub const ENEMY_OFFSET_X: i32 = -5;

/// A rectangle in pixels, used both for sheet regions and screen destinations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrameRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl FrameRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Which of the game's sheets a geometry describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SheetKind {
    Character,
    Enemy,
}

impl SheetKind {
    /// Per-asset pixel correction `(x, y)`.
    pub fn offset(self) -> (i32, i32) {
        match self {
            SheetKind::Character => (0, 0),
            SheetKind::Enemy => (ENEMY_OFFSET_X, 0),
        }
    }
}

/// Layout of the frames inside a spritesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameGeometry {
    pub frame_width: i32,
    pub frame_height: i32,
    pub columns: usize,
    pub rows: usize,
    pub total_frames: usize,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl FrameGeometry {
    /// Geometry for a sheet of `kind`, with that sheet's offset applied.
    pub fn new(
        kind: SheetKind,
        frame_width: i32,
        frame_height: i32,
        columns: usize,
        rows: usize,
        total_frames: usize,
    ) -> Self {
        let (offset_x, offset_y) = kind.offset();
        Self {
            frame_width,
            frame_height,
            columns,
            rows,
            total_frames,
            offset_x,
            offset_y,
        }
    }

    /// Check the geometry can produce a frame table.
    pub fn validate(&self) -> Result<(), String> {
        if self.frame_width <= 0 || self.frame_height <= 0 {
            return Err(format!(
                "frame size must be positive, got {}x{}",
                self.frame_width, self.frame_height
            ));
        }
        if self.columns == 0 {
            return Err("columns must be at least 1".to_string());
        }
        if self.rows == 0 {
            return Err("rows must be at least 1".to_string());
        }
        if self.total_frames == 0 {
            return Err("total frames must be at least 1".to_string());
        }
        let capacity = self.columns.checked_mul(self.rows);
        if capacity.is_none_or(|capacity| self.total_frames > capacity) {
            return Err(format!(
                "{} frames do not fit in {} columns x {} rows",
                self.total_frames, self.columns, self.rows
            ));
        }

        // Far edges of the last used column and row must fit the i32 rectangles.
        let used_columns = self.columns.min(self.total_frames);
        let used_rows = (self.total_frames - 1) / self.columns + 1;
        let right = far_edge(used_columns, self.frame_width, self.offset_x);
        let bottom = far_edge(used_rows, self.frame_height, self.offset_y);
        if right.is_none() || bottom.is_none() {
            return Err(format!(
                "{}x{} frames over {} columns x {} rows exceed the coordinate range",
                self.frame_width, self.frame_height, used_columns, used_rows
            ));
        }
        Ok(())
    }

    /// Source rectangle of frame `index`.
    pub fn frame_rect(&self, index: usize) -> FrameRect {
        let row = (index / self.columns) as i32;
        let col = (index % self.columns) as i32;
        FrameRect {
            x: col * self.frame_width + self.offset_x,
            y: row * self.frame_height + self.offset_y,
            width: self.frame_width,
            height: self.frame_height,
        }
    }
}

/// `count * size + offset`, or `None` when it leaves the i32 range.
fn far_edge(count: usize, size: i32, offset: i32) -> Option<i32> {
    i32::try_from(count)
        .ok()?
        .checked_mul(size)?
        .checked_add(offset)
}

/// Compute the source rectangle of every frame, in frame order.
pub fn build_frame_table(geometry: &FrameGeometry) -> Box<[FrameRect]> {
    (0..geometry.total_frames)
        .map(|i| geometry.frame_rect(i))
        .collect()
}

/// An uploaded spritesheet together with its frame table.
///
/// The texture is released when the sheet is dropped.
pub struct SpriteSheet<T> {
    texture: T,
    geometry: FrameGeometry,
    frames: Box<[FrameRect]>,
}

impl<T> SpriteSheet<T> {
    /// Decode and upload the image at `path`, then build its frame table.
    ///
    /// The decoded image is released as soon as the texture exists.
    pub fn load<L>(
        loader: &mut L,
        path: impl AsRef<Path>,
        geometry: FrameGeometry,
    ) -> Result<Self, RenderError>
    where
        L: AssetLoader<Texture = T>,
    {
        let path = path.as_ref();
        let texture = {
            let image = loader.load_image(path)?;
            loader.create_texture(&image)?
        };
        let sheet = Self::from_texture(texture, geometry);
        info!(
            "Loaded spritesheet {} ({} frames of {}x{})",
            path.display(),
            sheet.frames.len(),
            geometry.frame_width,
            geometry.frame_height
        );
        Ok(sheet)
    }

    /// Wrap an already uploaded texture.
    pub fn from_texture(texture: T, geometry: FrameGeometry) -> Self {
        Self {
            texture,
            geometry,
            frames: build_frame_table(&geometry),
        }
    }

    /// Source rectangle of frame `index`.
    ///
    /// # Panics
    /// If `index` is not below the sheet's total frame count.
    pub fn frame(&self, index: usize) -> FrameRect {
        self.frames[index]
    }

    pub fn frames(&self) -> &[FrameRect] {
        &self.frames
    }

    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    pub fn texture(&self) -> &T {
        &self.texture
    }
}
