//! Tiled floor background.
//!
//! The floor tile is a fixed 45x20 region of the background image, repeated in
//! a row-major grid that covers the whole output surface. The last column and
//! row may hang past the surface edge; the backend clips them.

use std::path::Path;

use log::info;

use crate::backend::{AssetLoader, Canvas};
use crate::error::RenderError;
use crate::resources::spritesheet::FrameRect;

/// Region of the background image used as the floor tile.
pub const FLOOR_TILE_SRC: FrameRect = FrameRect::new(16, 200, 45, 20);

/// Destination rectangles covering a `width` x `height` surface, row by row.
pub fn floor_tiles(width: i32, height: i32) -> impl Iterator<Item = FrameRect> {
    let tile_w = FLOOR_TILE_SRC.width;
    let tile_h = FLOOR_TILE_SRC.height;
    let tiles_x = (width.max(0) + tile_w - 1) / tile_w;
    let tiles_y = (height.max(0) + tile_h - 1) / tile_h;

    (0..tiles_y).flat_map(move |ty| {
        (0..tiles_x).map(move |tx| FrameRect::new(tx * tile_w, ty * tile_h, tile_w, tile_h))
    })
}

/// Copy the floor tile over the whole canvas. Returns the number of tiles drawn.
pub fn tile_floor<C: Canvas>(canvas: &mut C, texture: &C::Texture) -> usize {
    let (width, height) = canvas.output_size();
    let mut drawn = 0;
    for dst in floor_tiles(width, height) {
        canvas.copy(texture, FLOOR_TILE_SRC, dst);
        drawn += 1;
    }
    drawn
}

/// Floor texture kept alive between frames.
pub struct Floor<T> {
    texture: T,
}

impl<T> Floor<T> {
    pub fn load<L>(loader: &mut L, path: impl AsRef<Path>) -> Result<Self, RenderError>
    where
        L: AssetLoader<Texture = T>,
    {
        let path = path.as_ref();
        let texture = {
            let image = loader.load_image(path)?;
            loader.create_texture(&image)?
        };
        info!("Loaded floor texture {}", path.display());
        Ok(Self { texture })
    }

    pub fn render<C>(&self, canvas: &mut C) -> usize
    where
        C: Canvas<Texture = T>,
    {
        tile_floor(canvas, &self.texture)
    }
}
