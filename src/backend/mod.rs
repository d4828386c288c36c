//! Abstract 2D drawing surface.
//!
//! Rendering code is written against two traits so it can run on raylib in the
//! game and on a recording mock in tests:
//!
//! - [`AssetLoader`] decodes images, uploads textures, opens fonts and
//!   rasterizes text. Available both before and during a frame.
//! - [`Canvas`] is an open frame: copy texture regions, fill rectangles,
//!   present, and wait.
//!
//! Resources returned by the loader release themselves on `Drop`; callers never
//! free them by hand.

pub mod raylibcanvas;

use std::path::Path;
use std::time::Duration;

use raylib::prelude::Color;

use crate::error::RenderError;
use crate::resources::spritesheet::FrameRect;

/// Loads images, textures and fonts from a rendering backend.
pub trait AssetLoader {
    /// Decoded CPU-side image.
    type Image;
    /// Texture uploaded to the backend.
    type Texture;
    /// Opened font at a fixed point size.
    type Font;

    /// Decode an image file. Fails with [`RenderError::AssetLoad`].
    fn load_image(&mut self, path: &Path) -> Result<Self::Image, RenderError>;

    /// Upload a decoded image. Fails with [`RenderError::TextureCreation`].
    fn create_texture(&mut self, image: &Self::Image) -> Result<Self::Texture, RenderError>;

    /// Pixel size `(width, height)` of a decoded image.
    fn image_size(&self, image: &Self::Image) -> (i32, i32);

    /// Open a font file. Fails with [`RenderError::AssetLoad`].
    fn load_font(&mut self, path: &Path, size: i32) -> Result<Self::Font, RenderError>;

    /// Rasterize `text` into an image. Fails with [`RenderError::TextRender`].
    fn render_text(
        &mut self,
        font: &Self::Font,
        text: &str,
        color: Color,
    ) -> Result<Self::Image, RenderError>;
}

/// An open frame on the display surface.
pub trait Canvas: AssetLoader {
    /// Size `(width, height)` of the destination surface in pixels.
    fn output_size(&self) -> (i32, i32);

    /// Copy the `src` region of `texture` into `dst`. Clipping is up to the backend.
    fn copy(&mut self, texture: &Self::Texture, src: FrameRect, dst: FrameRect);

    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: FrameRect, color: Color);

    /// Clear the whole surface to `color`.
    fn clear(&mut self, color: Color);

    /// Submit queued draws to the backend.
    ///
    /// Textures used by earlier `copy` calls must stay alive until this (or
    /// [`Canvas::present`]) returns.
    fn flush(&mut self);

    /// Show everything drawn so far and start a new frame.
    ///
    /// The new frame's contents are undefined until [`Canvas::clear`] is called.
    fn present(&mut self);

    /// Block the calling thread.
    fn wait(&mut self, duration: Duration);
}
