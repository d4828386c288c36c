//! raylib implementation of the drawing backend.
//!
//! [`RaylibLoader`] wraps the raylib handle outside of a frame (startup asset
//! loading). [`RaylibCanvas`] wraps an open [`RaylibDrawHandle`] and can both
//! load and draw.
//!
//! Note: raylib resources must stay on the main thread, so none of these
//! types are `Send`.

use std::ffi::CString;
use std::path::Path;
use std::time::Duration;

use raylib::ffi;
use raylib::prelude::*;

use crate::backend::{AssetLoader, Canvas};
use crate::error::RenderError;
use crate::resources::spritesheet::FrameRect;

/// Spacing between glyphs when rasterizing text.
const TEXT_SPACING: f32 = 1.0;

impl From<FrameRect> for Rectangle {
    fn from(rect: FrameRect) -> Self {
        Rectangle {
            x: rect.x as f32,
            y: rect.y as f32,
            width: rect.width as f32,
            height: rect.height as f32,
        }
    }
}

fn path_str(path: &Path) -> Result<&str, RenderError> {
    path.to_str()
        .ok_or_else(|| RenderError::asset_load(path, "path is not valid UTF-8"))
}

fn load_image(path: &Path) -> Result<Image, RenderError> {
    Image::load_image(path_str(path)?).map_err(|e| RenderError::asset_load(path, e.to_string()))
}

fn create_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image: &Image,
) -> Result<Texture2D, RenderError> {
    rl.load_texture_from_image(thread, image)
        .map_err(|e| RenderError::TextureCreation(e.to_string()))
}

fn load_font(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
    size: i32,
) -> Result<Font, RenderError> {
    rl.load_font_ex(thread, path_str(path)?, size, None)
        .map_err(|e| RenderError::asset_load(path, e.to_string()))
}

/// Rasterize text into a CPU image using the font's base size.
fn render_text(font: &Font, text: &str, color: Color) -> Result<Image, RenderError> {
    let c_text = CString::new(text)
        .map_err(|e| RenderError::TextRender(format!("invalid text {:?}: {}", text, e)))?;
    let raw = unsafe {
        ffi::ImageTextEx(
            **font,
            c_text.as_ptr(),
            font.baseSize as f32,
            TEXT_SPACING,
            color.into(),
        )
    };
    if raw.data.is_null() || raw.width <= 0 || raw.height <= 0 {
        return Err(RenderError::TextRender(format!(
            "font produced an empty image for {:?}",
            text
        )));
    }
    Ok(unsafe { Image::from_raw(raw) })
}

/// Asset loader used before the first frame is opened.
pub struct RaylibLoader<'a> {
    rl: &'a mut RaylibHandle,
    thread: &'a RaylibThread,
}

impl<'a> RaylibLoader<'a> {
    pub fn new(rl: &'a mut RaylibHandle, thread: &'a RaylibThread) -> Self {
        Self { rl, thread }
    }
}

impl AssetLoader for RaylibLoader<'_> {
    type Image = Image;
    type Texture = Texture2D;
    type Font = Font;

    fn load_image(&mut self, path: &Path) -> Result<Image, RenderError> {
        load_image(path)
    }

    fn create_texture(&mut self, image: &Image) -> Result<Texture2D, RenderError> {
        create_texture(self.rl, self.thread, image)
    }

    fn image_size(&self, image: &Image) -> (i32, i32) {
        (image.width(), image.height())
    }

    fn load_font(&mut self, path: &Path, size: i32) -> Result<Font, RenderError> {
        load_font(self.rl, self.thread, path, size)
    }

    fn render_text(&mut self, font: &Font, text: &str, color: Color) -> Result<Image, RenderError> {
        render_text(font, text, color)
    }
}

/// Canvas over an open raylib frame.
///
/// The wrapped draw handle ends the frame when it is dropped by the caller.
pub struct RaylibCanvas<'a, 'b> {
    draw: &'a mut RaylibDrawHandle<'b>,
    thread: &'a RaylibThread,
}

impl<'a, 'b> RaylibCanvas<'a, 'b> {
    pub fn new(draw: &'a mut RaylibDrawHandle<'b>, thread: &'a RaylibThread) -> Self {
        Self { draw, thread }
    }
}

impl AssetLoader for RaylibCanvas<'_, '_> {
    type Image = Image;
    type Texture = Texture2D;
    type Font = Font;

    fn load_image(&mut self, path: &Path) -> Result<Image, RenderError> {
        load_image(path)
    }

    fn create_texture(&mut self, image: &Image) -> Result<Texture2D, RenderError> {
        create_texture(self.draw, self.thread, image)
    }

    fn image_size(&self, image: &Image) -> (i32, i32) {
        (image.width(), image.height())
    }

    fn load_font(&mut self, path: &Path, size: i32) -> Result<Font, RenderError> {
        load_font(self.draw, self.thread, path, size)
    }

    fn render_text(&mut self, font: &Font, text: &str, color: Color) -> Result<Image, RenderError> {
        render_text(font, text, color)
    }
}

impl Canvas for RaylibCanvas<'_, '_> {
    fn output_size(&self) -> (i32, i32) {
        (self.draw.get_screen_width(), self.draw.get_screen_height())
    }

    fn copy(&mut self, texture: &Texture2D, src: FrameRect, dst: FrameRect) {
        self.draw.draw_texture_pro(
            texture,
            Rectangle::from(src),
            Rectangle::from(dst),
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }

    fn fill_rect(&mut self, rect: FrameRect, color: Color) {
        self.draw
            .draw_rectangle(rect.x, rect.y, rect.width, rect.height, color);
    }

    fn clear(&mut self, color: Color) {
        self.draw.clear_background(color);
    }

    fn flush(&mut self) {
        unsafe {
            ffi::rlDrawRenderBatchActive();
        }
    }

    fn present(&mut self) {
        // Swap buffers and reopen the frame so the draw handle's own EndDrawing stays paired.
        unsafe {
            ffi::EndDrawing();
            ffi::BeginDrawing();
        }
    }

    fn wait(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
