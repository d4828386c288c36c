//! Sprite, floor, object and overlay drawing.
//!
//! All functions draw onto a [`Canvas`]. Per-frame draws do no validation: a
//! frame index outside the sheet panics, everything else is trusted. Only the
//! calls that load assets return errors.

use std::path::Path;

use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Color;

use crate::backend::{AssetLoader, Canvas};
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::object::Object;
use crate::components::player::Player;
use crate::error::RenderError;
use crate::resources::animationclock::AnimationClock;
use crate::resources::enemyslots::EnemySlots;
use crate::resources::floor::{Floor, tile_floor};
use crate::resources::gameconfig::GameConfig;
use crate::resources::overlay::GameOverOverlay;
use crate::resources::spritesheet::{FrameRect, SheetKind, SpriteSheet};

/// Fill color for placeholder objects.
pub fn object_color() -> Color {
    Color::new(255, 0, 0, 255)
}

/// Copy one frame of `sheet` to `(x, y)` at frame size.
fn draw_frame<C: Canvas>(
    canvas: &mut C,
    sheet: &SpriteSheet<C::Texture>,
    frame: usize,
    x: i32,
    y: i32,
) {
    let geometry = sheet.geometry();
    let dst = FrameRect::new(x, y, geometry.frame_width, geometry.frame_height);
    canvas.copy(sheet.texture(), sheet.frame(frame), dst);
}

/// Draw the character at `(x, y)` using the caller's current animation frame.
pub fn render_character<C: Canvas>(
    canvas: &mut C,
    sheet: &SpriteSheet<C::Texture>,
    frame: usize,
    x: i32,
    y: i32,
) {
    draw_frame(canvas, sheet, frame, x, y);
}

/// Draw one enemy at its position using its own current frame.
pub fn render_enemy<C: Canvas>(canvas: &mut C, sheet: &SpriteSheet<C::Texture>, enemy: &Enemy) {
    draw_frame(canvas, sheet, enemy.current_frame, enemy.pos.x, enemy.pos.y);
}

/// Draw every occupied slot in slot order. Empty slots are skipped.
///
/// Returns the number of enemies drawn.
pub fn render_enemies<C: Canvas>(
    canvas: &mut C,
    sheet: &SpriteSheet<C::Texture>,
    enemies: &[Option<Enemy>],
) -> usize {
    let mut drawn = 0;
    for enemy in enemies.iter().flatten() {
        render_enemy(canvas, sheet, enemy);
        drawn += 1;
    }
    drawn
}

/// Load the floor image, tile it over the canvas, then drop the texture.
///
/// The image is read from disk on every call. Use [`Floor`] to keep the
/// texture between frames.
pub fn render_floor<C: Canvas>(
    canvas: &mut C,
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let path = path.as_ref();
    let texture = {
        let image = canvas.load_image(path)?;
        canvas.create_texture(&image)?
    };
    let tiles = tile_floor(canvas, &texture);
    // Queued tile copies still reference the texture.
    canvas.flush();
    debug!("Tiled floor {} ({} tiles)", path.display(), tiles);
    Ok(())
}

/// Draw a placeholder object as a solid rectangle.
pub fn render_object<C: Canvas>(canvas: &mut C, object: &Object) {
    canvas.fill_rect(object.rect(), object_color());
}

/// Show the game over text centered on screen and hold it.
///
/// Opens the overlay font, rasterizes the text, uploads it, draws it centered
/// on the canvas and presents the frame. Font, image and texture are released
/// once the frame is on screen, and on every error path. The frame reopened by
/// the present is cleared to black.
///
/// **This call blocks the calling thread** for `overlay.hold` after presenting.
/// Hosts that cannot stall their thread should draw with [`draw_game_over`]
/// and schedule the dismissal themselves.
pub fn display_game_over<C: Canvas>(
    canvas: &mut C,
    overlay: &GameOverOverlay,
) -> Result<(), RenderError> {
    {
        let _text = stage_game_over(canvas, overlay)?;
        canvas.present();
    }
    canvas.clear(Color::BLACK);
    canvas.wait(overlay.hold);
    Ok(())
}

/// Draw the game over text centered on the canvas without presenting.
///
/// The draw is flushed before the text texture is released. Returns the
/// destination rectangle of the text.
pub fn draw_game_over<C: Canvas>(
    canvas: &mut C,
    overlay: &GameOverOverlay,
) -> Result<FrameRect, RenderError> {
    let text = stage_game_over(canvas, overlay)?;
    canvas.flush();
    Ok(text.dst)
}

/// Game over text resources, alive while a draw may still reference them.
struct StagedText<C: AssetLoader> {
    // Field order is drop order: texture, then image, then font.
    _texture: C::Texture,
    _image: C::Image,
    _font: C::Font,
    dst: FrameRect,
}

fn stage_game_over<C: Canvas>(
    canvas: &mut C,
    overlay: &GameOverOverlay,
) -> Result<StagedText<C>, RenderError> {
    let font = canvas.load_font(&overlay.font_path, overlay.font_size)?;
    let image = canvas.render_text(&font, &overlay.text, overlay.color)?;
    let texture = canvas.create_texture(&image)?;

    let (text_w, text_h) = canvas.image_size(&image);
    let (out_w, out_h) = canvas.output_size();
    let src = FrameRect::new(0, 0, text_w, text_h);
    let dst = FrameRect::new((out_w - text_w) / 2, (out_h - text_h) / 2, text_w, text_h);
    canvas.copy(&texture, src, dst);
    Ok(StagedText {
        _texture: texture,
        _image: image,
        _font: font,
        dst,
    })
}

/// Textures a scene frame draws from.
pub struct SceneAssets<T> {
    pub character: SpriteSheet<T>,
    pub enemies: SpriteSheet<T>,
    pub floor: Floor<T>,
}

impl<T> SceneAssets<T> {
    /// Load both spritesheets and the floor texture described by `config`.
    pub fn load<L>(loader: &mut L, config: &GameConfig) -> Result<Self, RenderError>
    where
        L: AssetLoader<Texture = T>,
    {
        let character = config.sheet(SheetKind::Character);
        let enemy = config.sheet(SheetKind::Enemy);
        Ok(Self {
            character: SpriteSheet::load(loader, &character.path, character.geometry)?,
            enemies: SpriteSheet::load(loader, &enemy.path, enemy.geometry)?,
            floor: Floor::load(loader, &config.floor_path)?,
        })
    }
}

/// Draw one frame of the world: floor, objects, player, then enemies.
pub fn render_world<C: Canvas>(
    world: &mut World,
    canvas: &mut C,
    assets: &SceneAssets<C::Texture>,
) {
    assets.floor.render(canvas);

    let mut objects = world.query::<&Object>();
    for object in objects.iter(world) {
        render_object(canvas, object);
    }

    let frame = world.resource::<AnimationClock>().frame;
    let mut players = world.query_filtered::<&MapPosition, With<Player>>();
    for pos in players.iter(world) {
        render_character(canvas, &assets.character, frame, pos.x, pos.y);
    }

    let enemies = world.resource::<EnemySlots>();
    render_enemies(canvas, &assets.enemies, &enemies.slots);
}
