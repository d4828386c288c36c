//! Survival renderer demo entry point.
//!
//! Opens a window, loads the character and enemy spritesheets and the floor
//! image, then draws an animated scene every frame:
//!
//! 1. Load `config.ini` (defaults when missing)
//! 2. Initialize the raylib window and load all textures
//! 3. Build the ECS world (player, objects, enemy slots, animation clock)
//! 4. Main loop: advance time and animations, draw the scene
//! 5. Optionally show the game over overlay after a fixed time and quit
//!
//! Any asset that fails to load is fatal: the error is logged and the process
//! exits with status 1.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --game-over-after 20
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::fmt::Display;
use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::Color;

use survival_render::backend::Canvas;
use survival_render::backend::raylibcanvas::{RaylibCanvas, RaylibLoader};
use survival_render::game;
use survival_render::resources::gameconfig::GameConfig;
use survival_render::resources::worldtime::WorldTime;
use survival_render::systems::animation::{advance_character_frame, advance_enemy_frames};
use survival_render::systems::render::{SceneAssets, display_game_over, render_world};
use survival_render::systems::time::update_world_time;

/// Survival sprite renderer demo
#[derive(Parser)]
#[command(version, about = "Animated spritesheet scene with a game over screen")]
struct Cli {
    /// Path of the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Show the game over screen and exit after this many seconds.
    #[arg(long, value_name = "SECONDS")]
    game_over_after: Option<f32>,

    /// Number of enemies to spawn (capped at the slot capacity).
    #[arg(long, value_name = "N", default_value_t = 6)]
    enemies: usize,
}

/// Log a fatal error and terminate.
fn fatal(e: impl Display) -> ! {
    log::error!("{}", e);
    std::process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);

    // Textures must be dropped before the window closes, so they are declared after `rl`.
    let assets = {
        let mut loader = RaylibLoader::new(&mut rl, &thread);
        SceneAssets::load(&mut loader, &config).unwrap_or_else(|e| fatal(e))
    };

    // --------------- ECS world ---------------
    let mut world = World::new();
    let mut rng = fastrand::Rng::new();
    game::setup(&mut world, &config, cli.enemies, &mut rng);

    let mut update = Schedule::default();
    update.add_systems((advance_character_frame, advance_enemy_frames));

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);
        update.run(&mut world);

        let game_over = cli
            .game_over_after
            .is_some_and(|limit| world.resource::<WorldTime>().elapsed >= limit);

        let mut d = rl.begin_drawing(&thread);
        let mut canvas = RaylibCanvas::new(&mut d, &thread);
        canvas.clear(Color::BLACK);
        render_world(&mut world, &mut canvas, &assets);

        if game_over {
            log::info!("Game over");
            if let Err(e) = display_game_over(&mut canvas, &config.overlay) {
                fatal(e);
            }
            break;
        }
    }
}
