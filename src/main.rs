//! Spritewalk main entry point.
//!
//! A small walking-sprite demo using:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for the world, components, and update systems
//!
//! The executable loads a packed tile-sheet texture and its JSON definition,
//! validates the sheet geometry against the texture, and runs a frame loop
//! that advances a three-frame walk cycle on the Down arrow while the sprite
//! scrolls down the screen.
//!
//! # Startup
//!
//! 1. Read `config.ini` (window size, sheet paths, scroll step)
//! 2. Open the window, load the sheet texture and definition
//! 3. Reject geometry that addresses pixels outside the texture
//! 4. Spawn the sprite entity and run the frame loop until quit
//!
//! Setup failures log a tagged diagnostic and exit non-zero. Teardown runs on
//! every exit path: the world (textures) drops before the event pump (window).
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;

use spritewalk::components::screenposition::ScreenPosition;
use spritewalk::components::sprite::Sprite;
use spritewalk::components::walkcycle::WalkCycle;
use spritewalk::engine::{CLEAR_COLOUR, FrameLoop};
use spritewalk::error::{EngineError, SetupError};
use spritewalk::platform::raylib::{RaylibCanvas, RaylibEvents, init_window, load_sheet_texture};
use spritewalk::resources::gameconfig::GameConfig;
use spritewalk::resources::input::InputState;
use spritewalk::resources::sheetstore::{SheetDef, SheetStore};
use spritewalk::resources::texturestore::TextureStore;
use spritewalk::sheet::SheetLayout;
use spritewalk::systems::animation::{advance_walk, sync_sprite_frame, wrap_walk};

const SHEET_KEY: &str = "walker";

/// Spritewalk
#[derive(Parser)]
#[command(version, about = "Walks a sprite down the screen from a packed tile sheet")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a config.ini with default values and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };

    // Early-exit: write defaults and quit (no window needed)
    if cli.write_default_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Default config written to {}", config.config_path.display());
        return;
    }

    config.load_from_file().ok(); // ignore errors, use defaults

    if let Err(e) = run(config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: GameConfig) -> Result<(), EngineError> {
    // --------------- Window & sheet assets ---------------
    let (mut rl, thread) = init_window(&config)?;
    let texture = load_sheet_texture(&mut rl, &thread, &config.sheet_image)?;

    let def = SheetDef::load(&config.sheet_def)?;
    let layout = SheetLayout::new(def.tile_width, def.tile_height, def.columns)
        .map_err(SetupError::from)?;
    let walk =
        WalkCycle::new(def.frame_count, config.scroll_step).with_substitutions(def.substitutions);
    // Every tile the cycle can reach must live inside the texture.
    layout
        .validate_extent(texture.width as u32, texture.height as u32, walk.max_tile_id())
        .map_err(SetupError::from)?;

    // Declared before the world: locals drop in reverse order, so the
    // textures inside the world are released while the window still exists.
    let canvas = RaylibCanvas::new(&rl);
    let mut frame_loop = FrameLoop::new(RaylibEvents::new(rl, thread), canvas, CLEAR_COLOUR);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(InputState::default());

    let mut sheets = SheetStore::default();
    sheets.insert(SHEET_KEY, layout);
    world.insert_resource(sheets);

    let mut textures = TextureStore::default();
    textures.insert(SHEET_KEY, texture);
    world.insert_non_send_resource(textures);

    world.spawn((
        Sprite::new(SHEET_KEY, layout.tile_rect(walk.current_tile_id())),
        ScreenPosition::default(),
        walk,
    ));

    let mut schedule = Schedule::default();
    schedule.add_systems(advance_walk);
    schedule.add_systems(wrap_walk.after(advance_walk));
    schedule.add_systems(sync_sprite_frame.after(wrap_walk));
    schedule
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    log::info!("Entering the frame loop");
    frame_loop.run(&mut world, &mut schedule)
}
