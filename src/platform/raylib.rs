//! Raylib-backed implementations of the platform seams.
//!
//! Window, texture and input handles stay owned here; their raylib `Drop`
//! impls release them in reverse acquisition order on every exit path. The
//! draw calls go through the ffi layer directly because the safe API scopes
//! clear/draw/present inside a single borrow, while the [`Canvas`] contract
//! exposes them as separate calls.

use std::path::Path;

use raylib::ffi;
use raylib::prelude::{Color, RaylibHandle, RaylibThread, Texture2D};

use crate::components::screenposition::ScreenPosition;
use crate::error::{DrawError, SetupError};
use crate::platform::{Canvas, EventPump, WindowEvent};
use crate::resources::gameconfig::GameConfig;
use crate::sheet::TileRect;

/// Open the window and apply the configured frame pacing.
pub fn init_window(config: &GameConfig) -> Result<(RaylibHandle, RaylibThread), SetupError> {
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Spritewalk")
        .build();
    if !unsafe { ffi::IsWindowReady() } {
        return Err(SetupError::Window("window is not ready".to_string()));
    }
    rl.set_target_fps(config.target_fps);
    Ok((rl, thread))
}

/// Load the sheet texture from disk into GPU memory.
pub fn load_sheet_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, SetupError> {
    let name = path.to_str().ok_or_else(|| SetupError::Texture {
        path: path.to_path_buf(),
        reason: "path is not valid UTF-8".to_string(),
    })?;
    rl.load_texture(thread, name)
        .map_err(|reason| SetupError::Texture {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        })
}

/// Event pump over raylib's window-close flag and key queue.
pub struct RaylibEvents {
    rl: RaylibHandle,
    _thread: RaylibThread,
}

impl RaylibEvents {
    pub fn new(rl: RaylibHandle, thread: RaylibThread) -> Self {
        Self { rl, _thread: thread }
    }
}

impl EventPump for RaylibEvents {
    fn poll_event(&mut self) -> Option<WindowEvent> {
        if self.rl.window_should_close() {
            return Some(WindowEvent::Quit);
        }
        self.rl.get_key_pressed().map(WindowEvent::KeyDown)
    }
}

/// Canvas drawing straight to the window's default framebuffer.
pub struct RaylibCanvas(());

impl RaylibCanvas {
    /// The borrow ties canvas construction to an open window.
    pub fn new(_rl: &RaylibHandle) -> Self {
        Self(())
    }
}

impl Canvas for RaylibCanvas {
    type Texture = Texture2D;

    fn clear(&mut self, colour: Color) -> Result<(), DrawError> {
        unsafe {
            ffi::BeginDrawing();
            ffi::ClearBackground(colour.into());
        }
        Ok(())
    }

    fn draw_clipped(
        &mut self,
        texture: &Texture2D,
        src: TileRect,
        dest: ScreenPosition,
    ) -> Result<(), DrawError> {
        let source = ffi::Rectangle {
            x: src.x as f32,
            y: src.y as f32,
            width: src.w as f32,
            height: src.h as f32,
        };
        let position = ffi::Vector2 {
            x: dest.x as f32,
            y: dest.y as f32,
        };
        unsafe {
            ffi::DrawTextureRec(**texture, source, position, Color::WHITE.into());
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), DrawError> {
        unsafe {
            ffi::EndDrawing();
        }
        Ok(())
    }
}
