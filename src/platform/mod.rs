//! Collaborator seams between the frame loop and the windowing library.
//!
//! The loop only ever talks to the display and the event queue through these
//! traits, so the raylib backend in [`raylib`] can be swapped for scripted
//! doubles in tests. The texture handle is an associated type of the canvas:
//! the loop references textures, it never manages them.

pub mod raylib;

use ::raylib::ffi::KeyboardKey;
use ::raylib::prelude::Color;

use crate::components::screenposition::ScreenPosition;
use crate::error::DrawError;
use crate::sheet::TileRect;

/// One event drained from the window's queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The user asked to close the window.
    Quit,
    /// A key went down this frame.
    KeyDown(KeyboardKey),
    /// Anything the loop does not care about.
    Other,
}

/// Non-blocking event source. Returns `None` when the queue is empty.
pub trait EventPump {
    fn poll_event(&mut self) -> Option<WindowEvent>;
}

/// Display surface the loop draws to.
///
/// `present` makes the preceding `clear`/`draw_clipped` calls visible as one
/// frame; the loop never observes a partially drawn frame.
pub trait Canvas {
    type Texture: 'static;

    fn clear(&mut self, colour: Color) -> Result<(), DrawError>;

    /// Draw `src` out of `texture` with its top-left corner at `dest`.
    fn draw_clipped(
        &mut self,
        texture: &Self::Texture,
        src: TileRect,
        dest: ScreenPosition,
    ) -> Result<(), DrawError>;

    fn present(&mut self) -> Result<(), DrawError>;
}
