//! Walk-cycle systems.
//!
//! - [`advance_walk`] steps every walk cycle once when the advance key went
//!   down this tick.
//! - [`wrap_walk`] applies the frame wrap unconditionally each tick, so a
//!   frame index is always valid before sprites are synced, advance or not.
//! - [`sync_sprite_frame`] resolves the current tile id through the sheet
//!   layout and writes the sprite's source rectangle and scroll position.
//!
//! Scheduled strictly in that order by the frame loop.

use bevy_ecs::prelude::*;

use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::walkcycle::WalkCycle;
use crate::resources::input::InputState;
use crate::resources::sheetstore::SheetStore;

/// Step walk cycles once per advance press drained this tick.
pub fn advance_walk(mut query: Query<&mut WalkCycle>, input: Res<InputState>) {
    if !input.advance.just_pressed {
        return;
    }
    for mut walk in query.iter_mut() {
        for _ in 0..input.advance.presses {
            walk.advance();
        }
    }
}

/// Wrap frame indices that reached the frame count. Runs every tick.
pub fn wrap_walk(mut query: Query<&mut WalkCycle>) {
    for mut walk in query.iter_mut() {
        walk.wrap();
    }
}

/// Write the current tile's source rect and the scroll offset into the
/// sprite's draw state.
pub fn sync_sprite_frame(
    mut query: Query<(&WalkCycle, &mut Sprite, &mut ScreenPosition)>,
    sheets: Res<SheetStore>,
) {
    for (walk, mut sprite, mut pos) in query.iter_mut() {
        if let Some(layout) = sheets.get(&sprite.sheet_key) {
            sprite.src = layout.tile_rect(walk.current_tile_id());
            // The offset is unbounded; pin it to the screen's coordinate
            // range once it outgrows i32.
            pos.y = i32::try_from(walk.scroll_offset()).unwrap_or(i32::MAX);
        }
    }
}
