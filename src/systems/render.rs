//! Sprite rendering through the canvas seam.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::error::DrawError;
use crate::platform::Canvas;
use crate::resources::texturestore::TextureStore;

/// Clear, draw every sprite entity clipped to its current tile, present.
///
/// Sprites are collected first so the world query ends before the texture
/// store is borrowed. A sprite whose texture is missing from the store is
/// skipped rather than failing the frame.
pub fn render_pass<C: Canvas>(
    world: &mut World,
    canvas: &mut C,
    clear_colour: Color,
) -> Result<(), DrawError> {
    canvas.clear(clear_colour)?;

    let to_draw: Vec<(Sprite, ScreenPosition)> = {
        let mut query = world.query::<(&Sprite, &ScreenPosition)>();
        query
            .iter(world)
            .map(|(sprite, pos)| (sprite.clone(), *pos))
            .collect()
    };

    let textures = world.non_send_resource::<TextureStore<C::Texture>>();
    for (sprite, pos) in &to_draw {
        if let Some(texture) = textures.get(&sprite.sheet_key) {
            canvas.draw_clipped(texture, sprite.src, *pos)?;
        }
    }

    canvas.present()
}
