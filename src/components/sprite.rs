use bevy_ecs::prelude::Component;

use crate::sheet::TileRect;

/// Sprite drawn from a clipped region of a sheet texture.
///
/// `sheet_key` names both the layout in the
/// [`SheetStore`](crate::resources::sheetstore::SheetStore) and the texture in
/// the [`TextureStore`](crate::resources::texturestore::TextureStore). The
/// source rectangle selects the current tile and is kept in sync with the
/// entity's [`WalkCycle`](crate::components::walkcycle::WalkCycle) by the
/// animation systems.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub sheet_key: String,
    pub src: TileRect,
}

impl Sprite {
    pub fn new(sheet_key: impl Into<String>, src: TileRect) -> Self {
        Self {
            sheet_key: sheet_key.into(),
            src,
        }
    }
}
