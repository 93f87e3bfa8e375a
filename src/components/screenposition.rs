use bevy_ecs::prelude::Component;

/// Top-left screen position, in pixels, where an entity is drawn.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenPosition {
    pub x: i32,
    pub y: i32,
}

impl ScreenPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
