//! Walk-cycle animation state.
//!
//! One [`WalkCycle`] holds the current frame index of a cyclic animation and
//! the accumulated scroll offset that moves the sprite down the screen. The
//! frame advances on discrete input events; the wrap back to frame 0 is also
//! applied unconditionally once per tick by
//! [`wrap_walk`](crate::systems::animation::wrap_walk), so idle frames render
//! a valid frame even if a caller advanced past the end.

use bevy_ecs::prelude::Component;

/// Scroll step applied per advance, in pixels.
pub const DEFAULT_SCROLL_STEP: i64 = 10;

#[derive(Component, Clone, Debug)]
pub struct WalkCycle {
    frame_index: u32,
    frame_count: u32,
    scroll_offset: i64,
    scroll_step: i64,
    /// Tile substitutions applied when resolving the frame to a tile id.
    /// Covers sheets with placeholder holes that must be skipped.
    substitutions: Vec<(u32, u32)>,
}

impl WalkCycle {
    /// Create a cycle over `frame_count` frames. A zero count is clamped to
    /// one frame so the cycle always has a valid frame to show, and a
    /// negative step is clamped to zero so the scroll offset only grows.
    pub fn new(frame_count: u32, scroll_step: i64) -> Self {
        Self {
            frame_index: 0,
            frame_count: frame_count.max(1),
            scroll_offset: 0,
            scroll_step: scroll_step.max(0),
            substitutions: Vec::new(),
        }
    }

    pub fn with_substitutions(mut self, substitutions: Vec<(u32, u32)>) -> Self {
        self.substitutions = substitutions;
        self
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Accumulated scroll offset. Never wrapped or reset within a session;
    /// the sprite drifts down for as long as the program runs.
    pub fn scroll_offset(&self) -> i64 {
        self.scroll_offset
    }

    /// Step to the next frame and accumulate the scroll offset.
    pub fn advance(&mut self) {
        self.frame_index += 1;
        self.scroll_offset += self.scroll_step;
        self.wrap();
    }

    /// Wrap the frame index back to 0 once it reaches the frame count.
    /// Idempotent; called every tick regardless of whether an advance
    /// happened.
    pub fn wrap(&mut self) {
        if self.frame_index >= self.frame_count {
            self.frame_index = 0;
        }
    }

    /// Tile id for the current frame, after substitutions.
    pub fn current_tile_id(&self) -> u32 {
        self.resolve_tile(self.frame_index)
    }

    /// Largest tile id this cycle can ever address, for extent validation.
    pub fn max_tile_id(&self) -> u32 {
        (0..self.frame_count)
            .map(|frame| self.resolve_tile(frame))
            .max()
            .unwrap_or(0)
    }

    fn resolve_tile(&self, frame: u32) -> u32 {
        self.substitutions
            .iter()
            .find(|(from, _)| *from == frame)
            .map(|(_, to)| *to)
            .unwrap_or(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walker() -> WalkCycle {
        WalkCycle::new(3, DEFAULT_SCROLL_STEP).with_substitutions(vec![(1, 2)])
    }

    #[test]
    fn test_advance_wraps_after_last_frame() {
        let mut walk = walker();
        let mut seen = Vec::new();
        for _ in 0..3 {
            walk.advance();
            seen.push(walk.frame_index());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn test_substitution_remaps_frame_one() {
        let mut walk = walker();
        assert_eq!(walk.current_tile_id(), 0);
        walk.advance();
        assert_eq!(walk.frame_index(), 1);
        assert_eq!(walk.current_tile_id(), 2);
        walk.advance();
        assert_eq!(walk.current_tile_id(), 2);
    }

    #[test]
    fn test_no_substitutions_maps_identity() {
        let mut walk = WalkCycle::new(3, DEFAULT_SCROLL_STEP);
        for expected in [1, 2, 0] {
            walk.advance();
            assert_eq!(walk.current_tile_id(), expected);
        }
    }

    #[test]
    fn test_scroll_offset_accumulates_across_wraps() {
        let mut walk = walker();
        let mut last = walk.scroll_offset();
        for _ in 0..7 {
            walk.advance();
            assert_eq!(walk.scroll_offset(), last + DEFAULT_SCROLL_STEP);
            last = walk.scroll_offset();
        }
        assert_eq!(last, 70);
    }

    #[test]
    fn test_wrap_is_idempotent_on_idle_ticks() {
        let mut walk = walker();
        walk.advance();
        let frame = walk.frame_index();
        let scroll = walk.scroll_offset();
        walk.wrap();
        walk.wrap();
        assert_eq!(walk.frame_index(), frame);
        assert_eq!(walk.scroll_offset(), scroll);
    }

    #[test]
    fn test_max_tile_id_accounts_for_substitutions() {
        assert_eq!(walker().max_tile_id(), 2);
        let walk = WalkCycle::new(3, 10).with_substitutions(vec![(1, 7)]);
        assert_eq!(walk.max_tile_id(), 7);
    }

    #[test]
    fn test_negative_step_never_decrements_offset() {
        let mut walk = WalkCycle::new(3, -10);
        walk.advance();
        walk.advance();
        assert_eq!(walk.scroll_offset(), 0);
    }

    #[test]
    fn test_zero_frame_count_clamped() {
        let mut walk = WalkCycle::new(0, 10);
        walk.advance();
        assert_eq!(walk.frame_index(), 0);
    }
}
