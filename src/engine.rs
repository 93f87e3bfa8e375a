//! The frame loop.
//!
//! [`FrameLoop`] is a two-state machine (running, stopped). Each tick runs
//! strictly in order: drain pending window events without blocking, run the
//! update schedule, then clear/draw/present through the canvas seam. A quit
//! event stops the loop immediately; nothing is drawn that tick. There is no
//! explicit delay here; frame pacing belongs to the presentation layer.
//!
//! Draw failures are logged and skipped, not fatal: a dropped frame only
//! means the screen does not update. Three consecutive failures are treated
//! as a degraded display collaborator and stop the loop with an error.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::error::EngineError;
use crate::platform::{Canvas, EventPump, WindowEvent};
use crate::resources::input::InputState;
use crate::systems::render::render_pass;

/// Background colour of every frame.
pub const CLEAR_COLOUR: Color = Color {
    r: 0xFF,
    g: 0xAA,
    b: 0xFF,
    a: 0x10,
};

/// Draw failures tolerated in a row before the loop gives up.
const MAX_CONSECUTIVE_DRAW_FAILURES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// What a single tick decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Stopped,
}

pub struct FrameLoop<E: EventPump, C: Canvas> {
    events: E,
    canvas: C,
    clear_colour: Color,
    state: LoopState,
    draw_failures: u32,
}

impl<E: EventPump, C: Canvas> FrameLoop<E, C> {
    pub fn new(events: E, canvas: C, clear_colour: Color) -> Self {
        Self {
            events,
            canvas,
            clear_colour,
            state: LoopState::Running,
            draw_failures: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    /// Tick until the loop stops or the display degrades.
    pub fn run(&mut self, world: &mut World, schedule: &mut Schedule) -> Result<(), EngineError> {
        while let TickOutcome::Continue = self.tick(world, schedule)? {}
        Ok(())
    }

    /// One iteration: drain events, update, draw.
    pub fn tick(
        &mut self,
        world: &mut World,
        schedule: &mut Schedule,
    ) -> Result<TickOutcome, EngineError> {
        if self.state == LoopState::Stopped {
            return Ok(TickOutcome::Stopped);
        }

        {
            let mut input = world.resource_mut::<InputState>();
            input.begin_tick();
            while let Some(event) = self.events.poll_event() {
                match event {
                    WindowEvent::Quit => {
                        self.state = LoopState::Stopped;
                        return Ok(TickOutcome::Stopped);
                    }
                    WindowEvent::KeyDown(key) => input.note_key_down(key),
                    WindowEvent::Other => {}
                }
            }
        }

        schedule.run(world);
        world.clear_trackers();

        match render_pass(world, &mut self.canvas, self.clear_colour) {
            Ok(()) => {
                self.draw_failures = 0;
            }
            Err(err) => {
                self.draw_failures += 1;
                log::warn!(
                    "draw failed ({}/{}): {}",
                    self.draw_failures,
                    MAX_CONSECUTIVE_DRAW_FAILURES,
                    err
                );
                if self.draw_failures >= MAX_CONSECUTIVE_DRAW_FAILURES {
                    self.state = LoopState::Stopped;
                    return Err(EngineError::RendererDegraded {
                        failures: self.draw_failures,
                        last: err,
                    });
                }
            }
        }

        Ok(TickOutcome::Continue)
    }
}
