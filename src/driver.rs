//! Frame driver
//!
//! Bridges the simulation to a display-refresh scheduler. The driver owns
//! queued one-shot input and advances exactly one tick per frame; whether
//! another frame gets scheduled is the host's call, made from the returned
//! `FrameOutcome`. The wasm entry re-requests an animation frame only on
//! `Continue`, and tests substitute a manual loop, so no frame is ever
//! scheduled while the session is not Running.

use crate::settings::Settings;
use crate::sim::{GameContext, GameMode, Scale, TickInput, tick};

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stop,
}

/// Cooperative per-frame driver for one `GameContext`
#[derive(Debug, Default)]
pub struct FrameDriver {
    input: TickInput,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an upward impulse for the next tick.
    ///
    /// Input events fire between ticks, never within one; queueing defers
    /// them to the next frame boundary.
    pub fn queue_flap(&mut self) {
        self.input.flap = true;
    }

    /// Reset the session wholesale and enter Running.
    ///
    /// Valid from any mode; a restart mid-run discards the old session and
    /// any queued input.
    pub fn start(&mut self, ctx: &mut GameContext, seed: u64, settings: &Settings, scale: Scale) {
        self.input = TickInput::default();
        ctx.start_run(seed, settings, scale);
    }

    /// Advance one tick, consuming queued one-shot input.
    pub fn frame(&mut self, ctx: &mut GameContext, scale: Scale) -> FrameOutcome {
        let input = std::mem::take(&mut self.input);
        tick(ctx, &input, scale);
        match ctx.session.mode {
            GameMode::Running => FrameOutcome::Continue,
            _ => FrameOutcome::Stop,
        }
    }
}
