//! Per-frame simulation tick
//!
//! One tick advances a Running session by one display frame, in fixed
//! order: background progression, impulse, vertical physics and boundary
//! check, obstacle spawn/advance/scoring/collision, prune. The render pass
//! runs strictly after the tick and never interleaves with it.

use crate::consts::*;

use super::background::grow_starfield;
use super::collision::{boundary_breach, cleared_obstacle, hits_obstacle};
use super::state::{Bird, GameContext, GameMode, GameSession, Obstacle};

/// Per-axis ratio of the display surface to the reference field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Default for Scale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

impl Scale {
    pub fn for_display(width: f32, height: f32) -> Self {
        Self {
            x: width / FIELD_WIDTH,
            y: height / FIELD_HEIGHT,
        }
    }
}

/// Input for a single tick
///
/// The start/restart trigger is not a tick input; it resets the session
/// from the frame driver before any tick runs.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Apply the upward impulse this tick
    pub flap: bool,
}

/// Advance the session by one frame. No-op unless Running.
pub fn tick(ctx: &mut GameContext, input: &TickInput, scale: Scale) {
    if ctx.session.mode != GameMode::Running {
        return;
    }

    grow_starfield(&mut ctx.session, scale);

    if input.flap {
        ctx.session.bird.flap();
    }

    if step_bird(&mut ctx.session.bird, FIELD_HEIGHT * scale.y) {
        ctx.end_run();
        return;
    }

    spawn_if_needed(&mut ctx.session, scale);
    if advance_obstacles(&mut ctx.session, scale) {
        ctx.end_run();
    }
}

/// Advance vertical motion; true if the bird breached the boundary.
///
/// The boundary is checked on both sides of the integration, so a bird
/// that starts the step out of bounds ends the run even when gravity
/// would carry it back inside.
fn step_bird(bird: &mut Bird, field_height: f32) -> bool {
    let breached = boundary_breach(bird, field_height);
    bird.velocity += GRAVITY;
    bird.pos.y += bird.velocity;
    breached || boundary_breach(bird, field_height)
}

/// Append a new obstacle at the right edge once the tail has scrolled past
/// the spawn threshold (or the sequence is empty).
fn spawn_if_needed(session: &mut GameSession, scale: Scale) {
    use rand::Rng;

    let field_width = FIELD_WIDTH * scale.x;
    let due = match session.obstacles.last() {
        None => true,
        Some(tail) => tail.x < field_width - SPAWN_DISTANCE * scale.x,
    };
    if !due {
        return;
    }

    let gap_top = (GAP_TOP_MIN + session.rng.random_range(0.0..GAP_TOP_RANGE)) * scale.y;
    session.obstacles.push(Obstacle {
        x: field_width,
        gap_top,
        gap_height: GAP_HEIGHT * scale.y,
        width: BARRIER_WIDTH * scale.x,
        passed: false,
    });
}

/// Scroll every obstacle left, score newly cleared ones, and prune those
/// fully off the left edge. Returns true on a fatal collision.
fn advance_obstacles(session: &mut GameSession, scale: Scale) -> bool {
    let dx = session.scroll_speed * scale.x;
    let mut fatal = false;

    for obstacle in &mut session.obstacles {
        obstacle.x -= dx;

        if !obstacle.passed && cleared_obstacle(&session.bird, obstacle) {
            obstacle.passed = true;
            session.score += 1;
            // speed_increment is zero when acceleration is disabled
            session.scroll_speed += session.speed_increment;
        }

        if hits_obstacle(&session.bird, obstacle) {
            fatal = true;
        }
    }

    session.obstacles.retain(|o| o.trailing_edge() > 0.0);
    fatal
}
