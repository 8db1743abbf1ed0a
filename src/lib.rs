//! Flappy Bean - a gravity-and-gaps arcade reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collision, scoring)
//! - `driver`: Frame driver bridging the sim to a display-refresh scheduler
//! - `render`: Canvas2D render pass (wasm only)
//! - `settings`: Difficulty-derived run parameters

pub mod driver;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;
pub mod sim;

pub use driver::{FrameDriver, FrameOutcome};
pub use settings::Settings;

/// Game configuration constants
///
/// Gameplay geometry is expressed in a logical 1600x900 field. Per-axis
/// scale factors (actual display dimension / reference dimension) are
/// applied to spawn geometry and scroll speed so the game feels the same
/// at any display size.
pub mod consts {
    /// Reference field width (logical units)
    pub const FIELD_WIDTH: f32 = 1600.0;
    /// Reference field height (logical units)
    pub const FIELD_HEIGHT: f32 = 900.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity set by an upward impulse (flap)
    pub const FLAP_VELOCITY: f32 = -12.0;

    /// Bird defaults
    pub const BIRD_RADIUS: f32 = 20.0;
    pub const BIRD_START_X: f32 = FIELD_WIDTH / 10.0;
    pub const BIRD_START_Y: f32 = FIELD_HEIGHT / 2.0;

    /// Horizontal distance the tail obstacle must clear before the next spawns
    pub const SPAWN_DISTANCE: f32 = 300.0;
    /// Width of each barrier pair
    pub const BARRIER_WIDTH: f32 = 50.0;
    /// Vertical opening between the top and bottom barriers
    pub const GAP_HEIGHT: f32 = FIELD_HEIGHT / 2.5;
    /// Gap top offset is uniform in [GAP_TOP_MIN, GAP_TOP_MIN + GAP_TOP_RANGE)
    pub const GAP_TOP_MIN: f32 = 50.0;
    pub const GAP_TOP_RANGE: f32 = FIELD_HEIGHT / 3.0;

    /// Score past which the background reaches space and stars appear
    pub const SPACE_SCORE: u32 = 150;
    /// Starfield population ceiling
    pub const MAX_STARS: usize = 100;
    /// Star sizes are uniform in [0, MAX_STAR_SIZE)
    pub const MAX_STAR_SIZE: f32 = 1.5;
}
