//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, advanced by the frame driver
//! - Seeded RNG only
//! - Ordered obstacle sequence (append at tail, prune from the front)
//! - No rendering or platform dependencies

pub mod background;
pub mod collision;
pub mod state;
pub mod tick;

pub use background::{BackgroundColor, background_color, grow_starfield};
pub use collision::{boundary_breach, cleared_obstacle, hits_obstacle};
pub use state::{Bird, GameContext, GameMode, GameSession, Obstacle, RunStats, Star};
pub use tick::{Scale, TickInput, tick};
