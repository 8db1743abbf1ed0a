//! Game state and core simulation types
//!
//! A `GameContext` is constructed once per page load. Its `session` is
//! replaced wholesale on every (re)start; its `stats` outlive resets.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::settings::Settings;

use super::tick::Scale;

/// Current mode of the state machine
///
/// `Idle` is observed only before the first start; there is no transition
/// back into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Idle,
    Running,
    Ended,
}

/// The falling actor
#[derive(Debug, Clone)]
pub struct Bird {
    /// Position; `pos.x` is fixed for the whole run
    pub pos: Vec2,
    /// Vertical velocity (positive is down)
    pub velocity: f32,
    /// Collision radius, constant through a run
    pub radius: f32,
}

impl Bird {
    /// Bird at its start-of-run position, at rest
    pub fn new(scale: Scale) -> Self {
        Self {
            pos: Vec2::new(BIRD_START_X * scale.x, BIRD_START_Y * scale.y),
            velocity: 0.0,
            radius: BIRD_RADIUS,
        }
    }

    /// Leading (right) edge, the one that crosses barriers
    pub fn leading_edge(&self) -> f32 {
        self.pos.x + self.radius
    }

    /// Set the upward impulse velocity
    pub fn flap(&mut self) {
        self.velocity = FLAP_VELOCITY;
    }
}

/// A vertical barrier pair with one open gap
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top of the gap (bottom edge of the upper barrier)
    pub gap_top: f32,
    /// Vertical extent of the gap
    pub gap_height: f32,
    /// Barrier width
    pub width: f32,
    /// Set exactly once, when the bird's leading edge clears the trailing edge
    pub passed: bool,
}

impl Obstacle {
    /// Trailing (right) edge
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom of the gap (top edge of the lower barrier)
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_height
    }
}

/// A cosmetic background star
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
}

/// Complete state of a single run, replaced wholesale on reset
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving gap placement and star positions
    pub rng: Pcg32,
    pub bird: Bird,
    /// Ordered obstacle sequence; new obstacles append at the tail
    pub obstacles: Vec<Obstacle>,
    /// Starfield, populated once the background reaches space
    pub stars: Vec<Star>,
    pub score: u32,
    /// Horizontal scroll speed, frozen from the difficulty input at start
    pub scroll_speed: f32,
    /// Added to `scroll_speed` on each pass when acceleration is enabled
    pub speed_increment: f32,
    pub mode: GameMode,
}

impl GameSession {
    /// Fresh session in `Idle` with difficulty-derived speeds captured
    pub fn new(seed: u64, settings: &Settings, scale: Scale) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bird: Bird::new(scale),
            obstacles: Vec::new(),
            stars: Vec::new(),
            score: 0,
            scroll_speed: settings.scroll_speed(),
            speed_increment: settings.speed_increment(),
            mode: GameMode::Idle,
        }
    }
}

/// Scores that survive session resets; `high_score` only ever increases
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    pub last_score: u32,
    pub high_score: u32,
}

impl RunStats {
    /// Raise the high score to `score` if it is higher.
    ///
    /// Called from the score-display step every frame, so the high score is
    /// ratcheted continuously during play rather than only at game over.
    pub fn ratchet(&mut self, score: u32) {
        if score > self.high_score {
            self.high_score = score;
        }
    }
}

/// Process-scoped game context: the current session plus persistent stats
#[derive(Debug, Clone)]
pub struct GameContext {
    pub session: GameSession,
    pub stats: RunStats,
}

impl GameContext {
    /// Context in `Idle`, waiting for the first start
    pub fn new() -> Self {
        Self {
            session: GameSession::new(0, &Settings::default(), Scale::default()),
            stats: RunStats::default(),
        }
    }

    /// Replace the session and enter `Running`.
    ///
    /// Valid from any mode: restarting mid-run discards the old session
    /// entirely rather than accumulating state from it.
    pub fn start_run(&mut self, seed: u64, settings: &Settings, scale: Scale) {
        self.session = GameSession::new(seed, settings, scale);
        self.session.mode = GameMode::Running;
        log::info!(
            "run started (seed {}, speed {:.2}, increment {:.3})",
            seed,
            self.session.scroll_speed,
            self.session.speed_increment
        );
    }

    /// Enter `Ended` and capture the last score once.
    pub fn end_run(&mut self) {
        self.session.mode = GameMode::Ended;
        self.stats.last_score = self.session.score;
        log::info!("run ended with score {}", self.session.score);
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_idle() {
        let ctx = GameContext::new();
        assert_eq!(ctx.session.mode, GameMode::Idle);
        assert_eq!(ctx.session.score, 0);
        assert!(ctx.session.obstacles.is_empty());
        assert!(ctx.session.stars.is_empty());
    }

    #[test]
    fn test_start_run_captures_difficulty() {
        let mut ctx = GameContext::new();
        let settings = Settings::new(0.5, true);
        ctx.start_run(7, &settings, Scale::default());

        assert_eq!(ctx.session.mode, GameMode::Running);
        assert!((ctx.session.scroll_speed - 3.0).abs() < 1e-6);
        assert!((ctx.session.speed_increment - 0.015).abs() < 1e-6);
    }

    #[test]
    fn test_end_run_captures_last_score_once() {
        let mut ctx = GameContext::new();
        ctx.start_run(1, &Settings::default(), Scale::default());
        ctx.session.score = 42;
        ctx.end_run();

        assert_eq!(ctx.session.mode, GameMode::Ended);
        assert_eq!(ctx.stats.last_score, 42);

        // A new run leaves last_score from the previous run intact
        ctx.start_run(2, &Settings::default(), Scale::default());
        assert_eq!(ctx.stats.last_score, 42);
        assert_eq!(ctx.session.score, 0);
    }

    #[test]
    fn test_stats_survive_reset() {
        let mut ctx = GameContext::new();
        ctx.stats.ratchet(99);
        ctx.start_run(3, &Settings::default(), Scale::default());
        assert_eq!(ctx.stats.high_score, 99);
    }

    #[test]
    fn test_ratchet_never_decreases() {
        let mut stats = RunStats::default();
        stats.ratchet(10);
        stats.ratchet(5);
        assert_eq!(stats.high_score, 10);
        stats.ratchet(11);
        assert_eq!(stats.high_score, 11);
    }

    #[test]
    fn test_bird_start_position_scales() {
        let bird = Bird::new(Scale { x: 0.5, y: 2.0 });
        assert!((bird.pos.x - 80.0).abs() < 1e-6);
        assert!((bird.pos.y - 900.0).abs() < 1e-6);
        assert_eq!(bird.velocity, 0.0);
    }
}
