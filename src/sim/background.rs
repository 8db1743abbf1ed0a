//! Score-driven background progression
//!
//! The backdrop is a pure function of score, ramping from bright sky blue
//! through dark blue to black across three bands. Once the final band is
//! reached the starfield grows by one star per tick until its cap.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

use super::state::{GameSession, Star};
use super::tick::Scale;

/// An HSL background color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundColor {
    pub hue: f32,
    /// Percent
    pub saturation: f32,
    /// Percent
    pub lightness: f32,
}

impl BackgroundColor {
    pub const BLACK: Self = Self {
        hue: 240.0,
        saturation: 100.0,
        lightness: 0.0,
    };

    pub fn is_black(&self) -> bool {
        self.lightness <= 0.0
    }

    /// CSS color string for the canvas fill
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Map a score to its background color.
///
/// - 0..=100: hue 217, lightness 75 down to 50 (bright to darker blue)
/// - 101..=150: hue 240, lightness 50 down to 0 (dark blue to black)
/// - above 150: flat black
pub fn background_color(score: u32) -> BackgroundColor {
    if score <= 100 {
        let progress = score as f32 / 100.0;
        BackgroundColor {
            hue: 217.0,
            saturation: 100.0,
            lightness: 75.0 - 25.0 * progress,
        }
    } else if score <= SPACE_SCORE {
        let progress = (score - 100) as f32 / 50.0;
        BackgroundColor {
            hue: 240.0,
            saturation: 100.0,
            lightness: 50.0 - 50.0 * progress,
        }
    } else {
        BackgroundColor::BLACK
    }
}

/// Add at most one star per tick while in space and below the cap.
///
/// Stars are never removed within a run; the set empties only when the
/// session is replaced.
pub fn grow_starfield(session: &mut GameSession, scale: Scale) {
    if session.score <= SPACE_SCORE || session.stars.len() >= MAX_STARS {
        return;
    }
    let x = session.rng.random_range(0.0..FIELD_WIDTH * scale.x);
    let y = session.rng.random_range(0.0..FIELD_HEIGHT * scale.y);
    let size = session.rng.random_range(0.0..MAX_STAR_SIZE);
    session.stars.push(Star {
        pos: Vec2::new(x, y),
        size,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use proptest::prelude::*;

    #[test]
    fn test_band_endpoints() {
        let start = background_color(0);
        assert_eq!(start.hue, 217.0);
        assert!((start.lightness - 75.0).abs() < 1e-6);

        let mid = background_color(100);
        assert_eq!(mid.hue, 217.0);
        assert!((mid.lightness - 50.0).abs() < 1e-6);

        let dark = background_color(125);
        assert_eq!(dark.hue, 240.0);
        assert!((dark.lightness - 25.0).abs() < 1e-6);

        assert!(background_color(150).is_black());
        assert!(background_color(151).is_black());
        assert!(background_color(10_000).is_black());
    }

    #[test]
    fn test_css_format() {
        assert_eq!(background_color(0).to_css(), "hsl(217, 100%, 75%)");
        assert_eq!(background_color(150).to_css(), "hsl(240, 100%, 0%)");
    }

    #[test]
    fn test_starfield_waits_for_space() {
        let mut session = GameSession::new(5, &Settings::default(), Scale::default());
        session.score = SPACE_SCORE;
        grow_starfield(&mut session, Scale::default());
        assert!(session.stars.is_empty());

        session.score = SPACE_SCORE + 1;
        grow_starfield(&mut session, Scale::default());
        assert_eq!(session.stars.len(), 1);
    }

    #[test]
    fn test_starfield_one_per_tick_up_to_cap() {
        let mut session = GameSession::new(5, &Settings::default(), Scale::default());
        session.score = 200;
        for expected in 1..=MAX_STARS {
            grow_starfield(&mut session, Scale::default());
            assert_eq!(session.stars.len(), expected.min(MAX_STARS));
        }
        // Past the cap the population stays put
        grow_starfield(&mut session, Scale::default());
        assert_eq!(session.stars.len(), MAX_STARS);
    }

    #[test]
    fn test_stars_inside_scaled_field() {
        let scale = Scale { x: 0.5, y: 0.5 };
        let mut session = GameSession::new(9, &Settings::default(), scale);
        session.score = 200;
        for _ in 0..50 {
            grow_starfield(&mut session, scale);
        }
        for star in &session.stars {
            assert!(star.pos.x >= 0.0 && star.pos.x < FIELD_WIDTH * 0.5);
            assert!(star.pos.y >= 0.0 && star.pos.y < FIELD_HEIGHT * 0.5);
            assert!(star.size < MAX_STAR_SIZE);
        }
    }

    proptest! {
        #[test]
        fn prop_lightness_monotone_nonincreasing(score in 0u32..400) {
            let here = background_color(score).lightness;
            let next = background_color(score + 1).lightness;
            prop_assert!(next <= here + 1e-4);
            prop_assert!((0.0..=75.0).contains(&here));
        }
    }
}
