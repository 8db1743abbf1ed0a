//! Difficulty settings
//!
//! Read from the slider and toggle while no run is active, clamped, and
//! captured into the session at start. A run never sees a settings change.

/// Player-facing difficulty inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Difficulty in [0, 1]; out-of-range input is clamped, not rejected
    pub difficulty: f32,
    /// Whether passes accelerate the scroll speed
    pub accelerate: bool,
}

impl Settings {
    pub fn new(difficulty: f32, accelerate: bool) -> Self {
        Self {
            difficulty: difficulty.clamp(0.0, 1.0),
            accelerate,
        }
    }

    /// Base horizontal scroll speed for a run
    pub fn scroll_speed(&self) -> f32 {
        2.0 + 2.0 * self.difficulty
    }

    /// Speed added per obstacle passed; zero when acceleration is off
    pub fn speed_increment(&self) -> f32 {
        if self.accelerate {
            0.01 + 0.01 * self.difficulty
        } else {
            0.0
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(0.0, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_speed_derivation() {
        assert_eq!(Settings::new(0.0, false).scroll_speed(), 2.0);
        assert_eq!(Settings::new(1.0, false).scroll_speed(), 4.0);
        assert!((Settings::new(0.5, true).speed_increment() - 0.015).abs() < 1e-6);
        assert_eq!(Settings::new(0.5, false).speed_increment(), 0.0);
    }

    #[test]
    fn test_out_of_range_difficulty_is_clamped() {
        assert_eq!(Settings::new(-3.0, false).difficulty, 0.0);
        assert_eq!(Settings::new(7.5, false).difficulty, 1.0);
    }

    proptest! {
        #[test]
        fn prop_derived_speeds_in_range(difficulty in -10.0f32..10.0, accelerate: bool) {
            let settings = Settings::new(difficulty, accelerate);
            prop_assert!((0.0..=1.0).contains(&settings.difficulty));
            prop_assert!((2.0..=4.0).contains(&settings.scroll_speed()));
            prop_assert!((0.0..=0.02).contains(&settings.speed_increment()));
        }
    }
}
