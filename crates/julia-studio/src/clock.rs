use std::f64::consts::PI;

use crate::control::ControlState;

/// Period of the animated Julia constant.
///
/// `c(t)` depends on `0.15·t` and `0.05·t` only through sin/cos, and both
/// complete whole turns after `40π`.
pub const CONSTANT_PERIOD: f64 = 40.0 * PI;

/// Animation time, advanced once per frame by the current speed.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    elapsed: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances by `control.speed()` unless paused. Returns whether time moved.
    pub fn tick(&mut self, control: &ControlState) -> bool {
        if control.paused() {
            return false;
        }
        self.elapsed += control.speed();
        true
    }

    /// Total animation time; never decreases.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Time handed to the kernel: wrapped to one period, then narrowed.
    pub fn shader_time(&self) -> f32 {
        self.elapsed.rem_euclid(CONSTANT_PERIOD) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use julia_engine::render::julia::kernel::{julia_constant, JULIA_RADIUS};

    #[test]
    fn ticks_accumulate_speed() {
        let mut control = ControlState::default();
        control.set_speed(0.02);
        let mut clock = AnimationClock::new();

        for _ in 0..250 {
            assert!(clock.tick(&control));
        }
        assert!((clock.elapsed() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn paused_clock_stands_still() {
        let mut control = ControlState::default();
        let mut clock = AnimationClock::new();
        clock.tick(&control);
        let before = clock.elapsed();

        control.set_paused(true);
        for _ in 0..10 {
            assert!(!clock.tick(&control));
        }
        assert_eq!(clock.elapsed(), before);

        control.set_paused(false);
        clock.tick(&control);
        assert!(clock.elapsed() > before);
    }

    #[test]
    fn wrapped_time_keeps_the_constant_exact_on_long_runs() {
        // About 3 years of frames at 0.05 per frame and 60 fps.
        let clock = AnimationClock { elapsed: 2.8e8 + 0.37 };
        let t = clock.elapsed();
        let reference = (
            JULIA_RADIUS as f64 * (0.15 * t + (0.05 * t).sin() * 0.2).cos(),
            JULIA_RADIUS as f64 * (0.15 * t + (0.05 * t).cos() * 0.2).sin(),
        );

        let c = julia_constant(clock.shader_time());
        assert!((c.x as f64 - reference.0).abs() < 1e-4, "{c:?} vs {reference:?}");
        assert!((c.y as f64 - reference.1).abs() < 1e-4, "{c:?} vs {reference:?}");
    }

    #[test]
    fn shader_time_stays_within_one_period() {
        let clock = AnimationClock { elapsed: 1.0e9 };
        let t = clock.shader_time();
        assert!((0.0..=CONSTANT_PERIOD as f32).contains(&t));
    }
}
