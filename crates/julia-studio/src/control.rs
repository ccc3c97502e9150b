use std::ops::RangeInclusive;

use julia_engine::coords::Vec2;

use crate::view::ViewTransform;

pub const SPEED_RANGE: RangeInclusive<f64> = 0.001..=0.05;
pub const SPEED_STEP: f64 = 0.001;
pub const DEFAULT_SPEED: f64 = 0.01;

pub const ITERATIONS_RANGE: RangeInclusive<u32> = 100..=1000;
pub const ITERATIONS_STEP: u32 = 50;
pub const DEFAULT_MAX_ITERATIONS: u32 = 500;

/// Range of the slider-style zoom setter. Wheel zoom is not bound by it.
pub const ZOOM_SLIDER_RANGE: RangeInclusive<f32> = 0.1..=10.0;
pub const ZOOM_SLIDER_STEP: f32 = 0.1;

/// User-adjustable render parameters.
///
/// Owned by the app and mutated only from input handling; the render loop
/// reads it once per frame. Setters clamp to the supported ranges and ignore
/// non-finite values, so the invariants hold whatever the input.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    paused: bool,
    speed: f64,
    max_iterations: u32,
    pub view: ViewTransform,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            paused: false,
            speed: DEFAULT_SPEED,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            view: ViewTransform::default(),
        }
    }
}

impl ControlState {
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Animation time added per frame.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Speed as shown to the user ("1.00x" at the default).
    pub fn speed_multiplier(&self) -> f64 {
        self.speed * 100.0
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn zoom(&self) -> f32 {
        self.view.zoom()
    }

    pub fn offset(&self) -> Vec2 {
        self.view.offset()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_speed(&mut self, speed: f64) -> bool {
        if !speed.is_finite() {
            return false;
        }
        let speed = speed.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end());
        let changed = speed != self.speed;
        self.speed = speed;
        changed
    }

    /// Moves the speed by `steps` slider increments.
    pub fn nudge_speed(&mut self, steps: i32) -> bool {
        // Snap to the step grid so repeated nudges do not accumulate drift.
        let ticks = (self.speed / SPEED_STEP).round() + steps as f64;
        self.set_speed(ticks * SPEED_STEP)
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> bool {
        let n = max_iterations.clamp(*ITERATIONS_RANGE.start(), *ITERATIONS_RANGE.end());
        let changed = n != self.max_iterations;
        self.max_iterations = n;
        changed
    }

    pub fn nudge_max_iterations(&mut self, steps: i32) -> bool {
        let target = self.max_iterations as i64 + steps as i64 * ITERATIONS_STEP as i64;
        self.set_max_iterations(target.clamp(0, u32::MAX as i64) as u32)
    }

    /// Slider-style absolute zoom, clamped to [`ZOOM_SLIDER_RANGE`].
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        self.view
            .set_zoom(zoom.clamp(*ZOOM_SLIDER_RANGE.start(), *ZOOM_SLIDER_RANGE.end()))
    }

    /// Moves the zoom by `steps` slider increments.
    ///
    /// A zoom reached with the wheel outside the slider range snaps back into it.
    pub fn nudge_zoom(&mut self, steps: i32) -> bool {
        let zoom = self.zoom().clamp(*ZOOM_SLIDER_RANGE.start(), *ZOOM_SLIDER_RANGE.end());
        let ticks = (zoom / ZOOM_SLIDER_STEP).round() + steps as f32;
        self.set_zoom(ticks * ZOOM_SLIDER_STEP)
    }

    /// Zoom 1, offset at the origin. Speed, iterations and pause are kept.
    pub fn reset_view(&mut self) -> bool {
        let changed = self.view != ViewTransform::default();
        self.view.reset();
        changed
    }
}
