use std::time::{Duration, Instant};

/// Observed frames-per-second over a fixed sample window.
///
/// Frames are counted until the window elapses; the rate is then published
/// and the count restarts from the publishing frame.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: Duration,
    window_start: Option<Instant>,
    frames: u32,
    fps: Option<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::with_window(Duration::from_secs(1))
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            window_start: None,
            frames: 0,
            fps: None,
        }
    }

    /// Records one frame presented at `now`.
    ///
    /// Returns the fresh sample when this frame closes a window.
    pub fn record(&mut self, now: Instant) -> Option<f64> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return None;
        };

        self.frames += 1;
        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.window {
            return None;
        }

        let fps = self.frames as f64 / elapsed.as_secs_f64();
        self.fps = Some(fps);
        self.frames = 0;
        self.window_start = Some(now);
        Some(fps)
    }

    /// Last published sample, if a full window has elapsed.
    pub fn fps(&self) -> Option<f64> {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
