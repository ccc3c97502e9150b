use std::time::{Duration, Instant};

use winit::dpi::PhysicalSize;

/// Quiet period a resize burst must settle for before the surface is reconfigured.
pub const DEFAULT_RESIZE_QUIET: Duration = Duration::from_millis(100);

/// Collapses bursts of resize events into one surface reconfiguration.
///
/// Every event restarts the quiet period and replaces the pending size, so a
/// burst of N events yields exactly one `poll` result carrying the size of
/// the last event.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<(PhysicalSize<u32>, Instant)>,
}

impl ResizeDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Records a resize event observed at `now`.
    pub fn push(&mut self, size: PhysicalSize<u32>, now: Instant) {
        self.pending = Some((size, now));
    }

    /// Returns the size to apply once the quiet period has elapsed.
    ///
    /// A burst that settles on a zero-sized window is dropped: the previous
    /// surface configuration stays in place.
    pub fn poll(&mut self, now: Instant) -> Option<PhysicalSize<u32>> {
        let (size, at) = self.pending?;
        if now.saturating_duration_since(at) < self.quiet {
            return None;
        }

        self.pending = None;
        if size.width == 0 || size.height == 0 {
            log::debug!("dropping zero-size resize");
            return None;
        }
        Some(size)
    }

    /// Instant at which the pending resize becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, at)| at + self.quiet)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_QUIET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: u32, h: u32) -> PhysicalSize<u32> {
        PhysicalSize::new(w, h)
    }

    #[test]
    fn burst_yields_single_reconfigure_with_last_size() {
        let mut d = ResizeDebouncer::default();
        let t0 = Instant::now();

        let mut applied = Vec::new();
        for i in 0..10u32 {
            let now = t0 + Duration::from_millis(10 * i as u64);
            d.push(size(800 + i, 600 + i), now);
            applied.extend(d.poll(now));
        }

        // Last event at t0 + 90ms; poll well past the quiet period.
        for ms in [120, 189, 190, 250, 1000] {
            applied.extend(d.poll(t0 + Duration::from_millis(ms)));
        }

        assert_eq!(applied, vec![size(809, 609)]);
    }

    #[test]
    fn nothing_applied_inside_quiet_period() {
        let mut d = ResizeDebouncer::default();
        let t0 = Instant::now();
        d.push(size(640, 480), t0);
        assert_eq!(d.poll(t0 + Duration::from_millis(99)), None);
        assert!(d.is_pending());
        assert_eq!(d.poll(t0 + Duration::from_millis(100)), Some(size(640, 480)));
        assert!(!d.is_pending());
    }

    #[test]
    fn zero_size_burst_is_skipped() {
        let mut d = ResizeDebouncer::default();
        let t0 = Instant::now();
        d.push(size(800, 600), t0);
        d.push(size(0, 600), t0 + Duration::from_millis(5));
        assert_eq!(d.poll(t0 + Duration::from_secs(1)), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn deadline_tracks_last_event() {
        let mut d = ResizeDebouncer::new(Duration::from_millis(50));
        let t0 = Instant::now();
        assert_eq!(d.deadline(), None);
        d.push(size(1, 1), t0);
        d.push(size(2, 2), t0 + Duration::from_millis(30));
        assert_eq!(d.deadline(), Some(t0 + Duration::from_millis(80)));
    }
}
