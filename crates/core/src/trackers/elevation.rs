use tracing::debug;

use crate::config::DEFAULT_ELEVATION_THRESHOLD;

/// Tracks whether the page has scrolled far enough to elevate the nav bar.
#[derive(Debug, Clone)]
pub struct ScrollElevationTracker {
    threshold: f64,
    elevated: bool,
}

impl Default for ScrollElevationTracker {
    fn default() -> Self {
        Self::new(DEFAULT_ELEVATION_THRESHOLD)
    }
}

impl ScrollElevationTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            elevated: false,
        }
    }

    pub fn elevated(&self) -> bool {
        self.elevated
    }

    /// Record a vertical scroll offset. Returns `true` if the flag flipped.
    pub fn handle_scroll(&mut self, offset: f64) -> bool {
        let elevated = offset > self.threshold;
        if elevated == self.elevated {
            return false;
        }
        self.elevated = elevated;
        debug!(offset, elevated, "nav elevation changed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevated_strictly_above_threshold() {
        let mut tracker = ScrollElevationTracker::default();
        for (offset, expected) in [(0.0, false), (50.0, false), (51.0, true), (1000.0, true)] {
            tracker.handle_scroll(offset);
            assert_eq!(tracker.elevated(), expected, "offset {offset}");
        }
    }

    #[test]
    fn reports_only_transitions() {
        let mut tracker = ScrollElevationTracker::new(10.0);
        assert!(!tracker.handle_scroll(5.0));
        assert!(tracker.handle_scroll(11.0));
        assert!(!tracker.handle_scroll(400.0));
        assert!(tracker.handle_scroll(10.0));
        assert!(!tracker.elevated());
    }
}
