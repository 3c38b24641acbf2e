//! Host-independent viewport-intersection observation.
//!
//! Mirrors how a browser `IntersectionObserver` reports regions. The root
//! window is the viewport adjusted by the configured margin. A target is
//! reported on its first sample after `observe`, and after that whenever
//! it enters or leaves the window or its visible ratio crosses a threshold.

use royale_protocol::{ObservationBatch, ObserverConfig, Rect, SectionId, SectionObservation, Viewport};

#[derive(Debug, Clone)]
struct Target {
    id: SectionId,
    /// Document-space bounds.
    rect: Rect,
    /// `(threshold index, intersecting)` at the last report.
    last: Option<(usize, bool)>,
}

#[derive(Debug, Clone)]
pub struct ViewportObserver {
    config: ObserverConfig,
    targets: Vec<Target>,
}

impl ViewportObserver {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            targets: Vec::new(),
        }
    }

    /// Start watching a region. Observing an already watched region only
    /// updates its bounds (e.g. after a relayout).
    pub fn observe(&mut self, id: SectionId, rect: Rect) {
        match self.targets.iter_mut().find(|t| t.id == id) {
            Some(target) => target.rect = rect,
            None => self.targets.push(Target {
                id,
                rect,
                last: None,
            }),
        }
    }

    pub fn unobserve(&mut self, id: SectionId) {
        self.targets.retain(|t| t.id != id);
    }

    pub fn disconnect(&mut self) {
        self.targets.clear();
    }

    pub fn is_observing(&self, id: SectionId) -> bool {
        self.targets.iter().any(|t| t.id == id)
    }

    /// The observed window in viewport coordinates.
    pub fn root_rect(&self, viewport: &Viewport) -> Rect {
        let margin = &self.config.root_margin;
        let top = margin.top.resolve(viewport.height);
        let right = margin.right.resolve(viewport.width);
        let bottom = margin.bottom.resolve(viewport.height);
        let left = margin.left.resolve(viewport.width);
        Rect::new(
            -left,
            -top,
            viewport.width + left + right,
            viewport.height + top + bottom,
        )
    }

    /// Compute a single region's observation against `viewport`.
    pub fn measure(&self, id: SectionId, rect: &Rect, viewport: &Viewport) -> SectionObservation {
        let client = viewport.to_client(rect);
        let overlap = client.intersection(&self.root_rect(viewport));
        let is_intersecting = overlap.is_some();
        let ratio = match overlap {
            Some(overlap) if client.area() > 0.0 => (overlap.area() / client.area()).clamp(0.0, 1.0),
            Some(_) => 1.0,
            None => 0.0,
        };
        SectionObservation::new(id, client.y, ratio, is_intersecting)
    }

    /// Sample every target. Returns the observations that are due, in
    /// observation order, or `None` if nothing changed.
    pub fn sample(&mut self, viewport: &Viewport) -> Option<ObservationBatch> {
        let measured: Vec<SectionObservation> = self
            .targets
            .iter()
            .map(|t| self.measure(t.id, &t.rect, viewport))
            .collect();

        let mut batch = ObservationBatch::new();
        for (target, observation) in self.targets.iter_mut().zip(measured) {
            let state = (
                self.config.threshold_index(observation.intersection_ratio),
                observation.is_intersecting,
            );
            if target.last != Some(state) {
                target.last = Some(state);
                batch.push(observation);
            }
        }

        if batch.is_empty() { None } else { Some(batch) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW_W: f64 = 1000.0;
    const VIEW_H: f64 = 1000.0;

    fn viewport(scroll: f64) -> Viewport {
        Viewport::new(0.0, scroll, VIEW_W, VIEW_H)
    }

    fn observer() -> ViewportObserver {
        ViewportObserver::new(ObserverConfig::default())
    }

    #[test]
    fn default_margin_keeps_upper_45_percent() {
        let root = observer().root_rect(&viewport(0.0));
        assert_eq!(root, Rect::new(0.0, 0.0, 1000.0, 450.0));
    }

    #[test]
    fn first_sample_reports_every_target() {
        let mut observer = observer();
        observer.observe(SectionId::Mission, Rect::new(0.0, 100.0, VIEW_W, 200.0));
        observer.observe(SectionId::Vision, Rect::new(0.0, 3000.0, VIEW_W, 200.0));
        let batch = observer.sample(&viewport(0.0)).unwrap();
        assert_eq!(batch.len(), 2);
        assert!(batch[0].is_intersecting);
        assert_eq!(batch[0].intersection_ratio, 1.0);
        assert_eq!(batch[0].top, 100.0);
        assert!(!batch[1].is_intersecting);
    }

    #[test]
    fn unchanged_samples_are_silent() {
        let mut observer = observer();
        observer.observe(SectionId::Mission, Rect::new(0.0, 100.0, VIEW_W, 200.0));
        assert!(observer.sample(&viewport(0.0)).is_some());
        // Still fully inside the window.
        assert!(observer.sample(&viewport(10.0)).is_none());
    }

    #[test]
    fn reports_threshold_crossings() {
        let mut observer = observer();
        // 1000px tall section starting at the viewport top; window is 450px.
        observer.observe(SectionId::Strategy, Rect::new(0.0, 0.0, VIEW_W, 1000.0));
        let first = observer.sample(&viewport(0.0)).unwrap();
        assert!((first[0].intersection_ratio - 0.45).abs() < 1e-9);

        // Ratio stays at 0.45 while the tall section fills the window.
        assert!(observer.sample(&viewport(100.0)).is_none());

        // Only 200px left in the window: ratio 0.2, crossing 0.25.
        let crossed = observer.sample(&viewport(800.0)).unwrap();
        assert!((crossed[0].intersection_ratio - 0.2).abs() < 1e-9);
        assert_eq!(crossed[0].top, -800.0);
    }

    #[test]
    fn reports_leaving_the_window() {
        let mut observer = observer();
        observer.observe(SectionId::Mission, Rect::new(0.0, 0.0, VIEW_W, 300.0));
        observer.sample(&viewport(0.0));
        let left = observer.sample(&viewport(400.0)).unwrap();
        assert!(!left[0].is_intersecting);
        assert_eq!(left[0].intersection_ratio, 0.0);
    }

    #[test]
    fn lower_part_of_viewport_does_not_count() {
        let mut observer = observer();
        // Visible on screen, but below the 45% line.
        observer.observe(SectionId::Vision, Rect::new(0.0, 600.0, VIEW_W, 200.0));
        let batch = observer.sample(&viewport(0.0)).unwrap();
        assert!(!batch[0].is_intersecting);
    }

    #[test]
    fn unobserve_and_disconnect_stop_reports() {
        let mut observer = observer();
        observer.observe(SectionId::Mission, Rect::new(0.0, 0.0, VIEW_W, 300.0));
        observer.observe(SectionId::Vision, Rect::new(0.0, 0.0, VIEW_W, 300.0));
        observer.unobserve(SectionId::Mission);
        assert!(!observer.is_observing(SectionId::Mission));
        let batch = observer.sample(&viewport(0.0)).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].id, SectionId::Vision);

        observer.disconnect();
        assert!(observer.sample(&viewport(0.0)).is_none());
    }

    #[test]
    fn reobserve_updates_bounds_without_resetting() {
        let mut observer = observer();
        observer.observe(SectionId::Mission, Rect::new(0.0, 0.0, VIEW_W, 300.0));
        observer.sample(&viewport(0.0));
        observer.observe(SectionId::Mission, Rect::new(0.0, 20.0, VIEW_W, 300.0));
        assert!(observer.sample(&viewport(0.0)).is_none());
    }
}
