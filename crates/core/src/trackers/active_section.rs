use royale_protocol::{SectionId, SectionObservation};
use tracing::{debug, info, warn};

use crate::effects::FragmentStore;

/// Which section the tracker currently considers active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// No section has been selected yet.
    Inactive,
    Active(SectionId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Observing,
    /// None of the sections were found on the page; batches are ignored.
    Disabled,
    TornDown,
}

/// Pick the section that should be highlighted for one observation batch.
///
/// Among intersecting observations, prefer the one whose top edge is
/// closest to the viewport top without having scrolled more than `cutoff`
/// past it (`cutoff` is negative). When every visible section is already
/// past the cutoff, fall back to the one with the largest visible ratio.
/// Ties in either tier go to the section that comes first on the page.
///
/// Returns `None` if nothing in the batch is intersecting.
pub fn select_section<'a, I>(observations: I, cutoff: f64) -> Option<SectionId>
where
    I: IntoIterator<Item = &'a SectionObservation>,
{
    let visible: Vec<&SectionObservation> = observations
        .into_iter()
        .filter(|o| o.is_intersecting)
        .collect();

    visible
        .iter()
        .filter(|o| o.top >= cutoff)
        .min_by(|a, b| a.top.total_cmp(&b.top).then(a.id.cmp(&b.id)))
        .or_else(|| {
            visible.iter().max_by(|a, b| {
                a.intersection_ratio
                    .total_cmp(&b.intersection_ratio)
                    .then(b.id.cmp(&a.id))
            })
        })
        .map(|o| o.id)
}

/// Tracks the active page section from viewport-observation batches and
/// mirrors it into the URL fragment.
#[derive(Debug)]
pub struct ActiveSectionTracker<F: FragmentStore> {
    tracked: Vec<SectionId>,
    cutoff: f64,
    state: TrackerState,
    lifecycle: Lifecycle,
    fragments: F,
}

impl<F: FragmentStore> ActiveSectionTracker<F> {
    /// Start tracking the sections that were found on the page.
    ///
    /// `cutoff` is the (negative) top offset past which a section loses
    /// priority, see [`SiteConfig::section_cutoff`](crate::SiteConfig::section_cutoff).
    pub fn mount(located: &[SectionId], cutoff: f64, fragments: F) -> Self {
        let mut tracked = located.to_vec();
        tracked.sort_unstable();
        tracked.dedup();

        let lifecycle = if tracked.is_empty() {
            info!("no sections located, active-section tracking disabled");
            Lifecycle::Disabled
        } else {
            info!(sections = tracked.len(), "active-section tracking mounted");
            Lifecycle::Observing
        };

        Self {
            tracked,
            cutoff,
            state: TrackerState::Inactive,
            lifecycle,
            fragments,
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn active(&self) -> Option<SectionId> {
        match self.state {
            TrackerState::Inactive => None,
            TrackerState::Active(id) => Some(id),
        }
    }

    /// Whether batches are still being processed.
    pub fn is_observing(&self) -> bool {
        self.lifecycle == Lifecycle::Observing
    }

    pub fn fragments(&self) -> &F {
        &self.fragments
    }

    pub fn fragments_mut(&mut self) -> &mut F {
        &mut self.fragments
    }

    /// Process one observation batch. Returns the newly active section if
    /// it changed.
    pub fn handle_batch(&mut self, batch: &[SectionObservation]) -> Option<SectionId> {
        if !self.is_observing() {
            return None;
        }

        let tracked = &self.tracked;
        let winner = select_section(
            batch.iter().filter(|o| tracked.contains(&o.id)),
            self.cutoff,
        )?;
        if self.active() == Some(winner) {
            return None;
        }

        debug!(from = ?self.active(), to = %winner, "active section changed");
        self.state = TrackerState::Active(winner);
        self.sync_fragment(winner);
        Some(winner)
    }

    /// Stop observing. The last active section stays frozen.
    pub fn teardown(&mut self) {
        if self.lifecycle != Lifecycle::TornDown {
            info!(active = ?self.active(), "active-section tracking torn down");
            self.lifecycle = Lifecycle::TornDown;
        }
    }

    fn sync_fragment(&mut self, id: SectionId) {
        let wanted = id.as_str();
        match self.fragments.current() {
            Ok(current) if current == wanted => return,
            Ok(_) => {}
            Err(e) => warn!(error = %e, "could not read URL fragment"),
        }
        if let Err(e) = self.fragments.replace(wanted) {
            warn!(error = %e, fragment = wanted, "could not replace URL fragment");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{EffectError, MemoryFragmentStore};
    use proptest::prelude::*;

    const CUTOFF: f64 = -20.0;

    fn obs(id: SectionId, top: f64, ratio: f64) -> SectionObservation {
        SectionObservation::new(id, top, ratio, true)
    }

    fn hidden(id: SectionId) -> SectionObservation {
        SectionObservation::new(id, 900.0, 0.0, false)
    }

    fn tracker() -> ActiveSectionTracker<MemoryFragmentStore> {
        ActiveSectionTracker::mount(&SectionId::ALL, CUTOFF, MemoryFragmentStore::default())
    }

    #[test]
    fn prefers_section_nearest_top_within_cutoff() {
        let batch = [
            obs(SectionId::Intelligence, -40.0, 0.9),
            obs(SectionId::Strategy, -10.0, 0.2),
        ];
        assert_eq!(select_section(&batch, -20.0), Some(SectionId::Strategy));
    }

    #[test]
    fn smallest_top_wins_among_candidates() {
        let batch = [
            obs(SectionId::Vision, 300.0, 0.5),
            obs(SectionId::Mission, 0.0, 0.1),
            obs(SectionId::Strategy, 120.0, 0.9),
        ];
        assert_eq!(select_section(&batch, -20.0), Some(SectionId::Mission));
    }

    #[test]
    fn cutoff_is_inclusive() {
        let batch = [
            obs(SectionId::Mission, -20.0, 0.1),
            obs(SectionId::Intelligence, 200.0, 0.9),
        ];
        assert_eq!(select_section(&batch, -20.0), Some(SectionId::Mission));
    }

    #[test]
    fn falls_back_to_largest_ratio() {
        let batch = [
            obs(SectionId::Mission, -500.0, 0.3),
            obs(SectionId::Intelligence, -300.0, 0.6),
            obs(SectionId::Strategy, -100.0, 0.9),
        ];
        assert_eq!(select_section(&batch, -20.0), Some(SectionId::Strategy));
    }

    #[test]
    fn ties_go_to_first_section_on_page() {
        let by_ratio = [
            obs(SectionId::Vision, -300.0, 0.5),
            obs(SectionId::Intelligence, -300.0, 0.5),
        ];
        assert_eq!(select_section(&by_ratio, -20.0), Some(SectionId::Intelligence));

        let by_top = [
            obs(SectionId::Strategy, 10.0, 0.2),
            obs(SectionId::Mission, 10.0, 0.2),
        ];
        assert_eq!(select_section(&by_top, -20.0), Some(SectionId::Mission));
    }

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let batch = [hidden(SectionId::Mission), hidden(SectionId::Vision)];
        assert_eq!(select_section(&batch, -20.0), None);
    }

    #[test]
    fn empty_batch_keeps_previous_section() {
        let mut tracker = tracker();
        tracker.handle_batch(&[obs(SectionId::Strategy, 0.0, 0.5)]);
        assert_eq!(tracker.handle_batch(&[]), None);
        assert_eq!(tracker.handle_batch(&[hidden(SectionId::Strategy)]), None);
        assert_eq!(tracker.active(), Some(SectionId::Strategy));
    }

    #[test]
    fn transitions_from_inactive_to_active() {
        let mut tracker = tracker();
        assert_eq!(tracker.state(), TrackerState::Inactive);
        let changed = tracker.handle_batch(&[obs(SectionId::Mission, 12.0, 0.4)]);
        assert_eq!(changed, Some(SectionId::Mission));
        assert_eq!(tracker.state(), TrackerState::Active(SectionId::Mission));
        assert_eq!(tracker.handle_batch(&[obs(SectionId::Mission, 5.0, 0.5)]), None);
    }

    #[test]
    fn change_replaces_fragment_without_history_entry() {
        let mut tracker = tracker();
        tracker.handle_batch(&[obs(SectionId::Intelligence, 0.0, 0.5)]);
        let store = tracker.fragments();
        assert_eq!(store.fragment(), "intelligence");
        assert_eq!(store.replacements(), 1);
        assert_eq!(store.history_len(), 1);
    }

    #[test]
    fn matching_fragment_is_not_rewritten() {
        let mut tracker = ActiveSectionTracker::mount(
            &SectionId::ALL,
            CUTOFF,
            MemoryFragmentStore::new("#vision"),
        );
        assert_eq!(
            tracker.handle_batch(&[obs(SectionId::Vision, 0.0, 0.5)]),
            Some(SectionId::Vision)
        );
        assert_eq!(tracker.fragments().replacements(), 0);
        assert_eq!(tracker.fragments().history_len(), 1);
    }

    #[test]
    fn no_located_sections_disables_tracking() {
        let mut tracker = ActiveSectionTracker::mount(&[], CUTOFF, MemoryFragmentStore::default());
        assert!(!tracker.is_observing());
        assert_eq!(tracker.handle_batch(&[obs(SectionId::Mission, 0.0, 1.0)]), None);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn ignores_sections_that_were_not_located() {
        let mut tracker = ActiveSectionTracker::mount(
            &[SectionId::Mission, SectionId::Vision],
            CUTOFF,
            MemoryFragmentStore::default(),
        );
        let batch = [
            obs(SectionId::Strategy, 0.0, 1.0),
            obs(SectionId::Vision, 200.0, 0.1),
        ];
        assert_eq!(tracker.handle_batch(&batch), Some(SectionId::Vision));
    }

    #[test]
    fn teardown_freezes_last_section() {
        let mut tracker = tracker();
        tracker.handle_batch(&[obs(SectionId::Strategy, 0.0, 0.5)]);
        tracker.teardown();
        assert_eq!(tracker.handle_batch(&[obs(SectionId::Vision, 0.0, 0.5)]), None);
        assert_eq!(tracker.active(), Some(SectionId::Strategy));
        assert!(!tracker.is_observing());
    }

    struct FailingStore;

    impl FragmentStore for FailingStore {
        fn current(&self) -> Result<String, EffectError> {
            Err(EffectError::new("location.hash", "blocked"))
        }

        fn replace(&mut self, _fragment: &str) -> Result<(), EffectError> {
            Err(EffectError::new("history.replaceState", "blocked"))
        }
    }

    #[test]
    fn fragment_failures_do_not_block_state_change() {
        let mut tracker = ActiveSectionTracker::mount(&SectionId::ALL, CUTOFF, FailingStore);
        assert_eq!(
            tracker.handle_batch(&[obs(SectionId::Mission, 0.0, 0.5)]),
            Some(SectionId::Mission)
        );
        assert_eq!(tracker.active(), Some(SectionId::Mission));
    }

    fn arb_observation() -> impl Strategy<Value = SectionObservation> {
        (0usize..4, -2000.0f64..2000.0, 0.0f64..=1.0, any::<bool>()).prop_map(
            |(idx, top, ratio, intersecting)| {
                SectionObservation::new(SectionId::ALL[idx], top, ratio, intersecting)
            },
        )
    }

    proptest! {
        #[test]
        fn only_selects_intersecting_ids_from_latest_batch(
            batches in prop::collection::vec(prop::collection::vec(arb_observation(), 0..6), 1..12),
        ) {
            let mut tracker = tracker();
            for batch in &batches {
                let before = tracker.active();
                match tracker.handle_batch(batch) {
                    Some(id) => {
                        prop_assert!(batch.iter().any(|o| o.id == id && o.is_intersecting));
                        prop_assert_eq!(tracker.active(), Some(id));
                    }
                    None => {
                        prop_assert_eq!(tracker.active(), before);
                    }
                }
            }
        }

        #[test]
        fn batches_without_intersections_are_no_ops(
            seed in prop::collection::vec(arb_observation(), 1..6),
            ids in prop::collection::vec(0usize..4, 0..6),
        ) {
            let mut tracker = tracker();
            tracker.handle_batch(&seed);
            let before = tracker.active();
            let replacements = tracker.fragments().replacements();
            let batch: Vec<_> = ids.into_iter().map(|i| hidden(SectionId::ALL[i])).collect();
            prop_assert_eq!(tracker.handle_batch(&batch), None);
            prop_assert_eq!(tracker.active(), before);
            prop_assert_eq!(tracker.fragments().replacements(), replacements);
        }

        #[test]
        fn history_never_grows(
            batches in prop::collection::vec(prop::collection::vec(arb_observation(), 0..6), 1..12),
        ) {
            let mut tracker = tracker();
            for batch in &batches {
                tracker.handle_batch(batch);
            }
            prop_assert_eq!(tracker.fragments().history_len(), 1);
            if let Some(id) = tracker.active() {
                prop_assert_eq!(tracker.fragments().fragment(), id.as_str());
            }
        }
    }
}
