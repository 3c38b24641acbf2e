//! Page composition: the three trackers behind one event-driven facade.

use royale_protocol::{PageView, SectionId, SectionObservation};

use crate::config::SiteConfig;
use crate::effects::{FragmentStore, ScrollLock};
use crate::trackers::{ActiveSectionTracker, MobileMenuController, ScrollElevationTracker};

/// Which parts of the [`PageView`] an event changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellUpdate {
    pub elevation: bool,
    pub menu: bool,
    pub active: bool,
}

impl ShellUpdate {
    pub fn is_empty(&self) -> bool {
        !(self.elevation || self.menu || self.active)
    }

    pub fn merge(self, other: ShellUpdate) -> ShellUpdate {
        ShellUpdate {
            elevation: self.elevation || other.elevation,
            menu: self.menu || other.menu,
            active: self.active || other.active,
        }
    }
}

/// Interactive state of the landing page.
///
/// Hosts forward scroll offsets, observation batches and clicks; renderers
/// read [`PageShell::view`].
#[derive(Debug)]
pub struct PageShell<L: ScrollLock, F: FragmentStore> {
    elevation: ScrollElevationTracker,
    menu: MobileMenuController<L>,
    sections: ActiveSectionTracker<F>,
}

impl<L: ScrollLock, F: FragmentStore> PageShell<L, F> {
    /// `located` lists the sections the host found on the page.
    pub fn new(config: &SiteConfig, located: &[SectionId], lock: L, fragments: F) -> Self {
        Self {
            elevation: ScrollElevationTracker::new(config.elevation_threshold),
            menu: MobileMenuController::new(lock),
            sections: ActiveSectionTracker::mount(located, config.section_cutoff(), fragments),
        }
    }

    pub fn elevated(&self) -> bool {
        self.elevation.elevated()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn active(&self) -> Option<SectionId> {
        self.sections.active()
    }

    pub fn fragments(&self) -> &F {
        self.sections.fragments()
    }

    pub fn fragments_mut(&mut self) -> &mut F {
        self.sections.fragments_mut()
    }

    pub fn scroll_lock(&self) -> &L {
        self.menu.scroll_lock()
    }

    pub fn on_scroll(&mut self, offset: f64) -> ShellUpdate {
        ShellUpdate {
            elevation: self.elevation.handle_scroll(offset),
            ..ShellUpdate::default()
        }
    }

    pub fn on_observations(&mut self, batch: &[SectionObservation]) -> ShellUpdate {
        ShellUpdate {
            active: self.sections.handle_batch(batch).is_some(),
            ..ShellUpdate::default()
        }
    }

    /// The menu button.
    pub fn toggle_menu(&mut self) -> ShellUpdate {
        self.menu.toggle();
        ShellUpdate {
            menu: true,
            ..ShellUpdate::default()
        }
    }

    pub fn close_menu(&mut self) -> ShellUpdate {
        ShellUpdate {
            menu: self.menu.close(),
            ..ShellUpdate::default()
        }
    }

    /// A navigation link was followed. The anchor itself scrolls the page;
    /// the shell only has to dismiss the mobile panel.
    pub fn select_nav(&mut self, id: SectionId) -> ShellUpdate {
        tracing::debug!(section = %id, "nav link selected");
        self.close_menu()
    }

    /// The "Enter" call to action.
    pub fn enter(&mut self) -> ShellUpdate {
        self.close_menu()
    }

    pub fn view(&self) -> PageView {
        PageView::new(self.elevated(), self.menu_open(), self.active())
    }

    /// Stop section tracking and release the scroll lock. The last active
    /// section stays in the view.
    pub fn teardown(&mut self) -> ShellUpdate {
        self.sections.teardown();
        self.close_menu()
    }
}
