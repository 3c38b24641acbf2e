use tracing::debug;

use crate::effects::ScrollLock;

/// Open/closed state of the mobile navigation panel.
///
/// The scroll lock is held exactly while the panel is open, and released
/// on drop if the controller goes away while open.
#[derive(Debug)]
pub struct MobileMenuController<L: ScrollLock> {
    open: bool,
    lock: L,
}

impl<L: ScrollLock> MobileMenuController<L> {
    pub fn new(lock: L) -> Self {
        Self { open: false, lock }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scroll_lock(&self) -> &L {
        &self.lock
    }

    /// Flip the panel. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        let open = !self.open;
        self.set_open(open);
        open
    }

    /// Force the panel closed. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        self.set_open(false)
    }

    fn set_open(&mut self, open: bool) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        if open {
            self.lock.lock();
        } else {
            self.lock.unlock();
        }
        debug!(open, "mobile menu");
        true
    }
}

impl<L: ScrollLock> Drop for MobileMenuController<L> {
    fn drop(&mut self) {
        if self.open {
            self.lock.unlock();
        }
    }
}
