//! Side-effect handles injected into the state machines.
//!
//! The trackers never touch document-wide state directly. Hosts pass in an
//! implementation of these traits: the browser host wraps the DOM, and the
//! terminal host and the tests use the in-memory versions below.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

/// A host side effect could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{effect} failed: {message}")]
pub struct EffectError {
    pub effect: &'static str,
    pub message: String,
}

impl EffectError {
    pub fn new(effect: &'static str, message: impl Into<String>) -> Self {
        Self {
            effect,
            message: message.into(),
        }
    }
}

/// Suppresses background scrolling of the page.
pub trait ScrollLock {
    fn lock(&mut self);
    fn unlock(&mut self);
}

/// The URL fragment (the part after `#`).
pub trait FragmentStore {
    /// Current fragment without the leading `#`.
    fn current(&self) -> Result<String, EffectError>;

    /// Replace the fragment in place. Must not create a history entry.
    fn replace(&mut self, fragment: &str) -> Result<(), EffectError>;
}

/// Scroll lock whose state is shared between clones.
///
/// The menu controller owns one clone; the host keeps another to decide
/// whether scroll input should be ignored.
#[derive(Debug, Clone, Default)]
pub struct SharedScrollLock {
    locked: Rc<Cell<bool>>,
    acquisitions: Rc<Cell<usize>>,
}

impl SharedScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// How many times the lock has been taken.
    pub fn acquisitions(&self) -> usize {
        self.acquisitions.get()
    }
}

impl ScrollLock for SharedScrollLock {
    fn lock(&mut self) {
        if !self.locked.replace(true) {
            self.acquisitions.set(self.acquisitions.get() + 1);
        }
    }

    fn unlock(&mut self) {
        self.locked.set(false);
    }
}

/// In-memory fragment store that models a browser history stack.
#[derive(Debug, Clone)]
pub struct MemoryFragmentStore {
    fragment: String,
    history_len: usize,
    replacements: usize,
}

impl Default for MemoryFragmentStore {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryFragmentStore {
    /// A fresh page load with `initial` as its fragment.
    pub fn new(initial: &str) -> Self {
        Self {
            fragment: initial.trim_start_matches('#').to_string(),
            history_len: 1,
            replacements: 0,
        }
    }

    /// Navigate to a fragment the way following an in-page link does,
    /// pushing a new history entry.
    pub fn push(&mut self, fragment: &str) {
        self.fragment = fragment.trim_start_matches('#').to_string();
        self.history_len += 1;
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn history_len(&self) -> usize {
        self.history_len
    }

    /// Number of in-place replacements performed.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl FragmentStore for MemoryFragmentStore {
    fn current(&self) -> Result<String, EffectError> {
        Ok(self.fragment.clone())
    }

    fn replace(&mut self, fragment: &str) -> Result<(), EffectError> {
        self.fragment = fragment.trim_start_matches('#').to_string();
        self.replacements += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_lock_is_visible_through_clones() {
        let observer = SharedScrollLock::new();
        let mut owner = observer.clone();
        owner.lock();
        assert!(observer.is_locked());
        owner.lock();
        assert_eq!(observer.acquisitions(), 1);
        owner.unlock();
        assert!(!observer.is_locked());
    }

    #[test]
    fn replace_keeps_history_length() {
        let mut store = MemoryFragmentStore::new("#mission");
        assert_eq!(store.fragment(), "mission");
        store.replace("vision").unwrap();
        assert_eq!(store.fragment(), "vision");
        assert_eq!(store.history_len(), 1);
        store.push("#strategy");
        assert_eq!(store.current().unwrap(), "strategy");
        assert_eq!(store.history_len(), 2);
    }
}
