//! Hierarchical section numbering for headings.

use std::cell::RefCell;
use std::rc::Rc;

/// Deepest supported heading level.
pub const MAX_HEADER_LEVEL: u8 = 6;

/// Stateful counter producing section indices such as `"1.2.3. "`.
///
/// Every call to [`next_index`](Self::next_index) advances the counters, so
/// producing the indices for a document twice requires a [`reset`](Self::reset)
/// in between.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderIndicator {
    previous_level: u8,
    counters: [u32; MAX_HEADER_LEVEL as usize],
}

impl HeaderIndicator {
    /// Create an indicator with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance the counters for a heading at `level` and return its index.
    ///
    /// `level` is clamped to `1..=6`. The index lists the counters of every
    /// level up to `level`, each followed by `.`, and ends with a space.
    pub fn next_index(&mut self, level: u8) -> String {
        let level = level.clamp(1, MAX_HEADER_LEVEL);
        let slot = usize::from(level - 1);

        // Going back up resets every deeper counter to 1 (not 0), so the next
        // child heading of the new parent starts from 2.
        if level < self.previous_level {
            for counter in &mut self.counters[usize::from(level)..] {
                *counter = 1;
            }
        }
        self.counters[slot] += 1;
        self.previous_level = level;

        let mut index = String::new();
        for counter in &self.counters[..=slot] {
            index.push_str(&counter.to_string());
            index.push('.');
        }
        index.push(' ');
        index
    }

    /// Level of the most recently numbered heading (0 before the first one).
    pub fn previous_level(&self) -> u8 {
        self.previous_level
    }
}

/// Shared handle to a [`HeaderIndicator`].
///
/// A document builder hands clones of one handle to every heading it creates,
/// so all of them advance the same counters. The handle is single-threaded.
#[derive(Clone, Debug, Default)]
pub struct HeaderNumbering(Rc<RefCell<HeaderIndicator>>);

impl HeaderNumbering {
    /// Create a handle around a fresh indicator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the shared counters and return the index for `level`.
    pub fn next_index(&self, level: u8) -> String {
        self.0.borrow_mut().next_index(level)
    }

    /// Reset the shared counters.
    pub fn reset(&self) {
        self.0.borrow_mut().reset();
    }
}
