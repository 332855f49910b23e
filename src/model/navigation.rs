//! Cursor state of the current menu list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Navigation {
    /// Index of the selected entry.
    pub selection: usize,
    /// Grows while a direction is held; drives the fast-scroll step.
    pub acceleration: u32,
    /// Set by [`Navigation::clear`]: whether the list should be pushed again.
    pub pending_push: bool,
    /// Set by [`Navigation::set`] when the renderer should scroll to the
    /// new selection.
    pub scroll_requested: bool,
}

impl Navigation {
    pub fn new(selection: usize, acceleration: u32) -> Self {
        Self {
            selection,
            acceleration,
            ..Self::default()
        }
    }

    pub fn set(&mut self, selection: usize, scroll: bool) {
        self.selection = selection;
        self.scroll_requested = scroll;
    }

    /// Reset the cursor to the top of the list.
    pub fn clear(&mut self, pending_push: bool) {
        self.selection = 0;
        self.pending_push = pending_push;
        self.scroll_requested = false;
    }

    /// Number of entries one fast-scroll step skips: 8 at rest, 4 more for
    /// every 4 steps of acceleration past 2.
    pub fn fast_scroll_step(&self) -> usize {
        let speed = (self.acceleration.max(2) - 2) as usize / 4 + 1;
        speed.saturating_mul(4).saturating_add(4)
    }
}
