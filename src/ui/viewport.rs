//! Highlight and scroll-offset bookkeeping for the visible list window.

/// Position of the selection within the filtered view.
///
/// Invariants when the view is non-empty and clamped:
/// `top <= highlight <= top + visible_rows - 1`. When the view is empty the
/// highlight is meaningless and every operation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub highlight: usize,
    pub top: usize,
}

impl ViewState {
    /// Move the highlight one row up. No wraparound: already at the first
    /// row means no change.
    pub fn move_up(&mut self) {
        self.highlight = self.highlight.saturating_sub(1);
    }

    /// Move the highlight one row down, bounded by the list length. No
    /// wraparound, and a no-op on an empty list.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.highlight = (self.highlight + 1).min(len - 1);
    }

    /// Scroll `top` the minimal distance needed to bring the highlight back
    /// inside the visible window.
    pub fn clamp(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.highlight < self.top {
            self.top = self.highlight;
        } else if self.highlight >= self.top + visible_rows {
            self.top = self.highlight - visible_rows + 1;
        }
    }

    /// Drop back to the origin. Called whenever the filtered view is
    /// rebuilt; stale positions are never carried across a filter change.
    pub fn reset(&mut self) {
        self.highlight = 0;
        self.top = 0;
    }
}
