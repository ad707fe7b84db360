//! Cursor tracking over the linear screen grid.

use runo_hal::TextSurface;

use super::keymap::LINE_TERMINATOR;
use super::surface::{ScreenSurface, CELL_COUNT, SCREEN_WIDTH};

/// State machine over a single linear offset in `[0, CELL_COUNT)`.
///
/// Owns the logical cursor position; the hardware cursor only moves when
/// [`commit`](CursorTracker::commit) is called.
pub struct CursorTracker {
    offset: usize,
}

impl CursorTracker {
    /// Creates a tracker at the top-left corner.
    pub const fn new() -> Self {
        CursorTracker { offset: 0 }
    }

    /// Returns the current linear offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the row the cursor is on.
    pub fn row(&self) -> usize {
        self.offset / SCREEN_WIDTH
    }

    /// Moves the cursor back to offset 0.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Advances the cursor for one printed or terminator character.
    ///
    /// A line terminator moves the cursor to the start of the next row;
    /// any other byte is written at the current offset and the cursor steps
    /// one cell right. If the advance runs past the last cell, the cursor
    /// folds back exactly one row. The fold reuses the last row's stale
    /// contents instead of scrolling; that behavior is kept as-is.
    pub fn advance_for<S: TextSurface>(&mut self, byte: u8, surface: &mut ScreenSurface<S>) {
        if byte == LINE_TERMINATOR {
            self.offset = (self.offset / SCREEN_WIDTH + 1) * SCREEN_WIDTH;
        } else {
            surface.write_at(self.offset, byte);
            self.offset += 1;
        }

        if self.offset >= CELL_COUNT {
            self.offset -= SCREEN_WIDTH;
        }
    }

    /// Pushes the current offset to the hardware cursor.
    pub fn commit<S: TextSurface>(&self, surface: &mut ScreenSurface<S>) {
        surface.set_cursor(self.offset);
    }
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self::new()
    }
}
