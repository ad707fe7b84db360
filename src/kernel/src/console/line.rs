//! Bounded line buffer for keyboard input.

use core::str;

/// Line buffer capacity; one slot stays reserved for the terminator.
const LINE_CAPACITY: usize = 256;

/// Maximum number of characters a line can hold.
pub const MAX_LINE_LENGTH: usize = LINE_CAPACITY - 1;

/// Accumulates decoded characters until a line terminator is seen.
///
/// Characters can only be appended, never removed; there is no backspace.
/// Once full, further characters are silently dropped.
pub struct LineEditor {
    buf: [u8; LINE_CAPACITY],
    len: usize,
}

impl LineEditor {
    /// Creates an empty line buffer.
    pub const fn new() -> Self {
        LineEditor {
            buf: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    /// Appends one character if there is room.
    ///
    /// Returns `false` when the line is full and the character was dropped,
    /// so the caller knows not to mirror it onto the screen.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.len < MAX_LINE_LENGTH {
            self.buf[self.len] = byte;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Returns the accumulated line.
    ///
    /// The keymap only produces ASCII, so the buffer is always valid UTF-8;
    /// the fallback keeps this total without an unsafe conversion.
    pub fn line(&self) -> &str {
        str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Returns the current line length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no characters have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resets the buffer to empty.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}
