//! RunoOS Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines traits that abstract away platform-specific hardware
//! details, so the console state machine can run against real devices or
//! in-memory test doubles.

#![no_std]

/// Trait for a cell-addressed text display.
///
/// The display is a fixed row-major grid addressed by a single linear offset
/// (`row * width + col`). Implementations are write-only from the console's
/// perspective; cells are never read back.
pub trait TextSurface {
    /// Writes one cell: a glyph byte paired with an attribute byte.
    fn write_cell(&mut self, offset: usize, glyph: u8, attr: u8);

    /// Moves the hardware cursor indicator to the given linear offset.
    ///
    /// Purely a display hint; does not affect cell contents.
    fn set_cursor(&mut self, offset: usize);
}

/// Trait for a source of raw keyboard scancodes.
pub trait KeySource {
    /// Polls for one scancode, returning immediately.
    ///
    /// Returns `None` when no byte is pending; consumes at most one byte
    /// per call.
    fn poll_scancode(&mut self) -> Option<u8>;
}
