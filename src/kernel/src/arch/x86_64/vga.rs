//! VGA text mode surface for x86_64.
//!
//! Provides cell-level access to the VGA text buffer at 0xB8000 and drives
//! the CRT controller's hardware cursor.

use core::ptr;
use runo_hal::TextSurface;
use x86_64::instructions::port::Port;

use crate::console::surface::CELL_COUNT;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// CRT controller index register port.
const CRTC_INDEX_PORT: u16 = 0x3D4;

/// CRT controller data register port.
const CRTC_DATA_PORT: u16 = 0x3D5;

/// CRTC register: cursor position low byte.
const CURSOR_LOW_REG: u8 = 0x0F;

/// CRTC register: cursor position high byte.
const CURSOR_HIGH_REG: u8 = 0x0E;

/// A single character cell in the VGA buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
struct VgaCell {
    glyph: u8,
    attr: u8,
}

/// The VGA text buffer layout: 2000 contiguous 16-bit cells.
#[repr(transparent)]
struct Buffer {
    cells: [VgaCell; CELL_COUNT],
}

/// The memory-mapped VGA text display.
///
/// Implements [`TextSurface`] over the physical buffer and the CRTC cursor
/// registers. This is the one place unchecked hardware access is permitted;
/// every write is bounds-guarded before the volatile store.
pub struct VgaSurface {
    /// Pointer to the VGA buffer.
    ///
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The VGA buffer at 0xB8000 is always mapped in x86 real/protected mode.
    buffer: *mut Buffer,
    crtc_index: Port<u8>,
    crtc_data: Port<u8>,
}

// SAFETY: VgaSurface only accesses the VGA buffer through volatile operations
// and the CRTC through port I/O. The buffer is memory-mapped hardware that
// exists for the kernel's lifetime. Access is synchronized through the
// CONSOLE spinlock.
unsafe impl Send for VgaSurface {}

impl VgaSurface {
    /// Creates a new VGA surface over the physical text buffer.
    pub const fn new() -> Self {
        VgaSurface {
            // SAFETY: VGA_BUFFER_ADDR (0xB8000) is the standard VGA text
            // buffer address on x86 systems. This memory is always present
            // and mapped when running on x86 hardware or in QEMU.
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
            crtc_index: Port::new(CRTC_INDEX_PORT),
            crtc_data: Port::new(CRTC_DATA_PORT),
        }
    }
}

impl Default for VgaSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface for VgaSurface {
    fn write_cell(&mut self, offset: usize, glyph: u8, attr: u8) {
        // Reachable from valid input: a wide `echo` on the last row walks
        // offsets past the grid. Such writes are dropped, never trapped.
        if offset >= CELL_COUNT {
            return;
        }

        // SAFETY: offset < CELL_COUNT is verified above, and the buffer
        // pointer was validated at construction time. Using volatile write
        // because the VGA buffer is memory-mapped I/O that may be read by
        // hardware at any time.
        unsafe {
            ptr::write_volatile(&mut (*self.buffer).cells[offset], VgaCell { glyph, attr });
        }
    }

    fn set_cursor(&mut self, offset: usize) {
        let position = offset as u16;

        // SAFETY: Ports 0x3D4/0x3D5 are the standard VGA CRT controller
        // registers on x86 systems. Writing the cursor location registers
        // only moves the visual cursor indicator.
        unsafe {
            self.crtc_index.write(CURSOR_LOW_REG);
            self.crtc_data.write((position & 0xFF) as u8);
            self.crtc_index.write(CURSOR_HIGH_REG);
            self.crtc_data.write((position >> 8) as u8);
        }
    }
}
