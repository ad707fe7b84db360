//! x86_64 architecture support.
//!
//! Provides the VGA text surface, the polled PS/2 keyboard controller, and
//! serial port communication for x86_64 platforms.

pub mod keyboard;
pub mod serial;
pub mod vga;

pub use keyboard::PollingKeyboard;
pub use serial::SERIAL;
pub use vga::VgaSurface;

/// Halts the CPU until the next interrupt.
///
/// Only meaningful on the panic path: this kernel never enables interrupts,
/// so a halted CPU stays halted.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
