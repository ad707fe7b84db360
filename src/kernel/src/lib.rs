//! RunoOS Kernel
//!
//! A minimal bare-metal text console for x86_64: VGA text-mode output, a
//! polled PS/2 keyboard, a bounded line editor, and a two-verb command
//! dispatcher.
//!
//! # Architecture
//!
//! - `arch`: Platform-specific code (VGA, PS/2 controller, serial)
//! - `console`: The console state machine (screen, cursor, keymap, line
//!   editor, command dispatch)
//! - `boot`: Boot-status logging and banner
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel with no heap. All unsafe code is documented
//! with safety invariants explaining why the usage is correct.

#![no_std]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod console;
pub mod tests;
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Called early in the boot process to set up essential services.
pub fn init() {
    #[cfg(target_arch = "x86_64")]
    {
        arch::x86_64::serial::init();
        console::init();
    }
}
