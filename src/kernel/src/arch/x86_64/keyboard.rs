//! Polled PS/2 keyboard controller for x86_64.
//!
//! Reads raw Scan Code Set 1 bytes by polling the controller's status port;
//! no interrupts are involved.

use runo_hal::KeySource;
use x86_64::instructions::port::PortReadOnly;

/// PS/2 controller status port.
const STATUS_PORT: u16 = 0x64;

/// PS/2 controller data port.
const DATA_PORT: u16 = 0x60;

/// Status register bit 0: output buffer full, a scancode is waiting.
const OUTPUT_BUFFER_FULL: u8 = 0x01;

/// The polled PS/2 keyboard controller.
///
/// Each poll reads the status port once and consumes at most one scancode.
pub struct PollingKeyboard {
    status: PortReadOnly<u8>,
    data: PortReadOnly<u8>,
}

impl PollingKeyboard {
    /// Creates a new handle to the PS/2 controller ports.
    pub const fn new() -> Self {
        PollingKeyboard {
            status: PortReadOnly::new(STATUS_PORT),
            data: PortReadOnly::new(DATA_PORT),
        }
    }
}

impl Default for PollingKeyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for PollingKeyboard {
    fn poll_scancode(&mut self) -> Option<u8> {
        // SAFETY: Ports 0x64/0x60 are the standard PS/2 controller status
        // and data ports on x86 systems. Reading them has no side effect
        // beyond consuming the pending scancode, which is exactly the
        // intent here.
        unsafe {
            if self.status.read() & OUTPUT_BUFFER_FULL != 0 {
                Some(self.data.read())
            } else {
                None
            }
        }
    }
}
