//! Test infrastructure for the RunoOS kernel.
//!
//! Provides utilities for bare-metal testing with QEMU, plus in-memory
//! doubles for the HAL traits so the console state machine can be exercised
//! without touching hardware.

use runo_hal::{KeySource, TextSurface};

use crate::console::surface::CELL_COUNT;
use crate::serial_println;

/// QEMU exit codes for signaling test results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QemuExitCode {
    /// All tests passed.
    Success = 0x10,
    /// One or more tests failed.
    Failed = 0x11,
}

/// Exit QEMU with the given exit code.
///
/// Uses the isa-debug-exit device configured on port 0xf4.
///
/// # Note
///
/// QEMU must be started with `-device isa-debug-exit,iobase=0xf4,iosize=0x04`.
/// The actual exit code will be `(value << 1) | 1`, so:
/// - `Success` (0x10) → exit code 33
/// - `Failed` (0x11) → exit code 35
pub fn exit_qemu(exit_code: QemuExitCode) {
    #[cfg(target_arch = "x86_64")]
    {
        use x86_64::instructions::port::Port;

        // SAFETY: Writing to the isa-debug-exit device port is safe when QEMU
        // is configured with this device. It triggers a QEMU exit.
        unsafe {
            let mut port = Port::new(0xf4);
            port.write(exit_code as u32);
        }
    }
}

/// Trait for types that can be run as tests.
pub trait Testable {
    /// Run the test and report results.
    fn run(&self);
}

impl<T: Fn()> Testable for T {
    fn run(&self) {
        serial_println!("test {} ... ", core::any::type_name::<T>());
        self();
        serial_println!("[ok]");
    }
}

/// Custom test runner for bare-metal tests.
///
/// Runs all tests and exits QEMU with success if all pass.
pub fn test_runner(tests: &[&dyn Testable]) {
    serial_println!("Running {} tests", tests.len());
    for test in tests {
        test.run();
    }
    exit_qemu(QemuExitCode::Success);
}

/// Panic handler for test binaries.
///
/// Reports test failure and exits QEMU with failure code.
pub fn test_panic_handler(info: &core::panic::PanicInfo) -> ! {
    serial_println!("[failed]");
    serial_println!("Error: {}", info);
    exit_qemu(QemuExitCode::Failed);
    crate::arch::x86_64::halt_loop()
}

/// In-memory [`TextSurface`] double.
///
/// Records every written cell and the last committed hardware-cursor
/// position so tests can read the grid back, which real VGA code never does.
pub struct RamSurface {
    cells: [(u8, u8); CELL_COUNT],
    cursor: Option<usize>,
}

impl RamSurface {
    /// Creates a surface with all cells zeroed and no cursor committed.
    pub const fn new() -> Self {
        RamSurface {
            cells: [(0, 0); CELL_COUNT],
            cursor: None,
        }
    }

    /// Returns the glyph/attribute pair last written at `offset`.
    pub fn cell(&self, offset: usize) -> (u8, u8) {
        self.cells[offset]
    }

    /// Returns the last committed hardware-cursor offset, if any.
    pub fn committed_cursor(&self) -> Option<usize> {
        self.cursor
    }
}

impl Default for RamSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface for RamSurface {
    fn write_cell(&mut self, offset: usize, glyph: u8, attr: u8) {
        if offset < CELL_COUNT {
            self.cells[offset] = (glyph, attr);
        }
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = Some(offset);
    }
}

/// Slice-backed [`KeySource`] double feeding a fixed scancode script.
pub struct ScriptedKeys<'a> {
    script: &'a [u8],
    next: usize,
}

impl<'a> ScriptedKeys<'a> {
    /// Creates a key source that yields `script` one byte per poll.
    pub const fn new(script: &'a [u8]) -> Self {
        ScriptedKeys { script, next: 0 }
    }
}

impl KeySource for ScriptedKeys<'_> {
    fn poll_scancode(&mut self) -> Option<u8> {
        let byte = self.script.get(self.next).copied()?;
        self.next += 1;
        Some(byte)
    }
}
