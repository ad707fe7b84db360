//! COM1 serial output.
//!
//! Diagnostic channel for test reporting and panics; user-visible output
//! goes through the console instead.

use core::fmt::{self, Write};
use spin::Mutex;
use uart_16550::SerialPort;

/// COM1 I/O port address.
const COM1_PORT: u16 = 0x3F8;

/// Global serial port, lazily initialized behind a spinlock.
pub static SERIAL: spin::Once<Mutex<SerialPort>> = spin::Once::new();

/// Initializes the global serial port.
///
/// Idempotent; later calls are no-ops.
pub fn init() {
    SERIAL.call_once(|| {
        // SAFETY: 0x3F8 is the standard COM1 address on x86 and the kernel
        // runs with full I/O port access; uart_16550 performs the port
        // initialization sequence.
        let mut port = unsafe { SerialPort::new(COM1_PORT) };
        port.init();
        Mutex::new(port)
    });
}

/// Prints to the serial port without a newline.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::arch::x86_64::serial::_print(format_args!($($arg)*))
    };
}

/// Prints to the serial port with a newline.
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($($arg:tt)*) => ($crate::serial_print!("{}\n", format_args!($($arg)*)))
}

/// Internal print function used by macros.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    init();
    SERIAL
        .get()
        .expect("serial port not initialized")
        .lock()
        .write_fmt(args)
        .expect("serial write failed");
}
