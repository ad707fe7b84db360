//! Console subsystem for RunoOS.
//!
//! The console state machine: screen/cursor model, scancode decoding, line
//! editing and command dispatch.
//!
//! # Architecture
//!
//! - `surface`: colored cell writes over a [`TextSurface`] backend
//! - `cursor`: linear-offset cursor tracking and hardware-cursor commit
//! - `keymap`: Scan Code Set 1 press-event decoding
//! - `line`: bounded input line buffer
//! - `commands`: the `clear`/`echo` dispatcher
//!
//! # Concurrency contract
//!
//! All console state is mutated by a single thread of control: the boot
//! sequence and then the poll loop, one full decode → edit → dispatch cycle
//! per consumed scancode, with no suspension points. The global instance is
//! behind a spinlock only so the panic handler can reach it.

pub mod commands;
pub mod cursor;
pub mod keymap;
pub mod line;
pub mod surface;

pub use commands::Command;
pub use cursor::CursorTracker;
pub use line::LineEditor;
pub use surface::{Color, ScreenSurface};

use core::fmt;
use runo_hal::TextSurface;

use keymap::LINE_TERMINATOR;

/// The console state machine over a display backend.
///
/// Owns the screen surface, the cursor tracker and the input line; the
/// dispatcher borrows the first two for the duration of one completed line.
pub struct Console<S> {
    surface: ScreenSurface<S>,
    cursor: CursorTracker,
    editor: LineEditor,
}

impl<S: TextSurface> Console<S> {
    /// Creates a console over `backend` with default color and empty state.
    pub const fn new(backend: S) -> Self {
        Console {
            surface: ScreenSurface::new(backend),
            cursor: CursorTracker::new(),
            editor: LineEditor::new(),
        }
    }

    /// Blanks the screen and returns cursor and line buffer to initial state.
    pub fn reset(&mut self) {
        self.surface.clear();
        self.cursor.reset();
        self.editor.clear();
        self.cursor.commit(&mut self.surface);
    }

    /// Sets the color applied to subsequent writes.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.surface.set_color(foreground, background);
    }

    /// Feeds one raw scancode through decode → edit → dispatch.
    ///
    /// Key releases and unmapped codes are dropped here.
    pub fn handle_scancode(&mut self, scancode: u8) {
        if let Some(byte) = keymap::decode(scancode) {
            self.on_key(byte);
        }
    }

    /// Handles one decoded key.
    ///
    /// A terminator moves the cursor to the next row, dispatches the
    /// completed line at that row, and resets the buffer. Any other key is
    /// appended and mirrored to the screen, unless the line is full, in
    /// which case it is silently dropped. The hardware cursor is committed
    /// after every key.
    pub fn on_key(&mut self, byte: u8) {
        if byte == LINE_TERMINATOR {
            self.cursor.advance_for(LINE_TERMINATOR, &mut self.surface);
            self.cursor.commit(&mut self.surface);

            let line = self.editor.line();
            Command::parse(line).execute(&mut self.surface, &mut self.cursor);

            self.editor.clear();
            self.cursor.commit(&mut self.surface);
        } else {
            if self.editor.push(byte) {
                self.cursor.advance_for(byte, &mut self.surface);
            }
            self.cursor.commit(&mut self.surface);
        }
    }

    /// Prints one byte at the cursor, bypassing the line editor.
    ///
    /// Used for boot and diagnostic output, which is display-only and must
    /// not accumulate into the user's input line.
    fn put_byte(&mut self, byte: u8) {
        self.cursor.advance_for(byte, &mut self.surface);
    }

    /// Returns the screen surface.
    pub fn surface(&self) -> &ScreenSurface<S> {
        &self.surface
    }

    /// Returns the cursor tracker.
    pub fn cursor(&self) -> &CursorTracker {
        &self.cursor
    }

    /// Returns the line editor.
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }
}

impl<S: TextSurface> fmt::Write for Console<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            match byte {
                // Printable ASCII or newline
                0x20..=0x7e | b'\n' => self.put_byte(byte),
                // Non-printable: show placeholder
                _ => self.put_byte(0xfe),
            }
        }
        self.cursor.commit(&mut self.surface);
        Ok(())
    }
}

/// Global console instance over the VGA device.
///
/// Uses a spinlock for safe access from the panic handler.
#[cfg(target_arch = "x86_64")]
pub static CONSOLE: spin::Once<spin::Mutex<Console<crate::arch::x86_64::VgaSurface>>> =
    spin::Once::new();

/// Initializes the global console.
///
/// Idempotent - safe to call multiple times.
#[cfg(target_arch = "x86_64")]
pub fn init() {
    CONSOLE.call_once(|| spin::Mutex::new(Console::new(crate::arch::x86_64::VgaSurface::new())));
}

/// Returns a reference to the console, initializing if necessary.
#[cfg(target_arch = "x86_64")]
fn get_console() -> &'static spin::Mutex<Console<crate::arch::x86_64::VgaSurface>> {
    init();
    CONSOLE.get().expect("console not initialized")
}

/// Prints to the screen without a newline.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::console::_print(format_args!($($arg)*))
    };
}

/// Prints to the screen with a newline.
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)))
}

/// Internal print function used by macros.
#[cfg(target_arch = "x86_64")]
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    use core::fmt::Write;
    get_console().lock().write_fmt(args).expect("console write failed");
}

/// Sets the screen output color.
#[cfg(target_arch = "x86_64")]
pub fn set_color(foreground: Color, background: Color) {
    get_console().lock().set_color(foreground, background);
}

/// Clears the screen and homes the cursor.
#[cfg(target_arch = "x86_64")]
pub fn clear_screen() {
    get_console().lock().reset();
}

/// Feeds one scancode into the global console.
#[cfg(target_arch = "x86_64")]
pub fn handle_scancode(scancode: u8) {
    get_console().lock().handle_scancode(scancode);
}
