//! In-kernel console tests.
//!
//! Run during boot against the RAM-backed surface double; results are
//! reported over serial.

use runo_hal::KeySource;

use crate::console::line::MAX_LINE_LENGTH;
use crate::console::surface::{BLANK, CELL_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::console::{keymap, Command, Console, CursorTracker, ScreenSurface};
use crate::serial_println;
use crate::testutil::{RamSurface, ScriptedKeys};

/// Runs all console tests.
pub fn run_all() {
    serial_println!("Running console tests...");

    test_release_codes_ignored();
    test_keymap_mappings();
    test_command_parsing();
    test_clear_command();
    test_line_limit();
    test_echo_dispatch();
    test_wide_echo_on_last_row();
    test_unknown_command();
    test_cursor_wrap_fold();
    test_scancodes_end_to_end();

    serial_println!("All console tests passed!");
}

fn ram_console() -> Console<RamSurface> {
    Console::new(RamSurface::new())
}

/// Feeds a line of decoded characters followed by the terminator.
fn type_line(console: &mut Console<RamSurface>, line: &str) {
    for byte in line.bytes() {
        console.on_key(byte);
    }
    console.on_key(b'\n');
}

/// Asserts that `row` starts with exactly the glyphs of `expected`.
fn assert_row_text(console: &Console<RamSurface>, row: usize, expected: &str) {
    let base = row * SCREEN_WIDTH;
    for (i, glyph) in expected.bytes().enumerate() {
        assert_eq!(console.surface().backend().cell(base + i).0, glyph);
    }
}

fn test_release_codes_ignored() {
    serial_println!("test_release_codes_ignored... ");
    for code in 0x80..=0xFFu8 {
        assert_eq!(keymap::decode(code), None);
    }
    serial_println!("[ok]");
}

fn test_keymap_mappings() {
    serial_println!("test_keymap_mappings... ");

    // Deterministic across calls.
    assert_eq!(keymap::decode(0x1E), Some(b'a'));
    assert_eq!(keymap::decode(0x1E), Some(b'a'));

    assert_eq!(keymap::decode(0x02), Some(b'1'));
    assert_eq!(keymap::decode(0x0B), Some(b'0'));
    assert_eq!(keymap::decode(0x10), Some(b'q'));
    assert_eq!(keymap::decode(0x32), Some(b'm'));
    assert_eq!(keymap::decode(0x39), Some(b' '));
    assert_eq!(keymap::decode(0x1C), Some(b'\n'));

    // Unmapped press codes: Esc, Backspace, CapsLock, pad of the table.
    assert_eq!(keymap::decode(0x00), None);
    assert_eq!(keymap::decode(0x01), None);
    assert_eq!(keymap::decode(0x0E), None);
    assert_eq!(keymap::decode(0x3A), None);
    assert_eq!(keymap::decode(0x7F), None);

    serial_println!("[ok]");
}

fn test_command_parsing() {
    serial_println!("test_command_parsing... ");

    assert_eq!(Command::parse("clear"), Command::Clear);
    assert_eq!(Command::parse("echo hi"), Command::Echo { text: "hi" });
    assert_eq!(
        Command::parse("echo a b  c"),
        Command::Echo { text: "a b  c" }
    );
    assert_eq!(Command::parse("echo "), Command::Echo { text: "" });

    // Case-sensitive, exact-prefix matching only.
    assert_eq!(Command::parse("echo"), Command::Unknown);
    assert_eq!(Command::parse("ECHO hi"), Command::Unknown);
    assert_eq!(Command::parse("Clear"), Command::Unknown);
    assert_eq!(Command::parse("clear "), Command::Unknown);
    assert_eq!(Command::parse(""), Command::Unknown);

    serial_println!("[ok]");
}

fn test_clear_command() {
    serial_println!("test_clear_command... ");

    let mut console = ram_console();
    type_line(&mut console, "xyz");
    type_line(&mut console, "clear");

    let attr = console.surface().attribute();
    for offset in 0..CELL_COUNT {
        assert_eq!(console.surface().backend().cell(offset), (BLANK, attr));
    }
    assert_eq!(console.cursor().offset(), 0);
    assert_eq!(console.surface().backend().committed_cursor(), Some(0));
    assert!(console.editor().is_empty());

    serial_println!("[ok]");
}

fn test_line_limit() {
    serial_println!("test_line_limit... ");

    let mut console = ram_console();
    for _ in 0..MAX_LINE_LENGTH {
        console.on_key(b'a');
    }
    assert_eq!(console.editor().len(), MAX_LINE_LENGTH);
    assert_eq!(console.cursor().offset(), MAX_LINE_LENGTH);

    // The 256th character is dropped: no length change, no screen write.
    console.on_key(b'b');
    assert_eq!(console.editor().len(), MAX_LINE_LENGTH);
    assert_eq!(console.cursor().offset(), MAX_LINE_LENGTH);
    assert_eq!(console.surface().backend().cell(MAX_LINE_LENGTH), (0, 0));

    serial_println!("[ok]");
}

fn test_echo_dispatch() {
    serial_println!("test_echo_dispatch... ");

    let mut console = ram_console();
    type_line(&mut console, "echo hello");

    // Output lands at column 0 of the dispatch-time row, verbatim.
    assert_row_text(&console, 1, "hello");
    assert_eq!(console.surface().backend().cell(SCREEN_WIDTH + 5), (0, 0));
    assert!(console.editor().is_empty());

    serial_println!("[ok]");
}

fn test_wide_echo_on_last_row() {
    serial_println!("test_wide_echo_on_last_row... ");

    let mut console = ram_console();
    // Walk the cursor down to the last row.
    for _ in 0..(SCREEN_HEIGHT - 1) {
        console.on_key(b'\n');
    }
    assert_eq!(console.cursor().row(), SCREEN_HEIGHT - 1);

    // Echo two rows' worth of text from there: display_text walks offsets
    // straight past the last cell with no wrap.
    for byte in b"echo ".iter().copied() {
        console.on_key(byte);
    }
    for _ in 0..(2 * SCREEN_WIDTH) {
        console.on_key(b'w');
    }
    console.on_key(b'\n');

    // The last row fills; the overflow is dropped off-grid rather than
    // landing anywhere back inside it.
    assert_eq!(console.surface().backend().cell(CELL_COUNT - 1).0, b'w');
    assert_eq!(console.surface().backend().cell(0), (0, 0));
    assert_eq!(console.cursor().offset(), CELL_COUNT - SCREEN_WIDTH);
    assert!(console.editor().is_empty());

    serial_println!("[ok]");
}

fn test_unknown_command() {
    serial_println!("test_unknown_command... ");

    let mut console = ram_console();
    type_line(&mut console, "ECHO hello");
    assert_row_text(&console, 1, "Unknown command");

    let mut console = ram_console();
    type_line(&mut console, "unknowncmd");
    assert_row_text(&console, 1, "Unknown command");

    // The empty line falls into the unknown branch too.
    let mut console = ram_console();
    console.on_key(b'\n');
    assert_row_text(&console, 1, "Unknown command");

    serial_println!("[ok]");
}

fn test_cursor_wrap_fold() {
    serial_println!("test_cursor_wrap_fold... ");

    let mut surface = ScreenSurface::new(RamSurface::new());
    let mut cursor = CursorTracker::new();
    for _ in 0..CELL_COUNT {
        cursor.advance_for(b'x', &mut surface);
    }
    // One fold back, not out of range and not scrolled.
    assert_eq!(cursor.offset(), CELL_COUNT - SCREEN_WIDTH);

    // A terminator on the folded row lands right back on it.
    cursor.advance_for(b'\n', &mut surface);
    assert_eq!(cursor.offset(), CELL_COUNT - SCREEN_WIDTH);

    serial_println!("[ok]");
}

fn test_scancodes_end_to_end() {
    serial_println!("test_scancodes_end_to_end... ");

    // c l e a r Enter, each press followed by its release.
    const CLEAR_KEYS: [u8; 12] = [
        0x2E, 0xAE, 0x26, 0xA6, 0x12, 0x92, 0x1E, 0x9E, 0x13, 0x93, 0x1C, 0x9C,
    ];
    // e c h o space h i Enter, presses only.
    const ECHO_KEYS: [u8; 8] = [0x12, 0x2E, 0x23, 0x18, 0x39, 0x23, 0x17, 0x1C];

    let mut console = ram_console();
    let mut keys = ScriptedKeys::new(&CLEAR_KEYS);
    while let Some(scancode) = keys.poll_scancode() {
        console.handle_scancode(scancode);
    }

    let attr = console.surface().attribute();
    for offset in 0..CELL_COUNT {
        assert_eq!(console.surface().backend().cell(offset), (BLANK, attr));
    }
    assert_eq!(console.cursor().row(), 0);

    let mut keys = ScriptedKeys::new(&ECHO_KEYS);
    while let Some(scancode) = keys.poll_scancode() {
        console.handle_scancode(scancode);
    }

    assert_row_text(&console, 0, "echo hi");
    assert_row_text(&console, 1, "hi");

    serial_println!("[ok]");
}
