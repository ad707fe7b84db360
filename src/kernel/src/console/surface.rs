//! Screen surface: colored cell writes over a [`TextSurface`] backend.

use runo_hal::TextSurface;

/// Number of columns in the text grid.
pub const SCREEN_WIDTH: usize = 80;

/// Number of rows in the text grid.
pub const SCREEN_HEIGHT: usize = 25;

/// Total number of cells in the text grid.
pub const CELL_COUNT: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// The glyph used to blank a cell.
pub const BLANK: u8 = b' ';

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    /// Black color.
    Black = 0,
    /// Blue color.
    Blue = 1,
    /// Green color.
    Green = 2,
    /// Cyan color.
    Cyan = 3,
    /// Red color.
    Red = 4,
    /// Magenta color.
    Magenta = 5,
    /// Brown color.
    Brown = 6,
    /// Light gray color.
    LightGray = 7,
    /// Dark gray color.
    DarkGray = 8,
    /// Light blue color.
    LightBlue = 9,
    /// Light green color.
    LightGreen = 10,
    /// Light cyan color.
    LightCyan = 11,
    /// Light red color.
    LightRed = 12,
    /// Pink color.
    Pink = 13,
    /// Yellow color.
    Yellow = 14,
    /// White color.
    White = 15,
}

/// Combined foreground and background color.
///
/// Foreground in the low nibble, background in the high nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
struct ColorCode(u8);

impl ColorCode {
    /// Creates a new color code from foreground and background colors.
    const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }
}

/// Cell-level screen access with current color state.
///
/// Wraps a [`TextSurface`] backend and stamps every written cell with the
/// current attribute byte. Cells are written, never read back.
pub struct ScreenSurface<S> {
    backend: S,
    color: ColorCode,
}

impl<S: TextSurface> ScreenSurface<S> {
    /// Creates a surface with the default color (white on blue).
    pub const fn new(backend: S) -> Self {
        ScreenSurface {
            backend,
            color: ColorCode::new(Color::White, Color::Blue),
        }
    }

    /// Sets the foreground and background colors for subsequent writes.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color = ColorCode::new(foreground, background);
    }

    /// Returns the attribute byte applied to new cells.
    pub fn attribute(&self) -> u8 {
        self.color.0
    }

    /// Fills every cell with a blank glyph in the current color.
    pub fn clear(&mut self) {
        for offset in 0..CELL_COUNT {
            self.backend.write_cell(offset, BLANK, self.color.0);
        }
    }

    /// Writes one glyph at a linear offset with the current attribute.
    ///
    /// Callers are responsible for keeping `offset` pre-wrapped into the
    /// grid; see [`CursorTracker`](super::cursor::CursorTracker).
    pub fn write_at(&mut self, offset: usize, glyph: u8) {
        self.backend.write_cell(offset, glyph, self.color.0);
    }

    /// Writes `text` starting at `row`/`col`, one cell per character.
    ///
    /// No wrapping and no bounds enforcement; intended for short,
    /// caller-verified strings.
    pub fn display_text(&mut self, text: &str, row: usize, col: usize) {
        let mut offset = row * SCREEN_WIDTH + col;
        for glyph in text.bytes() {
            self.backend.write_cell(offset, glyph, self.color.0);
            offset += 1;
        }
    }

    /// Moves the backend's hardware cursor indicator.
    pub fn set_cursor(&mut self, offset: usize) {
        self.backend.set_cursor(offset);
    }

    /// Returns a reference to the backend device.
    pub fn backend(&self) -> &S {
        &self.backend
    }
}
