//! Built-in console commands.
//!
//! The command surface is deliberately tiny: `clear`, `echo <text>`, and a
//! fixed rejection message for everything else.

use runo_hal::TextSurface;

use super::cursor::CursorTracker;
use super::surface::ScreenSurface;

/// Literal prefix that selects the echo command, trailing space included.
const ECHO_PREFIX: &str = "echo ";

/// Message shown for any line that matches no known verb.
const UNKNOWN_MESSAGE: &str = "Unknown command";

/// Console command types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Clear the screen and home the cursor.
    Clear,
    /// Echo text verbatim.
    Echo {
        /// Everything after the `echo ` prefix, embedded spaces included.
        text: &'a str,
    },
    /// Anything else, the empty line included.
    Unknown,
}

impl<'a> Command<'a> {
    /// Matches a completed line against the known verbs.
    ///
    /// Matching is case-sensitive and exact; `echo` without a trailing
    /// space is unknown. Total over all input strings.
    pub fn parse(line: &'a str) -> Command<'a> {
        if line == "clear" {
            Command::Clear
        } else if let Some(text) = line.strip_prefix(ECHO_PREFIX) {
            Command::Echo { text }
        } else {
            Command::Unknown
        }
    }

    /// Performs the matched screen action.
    ///
    /// Echoed or rejection text starts at column 0 of the cursor's current
    /// row and is written unwrapped and untruncated; wide output runs into
    /// whatever follows on the grid.
    pub fn execute<S: TextSurface>(
        &self,
        surface: &mut ScreenSurface<S>,
        cursor: &mut CursorTracker,
    ) {
        match self {
            Command::Clear => {
                surface.clear();
                cursor.reset();
            }
            Command::Echo { text } => {
                surface.display_text(text, cursor.row(), 0);
            }
            Command::Unknown => {
                surface.display_text(UNKNOWN_MESSAGE, cursor.row(), 0);
            }
        }
    }
}
