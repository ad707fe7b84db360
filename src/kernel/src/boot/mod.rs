//! Boot logging with colored status indicators.
//!
//! Provides Linux-style boot messages with colored status brackets.

pub mod banner;

use crate::console::{self, Color};
use crate::{print, println};

/// Boot status indicators.
#[derive(Debug, Clone, Copy)]
pub enum Status {
    /// Success - `[ OK ]` in green
    Ok,
    /// Failure - `[FAIL]` in red
    Fail,
    /// Warning - `[WARN]` in yellow
    Warn,
    /// Informational - `[INFO]` in cyan
    Info,
}

/// Log a boot stage with status.
///
/// Format: `[ OK ] Message text`
pub fn log(status: Status, message: &str) {
    print_status(status);
    println!(" {}", message);
}

/// Log an indented detail line (for sub-items).
///
/// Format: `       Detail text` (aligned with message after status)
pub fn log_detail(message: &str) {
    println!("       {}", message);
}

/// Log the start of a boot stage that takes a while.
///
/// Leaves the line open; pair with [`log_end`].
pub fn log_start(message: &str) {
    print!("       {}... ", message);
}

/// Close a line opened by [`log_start`] with a status.
pub fn log_end(status: Status) {
    print_status(status);
    println!();
}

fn print_status(status: Status) {
    let (text, color) = match status {
        Status::Ok => ("[ OK ]", Color::LightGreen),
        Status::Fail => ("[FAIL]", Color::LightRed),
        Status::Warn => ("[WARN]", Color::Yellow),
        Status::Info => ("[INFO]", Color::LightCyan),
    };
    console::set_color(color, Color::Blue);
    print!("{}", text);
    console::set_color(Color::White, Color::Blue);
}
