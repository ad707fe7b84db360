//! Boot banner and branding.

use crate::console::{self, Color};
use crate::println;

/// Print the RunoOS boot banner.
pub fn print_banner() {
    console::set_color(Color::LightCyan, Color::Blue);
    println!("  ____                    ___  ____  ");
    println!(" |  _ \\ _   _ _ __   ___ / _ \\/ ___| ");
    println!(" | |_) | | | | '_ \\ / _ \\ | | \\___ \\ ");
    println!(" |  _ <| |_| | | | | (_) | |_| |___) |");
    println!(" |_| \\_\\\\__,_|_| |_|\\___/ \\___/|____/ ");
    println!();
    console::set_color(Color::White, Color::Blue);
    println!(" RunoOS v0.1.0");
    println!();
}
