//! RunoOS Kernel Entry Point
//!
//! This is the main entry point for the RunoOS kernel.

#![no_std]
#![no_main]

use bootloader::{entry_point, BootInfo};
use core::panic::PanicInfo;
use runo_hal::KeySource;
use runo_kernel::arch::x86_64::{self, PollingKeyboard};
use runo_kernel::boot::{self, Status};
use runo_kernel::console::{self, Color};
use runo_kernel::{println, serial_println};

entry_point!(kernel_main);

/// Kernel entry point.
///
/// Called by the bootloader after setting up the initial environment.
fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    // ========================================================================
    // Phase 1: Core Initialization
    // ========================================================================
    runo_kernel::init();

    // Clear screen and show banner
    console::clear_screen();
    boot::banner::print_banner();

    // ========================================================================
    // Phase 2: Boot Logging
    // ========================================================================
    boot::log(Status::Ok, "Serial port initialized");
    boot::log(Status::Ok, "VGA console ready");

    boot::log_start("Running console self-tests");
    runo_kernel::tests::run_all();
    boot::log_end(Status::Ok);
    boot::log_detail("Results on serial (COM1)");

    let mut keyboard = PollingKeyboard::new();
    boot::log(Status::Ok, "PS/2 keyboard controller ready (polled)");

    // ========================================================================
    // Boot Complete
    // ========================================================================
    println!();
    boot::log(Status::Ok, "Boot complete!");
    console::set_color(Color::LightCyan, Color::Blue);
    println!("\n Commands: clear, echo <text>\n");
    console::set_color(Color::White, Color::Blue);

    // ========================================================================
    // Phase 3: Poll Loop
    // ========================================================================
    // Single thread of control: each iteration reads the PS/2 status port
    // once and, when a byte is pending, runs one full decode -> edit ->
    // dispatch cycle before polling again. No suspension points, no yields;
    // this loop runs forever. `hlt` stays out of it: interrupts are never
    // enabled, so a halted CPU would not wake for keyboard input.
    loop {
        if let Some(scancode) = keyboard.poll_scancode() {
            console::handle_scancode(scancode);
        } else {
            core::hint::spin_loop();
        }
    }
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    // Use the already-initialized serial port
    serial_println!("KERNEL PANIC: {}", info);

    console::set_color(Color::LightRed, Color::Blue);
    println!("\n\n!!! KERNEL PANIC !!!");
    console::set_color(Color::White, Color::Blue);
    println!("{}", info);

    x86_64::halt_loop()
}
