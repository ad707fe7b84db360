#![no_std]
#![no_main]
#![feature(custom_test_frameworks)]
#![test_runner(runo_kernel::testutil::test_runner)]
#![reexport_test_harness_main = "test_main"]

use core::panic::PanicInfo;
use runo_kernel::testutil::{exit_qemu, QemuExitCode};

#[no_mangle]
pub extern "C" fn _start() -> ! {
    test_main();
    exit_qemu(QemuExitCode::Success);
    loop {}
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    runo_kernel::testutil::test_panic_handler(info)
}

#[test_case]
fn trivial_assertion() {
    assert_eq!(1, 1);
}

#[test_case]
fn println_does_not_panic() {
    runo_kernel::println!("basic_boot println output");
}

#[test_case]
fn console_suite_passes() {
    runo_kernel::tests::run_all();
}
