// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

#![no_std]
#![no_main]

mod board;
mod delay;
mod usb;

use defmt_rtt as _;
use embedded_hal::digital::OutputPin;
use keystroke_common::{KeystrokeEmitter, Platform};
use panic_probe as _;

defmt::timestamp!("{=u64:us}", { 0 });

use cortex_m_rt::entry;

// Generated by build.rs from KEYSTROKE_PLATFORM
include!(concat!(env!("OUT_DIR"), "/platform.rs"));

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

#[entry]
fn main() -> ! {
    defmt::println!(
        "Keystroke emitter v{} init, platform: {}",
        env!("KEYSTROKE_VERSION"),
        PLATFORM
    );

    let board = match board::init() {
        Ok(board) => board,
        Err(e) => {
            defmt::error!("Board init failed: {:?}", e);
            park();
        }
    };
    let board::Board {
        timer,
        mut led_pin,
        usb_bus,
    } = board;

    let usb_bus = usb::store_usb_bus(usb_bus);
    match usb::UsbKeyboard::new(usb_bus, timer) {
        Ok(keyboard) => {
            defmt::println!("USB HID keyboard initialized");
            usb::store_keyboard(keyboard);
        }
        Err(e) => {
            defmt::error!("Failed to initialize USB keyboard: {:?}", e);
            park();
        }
    }
    led_pin.set_high().ok();

    let mut emitter =
        KeystrokeEmitter::new(usb::UsbReportSink, delay::PollingDelay::new(timer), PLATFORM);
    defmt::println!("Entering emitter loop");
    emitter.run_forever()
}

fn park() -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
