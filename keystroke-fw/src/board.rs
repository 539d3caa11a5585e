// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! RP2040 board bring-up: clocks, timer, status LED and the USB bus.

use rp2040_hal::{
    self as hal,
    clocks::init_clocks_and_plls,
    gpio::{bank0::Gpio25, FunctionSioOutput, Pin, PullDown},
    pac,
    usb::UsbBus,
    Clock, Sio, Timer, Watchdog,
};
use usb_device::class_prelude::UsbBusAllocator;

/// External crystal frequency on the Pico and most RP2040 boards.
const XTAL_FREQ_HZ: u32 = 12_000_000;

pub type LedPin = Pin<Gpio25, FunctionSioOutput, PullDown>;

#[derive(Debug, defmt::Format)]
pub enum BoardError {
    PeripheralsTaken,
    ClockInit,
}

pub struct Board {
    pub timer: Timer,
    pub led_pin: LedPin,
    pub usb_bus: UsbBusAllocator<UsbBus>,
}

pub fn init() -> Result<Board, BoardError> {
    let mut pac = pac::Peripherals::take().ok_or(BoardError::PeripheralsTaken)?;
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .map_err(|_| BoardError::ClockInit)?;
    defmt::println!("System clock: {} Hz", clocks.system_clock.freq().to_Hz());

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let sio = Sio::new(pac.SIO);
    let pins = hal::gpio::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );
    let led_pin = pins.gpio25.into_push_pull_output();

    let usb_bus = UsbBusAllocator::new(UsbBus::new(
        pac.USBCTRL_REGS,
        pac.USBCTRL_DPRAM,
        clocks.usb_clock,
        true,
        &mut pac.RESETS,
    ));

    Ok(Board {
        timer,
        led_pin,
        usb_bus,
    })
}
