// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! USB HID keyboard device and its static storage.

use core::cell::UnsafeCell;
use keystroke_common::{ReportSink, REPORT_LEN};
use rp2040_hal::{usb::UsbBus, Timer};
use usb_device::class_prelude::UsbBusAllocator;
use usb_device::prelude::*;
use usbd_hid::descriptor::{KeyboardReport, SerializedDescriptor};
use usbd_hid::hid_class::HIDClass;

/// pid.codes shared keyboard VID/PID.
const USB_VID_PID: UsbVidPid = UsbVidPid(0x16C0, 0x27DB);

/// Interrupt endpoint polling interval requested from the host.
const HID_POLL_MS: u8 = 10;

/// How long a report may wait for the host to drain the endpoint.
const REPORT_TIMEOUT_US: u64 = 100_000;

#[derive(Debug, defmt::Format)]
pub enum UsbKeyboardError {
    StringTooLong,
}

pub struct UsbKeyboard {
    hid: HIDClass<'static, UsbBus>,
    usb_dev: UsbDevice<'static, UsbBus>,
    timer: Timer,
}

impl UsbKeyboard {
    pub fn new(
        usb_bus: &'static UsbBusAllocator<UsbBus>,
        timer: Timer,
    ) -> Result<Self, UsbKeyboardError> {
        let hid = HIDClass::new(usb_bus, KeyboardReport::desc(), HID_POLL_MS);
        let usb_dev = UsbDeviceBuilder::new(usb_bus, USB_VID_PID)
            .strings(&[StringDescriptors::default()
                .manufacturer("ADNT")
                .product("Keystroke Emitter")
                .serial_number("0001")])
            .map_err(|_| UsbKeyboardError::StringTooLong)?
            .build();

        Ok(Self {
            hid,
            usb_dev,
            timer,
        })
    }

    /// Poll USB device. Must be called frequently.
    pub fn poll(&mut self) -> bool {
        self.usb_dev.poll(&mut [&mut self.hid])
    }

    pub fn is_configured(&self) -> bool {
        self.usb_dev.state() == UsbDeviceState::Configured
    }

    /// Push one input report, polling while the endpoint is busy.
    ///
    /// Reports are dropped when no host has configured the device or the
    /// host stops draining the endpoint.
    pub fn push_report(&mut self, report: &[u8; REPORT_LEN]) {
        if !self.is_configured() {
            defmt::trace!("USB: not configured, dropping report {=[u8]:x}", &report[..]);
            return;
        }

        let mut keycodes = [0u8; 6];
        keycodes.copy_from_slice(&report[2..]);
        let report = KeyboardReport {
            modifier: report[0],
            reserved: report[1],
            leds: 0,
            keycodes,
        };

        let deadline = self.now_us() + REPORT_TIMEOUT_US;
        loop {
            match self.hid.push_input(&report) {
                Ok(_) => break,
                Err(UsbError::WouldBlock) if self.now_us() < deadline => {
                    self.poll();
                }
                Err(e) => {
                    defmt::warn!("USB: report dropped: {}", defmt::Debug2Format(&e));
                    break;
                }
            }
        }
    }

    fn now_us(&self) -> u64 {
        self.timer.get_counter().ticks()
    }
}

/// Wrapper to hold the bus allocator in a static without `static mut`.
///
/// SAFETY: This is only safe in a single-threaded (bare-metal, no OS) environment.
struct SyncBus(UnsafeCell<Option<UsbBusAllocator<UsbBus>>>);
unsafe impl Sync for SyncBus {}

static USB_BUS: SyncBus = SyncBus(UnsafeCell::new(None));

/// Move the bus allocator into static storage (call once at startup).
pub fn store_usb_bus(usb_bus: UsbBusAllocator<UsbBus>) -> &'static UsbBusAllocator<UsbBus> {
    // SAFETY: Called only once during initialization, single-threaded
    unsafe { (*USB_BUS.0.get()).insert(usb_bus) }
}

/// Wrapper to hold an Option<UsbKeyboard> in a static without `static mut`.
///
/// SAFETY: Same single-threaded guarantee as above. Closures passed to
/// `with_keyboard` never call back into it.
struct SyncKeyboard(UnsafeCell<Option<UsbKeyboard>>);
unsafe impl Sync for SyncKeyboard {}

static USB_KEYBOARD: SyncKeyboard = SyncKeyboard(UnsafeCell::new(None));

/// Store the USB keyboard (call once after initialization)
pub fn store_keyboard(keyboard: UsbKeyboard) {
    // SAFETY: Called only once during initialization, single-threaded
    unsafe {
        *USB_KEYBOARD.0.get() = Some(keyboard);
    }
}

/// Run `f` against the USB keyboard, if it has been stored.
pub fn with_keyboard<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut UsbKeyboard) -> R,
{
    // SAFETY: Single-threaded environment, no concurrent access
    unsafe { (*USB_KEYBOARD.0.get()).as_mut().map(f) }
}

/// Report sink that forwards to the stored USB keyboard.
pub struct UsbReportSink;

impl ReportSink for UsbReportSink {
    fn send_report(&mut self, report: &[u8; REPORT_LEN]) {
        if with_keyboard(|keyboard| keyboard.push_report(report)).is_none() {
            defmt::warn!("USB: keyboard not initialized, dropping report");
        }
    }
}
