// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Blocking delay that keeps the USB device serviced while it waits.

use crate::usb;
use embedded_hal::delay::DelayNs;
use rp2040_hal::Timer;

pub struct PollingDelay {
    timer: Timer,
}

impl PollingDelay {
    pub fn new(timer: Timer) -> Self {
        Self { timer }
    }

    fn wait_us(&mut self, us: u64) {
        let start = self.timer.get_counter().ticks();
        while self.timer.get_counter().ticks() - start < us {
            usb::with_keyboard(|keyboard| keyboard.poll());
        }
    }
}

impl DelayNs for PollingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.wait_us(u64::from(ns.div_ceil(1_000)));
    }

    fn delay_us(&mut self, us: u32) {
        self.wait_us(u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait_us(u64::from(ms) * 1_000);
    }
}
