// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Keyboard driver: held-key state plus the report sink it is sent to.

use crate::key::{Key, KeyReport, REPORT_LEN};
use crate::layout;

/// Destination for keyboard input reports (the USB HID endpoint on hardware).
///
/// Delivery is fire-and-forget: a host that is not listening simply never
/// sees the report.
pub trait ReportSink {
    fn send_report(&mut self, report: &[u8; REPORT_LEN]);
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn send_report(&mut self, report: &[u8; REPORT_LEN]) {
        (**self).send_report(report)
    }
}

/// Simulated keyboard. Every state change is sent to the sink as a report.
pub struct Keyboard<S> {
    report: KeyReport,
    sink: S,
}

impl<S: ReportSink> Keyboard<S> {
    pub fn new(sink: S) -> Self {
        Self {
            report: KeyReport::new(),
            sink,
        }
    }

    /// Key-down for `key`, keeping everything already held.
    pub fn press(&mut self, key: Key) {
        if self.report.press(key) {
            self.flush();
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("Key rollover full, dropping {:?}", key);
        }
    }

    /// Key-up for `key`.
    pub fn release(&mut self, key: Key) {
        self.report.release(key);
        self.flush();
    }

    /// Key-up for every held key and modifier.
    pub fn release_all(&mut self) {
        self.report.release_all();
        self.flush();
    }

    /// Type one character as a key-down/key-up pair.
    ///
    /// Returns `false` without sending anything if the layout has no key
    /// for `ch` or the key cannot be held because every slot is taken.
    /// Shift is only released afterwards if this call pressed it.
    pub fn write(&mut self, ch: char) -> bool {
        let Some((key, shift)) = layout::ascii_key(ch) else {
            #[cfg(feature = "defmt")]
            defmt::trace!("No key for character {=u32:#x}, skipping", ch as u32);
            return false;
        };

        let added_shift = shift && !self.report.is_held(Key::LEFT_SHIFT);
        if added_shift {
            self.report.press(Key::LEFT_SHIFT);
        }
        if !self.report.press(key) {
            if added_shift {
                self.report.release(Key::LEFT_SHIFT);
            }
            #[cfg(feature = "defmt")]
            defmt::warn!("Key rollover full, cannot type {:?}", key);
            return false;
        }
        self.flush();

        self.report.release(key);
        if added_shift {
            self.report.release(Key::LEFT_SHIFT);
        }
        self.flush();
        true
    }

    /// Type `text` character by character. Returns how many were typed.
    pub fn print(&mut self, text: &str) -> usize {
        text.chars().filter(|&ch| self.write(ch)).count()
    }

    /// Keys currently held.
    pub fn report(&self) -> &KeyReport {
        &self.report
    }

    fn flush(&mut self) {
        self.sink.send_report(&self.report.to_bytes());
    }
}
