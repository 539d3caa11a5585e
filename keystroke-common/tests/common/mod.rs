// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Recording fakes shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use keystroke_common::{ReportSink, REPORT_LEN};

/// Something the fakes observed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observed {
    Report([u8; REPORT_LEN]),
    DelayMs(u32),
}

pub type Log = Rc<RefCell<Vec<Observed>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct RecordingSink(pub Log);

impl ReportSink for RecordingSink {
    fn send_report(&mut self, report: &[u8; REPORT_LEN]) {
        self.0.borrow_mut().push(Observed::Report(*report));
    }
}

/// Records delays in milliseconds; sub-millisecond delays are rounded up.
pub struct RecordingDelay(pub Log);

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0
            .borrow_mut()
            .push(Observed::DelayMs(ns.div_ceil(1_000_000)));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(Observed::DelayMs(ms));
    }
}

pub fn report(modifiers: u8, keys: &[u8]) -> Observed {
    let mut buf = [0u8; REPORT_LEN];
    buf[0] = modifiers;
    buf[2..2 + keys.len()].copy_from_slice(keys);
    Observed::Report(buf)
}

pub fn empty_report() -> Observed {
    report(0, &[])
}

pub fn reports_only(log: &Log) -> Vec<[u8; REPORT_LEN]> {
    log.borrow()
        .iter()
        .filter_map(|o| match o {
            Observed::Report(r) => Some(*r),
            Observed::DelayMs(_) => None,
        })
        .collect()
}
