// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! The keystroke emitter cycle.
//!
//! Once per cycle the emitter waits [`CYCLE_DELAY_MS`] and then performs the
//! sequence for its platform. Only Ubuntu has one:
//! - Ctrl+Alt+T to open a terminal
//! - wait [`TERMINAL_SETTLE_MS`] for the window to appear
//! - type [`COMMAND`] and press Return

use crate::key::Key;
use crate::keyboard::{Keyboard, ReportSink};
use crate::platform::Platform;
use embedded_hal::delay::DelayNs;

/// Delay at the start of every cycle.
pub const CYCLE_DELAY_MS: u32 = 1000;

/// Delay between opening the terminal and typing into it.
pub const TERMINAL_SETTLE_MS: u32 = 1000;

/// Command typed into the terminal.
pub const COMMAND: &str = "echo lol";

pub struct KeystrokeEmitter<S, D> {
    keyboard: Keyboard<S>,
    delay: D,
    platform: Platform,
}

impl<S: ReportSink, D: DelayNs> KeystrokeEmitter<S, D> {
    pub fn new(sink: S, delay: D, platform: Platform) -> Self {
        Self {
            keyboard: Keyboard::new(sink),
            delay,
            platform,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn keyboard(&self) -> &Keyboard<S> {
        &self.keyboard
    }

    /// Run cycles until power-off.
    pub fn run_forever(&mut self) -> ! {
        loop {
            self.run_cycle();
        }
    }

    /// Wait one cycle delay, then emit this platform's sequence.
    pub fn run_cycle(&mut self) {
        self.delay.delay_ms(CYCLE_DELAY_MS);

        match self.platform {
            Platform::MacOs => {}
            Platform::Windows => {}
            Platform::Ubuntu => self.open_terminal_and_run(),
        }
    }

    fn open_terminal_and_run(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("Emitter: opening terminal");

        self.keyboard.press(Key::LEFT_CTRL);
        self.keyboard.press(Key::LEFT_ALT);
        self.keyboard.press(Key::T);
        self.keyboard.release_all();

        self.delay.delay_ms(TERMINAL_SETTLE_MS);

        let _typed = self.keyboard.print(COMMAND);
        #[cfg(feature = "defmt")]
        defmt::trace!("Emitter: typed {} chars", _typed);

        self.keyboard.press(Key::RETURN);
        self.keyboard.release_all();
    }
}
