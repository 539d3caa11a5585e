// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and logic for the keystroke emitter firmware.
//!
//! This crate supports both `no_std` (embedded) and `std` (host) environments:
//! - Default: `no_std` mode for embedded targets
//! - `std` feature: Enables `std` support for host tools and tests
//! - `defmt` feature: Enables defmt logging and `defmt::Format` derives

#![cfg_attr(not(feature = "std"), no_std)]

pub mod emitter;
pub mod key;
pub mod keyboard;
pub mod layout;
pub mod platform;

// Re-export commonly used types
pub use emitter::{KeystrokeEmitter, COMMAND, CYCLE_DELAY_MS, TERMINAL_SETTLE_MS};
pub use key::{Key, KeyReport, MAX_HELD_KEYS, REPORT_LEN};
pub use keyboard::{Keyboard, ReportSink};
pub use platform::{ParsePlatformError, Platform};
