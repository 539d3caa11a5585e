// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Build-time platform selection.

use core::fmt;
use core::str::FromStr;

/// Target operating system the keystroke sequence is tailored for.
///
/// Chosen when the firmware is built and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Platform {
    MacOs,
    Windows,
    Ubuntu,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::MacOs, Platform::Windows, Platform::Ubuntu];

    /// Canonical lowercase name, as accepted by `from_str`.
    pub const fn name(self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Ubuntu => "ubuntu",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a platform name is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParsePlatformError;

impl fmt::Display for ParsePlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown platform, expected one of: macos, windows, ubuntu")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParsePlatformError {}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("macos") || s.eq_ignore_ascii_case("osx") {
            Ok(Platform::MacOs)
        } else if s.eq_ignore_ascii_case("windows") {
            Ok(Platform::Windows)
        } else if s.eq_ignore_ascii_case("ubuntu") {
            Ok(Platform::Ubuntu)
        } else {
            Err(ParsePlatformError)
        }
    }
}
