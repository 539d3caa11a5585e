// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! HID key usages and the held-key report.
//!
//! The report is the 8-byte boot-protocol keyboard input report:
//! ```text
//! Byte 0: Modifier bitfield (bit n = usage 0xE0 + n)
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 held key usages, unused slots are 0x00
//! ```

use heapless::Vec;

/// Boot-protocol keyboard report length in bytes.
pub const REPORT_LEN: usize = 8;

/// Maximum number of simultaneously held non-modifier keys.
pub const MAX_HELD_KEYS: usize = 6;

const MODIFIER_FIRST: u8 = 0xE0;
const MODIFIER_LAST: u8 = 0xE7;

/// A usage code from the HID Keyboard/Keypad page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Key(pub u8);

impl Key {
    pub const A: Key = Key(0x04);
    pub const T: Key = Key(0x17);
    pub const DIGIT_1: Key = Key(0x1E);
    pub const DIGIT_0: Key = Key(0x27);
    pub const RETURN: Key = Key(0x28);
    pub const ESCAPE: Key = Key(0x29);
    pub const BACKSPACE: Key = Key(0x2A);
    pub const TAB: Key = Key(0x2B);
    pub const SPACE: Key = Key(0x2C);
    pub const MINUS: Key = Key(0x2D);
    pub const EQUAL: Key = Key(0x2E);
    pub const LEFT_BRACKET: Key = Key(0x2F);
    pub const RIGHT_BRACKET: Key = Key(0x30);
    pub const BACKSLASH: Key = Key(0x31);
    pub const SEMICOLON: Key = Key(0x33);
    pub const QUOTE: Key = Key(0x34);
    pub const GRAVE: Key = Key(0x35);
    pub const COMMA: Key = Key(0x36);
    pub const PERIOD: Key = Key(0x37);
    pub const SLASH: Key = Key(0x38);

    pub const LEFT_CTRL: Key = Key(0xE0);
    pub const LEFT_SHIFT: Key = Key(0xE1);
    pub const LEFT_ALT: Key = Key(0xE2);
    pub const LEFT_GUI: Key = Key(0xE3);
    pub const RIGHT_CTRL: Key = Key(0xE4);
    pub const RIGHT_SHIFT: Key = Key(0xE5);
    pub const RIGHT_ALT: Key = Key(0xE6);
    pub const RIGHT_GUI: Key = Key(0xE7);

    pub const fn usage(self) -> u8 {
        self.0
    }

    pub const fn is_modifier(self) -> bool {
        self.0 >= MODIFIER_FIRST && self.0 <= MODIFIER_LAST
    }

    /// Bit in the modifier byte, or `None` for ordinary keys.
    pub const fn modifier_bit(self) -> Option<u8> {
        if self.is_modifier() {
            Some(1 << (self.0 - MODIFIER_FIRST))
        } else {
            None
        }
    }
}

/// The set of keys the keyboard currently reports as held down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyReport {
    modifiers: u8,
    keys: Vec<Key, MAX_HELD_KEYS>,
}

impl KeyReport {
    pub const fn new() -> Self {
        Self {
            modifiers: 0,
            keys: Vec::new(),
        }
    }

    /// Mark `key` as held.
    ///
    /// Returns `false` if all key slots are taken and `key` is not already
    /// held. The report is left unchanged in that case.
    pub fn press(&mut self, key: Key) -> bool {
        if let Some(bit) = key.modifier_bit() {
            self.modifiers |= bit;
            return true;
        }
        if self.keys.contains(&key) {
            return true;
        }
        self.keys.push(key).is_ok()
    }

    /// Mark `key` as no longer held. Returns `true` if it was held.
    pub fn release(&mut self, key: Key) -> bool {
        if let Some(bit) = key.modifier_bit() {
            let was_held = self.modifiers & bit != 0;
            self.modifiers &= !bit;
            return was_held;
        }
        match self.keys.iter().position(|&k| k == key) {
            Some(idx) => {
                self.keys.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn release_all(&mut self) {
        self.modifiers = 0;
        self.keys.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers == 0 && self.keys.is_empty()
    }

    pub fn modifiers(&self) -> u8 {
        self.modifiers
    }

    /// Held non-modifier keys in press order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key.modifier_bit() {
            Some(bit) => self.modifiers & bit != 0,
            None => self.keys.contains(&key),
        }
    }

    /// Serialise into a boot-protocol input report.
    pub fn to_bytes(&self) -> [u8; REPORT_LEN] {
        let mut buf = [0u8; REPORT_LEN];
        buf[0] = self.modifiers;
        for (slot, key) in buf[2..].iter_mut().zip(self.keys.iter()) {
            *slot = key.usage();
        }
        buf
    }
}
