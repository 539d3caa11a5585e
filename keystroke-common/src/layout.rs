// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! US keyboard layout for typing ASCII text.

use crate::key::Key;

/// Map an ASCII character to the key that produces it on a US layout.
///
/// The returned flag is `true` when Shift must be held as well.
/// Returns `None` for characters the layout cannot type.
pub fn ascii_key(ch: char) -> Option<(Key, bool)> {
    let key = match ch {
        'a'..='z' => return Some((letter(ch as u8 - b'a'), false)),
        'A'..='Z' => return Some((letter(ch as u8 - b'A'), true)),
        '1'..='9' => return Some((Key(Key::DIGIT_1.0 + (ch as u8 - b'1')), false)),
        '0' => return Some((Key::DIGIT_0, false)),
        '\n' => (Key::RETURN, false),
        '\t' => (Key::TAB, false),
        '\x08' => (Key::BACKSPACE, false),
        ' ' => (Key::SPACE, false),
        '-' => (Key::MINUS, false),
        '_' => (Key::MINUS, true),
        '=' => (Key::EQUAL, false),
        '+' => (Key::EQUAL, true),
        '[' => (Key::LEFT_BRACKET, false),
        '{' => (Key::LEFT_BRACKET, true),
        ']' => (Key::RIGHT_BRACKET, false),
        '}' => (Key::RIGHT_BRACKET, true),
        '\\' => (Key::BACKSLASH, false),
        '|' => (Key::BACKSLASH, true),
        ';' => (Key::SEMICOLON, false),
        ':' => (Key::SEMICOLON, true),
        '\'' => (Key::QUOTE, false),
        '"' => (Key::QUOTE, true),
        '`' => (Key::GRAVE, false),
        '~' => (Key::GRAVE, true),
        ',' => (Key::COMMA, false),
        '<' => (Key::COMMA, true),
        '.' => (Key::PERIOD, false),
        '>' => (Key::PERIOD, true),
        '/' => (Key::SLASH, false),
        '?' => (Key::SLASH, true),
        _ => return shifted_digit(ch).map(|key| (key, true)),
    };
    Some(key)
}

fn letter(offset: u8) -> Key {
    Key(Key::A.0 + offset)
}

// Symbols on the digit row, in order from '1' to '0'.
const DIGIT_ROW_SYMBOLS: [char; 10] = ['!', '@', '#', '$', '%', '^', '&', '*', '(', ')'];

fn shifted_digit(ch: char) -> Option<Key> {
    DIGIT_ROW_SYMBOLS
        .iter()
        .position(|&c| c == ch)
        .map(|idx| Key(Key::DIGIT_1.0 + idx as u8))
}
