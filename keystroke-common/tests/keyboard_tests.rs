// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tests for the keyboard driver against a recording report sink.

mod common;

use common::{empty_report, new_log, report, reports_only, RecordingSink};
use keystroke_common::{Key, Keyboard};

#[test]
fn test_each_press_sends_a_report() {
    let log = new_log();
    let mut kb = Keyboard::new(RecordingSink(log.clone()));

    kb.press(Key::LEFT_CTRL);
    kb.press(Key::LEFT_ALT);
    kb.press(Key::T);
    kb.release_all();

    assert_eq!(
        *log.borrow(),
        vec![
            report(0x01, &[]),
            report(0x05, &[]),
            report(0x05, &[0x17]),
            empty_report(),
        ]
    );
    assert!(kb.report().is_empty());
}

#[test]
fn test_release_sends_remaining_keys() {
    let log = new_log();
    let mut kb = Keyboard::new(RecordingSink(log.clone()));

    kb.press(Key::LEFT_SHIFT);
    kb.press(Key::A);
    kb.release(Key::A);

    assert_eq!(log.borrow().last(), Some(&report(0x02, &[])));
}

#[test]
fn test_rollover_press_sends_nothing() {
    let log = new_log();
    let mut kb = Keyboard::new(RecordingSink(log.clone()));
    for i in 0..6 {
        kb.press(Key(Key::A.0 + i));
    }
    let sent = log.borrow().len();

    kb.press(Key::SPACE);

    assert_eq!(log.borrow().len(), sent);
    assert!(!kb.report().is_held(Key::SPACE));
}

#[test]
fn test_write_sends_down_up_pair() {
    let log = new_log();
    let mut kb = Keyboard::new(RecordingSink(log.clone()));

    assert!(kb.write('e'));

    assert_eq!(*log.borrow(), vec![report(0, &[0x08]), empty_report()]);
}

#[test]
fn test_write_uppercase_holds_shift_for_the_key_only() {
    let log = new_log();
    let mut kb = Keyboard::new(RecordingSink(log.clone()));

    assert!(kb.write('H'));

    assert_eq!(*log.borrow(), vec![report(0x02, &[0x0B]), empty_report()]);
    assert!(kb.report().is_empty());
}

#[test]
fn test_write_keeps_held_modifiers() {
    let log = new_log();
    let mut kb = Keyboard::new(RecordingSink(log.clone()));

    kb.press(Key::LEFT_CTRL);
    kb.write('c');

    assert_eq!(
        reports_only(&log)[1..].to_vec(),
        vec![[0x01, 0, 0x06, 0, 0, 0, 0, 0], [0x01, 0, 0, 0, 0, 0, 0, 0]]
    );
}

#[test]
fn test_write_unmapped_character_is_skipped() {
    let log = new_log();
    let mut kb = Keyboard::new(RecordingSink(log.clone()));

    assert!(!kb.write('\u{2603}'));

    assert!(log.borrow().is_empty());
}

#[test]
fn test_print_types_each_character_in_order() {
    let log = new_log();
    let mut kb = Keyboard::new(RecordingSink(log.clone()));

    let typed = kb.print("ls -la");

    assert_eq!(typed, 6);
    let downs: Vec<u8> = reports_only(&log)
        .iter()
        .step_by(2)
        .map(|r| r[2])
        .collect();
    assert_eq!(downs, vec![0x0F, 0x16, 0x2C, 0x2D, 0x0F, 0x04]);
    assert_eq!(reports_only(&log).len(), 12);
}

#[test]
fn test_print_counts_only_typed_characters() {
    let log = new_log();
    let mut kb = Keyboard::new(RecordingSink(log.clone()));

    assert_eq!(kb.print("a\u{e9}b"), 2);
    assert_eq!(reports_only(&log).len(), 4);
}

#[test]
fn test_keyboard_over_borrowed_sink() {
    let log = new_log();
    let mut sink = RecordingSink(log.clone());

    {
        let mut kb = Keyboard::new(&mut sink);
        kb.press(Key::RETURN);
    }

    assert_eq!(*log.borrow(), vec![report(0, &[0x28])]);
}

#[test]
fn test_write_with_full_rollover_types_nothing() {
    let log = new_log();
    let mut kb = Keyboard::new(RecordingSink(log.clone()));
    for i in 0..6 {
        kb.press(Key(Key::A.0 + 1 + i));
    }
    let before = kb.report().clone();
    let sent = log.borrow().len();

    assert!(!kb.write('a'));
    assert!(!kb.write('A'));

    assert_eq!(log.borrow().len(), sent);
    assert_eq!(*kb.report(), before);
}

#[test]
fn test_print_does_not_count_dropped_characters() {
    let log = new_log();
    let mut kb = Keyboard::new(RecordingSink(log.clone()));
    for i in 0..6 {
        kb.press(Key(Key::A.0 + 1 + i));
    }

    assert_eq!(kb.print("aa"), 0);
}

#[test]
fn test_write_uppercase_keeps_shift_held_by_caller() {
    let log = new_log();
    let mut kb = Keyboard::new(RecordingSink(log.clone()));

    kb.press(Key::LEFT_SHIFT);
    assert!(kb.write('A'));

    assert!(kb.report().is_held(Key::LEFT_SHIFT));
    assert_eq!(
        reports_only(&log)[1..].to_vec(),
        vec![[0x02, 0, 0x04, 0, 0, 0, 0, 0], [0x02, 0, 0, 0, 0, 0, 0, 0]]
    );
}
