mod common;

use common::*;
use vkbd_core::keycode::{code_from_name, VK_ESCAPE};
use vkbd_core::Command;

#[test]
fn test_digit_key_inserts_digit() {
    let (mut engine, log) = init_engine("rus");

    assert!(engine.key_down(52));
    assert_eq!(log.take(), vec![insert("4")]);

    assert!(engine.key_down(code_from_name("VK_0").unwrap()));
    assert_eq!(log.take(), vec![insert("0")]);
}

#[test]
fn test_escape_hides() {
    let (mut engine, log) = init_engine("rus");

    assert!(engine.key_down(VK_ESCAPE));
    assert!(engine.key_down(8));
    assert!(engine.key_down(462));
    assert_eq!(log.take(), vec![cmd(Command::Hide); 3]);
}

#[test]
fn test_other_keys_are_ignored() {
    let (mut engine, log) = init_engine("rus");

    assert!(!engine.key_down(13));
    assert!(!engine.key_down(65));
    assert!(!engine.key_down(461));
    assert_eq!(log.len(), 0);
}

#[test]
fn test_passthrough_does_not_touch_composed_text() {
    let (mut engine, _log) = init_engine("vie");
    engine.tap("a").unwrap();
    engine.key_down(53);
    assert_eq!(engine.composed_text(), "a");
}
