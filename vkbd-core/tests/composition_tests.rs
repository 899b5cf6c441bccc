mod common;

use common::*;
use pretty_assertions::assert_eq;
use vkbd_core::{Command, KeyKind, KeyPosition, ModifierToggle};

#[test]
fn test_vietnamese_grave_composes_with_previous_char() {
    let (mut engine, log) = init_engine("vie");

    engine.set_modifier(ModifierToggle::Shift);
    engine.tap("A").unwrap();
    assert_eq!(engine.composed_text(), "A");
    assert_eq!(log.take(), vec![insert("A")]);

    engine.tap("\u{300}").unwrap();
    assert_eq!(log.take(), vec![cmd(Command::Backspace), insert("\u{c0}")]);
    assert_eq!(engine.composed_text(), "\u{c0}");
}

#[test]
fn test_vietnamese_acute_on_lowercase() {
    let (mut engine, log) = init_engine("vie");

    engine.tap("a").unwrap();
    engine.tap("\u{301}").unwrap();

    assert_eq!(
        log.take(),
        vec![insert("a"), cmd(Command::Backspace), insert("\u{e1}")]
    );
    assert_eq!(engine.composed_text(), "\u{e1}");
}

#[test]
fn test_mark_without_rule_is_inserted_as_is() {
    let (mut engine, log) = init_engine("vie");

    engine.tap("\u{300}").unwrap();
    engine.tap("q").unwrap();
    engine.tap("\u{300}").unwrap();

    assert_eq!(log.take(), vec![insert("\u{300}"), insert("q"), insert("\u{300}")]);
    assert_eq!(engine.composed_text(), "\u{300}q\u{300}");
}

#[test]
fn test_only_two_char_window_is_used() {
    let (mut engine, log) = init_engine("vie");

    // "a" + acute composes, but the composed char + another acute has no rule
    engine.tap("a").unwrap();
    engine.tap("\u{301}").unwrap();
    log.take();

    engine.tap("\u{301}").unwrap();
    assert_eq!(log.take(), vec![insert("\u{301}")]);
    assert_eq!(engine.composed_text(), "\u{e1}\u{301}");
}

#[test]
fn test_spanish_dead_key_before_letter() {
    let (mut engine, log) = init_engine("spa");

    engine.tap("`").unwrap();
    engine.set_modifier(ModifierToggle::Shift);
    engine.tap("A").unwrap();

    assert_eq!(
        log.take(),
        vec![insert("`"), cmd(Command::Backspace), insert("\u{c0}")]
    );
    assert_eq!(engine.composed_text(), "\u{c0}");
}

#[test]
fn test_german_dead_key_followed_by_space() {
    let (mut engine, log) = init_engine("deu");

    engine.set_modifier(ModifierToggle::Shift);
    engine.tap("`").unwrap();
    engine.tap(" ").unwrap();

    assert_eq!(log.take(), vec![insert("`"), cmd(Command::Backspace), insert("`")]);
    assert_eq!(engine.composed_text(), "`");
}

#[test]
fn test_entity_labels_insert_literals() {
    let (mut engine, log) = init_engine("spa");
    engine.set_modifier(ModifierToggle::Shift);

    let pos = engine.grid().unwrap().find("&").unwrap();
    assert_eq!(engine.grid().unwrap().key(pos).unwrap().label, "&amp;");

    engine.click(pos).unwrap();
    assert_eq!(log.take(), vec![insert("&")]);
    assert_eq!(engine.composed_text(), "&");
}

#[test]
fn test_space_bar_inserts_space() {
    let (mut engine, log) = init_engine("rus");
    engine.click(KeyPosition::new(4, 1)).unwrap();
    assert_eq!(log.take(), vec![insert(" ")]);
}

#[test]
fn test_backspace_drops_one_char() {
    let (mut engine, log) = init_engine("tha");
    engine.set_modifier(ModifierToggle::Shift);

    engine.click(KeyPosition::new(3, 5)).unwrap();
    assert_eq!(log.take(), vec![insert("\u{e31}\u{e49}")]);
    assert_eq!(engine.composed_text(), "\u{e31}\u{e49}");

    engine.tap_kind(KeyKind::Backspace).unwrap();
    assert_eq!(log.take(), vec![cmd(Command::Backspace)]);
    assert_eq!(engine.composed_text(), "\u{e31}");
}

#[test]
fn test_backspace_on_empty_text_still_reaches_host() {
    let (mut engine, log) = init_engine("vie");

    engine.tap_kind(KeyKind::Backspace).unwrap();
    assert_eq!(log.take(), vec![cmd(Command::Backspace)]);
    assert_eq!(engine.composed_text(), "");
}

#[test]
fn test_commit_clears_composed_text() {
    let (mut engine, log) = init_engine("vie");

    for letter in ["a", "b", "c"] {
        engine.tap(letter).unwrap();
    }
    assert_eq!(engine.composed_text(), "abc");
    log.take();

    engine.tap_kind(KeyKind::Commit).unwrap();
    assert_eq!(log.take(), vec![cmd(Command::Commit)]);
    assert_eq!(engine.composed_text(), "");

    // No composition across a commit
    engine.tap("\u{300}").unwrap();
    assert_eq!(log.take(), vec![insert("\u{300}")]);
}
