mod common;

use common::*;
use vkbd_core::{KeyKind, KeyPosition, ModifierState, ModifierToggle};

fn label_at(engine: &vkbd_core::KeyboardEngine, row: usize, col: usize) -> String {
    engine
        .grid()
        .and_then(|grid| grid.key(KeyPosition::new(row, col)))
        .map(|key| key.label.clone())
        .unwrap()
}

#[test]
fn test_shift_twice_restores_labels() {
    let (mut engine, log) = init_engine("vie");
    assert_eq!(engine.modifier(), ModifierState::Normal);
    assert_eq!(label_at(&engine, 1, 0), "q");

    engine.set_modifier(ModifierToggle::Shift);
    assert_eq!(engine.modifier(), ModifierState::Shift);
    assert_eq!(label_at(&engine, 1, 0), "Q");

    engine.set_modifier(ModifierToggle::Shift);
    assert_eq!(engine.modifier(), ModifierState::Normal);
    assert_eq!(label_at(&engine, 1, 0), "q");

    // Modifier changes are local re-renders only
    assert_eq!(log.len(), 0);
}

#[test]
fn test_alt_twice_restores_labels() {
    let (mut engine, _log) = init_engine("vie");
    assert_eq!(label_at(&engine, 0, 1), "\u{103}");

    engine.set_modifier(ModifierToggle::Alt);
    assert_eq!(engine.modifier(), ModifierState::Alt);
    assert_eq!(label_at(&engine, 0, 1), "1");

    engine.set_modifier(ModifierToggle::Alt);
    assert_eq!(engine.modifier(), ModifierState::Normal);
    assert_eq!(label_at(&engine, 0, 1), "\u{103}");
}

#[test]
fn test_shift_and_alt_commute() {
    let (mut first, _) = init_engine("vie");
    first.set_modifier(ModifierToggle::Shift);
    first.set_modifier(ModifierToggle::Alt);

    let (mut second, _) = init_engine("vie");
    second.set_modifier(ModifierToggle::Alt);
    second.set_modifier(ModifierToggle::Shift);

    assert_eq!(first.modifier(), ModifierState::AltShift);
    assert_eq!(second.modifier(), ModifierState::AltShift);
    assert_eq!(first.grid(), second.grid());
    assert_eq!(label_at(&first, 0, 1), "!");
}

#[test]
fn test_show_resets_modifier() {
    let (mut engine, _log) = init_engine("rus");
    engine.set_modifier(ModifierToggle::Shift);
    engine.set_modifier(ModifierToggle::Alt);
    engine.hide();

    engine.show();
    assert_eq!(engine.modifier(), ModifierState::Normal);
    assert_eq!(label_at(&engine, 1, 0), "\u{439}");
}

#[test]
fn test_modifier_keys_toggle_state() {
    let (mut engine, log) = init_engine("ukr");

    engine.tap_kind(KeyKind::Shift).unwrap();
    assert_eq!(engine.modifier(), ModifierState::Shift);
    assert_eq!(label_at(&engine, 0, 0), "\u{20b4}");

    engine.tap_kind(KeyKind::Alt).unwrap();
    assert_eq!(engine.modifier(), ModifierState::AltShift);

    engine.tap_kind(KeyKind::Shift).unwrap();
    assert_eq!(engine.modifier(), ModifierState::Alt);
    assert_eq!(log.len(), 0);
}

#[test]
fn test_control_labels() {
    let (engine, _log) = init_engine("vie");
    let grid = engine.grid().unwrap();

    let key = grid.key(KeyPosition::new(0, 13)).unwrap();
    assert_eq!(key.kind, KeyKind::Backspace);
    assert_eq!(key.label, "&#xe61f;");

    let key = grid.key(KeyPosition::new(2, 0)).unwrap();
    assert_eq!(key.kind, KeyKind::Commit);
    assert_eq!(key.label, "Enter");

    let key = grid.key(KeyPosition::new(3, 0)).unwrap();
    assert_eq!(key.kind, KeyKind::Shift);
    assert_eq!(key.label, "Shift");

    let key = grid.key(KeyPosition::new(4, 0)).unwrap();
    assert_eq!(key.kind, KeyKind::Alt);
    assert_eq!(key.label, "Ctrl + Alt");

    let key = grid.key(KeyPosition::new(4, 1)).unwrap();
    assert_eq!(key.kind, KeyKind::Insert);
    assert!(key.space_bar);
    assert_eq!(key.label, "&nbsp;");
}

#[test]
fn test_blank_keys_lose_their_kind() {
    let (mut engine, log) = init_engine("spa");
    let pos = KeyPosition::new(1, 0);
    assert_eq!(engine.grid().unwrap().key(pos).unwrap().kind, KeyKind::Insert);

    engine.set_modifier(ModifierToggle::Alt);
    let key = engine.grid().unwrap().key(pos).unwrap().clone();
    assert_eq!(key.kind, KeyKind::Spacer);
    assert_eq!(key.label, "&nbsp;");

    engine.click(pos).unwrap();
    assert_eq!(log.len(), 0);

    engine.set_modifier(ModifierToggle::Alt);
    assert_eq!(engine.grid().unwrap().key(pos).unwrap().kind, KeyKind::Insert);
}
