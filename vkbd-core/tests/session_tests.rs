mod common;

use common::*;
use pretty_assertions::assert_eq;
use vkbd_core::session::BASELINE_LANGUAGE;
use vkbd_core::{HostBridge, ImeSession, KeyKind, ModifierToggle, SessionMode};

fn session() -> (ImeSession, HostLog) {
    let host = HostLog::new();
    let session = ImeSession::new(builtin_table(), host.bridge());
    (session, host)
}

fn pair(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

#[test]
fn test_carousel_order() {
    let (session, _host) = session();
    let codes: Vec<&str> = session.languages().iter().map(|l| l.code.as_str()).collect();
    assert_eq!(
        codes,
        vec!["eng", "rus", "ukr", "vie", "tha", "spa", "por", "deu", "ara"]
    );
    assert_eq!(session.languages()[0].name, "English");
    assert_eq!(session.mode(), SessionMode::Baseline);
}

#[test]
fn test_start_from_host_locale() {
    let (mut session, _host) = session();
    assert_eq!(session.start("ru-RU"), SessionMode::Layout);
    assert_eq!(session.active_language(), "rus");
    assert_eq!(session.active_index(), 1);
    assert!(session.engine().is_initialized());
    assert!(!session.engine().is_visible());

    assert_eq!(session.start("pt-PT"), SessionMode::Layout);
    assert_eq!(session.active_language(), "por");
}

#[test]
fn test_unmapped_locale_uses_baseline() {
    let (mut session, _host) = session();
    assert_eq!(session.start("en-US"), SessionMode::Baseline);
    assert_eq!(session.active_language(), BASELINE_LANGUAGE);
    assert!(!session.engine().is_initialized());
    assert!(!session.open_keyboard());
}

#[test]
fn test_unknown_language_falls_back_to_baseline() {
    let (mut session, _host) = session();
    session.select_language("vie");
    assert_eq!(session.mode(), SessionMode::Layout);

    assert_eq!(session.select_language("xyz"), SessionMode::Baseline);
    assert_eq!(session.active_index(), 0);
    assert!(!session.engine().is_initialized());
}

#[test]
fn test_next_and_previous_stop_at_the_ends() {
    let (mut session, _host) = session();
    session.start("en");

    assert!(!session.previous());
    assert!(session.next());
    assert_eq!(session.active_language(), "rus");
    assert!(session.previous());
    assert_eq!(session.active_language(), BASELINE_LANGUAGE);

    let last = session.languages().len() - 1;
    session.select(last);
    assert_eq!(session.active_language(), "ara");
    assert!(!session.next());
    assert_eq!(session.active_language(), "ara");
}

#[test]
fn test_events_reach_the_host() {
    let (mut session, host) = session();
    session.start("vi");
    assert!(session.open_keyboard());
    assert!(session.engine().is_visible());

    let engine = session.engine_mut();
    engine.set_modifier(ModifierToggle::Shift);
    engine.tap("A").unwrap();
    engine.tap("\u{300}").unwrap();
    engine.tap_kind(KeyKind::Commit).unwrap();

    assert_eq!(
        host.take(),
        vec![
            pair("insert", "A"),
            pair("backspace", ""),
            pair("insert", "\u{c0}"),
            pair("commit", ""),
        ]
    );

    assert!(session.key_down(27));
    assert_eq!(host.take(), vec![pair("hide", "")]);
}

#[test]
fn test_baseline_passthrough_reaches_the_host() {
    let (mut session, host) = session();
    session.start("en-GB");

    assert!(session.key_down(57));
    assert!(session.key_down(8));
    assert!(!session.key_down(65));
    assert_eq!(host.take(), vec![pair("insert", "9"), pair("hide", "")]);
}

#[test]
fn test_switching_language_resets_keyboard() {
    let (mut session, host) = session();
    session.start("de-AT");
    assert_eq!(session.active_language(), "deu");
    session.open_keyboard();
    session.engine_mut().tap("a").unwrap();

    assert!(session.next());
    assert_eq!(session.active_language(), "ara");
    assert_eq!(session.engine().composed_text(), "");
    assert!(!session.engine().is_visible());
    assert_eq!(host.take(), vec![pair("insert", "a")]);

    session.hide_keyboard();
    assert!(!session.engine().is_visible());
}

#[test]
fn test_console_bridge_session() {
    let mut session = ImeSession::new(builtin_table(), HostBridge::console());
    session.start("th");
    session.open_keyboard();
    assert!(session.key_down(48));
    assert_eq!(session.active_language(), "tha");
}

#[test]
fn test_falling_back_to_baseline_hides_the_keyboard() {
    let (mut session, host) = session();
    session.start("uk-UA");
    assert!(session.open_keyboard());
    assert!(session.engine().is_visible());

    assert_eq!(session.select_language("xyz"), SessionMode::Baseline);
    assert!(!session.engine().is_initialized());
    assert!(!session.engine().is_visible());
    assert!(session.engine().grid().is_none());

    // Passthrough keys now go straight to the host
    assert!(session.key_down(50));
    assert_eq!(host.take(), vec![pair("insert", "2")]);
}
