use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use vkbd_core::{HostBridge, ImeSession, LayoutTable, ModifierState, SessionMode};
use vkbd_tools::{parse_script, run_script, ReplayCommand, ScriptError, SessionConfig};

type Sent = Rc<RefCell<Vec<(String, String)>>>;

fn session() -> (ImeSession, Sent) {
    let sent: Sent = Rc::default();
    let log = Rc::clone(&sent);
    let bridge = HostBridge::with_sink(move |name: &str, value: &str| {
        log.borrow_mut().push((name.to_string(), value.to_string()));
    });
    let table = Arc::new(LayoutTable::builtin().unwrap());
    (ImeSession::new(table, bridge), sent)
}

fn pair(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

#[test]
fn test_parse_every_command() {
    let script = parse_script(
        "tap a\n\
         tap U+0E31 U+0E49\n\
         press 4 1\n\
         key 52\n\
         key VK_ESCAPE\n\
         shift\nalt\nenter\nbksp\nspace\nshow\nhide\nopen\nnext\nprev\n\
         lang vie\n",
    )
    .unwrap();

    let commands: Vec<ReplayCommand> = script.into_iter().map(|line| line.command).collect();
    assert_eq!(
        commands,
        vec![
            ReplayCommand::Tap("a".to_string()),
            ReplayCommand::Tap("\u{e31}\u{e49}".to_string()),
            ReplayCommand::Press { row: 4, col: 1 },
            ReplayCommand::Key(52),
            ReplayCommand::Key(27),
            ReplayCommand::Shift,
            ReplayCommand::Alt,
            ReplayCommand::Enter,
            ReplayCommand::Backspace,
            ReplayCommand::Space,
            ReplayCommand::Show,
            ReplayCommand::Hide,
            ReplayCommand::Open,
            ReplayCommand::Next,
            ReplayCommand::Prev,
            ReplayCommand::Lang("vie".to_string()),
        ]
    );
}

#[test]
fn test_parse_errors_carry_line_numbers() {
    assert_eq!(
        parse_script("shift\njump\n"),
        Err(ScriptError::UnknownCommand {
            line: 2,
            command: "jump".to_string()
        })
    );
    assert!(matches!(
        parse_script("# x\npress 1\n"),
        Err(ScriptError::MissingArgument { line: 2, .. })
    ));
    assert!(matches!(
        parse_script("key VK_NOPE"),
        Err(ScriptError::InvalidArgument { line: 1, what: "key code", .. })
    ));
    assert_eq!(
        parse_script("tap").unwrap_err().to_string(),
        "line 1: 'tap' expects a key label"
    );
}

#[test]
fn test_replay_vietnamese_composition() {
    let (mut session, sent) = session();
    let config = SessionConfig {
        locale: Some("vi-VN".to_string()),
        ..SessionConfig::default()
    };
    assert_eq!(config.start(&mut session), SessionMode::Layout);
    assert!(session.engine().is_visible());

    let script = parse_script(
        "# grave over capital A\n\
         shift\n\
         tap A\n\
         tap U+0300\n\
         shift\n\
         enter\n\
         key 27\n",
    )
    .unwrap();
    run_script(&mut session, &script).unwrap();

    assert_eq!(
        *sent.borrow(),
        vec![
            pair("insert", "A"),
            pair("backspace", ""),
            pair("insert", "\u{c0}"),
            pair("commit", ""),
            pair("hide", ""),
        ]
    );
    assert_eq!(session.engine().modifier(), ModifierState::Normal);
}

#[test]
fn test_replay_language_switching() {
    let (mut session, sent) = session();
    SessionConfig::default().start(&mut session);
    assert_eq!(session.mode(), SessionMode::Baseline);

    let script = parse_script("key 49\nnext\nopen\ntap \u{439}\nlang xyz\nkey 8\n").unwrap();
    run_script(&mut session, &script).unwrap();

    assert_eq!(
        *sent.borrow(),
        vec![pair("insert", "1"), pair("insert", "\u{439}"), pair("hide", "")]
    );
    assert_eq!(session.active_language(), "eng");
}

#[test]
fn test_replay_stops_at_failing_line() {
    let (mut session, sent) = session();
    SessionConfig {
        language: Some("deu".to_string()),
        ..SessionConfig::default()
    }
    .start(&mut session);

    let script = parse_script("tap a\npress 7 7\ntap b\n").unwrap();
    let err = run_script(&mut session, &script).unwrap_err();

    assert!(format!("{:#}", err).contains("line 2"));
    assert_eq!(*sent.borrow(), vec![pair("insert", "a")]);
}

#[test]
fn test_keyboard_commands_need_a_layout() {
    let (mut session, _sent) = session();
    SessionConfig::default().start(&mut session);

    let script = parse_script("shift\n").unwrap();
    assert!(run_script(&mut session, &script).is_err());
}
