//! Replay scripts
//!
//! One command per line; blank lines and lines starting with `#` are
//! skipped. Labels given to `tap` may be written literally or as `U+XXXX`
//! code points, several of which are concatenated into one label.

use anyhow::Context;
use log::{debug, info};
use thiserror::Error;
use vkbd_core::keycode::parse_key_code;
use vkbd_core::{Error, ImeSession, KeyKind, KeyPosition, KeyboardEngine, ModifierToggle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayCommand {
    /// Click the first insert key with this label
    Tap(String),
    /// Click the key at a grid position
    Press { row: usize, col: usize },
    /// Global key press by code
    Key(u16),
    Shift,
    Alt,
    Enter,
    Backspace,
    Space,
    Show,
    Hide,
    /// The baseline pad's change key
    Open,
    Next,
    Prev,
    Lang(String),
}

/// A parsed command with its source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ReplayCommand,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    MissingArgument {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid {what} '{value}'")]
    InvalidArgument {
        line: usize,
        what: &'static str,
        value: String,
    },
}

pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut script = Vec::new();

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let mut words = text.split_whitespace();
        let Some(name) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();
        let command = parse_command(line, name, &args)?;
        script.push(ScriptLine { line, command });
    }

    Ok(script)
}

fn parse_command(line: usize, name: &str, args: &[&str]) -> Result<ReplayCommand, ScriptError> {
    let missing = |expected| ScriptError::MissingArgument {
        line,
        command: name.to_string(),
        expected,
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "tap" => {
            if args.is_empty() {
                return Err(missing("a key label"));
            }
            let mut label = String::new();
            for arg in args {
                label.push_str(&parse_label(line, arg)?);
            }
            ReplayCommand::Tap(label)
        }
        "press" => {
            let [row, col] = args else {
                return Err(missing("a row and a column"));
            };
            ReplayCommand::Press {
                row: parse_index(line, "row", row)?,
                col: parse_index(line, "column", col)?,
            }
        }
        "key" => {
            let [code] = args else {
                return Err(missing("a key code or VK_ name"));
            };
            let code = parse_key_code(code).ok_or_else(|| ScriptError::InvalidArgument {
                line,
                what: "key code",
                value: code.to_string(),
            })?;
            ReplayCommand::Key(code)
        }
        "lang" => {
            let [code] = args else {
                return Err(missing("a language code"));
            };
            ReplayCommand::Lang(code.to_string())
        }
        "shift" => ReplayCommand::Shift,
        "alt" => ReplayCommand::Alt,
        "enter" => ReplayCommand::Enter,
        "bksp" => ReplayCommand::Backspace,
        "space" => ReplayCommand::Space,
        "show" => ReplayCommand::Show,
        "hide" => ReplayCommand::Hide,
        "open" => ReplayCommand::Open,
        "next" => ReplayCommand::Next,
        "prev" => ReplayCommand::Prev,
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: name.to_string(),
            })
        }
    };

    Ok(command)
}

fn parse_label(line: usize, arg: &str) -> Result<String, ScriptError> {
    let Some(hex) = arg.strip_prefix("U+").or_else(|| arg.strip_prefix("u+")) else {
        return Ok(arg.to_string());
    };

    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
        .ok_or_else(|| ScriptError::InvalidArgument {
            line,
            what: "code point",
            value: arg.to_string(),
        })
}

fn parse_index(line: usize, what: &'static str, value: &str) -> Result<usize, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidArgument {
        line,
        what,
        value: value.to_string(),
    })
}

/// Runs every command against the session, stopping at the first failure
pub fn run_script(session: &mut ImeSession, script: &[ScriptLine]) -> anyhow::Result<()> {
    for step in script {
        run_command(session, &step.command)
            .with_context(|| format!("line {}: {:?} failed", step.line, step.command))?;
    }
    Ok(())
}

pub fn run_command(session: &mut ImeSession, command: &ReplayCommand) -> vkbd_core::Result<()> {
    debug!("Replaying {:?}", command);

    match command {
        ReplayCommand::Tap(label) => engine(session)?.tap(label)?,
        ReplayCommand::Press { row, col } => engine(session)?.click(KeyPosition::new(*row, *col))?,
        ReplayCommand::Key(code) => {
            if !session.key_down(*code) {
                debug!("Key {} has no binding", code);
            }
        }
        ReplayCommand::Shift => engine(session)?.set_modifier(ModifierToggle::Shift),
        ReplayCommand::Alt => engine(session)?.set_modifier(ModifierToggle::Alt),
        ReplayCommand::Enter => engine(session)?.tap_kind(KeyKind::Commit)?,
        ReplayCommand::Backspace => engine(session)?.tap_kind(KeyKind::Backspace)?,
        ReplayCommand::Space => engine(session)?.tap(" ")?,
        ReplayCommand::Show => engine(session)?.show(),
        ReplayCommand::Hide => session.hide_keyboard(),
        ReplayCommand::Open => {
            if !session.open_keyboard() {
                info!("Keyboard not opened, '{}' is the baseline", session.active_language());
            }
        }
        ReplayCommand::Next => {
            session.next();
        }
        ReplayCommand::Prev => {
            session.previous();
        }
        ReplayCommand::Lang(code) => {
            session.select_language(code);
        }
    }

    Ok(())
}

fn engine(session: &mut ImeSession) -> vkbd_core::Result<&mut KeyboardEngine> {
    if !session.engine().is_initialized() {
        return Err(Error::NotInitialized);
    }
    Ok(session.engine_mut())
}
