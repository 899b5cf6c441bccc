//! Events emitted by the engine

use std::fmt;

/// Commands sent to the host text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Delete one character before the cursor
    Backspace,
    /// Commit the current edit
    Commit,
    /// Hide the keyboard chrome
    Hide,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Backspace => "backspace",
            Command::Commit => "commit",
            Command::Hide => "hide",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "backspace" => Some(Command::Backspace),
            "commit" => Some(Command::Commit),
            "hide" => Some(Command::Hide),
            _ => None,
        }
    }
}

/// An event passed to the engine's callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImeEvent {
    /// Insert text at the cursor
    Insert(String),
    /// Run a host command
    Cmd(Command),
}

impl ImeEvent {
    /// Creates an insert event
    pub fn insert(text: impl Into<String>) -> Self {
        ImeEvent::Insert(text.into())
    }

    /// Event kind: "insert" or "cmd"
    pub fn kind(&self) -> &'static str {
        match self {
            ImeEvent::Insert(_) => "insert",
            ImeEvent::Cmd(_) => "cmd",
        }
    }

    /// Inserted text or command name
    pub fn payload(&self) -> &str {
        match self {
            ImeEvent::Insert(text) => text,
            ImeEvent::Cmd(cmd) => cmd.as_str(),
        }
    }
}

impl fmt::Display for ImeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind(), self.payload())
    }
}
