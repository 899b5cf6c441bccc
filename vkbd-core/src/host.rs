//! Bridge between engine events and the embedding host
//!
//! A host that embeds the keyboard may expose a native
//! `sendCommand(name, value)` entry point. When it does, inserts are sent as
//! `("insert", text)` and commands as `(name, "")`. Without one, events are
//! only logged.

use log::info;

use crate::engine::ImeEvent;

/// Host entry point receiving keyboard commands
pub trait CommandSink {
    fn send_command(&mut self, name: &str, value: &str);
}

impl<F> CommandSink for F
where
    F: FnMut(&str, &str),
{
    fn send_command(&mut self, name: &str, value: &str) {
        self(name, value)
    }
}

/// Forwards engine events to the host, or to the log
#[derive(Default)]
pub struct HostBridge {
    sink: Option<Box<dyn CommandSink>>,
}

impl HostBridge {
    pub fn new(sink: Option<Box<dyn CommandSink>>) -> Self {
        Self { sink }
    }

    /// A bridge without a host entry point
    pub fn console() -> Self {
        Self { sink: None }
    }

    pub fn with_sink(sink: impl CommandSink + 'static) -> Self {
        Self {
            sink: Some(Box::new(sink)),
        }
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub fn forward(&mut self, event: &ImeEvent) {
        match (&mut self.sink, event) {
            (Some(sink), ImeEvent::Insert(text)) => sink.send_command("insert", text),
            (Some(sink), ImeEvent::Cmd(cmd)) => sink.send_command(cmd.as_str(), ""),
            (None, ImeEvent::Insert(text)) => info!("IME:[INS]:{}", text),
            (None, ImeEvent::Cmd(cmd)) => info!("IME:[CMD]:{}", cmd.as_str()),
        }
    }
}
