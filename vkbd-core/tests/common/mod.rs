//! Helpers shared by the integration tests

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use vkbd_core::{Command, HostBridge, ImeEvent, KeyboardEngine, LayoutTable};

/// Events recorded from an engine callback
#[derive(Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<ImeEvent>>>,
}

#[allow(dead_code)]
impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback that appends every event to this log
    pub fn recorder(&self) -> impl FnMut(ImeEvent) + 'static {
        let events = Rc::clone(&self.events);
        move |event| events.borrow_mut().push(event)
    }

    /// Takes the recorded events, leaving the log empty
    pub fn take(&self) -> Vec<ImeEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }
}

/// Host commands recorded from a session bridge
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct HostLog {
    commands: Rc<RefCell<Vec<(String, String)>>>,
}

#[allow(dead_code)]
impl HostLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bridge(&self) -> HostBridge {
        let commands = Rc::clone(&self.commands);
        HostBridge::with_sink(move |name: &str, value: &str| {
            commands.borrow_mut().push((name.to_string(), value.to_string()));
        })
    }

    pub fn take(&self) -> Vec<(String, String)> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }
}

/// The built-in layout table
#[allow(dead_code)]
pub fn builtin_table() -> Arc<LayoutTable> {
    Arc::new(LayoutTable::builtin().expect("built-in layouts are valid"))
}

/// Creates an engine initialized for `code`, with its event log
#[allow(dead_code)]
pub fn init_engine(code: &str) -> (KeyboardEngine, EventLog) {
    let mut engine = KeyboardEngine::new(builtin_table());
    let log = EventLog::new();
    assert!(engine.initialize(code, log.recorder()), "layout '{}' should exist", code);
    engine.show();
    (engine, log)
}

#[allow(dead_code)]
pub fn insert(text: &str) -> ImeEvent {
    ImeEvent::insert(text)
}

#[allow(dead_code)]
pub fn cmd(command: Command) -> ImeEvent {
    ImeEvent::Cmd(command)
}
