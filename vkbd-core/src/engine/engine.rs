use std::sync::Arc;

use log::{debug, info, warn};

use crate::{
    Error, Result,
    layout::{Layout, LayoutTable, ModifierState, ModifierToggle},
};
use super::{
    input::translate_key,
    keycap::{KeyGrid, KeyKind, KeyPosition},
    Command, EngineState, ImeEvent,
};

/// Callback receiving every event the engine emits
pub type EventCallback = Box<dyn FnMut(ImeEvent)>;

/// The on-screen keyboard engine.
///
/// One engine serves one embedding context. The layout table is shared
/// read-only; the modifier state and composed text are private to the
/// instance.
pub struct KeyboardEngine {
    table: Arc<LayoutTable>,
    /// Active layout
    layout: Option<Arc<Layout>>,
    /// Rendered keys, present once initialized
    grid: Option<KeyGrid>,
    state: EngineState,
    visible: bool,
    on_event: Option<EventCallback>,
}

impl KeyboardEngine {
    /// Create a new engine over a layout table
    pub fn new(table: Arc<LayoutTable>) -> Self {
        Self {
            table,
            layout: None,
            grid: None,
            state: EngineState::new(),
            visible: false,
            on_event: None,
        }
    }

    pub fn table(&self) -> &Arc<LayoutTable> {
        &self.table
    }

    /// Renders the layout for `code` and registers the event callback.
    ///
    /// Any previous grid is torn down first. Returns false, without
    /// rendering anything, when no layout is registered for `code`. The
    /// new keyboard starts hidden in the normal state.
    pub fn initialize<F>(&mut self, code: &str, on_event: F) -> bool
    where
        F: FnMut(ImeEvent) + 'static,
    {
        self.teardown();

        let Some(layout) = self.table.get(code).cloned() else {
            warn!("No keyboard layout registered for language '{}'", code);
            return false;
        };

        self.grid = Some(KeyGrid::build(&layout, ModifierState::Normal));
        info!(
            "Keyboard initialized for '{}' ({}), {} keys",
            layout.code(),
            layout.name(),
            self.grid.as_ref().map_or(0, KeyGrid::key_count)
        );
        self.layout = Some(layout);
        self.on_event = Some(Box::new(on_event));
        true
    }

    /// Removes the grid and callback, leaving the engine uninitialized
    pub fn teardown(&mut self) {
        self.layout = None;
        self.grid = None;
        self.on_event = None;
        self.visible = false;
        self.state.reset();
    }

    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    /// Shows the keyboard, back in the normal state
    pub fn show(&mut self) {
        if !self.is_initialized() {
            return;
        }
        self.state.set_modifier(ModifierState::Normal);
        self.relabel();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Applies a modifier toggle and relabels every key
    pub fn set_modifier(&mut self, toggle: ModifierToggle) {
        if !self.is_initialized() {
            return;
        }
        let before = self.state.modifier();
        let after = self.state.toggle(toggle);
        debug!("Modifier {:?}: {} -> {}", toggle, before, after);
        self.relabel();
    }

    pub fn modifier(&self) -> ModifierState {
        self.state.modifier()
    }

    /// Handles a click on the key at `pos`
    pub fn click(&mut self, pos: KeyPosition) -> Result<()> {
        let grid = self.grid.as_ref().ok_or(Error::NotInitialized)?;
        let key = grid.key(pos).ok_or(Error::NoSuchKey {
            row: pos.row,
            col: pos.col,
        })?;
        let kind = key.kind;
        let literal = key.literal().to_string();

        match kind {
            KeyKind::Insert => self.insert_literal(literal),
            KeyKind::Backspace => {
                self.emit(ImeEvent::Cmd(Command::Backspace));
                self.state.composed_mut().pop();
            }
            KeyKind::Commit => {
                self.state.composed_mut().clear();
                self.emit(ImeEvent::Cmd(Command::Commit));
            }
            KeyKind::Shift => self.set_modifier(ModifierToggle::Shift),
            KeyKind::Alt => self.set_modifier(ModifierToggle::Alt),
            KeyKind::Spacer => {}
        }

        Ok(())
    }

    /// Clicks the first insert key labelled `text`
    pub fn tap(&mut self, text: &str) -> Result<()> {
        let grid = self.grid.as_ref().ok_or(Error::NotInitialized)?;
        let pos = grid
            .find(text)
            .ok_or_else(|| Error::NoSuchLabel(text.to_string()))?;
        self.click(pos)
    }

    /// Clicks the first key of the given kind
    pub fn tap_kind(&mut self, kind: KeyKind) -> Result<()> {
        let grid = self.grid.as_ref().ok_or(Error::NotInitialized)?;
        let pos = grid
            .find_kind(kind)
            .ok_or_else(|| Error::NoSuchLabel(format!("{:?}", kind)))?;
        self.click(pos)
    }

    /// Handles a key press from outside the grid.
    ///
    /// Returns whether the code produced an event; always false before a
    /// successful `initialize`.
    pub fn key_down(&mut self, code: u16) -> bool {
        if self.on_event.is_none() {
            return false;
        }
        match translate_key(code) {
            Some(event) => {
                self.emit(event);
                true
            }
            None => false,
        }
    }

    fn insert_literal(&mut self, mut literal: String) {
        // Only the previous character and the new literal are ever combined
        let mut window = String::new();
        if let Some(prev) = self.state.composed().last_char() {
            window.push(prev);
        }
        window.push_str(&literal);

        let composed = self
            .layout
            .as_ref()
            .and_then(|layout| layout.transform(&window))
            .map(str::to_string);

        if let Some(composed) = composed {
            debug!("Composed {:?} -> {:?}", window, composed);
            self.emit(ImeEvent::Cmd(Command::Backspace));
            self.state.composed_mut().pop();
            literal = composed;
        }

        self.emit(ImeEvent::Insert(literal.clone()));
        self.state.composed_mut().push_str(&literal);
    }

    fn emit(&mut self, event: ImeEvent) {
        if let Some(callback) = self.on_event.as_mut() {
            callback(event);
        }
    }

    fn relabel(&mut self) {
        if let (Some(layout), Some(grid)) = (&self.layout, self.grid.as_mut()) {
            grid.relabel(layout, self.state.modifier());
        }
    }

    /// Get the rendered grid
    pub fn grid(&self) -> Option<&KeyGrid> {
        self.grid.as_ref()
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_deref()
    }

    /// Language code of the active layout
    pub fn language(&self) -> Option<&str> {
        self.layout.as_ref().map(|l| l.code())
    }

    /// Get the current composed text
    pub fn composed_text(&self) -> &str {
        self.state.composed().as_str()
    }

    /// Get the current engine state (for debugging)
    pub fn state(&self) -> &EngineState {
        &self.state
    }
}
