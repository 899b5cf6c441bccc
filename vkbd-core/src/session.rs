//! Page-level IME session
//!
//! Owns the language carousel and the keyboard engine, and routes every
//! engine event through the [`HostBridge`]. Entry 0 of the carousel is the
//! baseline language, the host's own plain keyboard; the remaining entries
//! are the table's layouts in registration order.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use log::{info, warn};

use crate::engine::{translate_key, KeyboardEngine};
use crate::host::HostBridge;
use crate::layout::LayoutTable;

/// Language used when no layout is registered for the selection
pub const BASELINE_LANGUAGE: &str = "eng";
pub const BASELINE_NAME: &str = "English";

/// One entry of the language carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

/// Which keyboard the session is driving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// The host's plain keyboard; the engine is torn down
    Baseline,
    /// A layout from the table is rendered by the engine
    Layout,
}

pub struct ImeSession {
    engine: KeyboardEngine,
    bridge: Rc<RefCell<HostBridge>>,
    languages: Vec<LanguageEntry>,
    active: usize,
    mode: SessionMode,
}

impl ImeSession {
    pub fn new(table: Arc<LayoutTable>, bridge: HostBridge) -> Self {
        let mut languages = vec![LanguageEntry {
            code: BASELINE_LANGUAGE.to_string(),
            name: BASELINE_NAME.to_string(),
        }];
        languages.extend(table.iter().map(|layout| LanguageEntry {
            code: layout.code().to_string(),
            name: layout.name().to_string(),
        }));

        Self {
            engine: KeyboardEngine::new(table),
            bridge: Rc::new(RefCell::new(bridge)),
            languages,
            active: 0,
            mode: SessionMode::Baseline,
        }
    }

    /// Selects the language matching the host locale, or the baseline
    pub fn start(&mut self, locale: &str) -> SessionMode {
        let index = self
            .engine
            .table()
            .find_for_locale(locale)
            .and_then(|layout| self.index_of(layout.code()))
            .unwrap_or(0);
        info!("Host locale '{}' selects entry {}", locale, index);
        self.select(index)
    }

    /// Makes a carousel entry active and (re)initializes the keyboard
    pub fn select(&mut self, index: usize) -> SessionMode {
        let Some(entry) = self.languages.get(index) else {
            warn!("No language entry at index {}", index);
            return self.mode;
        };
        let code = entry.code.clone();
        self.active = index;

        let bridge = Rc::clone(&self.bridge);
        if self.engine.initialize(&code, move |event| bridge.borrow_mut().forward(&event)) {
            self.mode = SessionMode::Layout;
        } else {
            self.mode = SessionMode::Baseline;
        }
        self.mode
    }

    /// Selects a language by code, falling back to the baseline
    pub fn select_language(&mut self, code: &str) -> SessionMode {
        match self.index_of(code) {
            Some(index) => self.select(index),
            None => {
                warn!("Language '{}' is not in the carousel, using {}", code, BASELINE_LANGUAGE);
                self.select(0)
            }
        }
    }

    /// Moves one entry to the right; returns whether the selection moved
    pub fn next(&mut self) -> bool {
        if self.active + 1 >= self.languages.len() {
            return false;
        }
        self.select(self.active + 1);
        true
    }

    /// Moves one entry to the left; returns whether the selection moved
    pub fn previous(&mut self) -> bool {
        if self.active == 0 {
            return false;
        }
        self.select(self.active - 1);
        true
    }

    /// Opens the on-screen keyboard from the baseline pad.
    ///
    /// Does nothing in baseline mode.
    pub fn open_keyboard(&mut self) -> bool {
        if self.mode == SessionMode::Baseline {
            return false;
        }
        self.engine.show();
        true
    }

    pub fn hide_keyboard(&mut self) {
        self.engine.hide();
    }

    /// Global key passthrough; returns whether the code produced an event
    pub fn key_down(&mut self, code: u16) -> bool {
        if self.engine.is_initialized() {
            return self.engine.key_down(code);
        }
        match translate_key(code) {
            Some(event) => {
                self.bridge.borrow_mut().forward(&event);
                true
            }
            None => false,
        }
    }

    fn index_of(&self, code: &str) -> Option<usize> {
        self.languages.iter().position(|entry| entry.code == code)
    }

    pub fn languages(&self) -> &[LanguageEntry] {
        &self.languages
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Code of the language in effect; the baseline in baseline mode
    pub fn active_language(&self) -> &str {
        match self.mode {
            SessionMode::Layout => &self.languages[self.active].code,
            SessionMode::Baseline => BASELINE_LANGUAGE,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn engine(&self) -> &KeyboardEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut KeyboardEngine {
        &mut self.engine
    }
}
