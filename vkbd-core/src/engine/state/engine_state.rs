//! Engine state management

use crate::layout::{ModifierState, ModifierToggle};
use super::buffer::ComposedText;

/// Mutable state owned by one keyboard engine
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    modifier: ModifierState,
    composed: ComposedText,
}

impl EngineState {
    /// Creates a new engine state
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the engine state completely
    pub fn reset(&mut self) {
        self.modifier = ModifierState::Normal;
        self.composed.clear();
    }

    pub fn modifier(&self) -> ModifierState {
        self.modifier
    }

    pub fn set_modifier(&mut self, state: ModifierState) {
        self.modifier = state;
    }

    /// Applies a modifier toggle and returns the new state
    pub fn toggle(&mut self, toggle: ModifierToggle) -> ModifierState {
        self.modifier = self.modifier.toggled(toggle);
        self.modifier
    }

    pub fn composed(&self) -> &ComposedText {
        &self.composed
    }

    pub fn composed_mut(&mut self) -> &mut ComposedText {
        &mut self.composed
    }
}
