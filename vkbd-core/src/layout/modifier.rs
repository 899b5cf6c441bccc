//! Modifier state machine for the on-screen keyboard

use std::fmt;

/// Which of the four label rows is active.
///
/// The states form a group generated by two commuting involutions: the
/// shift toggle flips the shift bit and the alt toggle flips the alt bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModifierState {
    #[default]
    Normal,
    Shift,
    Alt,
    AltShift,
}

/// A modifier key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierToggle {
    Shift,
    Alt,
}

impl ModifierState {
    /// All states in row order
    pub const ALL: [ModifierState; 4] = [
        ModifierState::Normal,
        ModifierState::Shift,
        ModifierState::Alt,
        ModifierState::AltShift,
    ];

    /// Builds a state from its two modifier bits
    pub fn from_flags(shift: bool, alt: bool) -> Self {
        match (shift, alt) {
            (false, false) => ModifierState::Normal,
            (true, false) => ModifierState::Shift,
            (false, true) => ModifierState::Alt,
            (true, true) => ModifierState::AltShift,
        }
    }

    pub fn has_shift(self) -> bool {
        matches!(self, ModifierState::Shift | ModifierState::AltShift)
    }

    pub fn has_alt(self) -> bool {
        matches!(self, ModifierState::Alt | ModifierState::AltShift)
    }

    /// Applies a toggle and returns the resulting state
    pub fn toggled(self, toggle: ModifierToggle) -> Self {
        match toggle {
            ModifierToggle::Shift => Self::from_flags(!self.has_shift(), self.has_alt()),
            ModifierToggle::Alt => Self::from_flags(self.has_shift(), !self.has_alt()),
        }
    }

    /// Index of this state's rows inside a layout
    pub fn index(self) -> usize {
        match self {
            ModifierState::Normal => 0,
            ModifierState::Shift => 1,
            ModifierState::Alt => 2,
            ModifierState::AltShift => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ModifierState::Normal => "normal",
            ModifierState::Shift => "shift",
            ModifierState::Alt => "alt",
            ModifierState::AltShift => "alt-shift",
        }
    }

    /// Parses a state name such as "alt-shift"
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "normal" => Some(ModifierState::Normal),
            "shift" => Some(ModifierState::Shift),
            "alt" => Some(ModifierState::Alt),
            "alt-shift" | "altshift" | "alt_shift" => Some(ModifierState::AltShift),
            _ => None,
        }
    }
}

impl fmt::Display for ModifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
