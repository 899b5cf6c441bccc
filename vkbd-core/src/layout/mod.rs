//! Keyboard layouts
//!
//! A layout gives, for one language, the key labels of each modifier state
//! plus optional diacritic transforms. Layouts are authored as static
//! [`LayoutDef`] data and validated into [`Layout`] values when a
//! [`LayoutTable`] is built.

mod data;
mod error;
mod modifier;
mod table;
mod token;

use std::collections::HashMap;

pub use error::{LayoutError, Result};
pub use modifier::{ModifierState, ModifierToggle};
pub use table::LayoutTable;
pub use token::{tokenize_row, KeyToken};

/// Static definition of a layout, as authored
#[derive(Debug, Clone, Copy)]
pub struct LayoutDef {
    /// Language code, e.g. "vie"
    pub code: &'static str,
    /// Display name in the language itself
    pub name: &'static str,
    /// Locale tag, e.g. "vi" or "pt-PT"
    pub locale: &'static str,
    pub normal: &'static [&'static str],
    pub shift: &'static [&'static str],
    pub alt: &'static [&'static str],
    pub alt_shift: &'static [&'static str],
    /// (previous char + typed char, composed output)
    pub transforms: &'static [(&'static str, &'static str)],
}

impl LayoutDef {
    /// Row strings for a modifier state
    pub fn rows(&self, state: ModifierState) -> &'static [&'static str] {
        match state {
            ModifierState::Normal => self.normal,
            ModifierState::Shift => self.shift,
            ModifierState::Alt => self.alt,
            ModifierState::AltShift => self.alt_shift,
        }
    }
}

/// A validated keyboard layout
#[derive(Debug, Clone)]
pub struct Layout {
    code: String,
    name: String,
    locale: String,
    /// Tokenized rows, indexed by `ModifierState::index()`
    rows: [Vec<Vec<KeyToken>>; 4],
    transforms: HashMap<String, String>,
}

impl Layout {
    /// Tokenizes and validates a layout definition.
    ///
    /// Every modifier state must have the same number of rows as the normal
    /// state, row for row with the same number of keys, and every transform
    /// key must be exactly two characters.
    pub fn from_def(def: &LayoutDef) -> Result<Self> {
        let code = def.code.to_string();

        if def.normal.is_empty() {
            return Err(LayoutError::Empty { code });
        }

        let mut rows: [Vec<Vec<KeyToken>>; 4] = Default::default();
        for state in ModifierState::ALL {
            rows[state.index()] = Self::tokenize_state(&code, state, def.rows(state))?;
        }

        let shape: Vec<usize> = rows[ModifierState::Normal.index()]
            .iter()
            .map(|row| row.len())
            .collect();

        for state in ModifierState::ALL {
            let state_rows = &rows[state.index()];
            if state_rows.len() != shape.len() {
                return Err(LayoutError::RowCountMismatch {
                    code,
                    state,
                    expected: shape.len(),
                    found: state_rows.len(),
                });
            }
            for (row, (keys, expected)) in state_rows.iter().zip(&shape).enumerate() {
                if keys.len() != *expected {
                    return Err(LayoutError::KeyCountMismatch {
                        code,
                        state,
                        row,
                        expected: *expected,
                        found: keys.len(),
                    });
                }
            }
        }

        let mut transforms = HashMap::with_capacity(def.transforms.len());
        for (key, output) in def.transforms {
            if key.chars().count() != 2 {
                return Err(LayoutError::InvalidTransformKey {
                    code,
                    key: key.to_string(),
                });
            }
            transforms.insert(key.to_string(), output.to_string());
        }

        Ok(Self {
            code,
            name: def.name.to_string(),
            locale: def.locale.to_string(),
            rows,
            transforms,
        })
    }

    fn tokenize_state(code: &str, state: ModifierState, rows: &[&str]) -> Result<Vec<Vec<KeyToken>>> {
        rows.iter()
            .enumerate()
            .map(|(row, text)| {
                let keys = tokenize_row(text).map_err(|token| LayoutError::InvalidToken {
                    code: code.to_string(),
                    state,
                    row,
                    token,
                })?;
                if keys.is_empty() {
                    return Err(LayoutError::EmptyRow {
                        code: code.to_string(),
                        state,
                        row,
                    });
                }
                Ok(keys)
            })
            .collect()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Rows of the given modifier state
    pub fn rows(&self, state: ModifierState) -> &[Vec<KeyToken>] {
        &self.rows[state.index()]
    }

    /// Token at a grid position for the given modifier state
    pub fn token(&self, state: ModifierState, row: usize, col: usize) -> Option<&KeyToken> {
        self.rows(state).get(row).and_then(|keys| keys.get(col))
    }

    /// Number of keys per row; identical for every modifier state
    pub fn shape(&self) -> Vec<usize> {
        self.rows(ModifierState::Normal).iter().map(|row| row.len()).collect()
    }

    pub fn has_transforms(&self) -> bool {
        !self.transforms.is_empty()
    }

    pub fn transform_count(&self) -> usize {
        self.transforms.len()
    }

    /// Looks up the composed output for a two-character window
    pub fn transform(&self, window: &str) -> Option<&str> {
        self.transforms.get(window).map(String::as_str)
    }

    /// Iterates over (window, output) pairs in no particular order
    pub fn transforms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.transforms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Built-in layout definitions in registration order
pub fn builtin_defs() -> &'static [LayoutDef] {
    data::BUILTIN
}
