use thiserror::Error;

use super::ModifierState;

/// Authoring errors in layout definitions, reported when a table is built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Layout '{code}' has no rows")]
    Empty { code: String },

    #[error("Layout '{code}': {state} row {row} is empty")]
    EmptyRow {
        code: String,
        state: ModifierState,
        row: usize,
    },

    #[error("Layout '{code}': invalid token '{token}' in {state} row {row}")]
    InvalidToken {
        code: String,
        state: ModifierState,
        row: usize,
        token: String,
    },

    #[error("Layout '{code}': {state} has {found} rows, expected {expected}")]
    RowCountMismatch {
        code: String,
        state: ModifierState,
        expected: usize,
        found: usize,
    },

    #[error("Layout '{code}': {state} row {row} has {found} keys, expected {expected}")]
    KeyCountMismatch {
        code: String,
        state: ModifierState,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Layout '{code}': transform key {key:?} must be exactly two characters")]
    InvalidTransformKey { code: String, key: String },

    #[error("Duplicate layout code '{0}'")]
    DuplicateCode(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
