//! Error types for the vkbd engine

use thiserror::Error;

use crate::layout::LayoutError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Keyboard is not initialized")]
    NotInitialized,

    #[error("No key at row {row}, column {col}")]
    NoSuchKey { row: usize, col: usize },

    #[error("No key labelled '{0}'")]
    NoSuchLabel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
