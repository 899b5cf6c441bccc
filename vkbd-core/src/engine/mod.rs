//! Keyboard engine - renders a layout into a key grid and turns clicks and
//! key presses into insert / command events.

mod engine;
mod input;
mod keycap;
mod output;
mod state;

pub use engine::{EventCallback, KeyboardEngine};
pub use input::translate_key;
pub use keycap::{control_label, decode_entity, KeyGrid, KeyKind, KeyPosition, Keycap, NBSP_LABEL};
pub use output::{Command, ImeEvent};
pub use state::{ComposedText, EngineState};

// Re-export error types
pub use crate::error::{Error, Result};
