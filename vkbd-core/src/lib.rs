pub mod error;
pub mod layout;
pub mod engine;
pub mod keycode;
pub mod host;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{KeyToken, Layout, LayoutDef, LayoutError, LayoutTable, ModifierState, ModifierToggle};
pub use engine::{Command, ImeEvent, KeyGrid, KeyKind, KeyPosition, Keycap, KeyboardEngine};
pub use host::{CommandSink, HostBridge};
pub use session::{ImeSession, LanguageEntry, SessionMode};
