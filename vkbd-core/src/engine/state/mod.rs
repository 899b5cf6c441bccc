mod buffer;
mod engine_state;

pub use buffer::ComposedText;
pub use engine_state::EngineState;
