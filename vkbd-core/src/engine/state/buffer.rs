//! Composed text buffer

/// Characters inserted since the last commit.
///
/// Only the last character is ever inspected, as the first half of a
/// diacritic transform window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedText {
    content: String,
}

impl ComposedText {
    /// Creates a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the buffer content as a string slice
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Gets the buffer length in characters
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    pub fn push_str(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// Last character, if any
    pub fn last_char(&self) -> Option<char> {
        self.content.chars().next_back()
    }

    /// Removes one character from the end (backspace)
    pub fn pop(&mut self) -> Option<char> {
        self.content.pop()
    }
}
