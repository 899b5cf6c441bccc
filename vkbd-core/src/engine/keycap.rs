//! Rendered keys
//!
//! Each key's intent is decided once, when the grid is built or relabelled,
//! and stored as a [`KeyKind`] next to its display label.

use crate::layout::{KeyToken, Layout, ModifierState};

/// Label of blank keys and of the space bar
pub const NBSP_LABEL: &str = "&nbsp;";

/// What a key does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Insert,
    Backspace,
    Commit,
    Shift,
    Alt,
    Spacer,
}

/// A rendered key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keycap {
    pub kind: KeyKind,
    /// HTML-ready display label
    pub label: String,
    /// Whether this is the space bar
    pub space_bar: bool,
}

impl Keycap {
    pub fn from_token(token: &KeyToken) -> Self {
        let (kind, label, space_bar) = match token {
            KeyToken::Literal(text) => (KeyKind::Insert, text.as_str(), false),
            KeyToken::Space => (KeyKind::Insert, NBSP_LABEL, true),
            KeyToken::Backspace => (KeyKind::Backspace, control_label(token).unwrap_or(NBSP_LABEL), false),
            KeyToken::Shift => (KeyKind::Shift, control_label(token).unwrap_or(NBSP_LABEL), false),
            KeyToken::Alt => (KeyKind::Alt, control_label(token).unwrap_or(NBSP_LABEL), false),
            KeyToken::Change => (KeyKind::Commit, control_label(token).unwrap_or(NBSP_LABEL), false),
            KeyToken::Spacer => (KeyKind::Spacer, NBSP_LABEL, false),
        };

        Self {
            kind,
            label: label.to_string(),
            space_bar,
        }
    }

    /// Text an insert key produces
    pub fn literal(&self) -> &str {
        decode_entity(&self.label)
    }
}

/// Display label of a control token
pub fn control_label(token: &KeyToken) -> Option<&'static str> {
    match token {
        KeyToken::Backspace => Some("&#xe61f;"),
        KeyToken::Shift => Some("Shift"),
        KeyToken::Alt => Some("Ctrl + Alt"),
        KeyToken::Change => Some("Enter"),
        _ => None,
    }
}

/// Resolves an entity-escaped label to the literal it stands for
pub fn decode_entity(label: &str) -> &str {
    match label {
        "&nbsp;" => " ",
        "&lt;" => "<",
        "&gt;" => ">",
        "&amp;" => "&",
        other => other,
    }
}

/// Position of a key in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPosition {
    pub row: usize,
    pub col: usize,
}

impl KeyPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The rendered rows of keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyGrid {
    rows: Vec<Vec<Keycap>>,
}

impl KeyGrid {
    /// Builds a grid with the layout's shape, labelled for `state`
    pub(crate) fn build(layout: &Layout, state: ModifierState) -> Self {
        let rows = layout
            .rows(state)
            .iter()
            .map(|keys| keys.iter().map(Keycap::from_token).collect())
            .collect();
        Self { rows }
    }

    /// Relabels every rendered key from the rows of `state`
    pub(crate) fn relabel(&mut self, layout: &Layout, state: ModifierState) {
        for (r, row) in self.rows.iter_mut().enumerate() {
            for (c, key) in row.iter_mut().enumerate() {
                if let Some(token) = layout.token(state, r, c) {
                    *key = Keycap::from_token(token);
                }
            }
        }
    }

    pub fn rows(&self) -> &[Vec<Keycap>] {
        &self.rows
    }

    pub fn key(&self, pos: KeyPosition) -> Option<&Keycap> {
        self.rows.get(pos.row).and_then(|row| row.get(pos.col))
    }

    pub fn key_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Finds the first insert key whose label or literal equals `text`
    pub fn find(&self, text: &str) -> Option<KeyPosition> {
        self.position(|key| key.kind == KeyKind::Insert && (key.label == text || key.literal() == text))
    }

    /// Finds the first key of the given kind
    pub fn find_kind(&self, kind: KeyKind) -> Option<KeyPosition> {
        self.position(|key| key.kind == kind)
    }

    fn position(&self, pred: impl Fn(&Keycap) -> bool) -> Option<KeyPosition> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|key| pred(key))
                .map(|c| KeyPosition::new(r, c))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_entity() {
        assert_eq!(decode_entity("&nbsp;"), " ");
        assert_eq!(decode_entity("&lt;"), "<");
        assert_eq!(decode_entity("&gt;"), ">");
        assert_eq!(decode_entity("&amp;"), "&");
        assert_eq!(decode_entity("&"), "&");
        assert_eq!(decode_entity("\u{300}"), "\u{300}");
    }

    #[test]
    fn test_keycap_from_token() {
        let key = Keycap::from_token(&KeyToken::Space);
        assert_eq!(key.kind, KeyKind::Insert);
        assert!(key.space_bar);
        assert_eq!(key.literal(), " ");

        let key = Keycap::from_token(&KeyToken::Spacer);
        assert_eq!(key.kind, KeyKind::Spacer);
        assert_eq!(key.label, NBSP_LABEL);

        let key = Keycap::from_token(&KeyToken::Change);
        assert_eq!(key.kind, KeyKind::Commit);
        assert_eq!(key.label, "Enter");

        let key = Keycap::from_token(&KeyToken::Literal("&amp;".to_string()));
        assert_eq!(key.kind, KeyKind::Insert);
        assert_eq!(key.label, "&amp;");
        assert_eq!(key.literal(), "&");
    }
}
