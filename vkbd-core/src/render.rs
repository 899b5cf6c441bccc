//! HTML rendering of the key grid
//!
//! Produces the markup the appliance page styles: a `#keyboard` container,
//! a `#key-normal` panel and one `.keyrow` per row of buttons.

use std::borrow::Cow;

use crate::engine::{decode_entity, KeyGrid, KeyKind, Keycap, KeyboardEngine};

/// Renders a grid as HTML
pub fn render_html(grid: &KeyGrid, visible: bool) -> String {
    let display = if visible { "block" } else { "none" };
    let mut html = format!("<div id=\"keyboard\" style=\"display:{}\"><div id=\"key-normal\">", display);

    for row in grid.rows() {
        html.push_str("<div class='keyrow'>");
        for key in row {
            render_button(key, &mut html);
        }
        html.push_str("</div>");
    }

    html.push_str("</div></div>");
    html
}

/// Renders an engine's current grid, if it has one
pub fn render_engine(engine: &KeyboardEngine) -> Option<String> {
    engine.grid().map(|grid| render_html(grid, engine.is_visible()))
}

/// Class attribute of a key's button
pub fn button_class(key: &Keycap) -> Option<&'static str> {
    match key.kind {
        KeyKind::Insert if key.space_bar => Some(" insert keyspace"),
        KeyKind::Insert => Some("insert"),
        KeyKind::Backspace => Some("ctrlkeys bksp"),
        KeyKind::Commit => Some("ctrlkeys change"),
        KeyKind::Shift => Some("ctrlkeys shift"),
        KeyKind::Alt => Some("ctrlkeys alt"),
        KeyKind::Spacer => None,
    }
}

fn render_button(key: &Keycap, html: &mut String) {
    match button_class(key) {
        Some(class) => {
            html.push_str("<button class='");
            html.push_str(class);
            html.push_str("'>");
        }
        None => html.push_str("<button>"),
    }
    html.push_str(&escape_label(&key.label));
    html.push_str("</button>");
}

/// Escapes a label for HTML, leaving labels already written as entities alone
fn escape_label(label: &str) -> Cow<'_, str> {
    if decode_entity(label) != label || label.starts_with("&#") {
        return Cow::Borrowed(label);
    }
    if !label.contains(|c: char| matches!(c, '&' | '<' | '>')) {
        return Cow::Borrowed(label);
    }

    let mut escaped = String::with_capacity(label.len() + 8);
    for ch in label.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
