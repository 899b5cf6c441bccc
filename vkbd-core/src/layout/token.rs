//! Row string tokenizer
//!
//! A row string is a space-delimited list of keys. Control keys use a
//! bracket syntax (`{bksp}`, `{shift}`, `{alt}`, `{change}`, `{}`), `&nbsp`
//! is the space bar, and everything else is a literal to insert. A lone
//! `{` or `}` is a literal; any other brace-led word that is not a known
//! control, and any control character, is rejected.

use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken<'a> {
    #[token("{bksp}")]
    Backspace,

    #[token("{shift}")]
    Shift,

    #[token("{alt}")]
    Alt,

    #[token("{change}")]
    Change,

    #[token("{}")]
    Spacer,

    #[token("&nbsp")]
    Space,

    #[regex(r"\{[^\x00-\x20]+", |lex| lex.slice(), priority = 3)]
    Malformed(&'a str),

    #[regex(r"[^\x00-\x20]+", |lex| lex.slice(), priority = 1)]
    Literal(&'a str),
}

/// One key of a row string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyToken {
    /// Text inserted by the key, possibly written as an HTML entity
    Literal(String),
    /// The space bar
    Space,
    Backspace,
    Shift,
    Alt,
    /// Change / enter key, commits the composition
    Change,
    /// Blank position
    Spacer,
}

impl KeyToken {
    /// Name of the control action, as used in the bracket syntax
    pub fn control_name(&self) -> Option<&'static str> {
        match self {
            KeyToken::Backspace => Some("bksp"),
            KeyToken::Shift => Some("shift"),
            KeyToken::Alt => Some("alt"),
            KeyToken::Change => Some("change"),
            _ => None,
        }
    }

    pub fn is_control(&self) -> bool {
        self.control_name().is_some()
    }
}

impl TryFrom<RawToken<'_>> for KeyToken {
    type Error = String;

    fn try_from(raw: RawToken<'_>) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawToken::Backspace => KeyToken::Backspace,
            RawToken::Shift => KeyToken::Shift,
            RawToken::Alt => KeyToken::Alt,
            RawToken::Change => KeyToken::Change,
            RawToken::Spacer => KeyToken::Spacer,
            RawToken::Space => KeyToken::Space,
            RawToken::Literal(s) => KeyToken::Literal(s.to_string()),
            RawToken::Malformed(s) => return Err(s.to_string()),
        })
    }
}

/// Splits a row string into keys.
///
/// On failure returns the text the lexer could not classify.
pub fn tokenize_row(row: &str) -> Result<Vec<KeyToken>, String> {
    let mut lexer = RawToken::lexer(row);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(raw) => tokens.push(KeyToken::try_from(raw)?),
            Err(()) => return Err(lexer.slice().to_string()),
        }
    }

    Ok(tokens)
}
