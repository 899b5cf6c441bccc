//! Session configuration for the replay tool

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vkbd_core::session::BASELINE_LANGUAGE;
use vkbd_core::{ImeSession, SessionMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Host locale handed to the session at start
    pub locale: Option<String>,
    /// Explicit language code; takes precedence over `locale`
    pub language: Option<String>,
    /// Open the keyboard right after start
    pub show: bool,
    /// Print host commands instead of only logging them
    pub host_sink: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            locale: None,
            language: None,
            show: true,
            host_sink: true,
        }
    }
}

impl SessionConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config file")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Selects the configured language and opens the keyboard if asked to
    pub fn start(&self, session: &mut ImeSession) -> SessionMode {
        match &self.language {
            Some(code) => session.select_language(code),
            None => session.start(self.locale.as_deref().unwrap_or(BASELINE_LANGUAGE)),
        };

        if self.show {
            session.open_keyboard();
        }
        session.mode()
    }
}
