//! Terminal configuration loaded from a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock terminal: owner `Akshay`, login `akshay`, host `portfolio`.

use crate::error::{Result, TerminalError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Who the portfolio belongs to. Used by prompts, paths and literal texts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Identity {
    /// Display name, e.g. "Akshay".
    pub owner: String,
    /// Login name, e.g. "akshay". The home directory is `/home/<user>`.
    pub user: String,
    /// Host shown in the prompt.
    pub host: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            owner: "Akshay".to_string(),
            user: "akshay".to_string(),
            host: "portfolio".to_string(),
        }
    }
}

impl Identity {
    pub fn home(&self) -> String {
        format!("/home/{}", self.user)
    }
}

/// Delays used by the timed parts of the terminal, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub train_frame_ms: u64,
    pub train_finale_ms: u64,
    pub exit_delay_ms: u64,
    /// Per-character delay of the reveal animation; 0 prints entries at once.
    pub reveal_char_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            train_frame_ms: 500,
            train_finale_ms: 1000,
            exit_delay_ms: 1000,
            reveal_char_ms: 8,
        }
    }
}

impl Timing {
    pub fn train_frame(&self) -> Duration {
        Duration::from_millis(self.train_frame_ms)
    }

    pub fn train_finale(&self) -> Duration {
        Duration::from_millis(self.train_finale_ms)
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    pub fn reveal_char(&self) -> Duration {
        Duration::from_millis(self.reveal_char_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub identity: Identity,
    pub timing: Timing,
    /// JSON portfolio document. The built-in sample is used when unset.
    pub portfolio: Option<PathBuf>,
    pub log_level: String,
    /// Append the welcome banner when the terminal view mounts.
    pub greeting: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            identity: Identity::default(),
            timing: Timing::default(),
            portfolio: None,
            log_level: "warn".to_string(),
            greeting: true,
        }
    }
}

impl TerminalConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| TerminalError::io(path, e))?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
