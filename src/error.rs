//! Error types for failures outside the command interpreter.
//!
//! Commands never fail this way: their problems are [`crate::Fault`]s rendered
//! into the transcript. These are for loading configuration and content.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid portfolio document: {0}")]
    Portfolio(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub type Result<T> = std::result::Result<T, TerminalError>;

impl TerminalError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TerminalError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = TerminalError::io(
            "/tmp/missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "I/O error on /tmp/missing.toml: gone");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TerminalError = json_err.into();
        assert!(matches!(err, TerminalError::Portfolio(_)));
    }
}
