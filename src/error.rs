//! Error types for the terminal session, command catalogue and configuration

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for folioterm library operations
pub type Result<T> = std::result::Result<T, FoliotermError>;

/// Errors raised while mutating the transcript
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    /// The line is sealed (command echoes, finished output)
    #[error("line {index} is sealed and cannot change")]
    Sealed { index: usize },

    /// The line id belongs to a transcript generation that was cleared
    #[error("line {index} from generation {generation} no longer exists")]
    StaleLine { generation: u64, index: usize },
}

/// Errors raised while building a command catalogue
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// Command names must contain at least one visible character
    #[error("command name must not be empty")]
    EmptyName,

    /// Command names are matched against a single trimmed token
    #[error("command name '{name}' must not contain whitespace")]
    InvalidName { name: String },

    /// Two entries collapse to the same lowercase name
    #[error("duplicate command name '{name}'")]
    Duplicate { name: String },
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {message}")]
    Invalid { message: String },

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}

impl ConfigError {
    /// Create a validation error
    pub fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            message: message.into(),
        }
    }
}

/// Top-level library error
#[derive(Error, Debug)]
pub enum FoliotermError {
    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TranscriptError::Sealed { index: 3 };
        assert_eq!(err.to_string(), "line 3 is sealed and cannot change");

        let err = CatalogueError::Duplicate {
            name: "about".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate command name 'about'");

        let err: FoliotermError = ConfigError::invalid("reveal interval must be positive").into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: reveal interval must be positive"
        );
    }
}
