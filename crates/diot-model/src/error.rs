//! Error types for filing profile handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, parsing, or validating a filing profile.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Profile file could not be read.
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Profile file is not valid TOML for the profile layout.
    #[error("failed to parse TOML profile {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// In-memory profile text is not valid TOML for the profile layout.
    #[error("failed to parse TOML profile: {0}")]
    Parse(#[from] toml::de::Error),

    /// Profile could not be rendered back to TOML.
    #[error("failed to render profile as TOML: {0}")]
    Render(#[from] toml::ser::Error),

    /// Profile parsed but breaks a structural rule.
    #[error("invalid profile: {message}")]
    InvalidProfile { message: String },
}

impl ModelError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            message: message.into(),
        }
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
