//! Error types shared across posemetric crates.

use std::path::PathBuf;

/// Top-level error type for posemetric operations.
#[derive(Debug, thiserror::Error)]
pub enum PosemetricError {
    #[error("Label source error: {message}")]
    Source { message: String },

    #[error("Archive could not be read: {path}: {message}")]
    Archive { path: PathBuf, message: String },

    #[error("Output error: {path}: {message}")]
    Output { path: PathBuf, message: String },

    #[error("Plot error: {message}")]
    Plot { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PosemetricError.
pub type PosemetricResult<T> = Result<T, PosemetricError>;

impl PosemetricError {
    pub fn label_source(msg: impl Into<String>) -> Self {
        Self::Source {
            message: msg.into(),
        }
    }

    pub fn archive(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Archive {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn output(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Output {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn plot(msg: impl Into<String>) -> Self {
        Self::Plot {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
