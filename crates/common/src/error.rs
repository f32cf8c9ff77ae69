//! Error types shared across Scenecast crates.

use std::path::PathBuf;

/// Top-level error type for Scenecast operations.
#[derive(Debug, thiserror::Error)]
pub enum ScenecastError {
    #[error("Discovery error: {message}")]
    Discovery { message: String },

    #[error("Launch error: {message}")]
    Launch { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("A render is already in progress")]
    RenderBusy,

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ScenecastError.
pub type ScenecastResult<T> = Result<T, ScenecastError>;

impl ScenecastError {
    pub fn discovery(msg: impl Into<String>) -> Self {
        Self::Discovery {
            message: msg.into(),
        }
    }

    pub fn launch(msg: impl Into<String>) -> Self {
        Self::Launch {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
