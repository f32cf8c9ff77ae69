//! Render and logging defaults.
//!
//! Settings persistence lives in the surrounding shell; these structs only
//! carry the defaults a caller starts from.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default parameters for launching renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderDefaults {
    /// Python interpreter used to launch the manim module.
    pub interpreter: PathBuf,

    /// Media output directory passed as `--media_dir`. `None` leaves the
    /// choice to manim (a `media/` directory next to the script).
    pub media_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "scenecast=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from("python3"),
            media_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}
