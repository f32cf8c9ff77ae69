//! Scenecast Common Utilities
//!
//! Shared infrastructure for all Scenecast crates:
//! - Error types and result aliases
//! - Tracing/logging initialization
//! - Render and logging defaults

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
