//! Scenecast Data Model
//!
//! Defines the core data contracts for Scenecast:
//! - **Script:** Document-ordered class declarations with their direct
//!   base references, and the recognized scene base-class set
//! - **Options:** User render choices (quality, format, transparency,
//!   post-render action, scene selection)
//!
//! Everything here is plain data; scanning lives in `scenecast-discovery`
//! and command building in `scenecast-render`.

pub mod options;
pub mod script;

pub use options::*;
pub use script::*;
