//! Scene discovery over Manim scripts.
//!
//! Finds the classes in a Python script whose direct bases mark them as
//! renderable scenes (`Scene`, `ThreeDScene`, `MovingCameraScene`,
//! `ZoomedScene`, bare or `manim.`-qualified). The script is scanned as
//! text; it is never imported or executed.
//!
//! Discovery never raises: a missing file or a scan failure comes back as
//! an empty scene list plus a diagnostic message, so a long-lived caller
//! can surface "no scenes found" without unwinding.

use std::path::Path;

use scenecast_common::error::{ScenecastError, ScenecastResult};

pub mod scan;

pub use scan::{scan_module, ScanError};

/// Outcome of one discovery pass.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Qualifying scene class names in document order.
    pub scenes: Vec<String>,

    /// Why the list is empty (or best-effort), when the pass failed.
    pub diagnostic: Option<String>,
}

/// Discover the renderable scenes declared in `path`.
///
/// Every call re-reads and re-scans the file, so edits between calls are
/// always picked up.
pub fn discover_scenes(path: &Path) -> Discovery {
    match try_discover(path) {
        Ok(scenes) => {
            tracing::debug!(
                script = %path.display(),
                count = scenes.len(),
                "Scene discovery finished"
            );
            Discovery {
                scenes,
                diagnostic: None,
            }
        }
        Err(err) => {
            tracing::warn!(script = %path.display(), error = %err, "Scene discovery failed");
            Discovery {
                scenes: Vec::new(),
                diagnostic: Some(err.to_string()),
            }
        }
    }
}

fn try_discover(path: &Path) -> ScenecastResult<Vec<String>> {
    let source = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            ScenecastError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ScenecastError::discovery(format!("failed to read {}: {err}", path.display()))
        }
    })?;

    let module = scan::scan_module(&source).map_err(|err| {
        ScenecastError::discovery(format!("failed to parse {}: {err}", path.display()))
    })?;

    Ok(module.scene_names())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_nonexistent_path_recovers_with_diagnostic() {
        let discovery = discover_scenes(Path::new("/nonexistent/no_such_script.py"));
        assert!(discovery.scenes.is_empty());
        let diagnostic = discovery.diagnostic.expect("diagnostic expected");
        assert!(diagnostic.contains("no_such_script.py"));
    }

    #[test]
    fn test_invalid_syntax_recovers_with_diagnostic() {
        let path = write_temp("scenecast_invalid_syntax.py", "class Intro(Scene\n");
        let discovery = discover_scenes(&path);
        assert!(discovery.scenes.is_empty());
        assert!(discovery.diagnostic.is_some());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_valid_script_has_no_diagnostic() {
        let path = write_temp(
            "scenecast_valid.py",
            "class Intro(Scene):\n    pass\n\nclass Helper:\n    pass\n",
        );
        let discovery = discover_scenes(&path);
        assert_eq!(discovery.scenes, vec!["Intro"]);
        assert!(discovery.diagnostic.is_none());
        std::fs::remove_file(path).ok();
    }

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).expect("temp script should be writable");
        path
    }
}
