//! Building the manim command line from render options.

use std::path::{Path, PathBuf};

use scenecast_model::{OutputFormat, PostRenderAction, RenderOptions, SceneSelection};

/// A fully resolved external-command description.
///
/// Built once per render request and never mutated afterwards; the runner
/// consumes it by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInvocation {
    /// Python interpreter used to launch the manim module.
    pub interpreter: PathBuf,

    /// Arguments after the interpreter, starting with `-m manim`.
    pub args: Vec<String>,
}

impl RenderInvocation {
    /// Human-readable command line for logging before launch.
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.interpreter.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Translate render choices into the ordered manim argument list.
///
/// Argument order is fixed: media dir pair (when set), quality flag,
/// format flags, transparency flag, preview flag, script path, scene
/// name. Formats that cannot be played back force the `Play` action to
/// `RevealInFolder`:
/// - GIF and last-frame PNG have nothing for a video player to open;
/// - transparent video renders to a `.mov` most players refuse.
pub fn build_invocation(
    options: &RenderOptions,
    script: &Path,
    interpreter: &Path,
    media_dir: Option<&Path>,
) -> RenderInvocation {
    let mut args = vec!["-m".to_string(), "manim".to_string()];

    if let Some(dir) = media_dir {
        args.push("--media_dir".to_string());
        args.push(dir.display().to_string());
    }

    args.push(options.quality.flag().to_string());

    let mut post_render = options.post_render;
    match options.format {
        OutputFormat::Gif => {
            args.push("--format".to_string());
            args.push("gif".to_string());
            if post_render == PostRenderAction::Play {
                post_render = PostRenderAction::RevealInFolder;
            }
            if options.transparent {
                args.push("-t".to_string());
            }
        }
        OutputFormat::PngLastFrame => {
            args.push("-s".to_string());
            if post_render == PostRenderAction::Play {
                post_render = PostRenderAction::RevealInFolder;
            }
            if options.transparent {
                args.push("-t".to_string());
            }
        }
        OutputFormat::Mp4 => {
            if options.transparent {
                args.push("-t".to_string());
                if post_render == PostRenderAction::Play {
                    post_render = PostRenderAction::RevealInFolder;
                }
            }
        }
    }

    if let Some(flag) = post_render.flag() {
        args.push(flag.to_string());
    }

    args.push(script.display().to_string());

    if let SceneSelection::Named(scene) = &options.scene {
        args.push(scene.clone());
    }

    RenderInvocation {
        interpreter: interpreter.to_path_buf(),
        args,
    }
}
