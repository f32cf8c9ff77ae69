//! Render a scene with live output.

use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc;

use scenecast_common::config::RenderDefaults;
use scenecast_discovery::discover_scenes;
use scenecast_model::{OutputFormat, PostRenderAction, Quality, RenderOptions, SceneSelection};
use scenecast_render::{build_invocation, parse_exit_code, RenderGate};

pub fn run(
    script: PathBuf,
    scene: Option<String>,
    all: bool,
    quality: String,
    format: String,
    transparent: bool,
    preview: String,
    media_dir: Option<PathBuf>,
    python: Option<PathBuf>,
) -> anyhow::Result<()> {
    if !script.exists() {
        return Err(anyhow::anyhow!("script not found: {}", script.display()));
    }

    let defaults = RenderDefaults::default();
    let python = python.unwrap_or(defaults.interpreter);
    let media_dir = media_dir.or(defaults.media_dir);

    let options = RenderOptions {
        quality: parse_quality(&quality)?,
        format: parse_format(&format)?,
        transparent,
        post_render: parse_preview(&preview)?,
        scene: resolve_selection(&script, scene, all)?,
    };

    let invocation = build_invocation(&options, &script, &python, media_dir.as_deref());
    tracing::debug!(command = %invocation.command_line(), "Built render invocation");
    println!("Running: {}", invocation.command_line());
    println!();

    let gate = RenderGate::new();
    let (tx, rx) = mpsc::channel::<String>();
    gate.start(invocation, move |line| {
        let _ = tx.send(line);
    })?;

    // The channel closes when the render worker finishes.
    let mut exit_code = None;
    let mut stdout = std::io::stdout();
    for line in rx {
        print!("{line}");
        stdout.flush().ok();
        if let Some(code) = parse_exit_code(&line) {
            exit_code = Some(code);
        }
    }
    println!();

    match exit_code {
        Some(0) => Ok(()),
        Some(code) => Err(anyhow::anyhow!("render process exited with code {code}")),
        None => Err(anyhow::anyhow!(
            "render process failed before reporting an exit code"
        )),
    }
}

/// Pick the scene argument, validating a named scene against discovery.
fn resolve_selection(
    script: &std::path::Path,
    scene: Option<String>,
    all: bool,
) -> anyhow::Result<SceneSelection> {
    if all {
        return Ok(SceneSelection::All);
    }

    let name = scene.ok_or_else(|| anyhow::anyhow!("specify a scene name or pass --all"))?;

    let discovery = discover_scenes(script);
    if let Some(diagnostic) = &discovery.diagnostic {
        // Cannot validate against an unscannable script; let manim decide.
        eprintln!("warning: {diagnostic}");
        return Ok(SceneSelection::Named(name));
    }

    if !discovery.scenes.iter().any(|s| s == &name) {
        return Err(anyhow::anyhow!(
            "scene `{name}` not found in {}; available: {}",
            script.display(),
            if discovery.scenes.is_empty() {
                "(none)".to_string()
            } else {
                discovery.scenes.join(", ")
            }
        ));
    }

    Ok(SceneSelection::Named(name))
}

fn parse_quality(value: &str) -> anyhow::Result<Quality> {
    match value {
        "low" => Ok(Quality::Low),
        "medium" => Ok(Quality::Medium),
        "high" => Ok(Quality::High),
        "production" => Ok(Quality::Production),
        "4k" => Ok(Quality::FourK),
        _ => Err(anyhow::anyhow!(
            "Unknown quality: {value}. Use: low, medium, high, production, 4k"
        )),
    }
}

fn parse_format(value: &str) -> anyhow::Result<OutputFormat> {
    match value {
        "mp4" => Ok(OutputFormat::Mp4),
        "gif" => Ok(OutputFormat::Gif),
        "png" => Ok(OutputFormat::PngLastFrame),
        _ => Err(anyhow::anyhow!(
            "Unknown format: {value}. Use: mp4, gif, png"
        )),
    }
}

fn parse_preview(value: &str) -> anyhow::Result<PostRenderAction> {
    match value {
        "none" => Ok(PostRenderAction::None),
        "play" => Ok(PostRenderAction::Play),
        "reveal" => Ok(PostRenderAction::RevealInFolder),
        _ => Err(anyhow::anyhow!(
            "Unknown preview action: {value}. Use: none, play, reveal"
        )),
    }
}
