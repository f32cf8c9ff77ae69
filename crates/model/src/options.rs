//! User render choices and their manim flag mappings.

use serde::{Deserialize, Serialize};

/// Render quality preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Low,
    Medium,
    #[default]
    High,
    Production,
    FourK,
}

impl Quality {
    /// The manim quality flag for this preset.
    pub fn flag(self) -> &'static str {
        match self {
            Quality::Low => "-ql",
            Quality::Medium => "-qm",
            Quality::High => "-qh",
            Quality::Production => "-qp",
            Quality::FourK => "-qk",
        }
    }
}

/// Output format of the render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Default video output.
    #[default]
    Mp4,

    /// Animated GIF (`--format gif`).
    Gif,

    /// Still image of the last frame (`-s`).
    PngLastFrame,
}

/// What to do with the output once the render finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostRenderAction {
    /// Leave the output alone.
    None,

    /// Play the rendered file (`-p`).
    #[default]
    Play,

    /// Reveal the output directory in the file manager (`-f`).
    RevealInFolder,
}

impl PostRenderAction {
    /// The manim preview flag, if this action carries one.
    pub fn flag(self) -> Option<&'static str> {
        match self {
            PostRenderAction::None => None,
            PostRenderAction::Play => Some("-p"),
            PostRenderAction::RevealInFolder => Some("-f"),
        }
    }
}

/// Which scene(s) of the script to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SceneSelection {
    /// Render every scene: the scene argument is omitted entirely and
    /// manim walks the whole script.
    #[default]
    All,

    /// Render one discovered scene by class name.
    Named(String),
}

/// Caller-supplied render configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RenderOptions {
    pub quality: Quality,

    pub format: OutputFormat,

    /// Render with a transparent background (`-t`). Constrains the
    /// allowed post-render action for video output.
    pub transparent: bool,

    pub post_render: PostRenderAction,

    pub scene: SceneSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_flags() {
        assert_eq!(Quality::Low.flag(), "-ql");
        assert_eq!(Quality::Medium.flag(), "-qm");
        assert_eq!(Quality::High.flag(), "-qh");
        assert_eq!(Quality::Production.flag(), "-qp");
        assert_eq!(Quality::FourK.flag(), "-qk");
    }

    #[test]
    fn test_post_render_flags() {
        assert_eq!(PostRenderAction::None.flag(), None);
        assert_eq!(PostRenderAction::Play.flag(), Some("-p"));
        assert_eq!(PostRenderAction::RevealInFolder.flag(), Some("-f"));
    }

    #[test]
    fn test_default_choices() {
        let options = RenderOptions::default();
        assert_eq!(options.quality, Quality::High);
        assert_eq!(options.format, OutputFormat::Mp4);
        assert_eq!(options.post_render, PostRenderAction::Play);
        assert!(!options.transparent);
        assert_eq!(options.scene, SceneSelection::All);
    }

    #[test]
    fn test_options_serialize_in_snake_case() {
        let options = RenderOptions {
            quality: Quality::FourK,
            format: OutputFormat::PngLastFrame,
            transparent: true,
            post_render: PostRenderAction::RevealInFolder,
            scene: SceneSelection::Named("Intro".to_string()),
        };
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"quality\":\"four_k\""));
        assert!(json.contains("\"format\":\"png_last_frame\""));
        assert!(json.contains("\"post_render\":\"reveal_in_folder\""));
        assert!(json.contains("\"named\":\"Intro\""));
    }
}
