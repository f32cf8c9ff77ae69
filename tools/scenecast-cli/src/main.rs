//! Scenecast CLI — discover Manim scenes and drive renders.
//!
//! Usage:
//!   scenecast scenes <SCRIPT>          List renderable scenes in a script
//!   scenecast render <SCRIPT> [SCENE]  Render a scene with live output
//!   scenecast check                    Check the interpreter and manim module

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "scenecast",
    about = "Discover Manim scenes and drive renders from the command line",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List renderable scenes found in a script
    Scenes {
        /// Path to the Manim script
        script: PathBuf,

        /// Emit the scene list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a scene (or all scenes) with live output
    Render {
        /// Path to the Manim script
        script: PathBuf,

        /// Scene class to render (omit together with --all)
        scene: Option<String>,

        /// Render every scene in the script
        #[arg(long, conflicts_with = "scene")]
        all: bool,

        /// Render quality: low|medium|high|production|4k
        #[arg(long, default_value = "high")]
        quality: String,

        /// Output format: mp4|gif|png
        #[arg(long, default_value = "mp4")]
        format: String,

        /// Render with a transparent background
        #[arg(short, long)]
        transparent: bool,

        /// Post-render action: none|play|reveal
        #[arg(long, default_value = "play")]
        preview: String,

        /// Media output directory (passed to manim as --media_dir)
        #[arg(long)]
        media_dir: Option<PathBuf>,

        /// Python interpreter used to launch manim (defaults to python3)
        #[arg(long)]
        python: Option<PathBuf>,
    },

    /// Check that the interpreter and the manim module are invocable
    Check {
        /// Python interpreter used to launch manim (defaults to python3)
        #[arg(long)]
        python: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    scenecast_common::logging::init_logging(&scenecast_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Scenes { script, json } => commands::scenes::run(script, json),
        Commands::Render {
            script,
            scene,
            all,
            quality,
            format,
            transparent,
            preview,
            media_dir,
            python,
        } => commands::render::run(
            script,
            scene,
            all,
            quality,
            format,
            transparent,
            preview,
            media_dir,
            python,
        ),
        Commands::Check { python } => commands::check::run(python),
    }
}
