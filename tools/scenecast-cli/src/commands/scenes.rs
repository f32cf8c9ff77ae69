//! List renderable scenes in a script.

use std::path::PathBuf;

use scenecast_discovery::discover_scenes;

pub fn run(script: PathBuf, json: bool) -> anyhow::Result<()> {
    let discovery = discover_scenes(&script);

    if let Some(diagnostic) = &discovery.diagnostic {
        eprintln!("warning: {diagnostic}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&discovery.scenes)?);
        return Ok(());
    }

    if discovery.scenes.is_empty() {
        println!("No scenes found in {}", script.display());
    } else {
        for name in &discovery.scenes {
            println!("{name}");
        }
    }

    Ok(())
}
