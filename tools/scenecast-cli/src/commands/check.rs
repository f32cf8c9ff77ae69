//! Check that the interpreter and the manim module are invocable.

use std::path::PathBuf;
use std::process::Command;

use scenecast_common::config::RenderDefaults;

pub fn run(python: Option<PathBuf>) -> anyhow::Result<()> {
    let python = python.unwrap_or(RenderDefaults::default().interpreter);

    println!("Scenecast System Check");
    println!("{}", "=".repeat(50));

    let interpreter_ok = match probe(&python, &["--version"]) {
        Some(version) => {
            println!("[OK] Interpreter: {version}");
            true
        }
        None => {
            println!("[FAIL] Interpreter not runnable: {}", python.display());
            false
        }
    };

    let manim_ok = match probe(&python, &["-m", "manim", "--version"]) {
        Some(version) => {
            println!("[OK] manim: {version}");
            true
        }
        None => {
            println!("[FAIL] manim module not invocable via {}", python.display());
            false
        }
    };

    println!();
    if interpreter_ok && manim_ok {
        println!("Renders can be launched. Scenecast is ready.");
    } else {
        println!("Fix the failures above before launching a render.");
    }

    Ok(())
}

/// Run the probe command and return its first output line on success.
fn probe(python: &PathBuf, args: &[&str]) -> Option<String> {
    let output = Command::new(python).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    // Older interpreters print the version banner to stderr.
    let text = if output.stdout.is_empty() {
        String::from_utf8_lossy(&output.stderr).into_owned()
    } else {
        String::from_utf8_lossy(&output.stdout).into_owned()
    };
    text.lines().next().map(|line| line.trim().to_string())
}
