use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use scenecast_render::{parse_exit_code, run_render, RenderInvocation, PROCESS_ENDED_MARKER};

fn shell(script: &str) -> RenderInvocation {
    RenderInvocation {
        interpreter: PathBuf::from("/bin/sh"),
        args: vec!["-c".to_string(), script.to_string()],
    }
}

/// Run an invocation and collect every sink line until the worker ends.
fn collect_lines(invocation: RenderInvocation) -> Vec<String> {
    let (tx, rx) = mpsc::channel::<String>();
    run_render(invocation, move |line| {
        let _ = tx.send(line);
    });

    let mut lines = Vec::new();
    while let Ok(line) = rx.recv_timeout(Duration::from_secs(10)) {
        lines.push(line);
    }
    lines
}

#[test]
fn three_lines_arrive_in_order_then_completion() {
    let lines = collect_lines(shell("printf 'one\\ntwo\\nthree\\n'"));

    assert_eq!(
        lines,
        vec![
            "one\n".to_string(),
            "two\n".to_string(),
            "three\n".to_string(),
            format!("\n{PROCESS_ENDED_MARKER} 0 ---"),
        ]
    );
}

#[test]
fn stderr_is_merged_into_the_stream() {
    let lines = collect_lines(shell("echo out; echo err 1>&2; exit 0"));

    assert!(lines.contains(&"out\n".to_string()));
    assert!(lines.contains(&"err\n".to_string()));
    let last = lines.last().expect("completion line expected");
    assert_eq!(parse_exit_code(last), Some(0));
}

#[test]
fn nonzero_exit_code_is_reported_in_completion_line() {
    let lines = collect_lines(shell("exit 3"));

    assert_eq!(lines.len(), 1);
    assert_eq!(parse_exit_code(&lines[0]), Some(3));
}

#[test]
fn completion_line_always_arrives_last() {
    let lines = collect_lines(shell("echo a; echo b"));

    let marker_at = lines
        .iter()
        .position(|line| line.contains(PROCESS_ENDED_MARKER))
        .expect("completion line expected");
    assert_eq!(marker_at, lines.len() - 1);
}

#[test]
fn missing_executable_yields_one_diagnostic_and_no_completion() {
    let invocation = RenderInvocation {
        interpreter: PathBuf::from("/nonexistent/scenecast-python"),
        args: vec!["-m".to_string(), "manim".to_string(), "-qh".to_string()],
    };
    let lines = collect_lines(invocation);

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("interpreter not found"));
    assert!(!lines[0].contains(PROCESS_ENDED_MARKER));
}

#[test]
fn run_render_returns_before_the_child_exits() {
    let (tx, rx) = mpsc::channel::<String>();
    let started = std::time::Instant::now();
    run_render(shell("sleep 0.5; echo done"), move |line| {
        let _ = tx.send(line);
    });
    // The call must hand off to the worker, not wait for the child.
    assert!(started.elapsed() < Duration::from_millis(200));

    let mut lines = Vec::new();
    while let Ok(line) = rx.recv_timeout(Duration::from_secs(10)) {
        lines.push(line);
    }
    assert_eq!(lines.first().map(String::as_str), Some("done\n"));
    assert_eq!(parse_exit_code(lines.last().expect("completion line")), Some(0));
}
