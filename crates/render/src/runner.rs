//! Managed execution of the external render process.
//!
//! One detached worker thread exclusively owns the child for its whole
//! lifetime: it spawns the process, merges stdout and stderr line-by-line
//! into the caller's sink as output is produced, and finishes with a
//! single synthesized completion line carrying the exit code. The caller
//! is never blocked and no failure escapes the worker.

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;

use crate::invocation::RenderInvocation;

/// Fixed substring of the synthesized completion line. Matching on it is
/// the only supported way to detect termination through the sink.
pub const PROCESS_ENDED_MARKER: &str = "--- process ended, exit code:";

/// Exit code reported when the child terminated without one (killed by a
/// signal).
const NO_EXIT_CODE: i32 = -1;

/// Launch `invocation` and stream its merged output into `on_line`.
///
/// Returns immediately; `on_line` is invoked from a background thread,
/// one call per line (trailing newlines preserved), then exactly once
/// with the completion line. If the process cannot be spawned, a single
/// diagnostic line is delivered instead and no completion line follows.
///
/// The worker is detached and never joined, so a hung child cannot block
/// host shutdown. There is no cancellation; the session runs until the
/// child exits.
pub fn run_render<F>(invocation: RenderInvocation, on_line: F)
where
    F: FnMut(String) + Send + 'static,
{
    thread::spawn(move || stream_render(invocation, on_line));
}

/// Blocking form of [`run_render`]: runs the whole session on the calling
/// thread. The session gate uses this on its own worker so it can observe
/// the session end.
pub(crate) fn stream_render<F>(invocation: RenderInvocation, mut on_line: F)
where
    F: FnMut(String),
{
    let mut command = Command::new(&invocation.interpreter);
    command
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(
                interpreter = %invocation.interpreter.display(),
                "Render interpreter not found"
            );
            on_line(format!(
                "error: interpreter not found: {}\n",
                invocation.interpreter.display()
            ));
            return;
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to start render process");
            on_line(format!("error: failed to start render process: {err}\n"));
            return;
        }
    };

    tracing::info!(
        pid = child.id(),
        command = %invocation.command_line(),
        "Render process started"
    );

    // Both pipes feed one channel; the worker is the single consumer so
    // sink calls never interleave.
    let (tx, rx) = mpsc::channel::<String>();
    let mut readers = Vec::new();
    if let Some(stdout) = child.stdout.take() {
        readers.push(spawn_line_reader(stdout, tx.clone()));
    }
    if let Some(stderr) = child.stderr.take() {
        readers.push(spawn_line_reader(stderr, tx.clone()));
    }
    drop(tx);

    for line in rx {
        on_line(line);
    }
    for reader in readers {
        let _ = reader.join();
    }

    match child.wait() {
        Ok(status) => {
            let code = status.code().unwrap_or(NO_EXIT_CODE);
            tracing::info!(code, "Render process ended");
            on_line(format!("\n{PROCESS_ENDED_MARKER} {code} ---"));
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to wait for render process");
            on_line(format!("error: failed to wait for render process: {err}\n"));
        }
    }
}

/// Forward one pipe to the line channel until it closes. Lines are read
/// as raw bytes and lossily decoded, so invalid UTF-8 from the child
/// cannot abort the stream.
fn spawn_line_reader<R>(stream: R, tx: mpsc::Sender<String>) -> thread::JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(stream);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf).into_owned();
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    let _ = tx.send(format!("error: failed reading render output: {err}\n"));
                    break;
                }
            }
        }
    })
}

/// Extract the exit code from a sink line, if it is the completion line.
pub fn parse_exit_code(line: &str) -> Option<i32> {
    let rest = line.split(PROCESS_ENDED_MARKER).nth(1)?;
    rest.trim_end_matches('-').trim().parse().ok()
}
