//! Single in-flight render session gating.
//!
//! The surrounding shell allows one render at a time; the gate owns that
//! rule so a second child can never be spawned while one is live. It
//! wraps the runner's worker and flips back to idle when the session
//! ends, whether through the completion line or a launch failure.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use scenecast_common::error::{ScenecastError, ScenecastResult};

use crate::invocation::RenderInvocation;
use crate::runner;

/// State of the gated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
}

/// Rejects overlapping render sessions.
///
/// Clones share the same gate, so a shell can hand one handle to every
/// place that may trigger a render.
#[derive(Debug, Clone, Default)]
pub struct RenderGate {
    state: Arc<Mutex<SessionState>>,
}

impl RenderGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        *self.lock()
    }

    pub fn is_running(&self) -> bool {
        self.state() == SessionState::Running
    }

    /// Start a gated render session.
    ///
    /// Returns [`ScenecastError::RenderBusy`] without spawning anything
    /// when a session is already running. Otherwise behaves like
    /// [`runner::run_render`]: returns immediately and streams through
    /// `on_line` from a background thread.
    pub fn start<F>(&self, invocation: RenderInvocation, on_line: F) -> ScenecastResult<()>
    where
        F: FnMut(String) + Send + 'static,
    {
        {
            let mut state = self.lock();
            if *state == SessionState::Running {
                tracing::warn!("Rejected render start while a session is running");
                return Err(ScenecastError::RenderBusy);
            }
            *state = SessionState::Running;
        }

        let gate = self.clone();
        thread::spawn(move || {
            runner::stream_render(invocation, on_line);
            *gate.lock() = SessionState::Idle;
        });
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::mpsc;
    use std::time::Duration;

    fn shell(script: &str) -> RenderInvocation {
        RenderInvocation {
            interpreter: PathBuf::from("/bin/sh"),
            args: vec!["-c".to_string(), script.to_string()],
        }
    }

    fn wait_for_idle(gate: &RenderGate) {
        for _ in 0..200 {
            if gate.state() == SessionState::Idle {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("gate did not return to idle");
    }

    #[test]
    fn test_second_start_while_running_is_rejected() {
        let gate = RenderGate::new();
        let (tx, rx) = mpsc::channel::<String>();

        gate.start(shell("sleep 0.4"), move |line| {
            let _ = tx.send(line);
        })
        .expect("first start should be accepted");

        let busy = gate.start(shell("true"), |_| {});
        assert!(matches!(busy, Err(ScenecastError::RenderBusy)));

        // Drain until the session ends, then the gate reopens.
        while rx.recv().is_ok() {}
        wait_for_idle(&gate);
        gate.start(shell("true"), |_| {})
            .expect("start after completion should be accepted");
        wait_for_idle(&gate);
    }

    #[test]
    fn test_gate_reopens_after_launch_failure() {
        let gate = RenderGate::new();
        let (tx, rx) = mpsc::channel::<String>();

        let invocation = RenderInvocation {
            interpreter: PathBuf::from("/nonexistent/scenecast-python"),
            args: vec!["-m".to_string(), "manim".to_string()],
        };
        gate.start(invocation, move |line| {
            let _ = tx.send(line);
        })
        .expect("start should be accepted");

        let diagnostic = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("diagnostic line expected");
        assert!(diagnostic.contains("interpreter not found"));

        wait_for_idle(&gate);
    }
}
