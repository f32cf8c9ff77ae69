//! Render driving for Scenecast.
//!
//! Turns user render choices into a manim command line
//! ([`invocation::build_invocation`]), runs it as a managed child process
//! whose merged output is streamed line-by-line ([`runner::run_render`]),
//! and gates callers to a single in-flight session
//! ([`session::RenderGate`]).

pub mod invocation;
pub mod runner;
pub mod session;

pub use invocation::{build_invocation, RenderInvocation};
pub use runner::{parse_exit_code, run_render, PROCESS_ENDED_MARKER};
pub use session::{RenderGate, SessionState};
