//! Rendering module
//!
//! Observers that turn simulation states into output: ASCII frames in the
//! terminal, log lines or JSON records. None of them feed back into physics.

pub mod grid;
pub mod pacing;
pub mod terminal;
pub mod trace;

pub use grid::{GridLayout, render_frame};
pub use pacing::{FixedDelay, NoDelay, Pacer};
pub use terminal::TerminalRenderer;
pub use trace::{JsonLinesRenderer, LogRenderer};
