//! Terminal renderer
//!
//! Clears the screen, draws the room and paces frames.

use std::io::Write;

use super::grid::{GridLayout, render_frame};
use super::pacing::Pacer;
use crate::error::Result;
use crate::sim::{RunSummary, SimEvent, SimState, StepObserver};

/// ANSI: erase display, cursor to top-left
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Draws every state as an ASCII frame on `out`
pub struct TerminalRenderer<W: Write, P: Pacer> {
    out: W,
    pacer: P,
    layout: GridLayout,
    clear_screen: bool,
    frames: u64,
}

impl<W: Write, P: Pacer> TerminalRenderer<W, P> {
    pub fn new(out: W, pacer: P, layout: GridLayout) -> Self {
        Self {
            out,
            pacer,
            layout,
            clear_screen: true,
            frames: 0,
        }
    }

    /// Skip the clear-screen sequence (frames scroll instead)
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write, P: Pacer> StepObserver for TerminalRenderer<W, P> {
    fn on_step(&mut self, state: &SimState, _events: &[SimEvent]) -> Result<()> {
        if self.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out
            .write_all(render_frame(state.position, &self.layout).as_bytes())?;
        self.out.flush()?;
        self.frames += 1;
        self.pacer.pace();
        Ok(())
    }

    fn on_finish(&mut self, summary: &RunSummary) -> Result<()> {
        log::info!("Drew {} frames for {} steps", self.frames, summary.steps);
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::NoDelay;
    use glam::DVec2;

    fn state_at(x: f64, y: f64) -> SimState {
        SimState {
            position: DVec2::new(x, y),
            velocity: DVec2::ZERO,
            bounces_remaining: 1,
            contact_steps: 0,
            time_ticks: 1,
        }
    }

    #[test]
    fn test_frame_is_prefixed_with_clear() {
        let mut renderer = TerminalRenderer::new(Vec::new(), NoDelay, GridLayout::default());
        renderer.on_step(&state_at(3.0, 2.0), &[]).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.starts_with(CLEAR_SCREEN));
        assert_eq!(
            &out[CLEAR_SCREEN.len()..],
            render_frame(DVec2::new(3.0, 2.0), &GridLayout::default())
        );
    }

    #[test]
    fn test_without_clear_frames_concatenate() {
        let mut renderer =
            TerminalRenderer::new(Vec::new(), NoDelay, GridLayout::default()).with_clear_screen(false);
        renderer.on_step(&state_at(1.0, 1.0), &[]).unwrap();
        renderer.on_step(&state_at(2.0, 1.0), &[]).unwrap();
        assert_eq!(renderer.frames_drawn(), 2);

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(!out.contains('\x1b'));
        assert_eq!(out.matches('*').count(), 2);
    }
}
