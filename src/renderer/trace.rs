//! Non-graphical observers: log lines and JSON-lines traces

use std::io::Write;

use glam::DVec2;
use serde::Serialize;

use crate::error::Result;
use crate::sim::{RunSummary, SimEvent, SimState, StepObserver};

/// Reports each step through the `log` facade
#[derive(Debug, Default)]
pub struct LogRenderer;

impl StepObserver for LogRenderer {
    fn on_step(&mut self, state: &SimState, events: &[SimEvent]) -> Result<()> {
        log::trace!(
            "tick {} pos=({:.3}, {:.3}) vel=({:.3}, {:.3})",
            state.time_ticks,
            state.position.x,
            state.position.y,
            state.velocity.x,
            state.velocity.y
        );
        for event in events {
            log::debug!("tick {}: {:?}", state.time_ticks, event);
        }
        Ok(())
    }

    fn on_finish(&mut self, summary: &RunSummary) -> Result<()> {
        log::info!("{summary:?}");
        Ok(())
    }
}

#[derive(Serialize)]
struct StepRecord<'a> {
    tick: u64,
    position: DVec2,
    velocity: DVec2,
    bounces_remaining: i32,
    events: &'a [SimEvent],
}

#[derive(Serialize)]
struct FinishRecord<'a> {
    summary: &'a RunSummary,
}

/// Writes one JSON object per step, then one with the run summary
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepObserver for JsonLinesRenderer<W> {
    fn on_step(&mut self, state: &SimState, events: &[SimEvent]) -> Result<()> {
        let record = StepRecord {
            tick: state.time_ticks,
            position: state.position,
            velocity: state.velocity,
            bounces_remaining: state.bounces_remaining,
            events,
        };
        serde_json::to_writer(&mut self.out, &record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn on_finish(&mut self, summary: &RunSummary) -> Result<()> {
        serde_json::to_writer(&mut self.out, &FinishRecord { summary })?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
