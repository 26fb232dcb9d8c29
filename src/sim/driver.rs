//! Simulation driver
//!
//! Owns the state, steps it until the bounce budget is spent and hands each
//! new state to an observer (terminal renderer, log trace, test probe...).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::params::SimParams;
use super::state::{SimEvent, SimState};
use super::step::step;
use crate::error::Result;

/// Receives every state the driver produces, once per completed step.
pub trait StepObserver {
    /// Called after each step with the new state and what happened during it
    fn on_step(&mut self, state: &SimState, events: &[SimEvent]) -> Result<()>;

    /// Called once when the run ends
    fn on_finish(&mut self, _summary: &RunSummary) -> Result<()> {
        Ok(())
    }
}

impl<F> StepObserver for F
where
    F: FnMut(&SimState, &[SimEvent]) -> Result<()>,
{
    fn on_step(&mut self, state: &SimState, events: &[SimEvent]) -> Result<()> {
        self(state, events)
    }
}

/// Totals for a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub steps: u64,
    pub floor_bounces: u32,
    pub wall_bounces: u32,
    pub rolling_events: u32,
    pub final_position: DVec2,
    pub final_velocity: DVec2,
    /// Run was cut short by a step limit rather than the bounce budget
    pub step_limit_reached: bool,
}

/// Owns parameters and state for a single run
#[derive(Debug, Clone)]
pub struct Simulation {
    params: SimParams,
    state: SimState,
    floor_bounces: u32,
    wall_bounces: u32,
    rolling_events: u32,
}

impl Simulation {
    pub fn new(params: SimParams) -> Self {
        Self {
            state: SimState::new(&params),
            params,
            floor_bounces: 0,
            wall_bounces: 0,
            rolling_events: 0,
        }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Bounce budget exhausted
    pub fn is_finished(&self) -> bool {
        !self.state.is_running()
    }

    /// Take one step and tally its events
    pub fn advance(&mut self) -> Vec<SimEvent> {
        let events = step(&mut self.state, &self.params);
        for event in &events {
            match event {
                SimEvent::WallBounce { wall, impact_speed } => {
                    self.wall_bounces += 1;
                    log::debug!(
                        "tick {}: {:?} wall hit at speed {:.3}",
                        self.state.time_ticks,
                        wall,
                        impact_speed
                    );
                }
                SimEvent::FloorBounce {
                    impact_speed,
                    bounces_remaining,
                } => {
                    self.floor_bounces += 1;
                    log::debug!(
                        "tick {}: floor bounce at speed {:.3}, {} left",
                        self.state.time_ticks,
                        impact_speed,
                        bounces_remaining
                    );
                }
                SimEvent::Rolling => {
                    self.rolling_events += 1;
                    log::debug!("tick {}: rolling damping", self.state.time_ticks);
                }
            }
        }
        events
    }

    /// Run until the bounce counter drops below zero.
    ///
    /// Degenerate parameters (no gravity) may never reach the floor, in
    /// which case this never returns; use [`Simulation::run_with_limit`]
    /// to bound such runs.
    pub fn run<O: StepObserver + ?Sized>(&mut self, observer: &mut O) -> Result<RunSummary> {
        self.run_with_limit(observer, None)
    }

    /// Run until the bounce budget is spent or `max_steps` steps have been taken.
    pub fn run_with_limit<O: StepObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        max_steps: Option<u64>,
    ) -> Result<RunSummary> {
        if self.params.may_never_bounce() {
            log::warn!(
                "gravity is {}; the floor may never be reached and the run may not end",
                self.params.gravity
            );
        }
        log::info!(
            "Starting run: {} bounces, start {:?}, velocity {:?}",
            self.params.max_bounces,
            self.state.position,
            self.state.velocity
        );

        let mut steps = 0u64;
        let mut step_limit_reached = false;
        while self.state.is_running() {
            if max_steps.is_some_and(|limit| steps >= limit) {
                log::warn!("Stopping after {steps} steps with bounces left");
                step_limit_reached = true;
                break;
            }
            let events = self.advance();
            steps += 1;
            log::trace!(
                "tick {}: pos=({:.3}, {:.3})",
                self.state.time_ticks,
                self.state.position.x,
                self.state.position.y
            );
            observer.on_step(&self.state, &events)?;
        }

        let summary = self.summary(steps, step_limit_reached);
        log::info!(
            "Run finished after {} steps: {} floor bounces, {} wall bounces, {} rolling",
            summary.steps,
            summary.floor_bounces,
            summary.wall_bounces,
            summary.rolling_events
        );
        observer.on_finish(&summary)?;
        Ok(summary)
    }

    fn summary(&self, steps: u64, step_limit_reached: bool) -> RunSummary {
        RunSummary {
            steps,
            floor_bounces: self.floor_bounces,
            wall_bounces: self.wall_bounces,
            rolling_events: self.rolling_events,
            final_position: self.state.position,
            final_velocity: self.state.velocity,
            step_limit_reached,
        }
    }
}
