//! Simulation state and step events
//!
//! Owned exclusively by the driver and mutated in place once per step.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::params::SimParams;

/// Which vertical wall was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wall {
    /// Wall at x = 0
    Near,
    /// Wall at x = room width
    Far,
}

/// Something noteworthy that happened during a step.
///
/// Purely informational: observers may log or draw these, physics never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimEvent {
    /// Horizontal velocity reflected off a wall
    WallBounce { wall: Wall, impact_speed: f64 },
    /// Vertical velocity reflected off the floor; consumes one bounce
    FloorBounce {
        impact_speed: f64,
        bounces_remaining: i32,
    },
    /// Sustained floor contact damped both velocity components
    Rolling,
}

/// Complete mutable state of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Starts at the bounce budget; only floor bounces decrement it
    pub bounces_remaining: i32,
    /// Consecutive steps spent below the near-floor band
    pub contact_steps: u32,
    /// Steps taken so far
    pub time_ticks: u64,
}

impl SimState {
    /// Fresh state at the configured start with a full bounce budget
    pub fn new(params: &SimParams) -> Self {
        Self {
            position: params.initial_position,
            velocity: params.initial_velocity,
            bounces_remaining: params.max_bounces,
            contact_steps: 0,
            time_ticks: 0,
        }
    }

    /// The run continues while the bounce counter is non-negative
    #[inline]
    pub fn is_running(&self) -> bool {
        self.bounces_remaining >= 0
    }
}
