//! Bounce Room - a point mass bouncing inside a walled room
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, rolling, driver loop)
//! - `renderer`: ASCII frames, log/JSON traces and frame pacing
//! - `settings`: Run configuration loaded from JSON
//! - `error`: Crate-wide error type

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::{RenderMode, Settings};
pub use sim::{RunSummary, SimEvent, SimParams, SimState, Simulation, StepObserver};

use glam::DVec2;

/// Reference run constants
pub mod consts {
    use glam::DVec2;

    /// Fixed simulation timestep
    pub const DT: f64 = 0.1;
    /// Gravity magnitude (acceleration is straight down)
    pub const GRAVITY: f64 = 9.81;

    /// Velocity scale applied (with sign flip) on wall and floor hits
    pub const BOUNCE_ATTENUATION_FACTOR: f64 = 0.5;
    /// Velocity scale applied after sustained floor contact
    pub const ROLLING_ATTENUATION_FACTOR: f64 = 0.95;
    /// Floor bounces allowed before the run halts
    pub const MAX_NUM_BOUNCES: i32 = 200;

    /// Far wall x coordinate (near wall is at x = 0, floor at y = 0)
    pub const X_WALL: f64 = 49.0;
    /// Height below which a step counts as floor contact
    pub const NEAR_FLOOR_BAND: f64 = 1.0;
    /// Contact steps tolerated before rolling damping kicks in
    pub const ROLLING_NUM_STEPS_THRESHOLD: u32 = 2;

    pub const INITIAL_POSITION: DVec2 = DVec2::new(0.0, 0.0);
    pub const INITIAL_VELOCITY: DVec2 = DVec2::new(10.0, 10.0);

    /// Delay between rendered frames
    pub const FRAME_DELAY_MS: u64 = 30;
    /// Rows drawn above the floor line
    pub const GRID_ROWS: usize = 10;
}

/// Truncate a position to grid cell coordinates (column, row).
///
/// Negative and NaN components land on 0, matching a saturating cast.
#[inline]
pub fn to_cell(pos: DVec2) -> (usize, usize) {
    (pos.x as usize, pos.y as usize)
}
