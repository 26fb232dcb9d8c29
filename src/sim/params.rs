//! Physical and room parameters for a run
//!
//! Held immutably by the driver and passed by reference to every step, so
//! alternate parameter sets can be exercised without touching globals.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Immutable configuration of the room and the mass inside it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Fixed timestep
    pub dt: f64,
    /// Gravity magnitude (acceleration is `(0, -gravity)`)
    pub gravity: f64,
    /// Scale applied to the reflected velocity component on wall/floor hits
    pub bounce_attenuation: f64,
    /// Scale applied to both velocity components after sustained floor contact
    pub rolling_attenuation: f64,
    /// Floor bounces allowed; the run ends once the counter drops below zero
    pub max_bounces: i32,
    /// Far wall x coordinate
    pub room_width: f64,
    /// Height below which a step counts as floor contact
    pub near_floor_band: f64,
    /// Contact steps tolerated before rolling damping applies
    pub rolling_steps_threshold: u32,
    pub initial_position: DVec2,
    pub initial_velocity: DVec2,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            dt: DT,
            gravity: GRAVITY,
            bounce_attenuation: BOUNCE_ATTENUATION_FACTOR,
            rolling_attenuation: ROLLING_ATTENUATION_FACTOR,
            max_bounces: MAX_NUM_BOUNCES,
            room_width: X_WALL,
            near_floor_band: NEAR_FLOOR_BAND,
            rolling_steps_threshold: ROLLING_NUM_STEPS_THRESHOLD,
            initial_position: INITIAL_POSITION,
            initial_velocity: INITIAL_VELOCITY,
        }
    }
}

impl SimParams {
    /// Constant acceleration for the run
    #[inline]
    pub fn acceleration(&self) -> DVec2 {
        DVec2::new(0.0, -self.gravity)
    }

    /// Reject parameter sets loaded from outside that the physics can't make sense of.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("dt", self.dt),
            ("gravity", self.gravity),
            ("bounce_attenuation", self.bounce_attenuation),
            ("rolling_attenuation", self.rolling_attenuation),
            ("room_width", self.room_width),
            ("near_floor_band", self.near_floor_band),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(Error::InvalidParam(format!("{name} must be finite, got {value}")));
            }
        }
        if !self.initial_position.is_finite() || !self.initial_velocity.is_finite() {
            return Err(Error::InvalidParam(
                "initial position and velocity must be finite".to_string(),
            ));
        }
        if self.dt <= 0.0 {
            return Err(Error::InvalidParam(format!("dt must be > 0, got {}", self.dt)));
        }
        for (name, factor) in [
            ("bounce_attenuation", self.bounce_attenuation),
            ("rolling_attenuation", self.rolling_attenuation),
        ] {
            if !(0.0..=1.0).contains(&factor) {
                return Err(Error::InvalidParam(format!(
                    "{name} must lie in [0, 1], got {factor}"
                )));
            }
        }
        if self.room_width <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "room_width must be > 0, got {}",
                self.room_width
            )));
        }
        if self.max_bounces < 0 {
            return Err(Error::InvalidParam(format!(
                "max_bounces must be >= 0, got {}",
                self.max_bounces
            )));
        }
        let p = self.initial_position;
        if p.x < 0.0 || p.x > self.room_width || p.y < 0.0 {
            return Err(Error::InvalidParam(format!(
                "initial position ({}, {}) lies outside the room [0, {}] x [0, inf)",
                p.x, p.y, self.room_width
            )));
        }
        Ok(())
    }

    /// Whether the floor may never be hit, leaving the bounce budget untouched forever.
    ///
    /// Without downward gravity the mass only reaches the floor if it starts
    /// moving down, and even then the first bounce sends it up for good.
    pub fn may_never_bounce(&self) -> bool {
        self.gravity <= 0.0
    }
}
