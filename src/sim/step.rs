//! Fixed timestep update
//!
//! Advances the mass by one step: integrate, resolve walls then floor,
//! track floor contact and apply rolling damping.

use glam::DVec2;

use super::collision::{resolve_far_wall, resolve_floor, resolve_near_wall};
use super::params::SimParams;
use super::state::{SimEvent, SimState, Wall};

/// Semi-implicit Euler integration under constant acceleration.
///
/// Velocity is advanced first, but the position update uses the pre-step
/// velocity plus the `0.5·a·dt²` term. Evaluation order is fixed
/// (`p0 + v0·dt + 0.5·a·dt·dt`, left to right) so trajectories are
/// reproducible bit for bit.
#[inline]
pub fn integrate(position: DVec2, velocity: DVec2, acceleration: DVec2, dt: f64) -> (DVec2, DVec2) {
    let v0 = velocity;
    let velocity = v0 + acceleration * dt;
    let position = position + v0 * dt + 0.5 * acceleration * dt * dt;
    (position, velocity)
}

/// Advance the state by one fixed timestep.
///
/// Boundary checks run against the post-integration state in order: near
/// wall, far wall, floor. Only the floor decrements the bounce counter.
pub fn step(state: &mut SimState, params: &SimParams) -> Vec<SimEvent> {
    let mut events = Vec::new();

    let (mut pos, mut vel) = integrate(
        state.position,
        state.velocity,
        params.acceleration(),
        params.dt,
    );

    let impact_x = vel.x.abs();
    if resolve_near_wall(&mut pos, &mut vel, params.bounce_attenuation) {
        events.push(SimEvent::WallBounce {
            wall: Wall::Near,
            impact_speed: impact_x,
        });
    }

    let impact_x = vel.x.abs();
    if resolve_far_wall(&mut pos, &mut vel, params.room_width, params.bounce_attenuation) {
        events.push(SimEvent::WallBounce {
            wall: Wall::Far,
            impact_speed: impact_x,
        });
    }

    let impact_y = vel.y.abs();
    if resolve_floor(&mut pos, &mut vel, params.bounce_attenuation) {
        state.bounces_remaining -= 1;
        events.push(SimEvent::FloorBounce {
            impact_speed: impact_y,
            bounces_remaining: state.bounces_remaining,
        });
    }

    // Fixed band, independent of velocity: passing close to the floor counts too
    if pos.y < params.near_floor_band {
        state.contact_steps += 1;
    } else {
        state.contact_steps = 0;
    }

    if state.contact_steps > params.rolling_steps_threshold {
        vel *= params.rolling_attenuation;
        state.contact_steps = 0;
        events.push(SimEvent::Rolling);
    }

    state.position = pos;
    state.velocity = vel;
    state.time_ticks += 1;

    events
}
