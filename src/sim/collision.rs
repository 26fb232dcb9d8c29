//! Collision response against the room boundaries
//!
//! The room is axis-aligned: a wall at x = 0, a wall at x = room width and
//! a floor at y = 0. Each check only fires when the mass is past the
//! boundary AND still moving further out, so a mass resting on a boundary
//! is never bounced twice.

use glam::DVec2;

/// Reflect a velocity component, losing energy by `factor`
#[inline]
pub fn attenuated_reflection(v: f64, factor: f64) -> f64 {
    v * -factor
}

/// Wall at x = 0. Returns true if the mass bounced.
pub fn resolve_near_wall(pos: &mut DVec2, vel: &mut DVec2, attenuation: f64) -> bool {
    if pos.x < 0.0 && vel.x < 0.0 {
        vel.x = attenuated_reflection(vel.x, attenuation);
        pos.x = 0.0;
        return true;
    }
    false
}

/// Wall at x = `room_width`. Returns true if the mass bounced.
pub fn resolve_far_wall(pos: &mut DVec2, vel: &mut DVec2, room_width: f64, attenuation: f64) -> bool {
    if pos.x > room_width && vel.x > 0.0 {
        vel.x = attenuated_reflection(vel.x, attenuation);
        pos.x = room_width;
        return true;
    }
    false
}

/// Floor at y = 0. Returns true if the mass bounced; the caller owns the bounce counter.
pub fn resolve_floor(pos: &mut DVec2, vel: &mut DVec2, attenuation: f64) -> bool {
    if pos.y < 0.0 && vel.y < 0.0 {
        vel.y = attenuated_reflection(vel.y, attenuation);
        pos.y = 0.0;
        return true;
    }
    false
}
