//! Player kinematics
//!
//! Integration is semi-implicit Euler with a one-step-lagged acceleration:
//! position and velocity advance using the derivatives stored on the previous
//! step, and only then is the acceleration overwritten with the fresh force.
//! Reordering these changes the dynamics.

use glam::DVec2;

use super::state::Player;
use crate::tuning::PursuitTuning;

/// Propulsion along `dir` scaled by throttle, minus quadratic drag
pub fn thrust_force(vel: DVec2, dir: DVec2, throttle: f64, tuning: &PursuitTuning) -> DVec2 {
    dir * (throttle * tuning.propulsion_gain) - vel * (tuning.drag_coeff * vel.length())
}

/// Advance with the stored derivatives, then store `force` for the next call
pub fn integrate(player: &mut Player, force: DVec2, dt: f64) {
    player.heading += player.omega * dt;
    player.pos += player.vel * dt;
    player.vel += player.acc * dt;
    player.acc = force;
}

/// Clamp position into [0, width] x [0, height], zeroing velocity on any clamped axis.
///
/// Returns true if either axis was clamped.
pub fn clamp_to_world(player: &mut Player, width: f64, height: f64) -> bool {
    let x_hit = clamp_axis(&mut player.pos.x, &mut player.vel.x, width);
    let y_hit = clamp_axis(&mut player.pos.y, &mut player.vel.y, height);
    x_hit || y_hit
}

fn clamp_axis(pos: &mut f64, vel: &mut f64, extent: f64) -> bool {
    if *pos < 0.0 {
        *pos = 0.0;
    } else if *pos > extent {
        *pos = extent;
    } else {
        return false;
    }
    *vel = 0.0;
    true
}

/// Enforce the speed cap.
///
/// At or above `max_speed` the velocity is replaced by `dir * max_speed`, where
/// `dir` is the heading from before this step's heading update. Returns the
/// speed measured before capping.
pub fn cap_speed(player: &mut Player, dir: DVec2, max_speed: f64) -> f64 {
    let speed = player.speed();
    if speed >= max_speed {
        log::debug!("speed {speed:.3} capped to {max_speed}");
        player.vel = dir * max_speed;
    }
    speed
}
