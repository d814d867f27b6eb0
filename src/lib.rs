//! Pursuit Sim - a 2D pursuit environment
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, captures, rewards, observations)
//! - `env`: Owned environment driving the simulation with a seeded stream
//! - `tuning`: Data-driven world, physics and reward constants
//! - `spaces`: Action/observation space descriptions for external drivers

pub mod env;
pub mod sim;
pub mod spaces;
pub mod tuning;

pub use env::PursuitEnv;
pub use sim::{Action, Observation, PursuitState, SimRng, StepInfo, StepResult};
pub use tuning::{PursuitTuning, RewardWeights, TuningError};

use std::f64::consts::{PI, TAU};

/// Simulation constants that are not gameplay tuning
pub mod consts {
    /// Distance within which a target counts as reached
    pub const CAPTURE_RADIUS: f64 = 40.0;
    /// Episode ends once the score drops below this
    pub const TERMINATION_SCORE: f64 = -10.0;
    /// Number of targets in the world
    pub const TARGET_COUNT: usize = 2;
    /// Observation vector length
    pub const OBS_SIZE: usize = 12;
    /// Action vector length (throttle, steer)
    pub const ACTION_SIZE: usize = 2;
}

/// Pull a heading back into (-2π, 2π] with a single adjustment.
///
/// Not a full modulo: a heading beyond ±4π comes back still out of range.
#[inline]
pub fn wrap_heading(heading: f64) -> f64 {
    if heading >= TAU {
        heading - TAU
    } else if heading <= -TAU {
        heading + TAU
    } else {
        heading
    }
}

/// Signed angle from the heading `(cos_h, sin_h)` to the vector `(dx, dy)`.
///
/// Result lies in (-π, π]; positive is counter-clockwise.
#[inline]
pub fn get_angle(cos_h: f64, sin_h: f64, dx: f64, dy: f64) -> f64 {
    let cross = cos_h * dy - sin_h * dx;
    let dot = cos_h * dx + sin_h * dy;
    let angle = cross.atan2(dot);
    if angle <= -PI { PI } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_wrap_heading_single_step() {
        assert!((wrap_heading(TAU + 0.25) - 0.25).abs() < 1e-12);
        assert!((wrap_heading(-TAU - 0.25) + 0.25).abs() < 1e-12);
        assert_eq!(wrap_heading(1.0), 1.0);
        // Exactly 2π wraps to zero, exactly -2π wraps to zero
        assert_eq!(wrap_heading(TAU), 0.0);
        assert_eq!(wrap_heading(-TAU), 0.0);
    }

    #[test]
    fn test_wrap_heading_is_not_modulo() {
        let wrapped = wrap_heading(5.0 * PI);
        assert!(wrapped > TAU);
    }

    #[test]
    fn test_get_angle_quadrants() {
        // Heading along +x
        assert!(get_angle(1.0, 0.0, 10.0, 0.0).abs() < 1e-12);
        assert!((get_angle(1.0, 0.0, 0.0, 10.0) - FRAC_PI_2).abs() < 1e-12);
        assert!((get_angle(1.0, 0.0, 0.0, -10.0) + FRAC_PI_2).abs() < 1e-12);
        // Directly behind is +π, never -π
        assert_eq!(get_angle(1.0, 0.0, -10.0, 0.0), PI);
        assert_eq!(get_angle(1.0, -0.0, -10.0, -0.0), PI);
    }

    #[test]
    fn test_get_angle_rotated_heading() {
        let (s, c) = FRAC_PI_2.sin_cos();
        // Heading along +y, target along +x is a right turn
        assert!((get_angle(c, s, 5.0, 0.0) + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_get_angle_zero_vector() {
        assert_eq!(get_angle(1.0, 0.0, 0.0, 0.0), 0.0);
    }
}
