//! Observation assembly
//!
//! Layout: `[x, y, vx, vy, ax, ay, heading, omega, d_near, angle_near, d_far, angle_far]`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::state::{Player, PursuitState};
use crate::consts::{OBS_SIZE, TARGET_COUNT};
use crate::get_angle;

/// Distance and signed bearing of each target, in target order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearings {
    pub distance: [f64; TARGET_COUNT],
    pub angle: [f64; TARGET_COUNT],
}

impl Bearings {
    /// Measure targets from `pos` relative to the heading direction `dir`
    pub fn measure(pos: DVec2, dir: DVec2, targets: &[DVec2; TARGET_COUNT]) -> Self {
        let rel = targets.map(|t| t - pos);
        Self {
            distance: rel.map(DVec2::length),
            angle: rel.map(|r| get_angle(dir.x, dir.y, r.x, r.y)),
        }
    }

    /// Index of the (near, far) target; a tie makes target 0 near
    pub fn near_far(&self) -> (usize, usize) {
        if self.distance[0] <= self.distance[1] {
            (0, 1)
        } else {
            (1, 0)
        }
    }
}

/// Fixed-layout observation vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Observation(pub [f64; OBS_SIZE]);

impl Observation {
    pub fn assemble(player: &Player, bearings: &Bearings) -> Self {
        let (near, far) = bearings.near_far();
        Self([
            player.pos.x,
            player.pos.y,
            player.vel.x,
            player.vel.y,
            player.acc.x,
            player.acc.y,
            player.heading,
            player.omega,
            bearings.distance[near],
            bearings.angle[near],
            bearings.distance[far],
            bearings.angle[far],
        ])
    }

    pub fn as_array(&self) -> &[f64; OBS_SIZE] {
        &self.0
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.0[0], self.0[1])
    }

    pub fn velocity(&self) -> DVec2 {
        DVec2::new(self.0[2], self.0[3])
    }

    pub fn acceleration(&self) -> DVec2 {
        DVec2::new(self.0[4], self.0[5])
    }

    pub fn heading(&self) -> f64 {
        self.0[6]
    }

    pub fn omega(&self) -> f64 {
        self.0[7]
    }

    /// (distance, bearing) of the nearer target
    pub fn near_target(&self) -> (f64, f64) {
        (self.0[8], self.0[9])
    }

    /// (distance, bearing) of the farther target
    pub fn far_target(&self) -> (f64, f64) {
        (self.0[10], self.0[11])
    }
}

/// Observation of the current state
pub fn observe(state: &PursuitState) -> Observation {
    let bearings = Bearings::measure(state.player.pos, state.player.heading_dir(), &state.targets);
    Observation::assemble(&state.player, &bearings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn state_with(player: DVec2, t0: DVec2, t1: DVec2) -> PursuitState {
        let mut state = PursuitState::new();
        state.player.pos = player;
        state.targets = [t0, t1];
        state
    }

    #[test]
    fn test_observation_orders_near_first() {
        // Target 0 farther than target 1
        let state = state_with(DVec2::ZERO, DVec2::new(300.0, 0.0), DVec2::new(0.0, 100.0));
        let obs = observe(&state);

        let (d_near, a_near) = obs.near_target();
        let (d_far, a_far) = obs.far_target();
        assert!((d_near - 100.0).abs() < 1e-12);
        assert!((a_near - FRAC_PI_2).abs() < 1e-12);
        assert!((d_far - 300.0).abs() < 1e-12);
        assert!(a_far.abs() < 1e-12);
    }

    #[test]
    fn test_tie_makes_first_target_near() {
        let state = state_with(
            DVec2::new(200.0, 200.0),
            DVec2::new(300.0, 200.0),
            DVec2::new(100.0, 200.0),
        );
        let obs = observe(&state);
        assert_eq!(obs.near_target(), (100.0, 0.0));
        assert_eq!(obs.far_target(), (100.0, PI));
    }

    #[test]
    fn test_player_fields_copied_in_order() {
        let mut state = state_with(DVec2::new(1.0, 2.0), DVec2::ZERO, DVec2::ZERO);
        state.player.vel = DVec2::new(3.0, 4.0);
        state.player.acc = DVec2::new(5.0, 6.0);
        state.player.heading = 0.7;
        state.player.omega = -0.3;

        let obs = observe(&state);
        assert_eq!(&obs.as_array()[..8], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.7, -0.3]);
        assert_eq!(obs.position(), DVec2::new(1.0, 2.0));
        assert_eq!(obs.velocity(), DVec2::new(3.0, 4.0));
        assert_eq!(obs.acceleration(), DVec2::new(5.0, 6.0));
    }

    #[test]
    fn test_observation_serializes_as_array() {
        let obs = Observation([0.5; OBS_SIZE]);
        let json = serde_json::to_string(&obs).unwrap();
        assert!(json.starts_with('['));
        let back: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obs);
    }
}
