//! Pursuit state and entity types
//!
//! Everything `step` reads or writes lives in `PursuitState`. A fresh state is
//! all zeros, so stepping before a reset is well defined.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::TARGET_COUNT;

/// Controllable agent with second-order kinematics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Player {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Acceleration computed on the previous step, applied on the next one
    pub acc: DVec2,
    /// Heading angle (radians), kept in (-2π, 2π]
    pub heading: f64,
    /// Angular velocity (rad/s), set straight from the steer action
    pub omega: f64,
}

impl Player {
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Unit vector along the current heading
    pub fn heading_dir(&self) -> DVec2 {
        let (sin, cos) = self.heading.sin_cos();
        DVec2::new(cos, sin)
    }
}

/// Complete episode state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PursuitState {
    pub player: Player,
    /// Always exactly two; a captured target is replaced in place
    pub targets: [DVec2; TARGET_COUNT],
    /// Cumulative captures since reset
    pub score: f64,
    /// Steps since reset
    pub time_ticks: u64,
}

impl PursuitState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance from the player to each target
    pub fn target_distances(&self) -> [f64; TARGET_COUNT] {
        self.targets.map(|t| self.player.pos.distance(t))
    }
}
