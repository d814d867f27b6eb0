//! World, physics and reward tuning
//!
//! Supplied once when an environment is built and never mutated afterwards.
//! Keep this separate from runtime constants in `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::CAPTURE_RADIUS;
use crate::spaces::BoxSpace;

/// Errors raised while loading or validating tuning
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Reward shaping weights, summed linearly each step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardWeights {
    /// Added once per captured target
    pub capture_bonus: f64,
    /// Added every step (negative)
    pub step_penalty: f64,
    /// Multiplies |Δheading| for the step (negative to discourage turning)
    pub turn_penalty: f64,
    /// Multiplies the speed magnitude after boundary handling
    pub speed_bonus: f64,
}

impl Default for RewardWeights {
    fn default() -> Self {
        Self {
            capture_bonus: 10.0,
            step_penalty: -0.1,
            turn_penalty: -0.5,
            speed_bonus: 0.005,
        }
    }
}

/// Full constant bundle for one environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PursuitTuning {
    /// World width in world units
    pub world_width: u32,
    /// World height in world units
    pub world_height: u32,
    /// Steer action to angular velocity (rad/s per unit)
    pub steering_gain: f64,
    /// Throttle action to propulsion force
    pub propulsion_gain: f64,
    /// Quadratic drag constant
    pub drag_coeff: f64,
    /// Fixed integration timestep (seconds)
    pub dt: f64,
    /// Speed cap
    pub max_speed: f64,
    /// Distance at which a target is captured
    pub capture_radius: f64,
    pub rewards: RewardWeights,
}

impl Default for PursuitTuning {
    fn default() -> Self {
        Self {
            world_width: 800,
            world_height: 600,
            steering_gain: 3.0,
            propulsion_gain: 120.0,
            drag_coeff: 0.002,
            dt: 0.05,
            max_speed: 200.0,
            capture_radius: CAPTURE_RADIUS,
            rewards: RewardWeights::default(),
        }
    }
}

impl PursuitTuning {
    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the kinematics cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.world_width == 0 || self.world_height == 0 {
            return Err(TuningError::Invalid("world dimensions must be positive"));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(TuningError::Invalid("dt must be positive and finite"));
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return Err(TuningError::Invalid("max_speed must be positive and finite"));
        }
        if !(self.capture_radius.is_finite() && self.capture_radius >= 0.0) {
            return Err(TuningError::Invalid("capture_radius must be non-negative"));
        }
        if !(self.drag_coeff.is_finite() && self.drag_coeff >= 0.0) {
            return Err(TuningError::Invalid("drag_coeff must be non-negative"));
        }
        let gains = [self.steering_gain, self.propulsion_gain];
        let rewards = [
            self.rewards.capture_bonus,
            self.rewards.step_penalty,
            self.rewards.turn_penalty,
            self.rewards.speed_bonus,
        ];
        if gains.iter().chain(rewards.iter()).any(|v| !v.is_finite()) {
            return Err(TuningError::Invalid("gains and reward weights must be finite"));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.world_width as f64
    }

    pub fn height(&self) -> f64 {
        self.world_height as f64
    }

    /// Throttle and steer, both in [-1, 1]
    pub fn action_space(&self) -> BoxSpace {
        BoxSpace::new(vec![-1.0, -1.0], vec![1.0, 1.0])
    }

    /// Bounds of every observation field, in observation order
    pub fn observation_space(&self) -> BoxSpace {
        use std::f64::consts::{PI, TAU};

        let diagonal = self.width().hypot(self.height());
        let v = self.max_speed;
        let inf = f64::INFINITY;
        BoxSpace::new(
            vec![0.0, 0.0, -v, -v, -inf, -inf, -TAU, -inf, 0.0, -PI, 0.0, -PI],
            vec![
                self.width(),
                self.height(),
                v,
                v,
                inf,
                inf,
                TAU,
                inf,
                diagonal,
                PI,
                diagonal,
                PI,
            ],
        )
    }
}
