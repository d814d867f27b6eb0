//! Reset and fixed-timestep step
//!
//! Core state transition. Order matters: captures use pre-step positions, the
//! speed cap and bearings use the pre-step heading, and the turning penalty
//! uses the heading change before it is wrapped.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::observation::{Bearings, Observation, observe};
use super::physics::{cap_speed, clamp_to_world, integrate, thrust_force};
use super::rng::RandomStream;
use super::state::{Player, PursuitState};
use crate::consts::TERMINATION_SCORE;
use crate::tuning::PursuitTuning;
use crate::wrap_heading;

/// Control input for a single step
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    /// Scales propulsion along the heading
    pub throttle: f64,
    /// Scales angular velocity
    pub steer: f64,
}

impl Action {
    pub fn new(throttle: f64, steer: f64) -> Self {
        Self { throttle, steer }
    }
}

impl From<[f64; 2]> for Action {
    fn from([throttle, steer]: [f64; 2]) -> Self {
        Self { throttle, steer }
    }
}

/// Auxiliary step diagnostics (currently empty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepInfo {}

/// Everything a driver gets back from `step`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

/// Uniform integer respawn point in [0, width) x [0, height), x drawn before y
fn random_point<R: RandomStream>(rng: &mut R, tuning: &PursuitTuning) -> DVec2 {
    // Dimensions are validated non-zero
    let x = rng.int_inclusive(tuning.world_width - 1);
    let y = rng.int_inclusive(tuning.world_height - 1);
    DVec2::new(x as f64, y as f64)
}

/// Start a new episode and return its first observation
pub fn reset<R: RandomStream>(
    state: &mut PursuitState,
    tuning: &PursuitTuning,
    rng: &mut R,
) -> Observation {
    // All x coordinates first, then all y coordinates, then the heading
    let xs: [u32; 3] = std::array::from_fn(|_| rng.int_inclusive(tuning.world_width));
    let ys: [u32; 3] = std::array::from_fn(|_| rng.int_inclusive(tuning.world_height));
    let heading = rng.uniform(std::f64::consts::TAU);

    let point = |i: usize| DVec2::new(xs[i] as f64, ys[i] as f64);
    *state = PursuitState {
        player: Player {
            pos: point(0),
            heading,
            ..Default::default()
        },
        targets: [point(1), point(2)],
        score: 0.0,
        time_ticks: 0,
    };

    log::info!(
        "reset: player ({:.0}, {:.0}) heading {:.3}, targets {:?}",
        state.player.pos.x,
        state.player.pos.y,
        heading,
        state.targets.map(|t| (t.x, t.y))
    );

    observe(state)
}

/// Advance the episode by one fixed timestep
pub fn step<R: RandomStream>(
    state: &mut PursuitState,
    tuning: &PursuitTuning,
    rng: &mut R,
    action: Action,
) -> StepResult {
    let rewards = &tuning.rewards;
    let mut reward = 0.0;

    // Measured before anything moves; reused for the observation
    let dir = state.player.heading_dir();
    let bearings = Bearings::measure(state.player.pos, dir, &state.targets);

    for (i, distance) in bearings.distance.iter().enumerate() {
        if *distance <= tuning.capture_radius {
            state.targets[i] = random_point(rng, tuning);
            reward += rewards.capture_bonus;
            state.score += 1.0;
            log::debug!(
                "tick {}: target {} captured at distance {:.2}, score {}",
                state.time_ticks,
                i,
                distance,
                state.score
            );
        }
    }

    let old_heading = state.player.heading;
    let force = thrust_force(state.player.vel, dir, action.throttle, tuning);

    integrate(&mut state.player, force, tuning.dt);
    state.player.omega = action.steer * tuning.steering_gain;

    clamp_to_world(&mut state.player, tuning.width(), tuning.height());
    let speed = cap_speed(&mut state.player, dir, tuning.max_speed);

    reward += (state.player.heading - old_heading).abs() * rewards.turn_penalty;
    reward += speed * rewards.speed_bonus;
    reward += rewards.step_penalty;

    state.player.heading = wrap_heading(state.player.heading);
    state.time_ticks += 1;

    // Score only rises here; a wrapper that lowers it can trigger this
    let done = state.score < TERMINATION_SCORE;
    if done {
        log::info!("episode done at tick {} with score {}", state.time_ticks, state.score);
    }

    log::trace!("tick {}: reward {:.4}", state.time_ticks, reward);

    StepResult {
        observation: Observation::assemble(&state.player, &bearings),
        reward,
        done,
        info: StepInfo::default(),
    }
}
