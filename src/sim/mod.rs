//! Deterministic simulation module
//!
//! All pursuit logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Randomness only through an injected `RandomStream`
//! - No rendering or platform dependencies

pub mod observation;
pub mod physics;
pub mod rng;
pub mod state;
pub mod step;

pub use observation::{Bearings, Observation, observe};
pub use physics::{cap_speed, clamp_to_world, integrate, thrust_force};
pub use rng::{RandomStream, SimRng};
pub use state::{Player, PursuitState};
pub use step::{Action, StepInfo, StepResult, reset, step};
