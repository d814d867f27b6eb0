//! Owned pursuit environment
//!
//! Bundles the episode state with its tuning and random stream so a driver
//! only has to call `reset` and then `step` in sequence. Renderers read
//! through `state()` between calls.

use crate::sim::{self, Action, Observation, PursuitState, RandomStream, SimRng, StepResult};
use crate::tuning::{PursuitTuning, TuningError};

pub struct PursuitEnv<R: RandomStream = SimRng> {
    tuning: PursuitTuning,
    state: PursuitState,
    rng: R,
}

impl PursuitEnv<SimRng> {
    /// Environment backed by a PCG stream seeded with `seed`
    pub fn with_seed(tuning: PursuitTuning, seed: u64) -> Result<Self, TuningError> {
        Self::new(tuning, SimRng::new(seed))
    }

    /// Reseed the stream, drawing a seed from entropy if none is given.
    ///
    /// Returns the seed in use. State is untouched until the next `reset`.
    pub fn seed(&mut self, seed: Option<u64>) -> u64 {
        match seed {
            Some(seed) => self.rng.reseed(seed),
            None => self.rng = SimRng::from_entropy(),
        }
        log::debug!("seeded with {}", self.rng.seed());
        self.rng.seed()
    }
}

impl<R: RandomStream> PursuitEnv<R> {
    /// Validate `tuning` and build an environment with all-zero state
    pub fn new(tuning: PursuitTuning, rng: R) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            state: PursuitState::new(),
            rng,
        })
    }

    pub fn reset(&mut self) -> Observation {
        sim::reset(&mut self.state, &self.tuning, &mut self.rng)
    }

    pub fn step(&mut self, action: impl Into<Action>) -> StepResult {
        sim::step(&mut self.state, &self.tuning, &mut self.rng, action.into())
    }

    /// Observation of the current state without advancing it
    pub fn observe(&self) -> Observation {
        sim::observe(&self.state)
    }

    pub fn state(&self) -> &PursuitState {
        &self.state
    }

    /// Mutable access for wrappers and tests that stage specific situations
    pub fn state_mut(&mut self) -> &mut PursuitState {
        &mut self.state
    }

    pub fn tuning(&self) -> &PursuitTuning {
        &self.tuning
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    /// Replays a fixed list of draws, cycling when exhausted
    struct ScriptedStream {
        ints: Vec<u32>,
        next: usize,
    }

    impl RandomStream for ScriptedStream {
        fn int_inclusive(&mut self, bound: u32) -> u32 {
            let value = self.ints[self.next % self.ints.len()].min(bound);
            self.next += 1;
            value
        }

        fn uniform(&mut self, _bound: f64) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_env_reset_with_injected_stream() {
        let rng = ScriptedStream {
            ints: vec![100, 200, 300, 150, 250, 350],
            next: 0,
        };
        let mut env = PursuitEnv::new(PursuitTuning::default(), rng).unwrap();
        env.reset();

        let state = env.state();
        assert_eq!(state.player.pos, DVec2::new(100.0, 150.0));
        assert_eq!(state.targets, [DVec2::new(200.0, 250.0), DVec2::new(300.0, 350.0)]);
        assert_eq!(state.player.heading, 0.0);
    }

    #[test]
    fn test_env_rejects_invalid_tuning() {
        let tuning = PursuitTuning {
            max_speed: 0.0,
            ..Default::default()
        };
        assert!(PursuitEnv::with_seed(tuning, 1).is_err());
    }

    #[test]
    fn test_env_seed_reproducible() {
        let mut env = PursuitEnv::with_seed(PursuitTuning::default(), 0).unwrap();
        assert_eq!(env.seed(Some(77)), 77);
        let first = env.reset();
        let trajectory: Vec<_> = (0..50).map(|_| env.step([1.0, 0.3])).collect();

        env.seed(Some(77));
        assert_eq!(env.reset(), first);
        let replay: Vec<_> = (0..50).map(|_| env.step([1.0, 0.3])).collect();
        assert_eq!(trajectory, replay);
    }

    #[test]
    fn test_env_seed_from_entropy_reports_seed() {
        let mut env = PursuitEnv::with_seed(PursuitTuning::default(), 0).unwrap();
        let seed = env.seed(None);
        let first = env.reset();
        env.seed(Some(seed));
        assert_eq!(env.reset(), first);
    }

    #[test]
    fn test_observe_matches_reset() {
        let mut env = PursuitEnv::with_seed(PursuitTuning::default(), 5).unwrap();
        let obs = env.reset();
        assert_eq!(env.observe(), obs);
    }

    #[test]
    fn test_external_score_penalty_ends_episode() {
        let mut env = PursuitEnv::with_seed(PursuitTuning::default(), 5).unwrap();
        env.reset();
        env.state_mut().score = -20.0;
        assert!(env.step(Action::default()).done);
    }
}
