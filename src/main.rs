//! Pursuit Sim headless runner
//!
//! Drives episodes with a simple chase policy (or random actions) and prints
//! one JSON summary per episode. Set `RUST_LOG=debug` to see captures and
//! `--help` for the flags.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use pursuit_sim::sim::{Action, Observation};
use pursuit_sim::{PursuitEnv, PursuitTuning};

#[derive(Parser, Debug)]
#[command(name = "pursuit-sim", version, about = "Run pursuit episodes headless")]
struct RunArgs {
    /// Base seed; episodes use consecutive seeds. Drawn from entropy if omitted.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    episodes: u32,
    /// Step limit per episode
    #[arg(long, default_value_t = 2000)]
    steps: u64,
    /// JSON tuning file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Sample actions uniformly instead of chasing
    #[arg(long)]
    random: bool,
    /// Print every step as a JSON line
    #[arg(long)]
    trace: bool,
}

/// Turn toward the nearer target, ease off the throttle while it is behind
fn chase(obs: &Observation) -> Action {
    let (_, bearing) = obs.near_target();
    let steer = (bearing * 2.0).clamp(-1.0, 1.0);
    let throttle = if bearing.abs() < std::f64::consts::FRAC_PI_2 { 1.0 } else { 0.2 };
    Action::new(throttle, steer)
}

#[derive(Debug, Serialize)]
struct TraceLine<'a> {
    episode: u32,
    tick: u64,
    reward: f64,
    observation: &'a Observation,
}

#[derive(Debug, Serialize)]
struct EpisodeSummary {
    episode: u32,
    seed: u64,
    steps: u64,
    captures: f64,
    total_reward: f64,
    done: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args = RunArgs::parse();
    let tuning = match &args.config {
        Some(path) => PursuitTuning::load(path)?,
        None => PursuitTuning::default(),
    };
    let action_space = tuning.action_space();

    let mut env = PursuitEnv::with_seed(tuning, 0)?;
    let base_seed = env.seed(args.seed);
    log::info!("Pursuit Sim starting with seed {base_seed}");

    for episode in 0..args.episodes {
        let seed = base_seed.wrapping_add(episode as u64);
        env.seed(Some(seed));
        let mut obs = env.reset();
        let mut total_reward = 0.0;
        let mut done = false;

        for _ in 0..args.steps {
            let action = if args.random {
                let sample = action_space.sample(env.rng_mut());
                Action::new(sample[0], sample[1])
            } else {
                chase(&obs)
            };

            let result = env.step(action);
            obs = result.observation;
            total_reward += result.reward;

            if args.trace {
                let line = TraceLine {
                    episode,
                    tick: env.state().time_ticks,
                    reward: result.reward,
                    observation: &obs,
                };
                println!("{}", serde_json::to_string(&line)?);
            }

            if result.done {
                done = true;
                break;
            }
        }

        let summary = EpisodeSummary {
            episode,
            seed,
            steps: env.state().time_ticks,
            captures: env.state().score,
            total_reward,
            done,
        };
        log::info!(
            "episode {episode} finished: {} captures in {} steps",
            summary.captures,
            summary.steps
        );
        println!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}
