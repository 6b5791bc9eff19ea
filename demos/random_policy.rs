//! Random-policy rollout example.
//!
//! Plays a number of rounds with a uniformly random hit/stick policy and
//! reports the average reward, the kind of loop an RL training harness would
//! drive. Install any `log` backend to watch the rounds unfold.

#![expect(clippy::unwrap_used, reason = "example code")]

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use bjenv::{Action, EnvOptions, Environment};

const ROUNDS: u32 = 10_000;

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut env = Environment::new(EnvOptions::default(), seed);
    let mut policy_rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);

    let mut total_reward: i64 = 0;
    let mut wins: u32 = 0;
    let mut pushes: u32 = 0;

    for _ in 0..ROUNDS {
        let mut step = env.step(Action::Reset).unwrap();

        while !step.observation.is_terminal() {
            let action = if policy_rng.random_bool(0.5) {
                Action::Hit
            } else {
                Action::Stick
            };
            step = env.step(action).unwrap();
        }

        total_reward += i64::from(step.reward);
        match step.reward {
            1 => wins += 1,
            0 => pushes += 1,
            _ => {}
        }
    }

    println!("rounds:     {ROUNDS}");
    println!("wins:       {wins}");
    println!("pushes:     {pushes}");
    println!("losses:     {}", ROUNDS - wins - pushes);
    println!(
        "avg reward: {:.4}",
        total_reward as f64 / f64::from(ROUNDS)
    );
}
