//! Environment integration tests.

use std::collections::VecDeque;

use bjenv::{
    Action, EnvOptions, Environment, Hand, InfiniteShoe, Observation, ParseActionError, Shoe,
    StepError,
};

/// A shoe that deals a fixed card script and panics when it runs dry.
struct ScriptedShoe {
    cards: VecDeque<u8>,
}

impl ScriptedShoe {
    fn new(cards: &[u8]) -> Self {
        Self {
            cards: cards.iter().copied().collect(),
        }
    }
}

impl Shoe for ScriptedShoe {
    fn draw(&mut self, n: usize) -> Vec<u8> {
        (0..n)
            .map(|_| self.cards.pop_front().expect("card script ran out"))
            .collect()
    }
}

fn scripted_env(cards: &[u8]) -> Environment<ScriptedShoe> {
    Environment::with_shoe(EnvOptions::default().with_verbose(false), ScriptedShoe::new(cards))
}

#[test]
fn hand_ace_accounting() {
    let mut hand = Hand::new();
    hand.add(1);
    hand.add(1);
    assert_eq!(hand.sum(), 2);
    assert_eq!(hand.unelevated_aces(), 2);

    assert!(hand.elevate_ace());
    assert_eq!(hand.sum(), 12);
    assert!(hand.has_usable_ace());
    assert_eq!(hand.unelevated_aces(), 1);

    assert!(hand.demote_ace());
    assert_eq!(hand.sum(), 2);
    assert!(!hand.has_usable_ace());
    assert!(!hand.demote_ace());

    hand.clear();
    hand.add(1);
    hand.add(10);
    assert!(hand.is_blackjack());

    hand.clear();
    hand.add(10);
    hand.add(10);
    assert!(!hand.is_blackjack());
}

#[test]
fn reset_deals_player_between_twelve_and_twenty_one() {
    for seed in 0..200 {
        let mut env = Environment::new(EnvOptions::default().with_verbose(false), seed);
        let step = env.reset().expect("fresh environment must reset");

        assert!((-1..=1).contains(&step.reward));
        match step.observation {
            Observation::InPlay { player_sum, dealer_showing, .. } => {
                assert!((12..=20).contains(&player_sum), "seed {seed}: sum {player_sum}");
                assert!((1..=10).contains(&dealer_showing));
                assert!(env.is_active());
                assert_eq!(step.reward, 0);
            }
            Observation::Terminal => {
                // Natural blackjack resolves the round during reset.
                assert!(!env.is_active());
                assert_eq!(env.player_hand().sum(), 21);
                assert!(step.reward == 0 || step.reward == 1);
            }
        }
    }
}

#[test]
fn stick_compares_margins_to_twenty_one() {
    // Player 10+10 = 20; dealer 6 hidden, 6 showing, draws 5 to reach 17.
    let mut env = scripted_env(&[10, 10, 6, 6, 5]);

    let step = env.reset().unwrap();
    assert_eq!(
        step.observation,
        Observation::InPlay {
            player_sum: 20,
            dealer_showing: 6,
            usable_ace: false,
        }
    );

    let step = env.step(Action::Stick).unwrap();
    assert_eq!(step.reward, 1);
    assert_eq!(step.observation.to_array(), [-1, -1, -1]);
    assert!(!env.is_active());
    assert_eq!(env.dealer_hand().cards(), &[6, 6, 5]);
    assert_eq!(env.dealer_hand().sum(), 17);
}

#[test]
fn natural_blackjack_pushes_against_dealer_blackjack() {
    // Player ace (as 11) + 10 = 21; dealer holds ten + ace.
    let mut env = scripted_env(&[1, 10, 10, 1]);

    let step = env.reset().unwrap();
    assert_eq!(step.reward, 0);
    assert_eq!(step.observation, Observation::Terminal);
    assert!(!env.is_active());
}

#[test]
fn natural_blackjack_wins_without_dealer_blackjack() {
    let mut env = scripted_env(&[1, 10, 9, 8]);

    let step = env.reset().unwrap();
    assert_eq!(step.reward, 1);
    assert!(step.observation.is_terminal());
    assert!(!env.is_active());
}

#[test]
fn hit_busts_without_usable_ace() {
    // Player 10+4 = 14, then draws a ten.
    let mut env = scripted_env(&[10, 4, 2, 9, 10]);

    env.reset().unwrap();
    let step = env.step(Action::Hit).unwrap();
    assert_eq!(step.reward, -1);
    assert_eq!(step.observation.to_array(), [-1, -1, -1]);
    assert!(!env.is_active());

    // The finished round rejects further play without touching the hands.
    assert_eq!(env.hit().unwrap_err(), StepError::NoActiveRound);
    assert_eq!(env.stick().unwrap_err(), StepError::NoActiveRound);
    assert_eq!(env.player_hand().cards(), &[10, 4, 10]);
    assert_eq!(env.dealer_hand().cards(), &[2, 9]);
}

#[test]
fn hit_demotes_a_single_usable_ace() {
    // Player ace (as 11) + ace = 12 with a usable ace; dealer 5/5.
    let mut env = scripted_env(&[1, 1, 5, 5, 10]);

    let step = env.reset().unwrap();
    assert_eq!(
        step.observation,
        Observation::InPlay {
            player_sum: 12,
            dealer_showing: 5,
            usable_ace: true,
        }
    );

    let step = env.step(Action::Hit).unwrap();
    assert_eq!(step.reward, 0);
    assert_eq!(
        step.observation,
        Observation::InPlay {
            player_sum: 12,
            dealer_showing: 5,
            usable_ace: false,
        }
    );
    assert!(env.is_active());
}

#[test]
fn reset_rejected_while_round_in_progress() {
    let mut env = scripted_env(&[10, 5, 3, 7]);

    let before = env.reset().unwrap().observation;
    assert_eq!(env.step(Action::Reset).unwrap_err(), StepError::RoundInProgress);

    assert!(env.is_active());
    assert_eq!(env.observation(), before);
    assert_eq!(env.player_hand().cards(), &[10, 5]);
    assert_eq!(env.dealer_hand().cards(), &[3, 7]);
}

#[test]
fn play_rejected_before_first_reset() {
    let mut env = scripted_env(&[]);

    assert_eq!(env.step(Action::Hit).unwrap_err(), StepError::NoActiveRound);
    assert_eq!(env.step(Action::Stick).unwrap_err(), StepError::NoActiveRound);
    assert_eq!(env.observation(), Observation::Terminal);
    assert!(!env.is_active());
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    // Dealer ace + 6: the ace elevates to 11 for a soft 17, no draw.
    let mut env = scripted_env(&[10, 8, 1, 6]);

    env.reset().unwrap();
    let step = env.stick().unwrap();
    assert_eq!(env.dealer_hand().cards(), &[1, 6]);
    assert_eq!(env.dealer_hand().sum(), 17);
    // Player 18 beats dealer 17.
    assert_eq!(step.reward, 1);
}

#[test]
fn dealer_draws_below_seventeen_and_can_bust() {
    // Dealer 10+6 = 16 must draw; the ten busts them.
    let mut env = scripted_env(&[10, 2, 10, 6, 10]);

    env.reset().unwrap();
    let step = env.stick().unwrap();
    assert_eq!(env.dealer_hand().cards(), &[10, 6, 10]);
    assert_eq!(env.dealer_hand().sum(), 26);
    assert_eq!(step.reward, 1);
    assert!(step.observation.is_terminal());
}

#[test]
fn equal_margins_push() {
    let mut env = scripted_env(&[10, 7, 10, 7]);

    env.reset().unwrap();
    let step = env.stick().unwrap();
    assert_eq!(step.reward, 0);
    assert!(step.observation.is_terminal());
}

#[test]
fn dealer_always_finishes_at_seventeen_or_more() {
    for seed in 0..300 {
        let mut env = Environment::new(EnvOptions::default().with_verbose(false), seed);
        let step = env.reset().expect("fresh environment must reset");
        if step.observation.is_terminal() {
            continue;
        }

        let step = env.stick().unwrap();
        assert!((-1..=1).contains(&step.reward));
        assert!(step.observation.is_terminal());
        assert!(
            env.dealer_hand().sum() >= 17,
            "seed {seed}: dealer stopped at {}",
            env.dealer_hand().sum()
        );
    }
}

#[test]
fn hit_never_reports_a_sum_over_twenty_one() {
    for seed in 0..300 {
        let mut env = Environment::new(EnvOptions::default().with_verbose(false), seed);
        if env.reset().unwrap().observation.is_terminal() {
            continue;
        }

        loop {
            let step = env.hit().unwrap();
            match step.observation {
                Observation::InPlay { player_sum, .. } => {
                    assert!(player_sum <= 21, "seed {seed}: sum {player_sum}");
                    assert_eq!(step.reward, 0);
                }
                Observation::Terminal => {
                    assert_eq!(step.reward, -1);
                    break;
                }
            }
        }
    }
}

#[test]
fn action_tags_round_trip() {
    assert_eq!("reset".parse::<Action>().unwrap(), Action::Reset);
    assert_eq!("hit".parse::<Action>().unwrap(), Action::Hit);
    assert_eq!("stick".parse::<Action>().unwrap(), Action::Stick);
    assert_eq!(Action::Stick.to_string(), "stick");

    assert_eq!(
        "double".parse::<Action>().unwrap_err(),
        ParseActionError::Unknown("double".to_string())
    );
}

#[test]
fn infinite_shoe_draws_weighted_values() {
    let mut shoe = InfiniteShoe::seed_from_u64(7);
    let draws = shoe.draw(5000);
    assert_eq!(draws.len(), 5000);
    assert!(draws.iter().all(|c| (1..=10).contains(c)));

    // Ten-values carry four ranks' worth of mass.
    let tens = draws.iter().filter(|&&c| c == 10).count();
    let fives = draws.iter().filter(|&&c| c == 5).count();
    assert!(tens > 2 * fives, "tens {tens} vs fives {fives}");
}

#[test]
fn verbosity_never_changes_transitions() {
    let quiet = Environment::with_shoe(
        EnvOptions::default().with_verbose(false),
        ScriptedShoe::new(&[10, 7, 10, 6, 2]),
    );
    let loud = Environment::with_shoe(
        EnvOptions::default(),
        ScriptedShoe::new(&[10, 7, 10, 6, 2]),
    );

    for mut env in [quiet, loud] {
        env.reset().unwrap();
        let step = env.stick().unwrap();
        assert_eq!(step.reward, -1);
        assert_eq!(env.dealer_hand().sum(), 18);
    }
}
