//! Integration test: Simulation engine
//!
//! Exercises the random walk through the public API with seeded RNGs and
//! scripted draws.

use betsim::{simulate, simulate_with, BetParams, BetsimError, Distribution};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn params(start_balance: i64, wager: i64, bet_count: u32, allow_broke: bool) -> BetParams {
    BetParams {
        start_balance,
        wager,
        bet_count,
        allow_broke,
    }
}

fn valid_distributions() -> Vec<Distribution> {
    vec![
        Distribution::from_pairs(&[(10, 0.5), (-10, 0.5)]),
        Distribution::from_pairs(&[(0, 1.0)]),
        Distribution::from_pairs(&[(36, 0.027), (0, 0.973)]),
        Distribution::from_pairs(&[(1, 0.1), (2, 0.2), (3, 0.3), (4, 0.4)]),
        Distribution::from_pairs(&[(5, 0.333), (-5, 0.333), (0, 0.334)]),
    ]
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_valid_distributions_never_fail_validation() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for dist in valid_distributions() {
        for allow_broke in [false, true] {
            assert!(
                simulate(&params(100, 5, 50, allow_broke), &dist, &mut rng).is_ok(),
                "{:?} should be accepted",
                dist
            );
        }
    }
}

#[test]
fn test_invalid_distributions_always_fail() {
    let invalid = [
        Distribution::from_pairs(&[(5, 0.3), (5, 0.3), (-5, 0.3)]),
        Distribution::from_pairs(&[(1, 0.7), (2, 0.7)]),
        Distribution::from_pairs(&[(1, 0.994)]),
        Distribution::from_pairs(&[]),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for dist in invalid {
        let result = simulate(&params(100, 5, 10, false), &dist, &mut rng);
        assert!(
            matches!(result, Err(BetsimError::InvalidDistribution { .. })),
            "{:?} should be rejected",
            dist
        );
    }
}

#[test]
fn test_shortfall_message() {
    let dist = Distribution::from_pairs(&[(5, 0.3), (5, 0.3), (-5, 0.3)]);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let err = simulate(&params(100, 5, 10, false), &dist, &mut rng).unwrap_err();
    assert!(err.to_string().contains("10% short of 100%"));
}

// =============================================================================
// Trajectory shape
// =============================================================================

#[test]
fn test_zero_bets_is_start_balance_only() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for dist in valid_distributions() {
        for start in [-50, 0, 100] {
            let t = simulate(&params(start, 5, 0, true), &dist, &mut rng).unwrap();
            assert_eq!(t, vec![start]);
        }
    }
}

#[test]
fn test_without_allow_broke_length_is_fixed() {
    let dist = Distribution::from_pairs(&[(0, 0.9), (20, 0.1)]);
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let t = simulate(&params(10, 5, 40, false), &dist, &mut rng).unwrap();
        assert_eq!(t.len(), 41);
    }
}

#[test]
fn test_allow_broke_ends_at_first_non_positive_balance() {
    let dist = Distribution::from_pairs(&[(0, 0.9), (20, 0.1)]);
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let t = simulate(&params(10, 5, 40, true), &dist, &mut rng).unwrap();

        assert!(t.len() <= 41);
        // Only the final balance may be at or below zero
        let (last, before) = t.split_last().unwrap();
        assert!(before.iter().all(|&b| b > 0), "seed {}: {:?}", seed, t);
        if t.len() < 41 {
            assert!(*last <= 0, "seed {}: stopped early at {}", seed, last);
        }
    }
}

#[test]
fn test_every_step_is_wager_plus_an_outcome() {
    let dist = Distribution::from_pairs(&[(10, 0.5), (-10, 0.5)]);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let t = simulate(&params(100, 5, 200, false), &dist, &mut rng).unwrap();
    for pair in t.windows(2) {
        let step = pair[1] - pair[0];
        assert!(step == 5 || step == -15, "unexpected step {}", step);
    }
}

#[test]
fn test_scripted_coin_flips() {
    let dist = Distribution::from_pairs(&[(10, 0.5), (-10, 0.5)]);
    let mut draws = vec![0, 1, 0].into_iter();
    let t = simulate_with(&params(100, 5, 3, false), &dist, |_| draws.next().unwrap_or(0)).unwrap();
    assert_eq!(t, vec![100, 105, 90, 95]);
}
