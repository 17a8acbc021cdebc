//! The betting random walk.
//!
//! One run starts at a balance, pays the wager on every bet, and adds the
//! value of an outcome drawn from the distribution. Draws are independent.

use crate::distribution::Distribution;
use crate::error::Result;
use rand::Rng;

/// Ordered balances of one run, starting with the initial balance.
pub type Trajectory = Vec<i64>;

/// Scalar inputs of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetParams {
    pub start_balance: i64,
    pub wager: i64,
    pub bet_count: u32,
    /// Stop the run once the balance is at or below zero
    pub allow_broke: bool,
}

/// Runs one trial, drawing outcomes from `rng`.
pub fn simulate(
    params: &BetParams,
    distribution: &Distribution,
    rng: &mut impl Rng,
) -> Result<Trajectory> {
    simulate_with(params, distribution, |dist| dist.sample_index(&mut *rng))
}

/// Runs one trial with a caller-supplied draw: `draw` returns the index of
/// the outcome chosen for the current bet.
///
/// Balances are `i64` and clamp at `i64::MIN` and `i64::MAX` instead of
/// overflowing.
pub fn simulate_with<F>(
    params: &BetParams,
    distribution: &Distribution,
    mut draw: F,
) -> Result<Trajectory>
where
    F: FnMut(&Distribution) -> usize,
{
    let mut balance = params.start_balance;
    let mut trajectory = vec![balance];

    distribution.validate()?;

    let outcomes = distribution.outcomes();
    let last = outcomes.len() - 1;

    for _ in 0..params.bet_count {
        if params.allow_broke && balance <= 0 {
            break;
        }

        balance = balance.saturating_sub(params.wager);
        let drawn = &outcomes[draw(distribution).min(last)];
        balance = balance.saturating_add(drawn.value);
        trajectory.push(balance);
    }

    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BetsimError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn coin_flip() -> Distribution {
        Distribution::from_pairs(&[(10, 0.5), (-10, 0.5)])
    }

    fn params(bet_count: u32, allow_broke: bool) -> BetParams {
        BetParams {
            start_balance: 100,
            wager: 5,
            bet_count,
            allow_broke,
        }
    }

    #[test]
    fn test_scripted_draws() {
        let mut script = [0usize, 1, 0].into_iter();
        let trajectory =
            simulate_with(&params(3, false), &coin_flip(), |_| script.next().unwrap()).unwrap();
        assert_eq!(trajectory, vec![100, 105, 90, 95]);
    }

    #[test]
    fn test_zero_bets_returns_start_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let trajectory = simulate(&params(0, true), &coin_flip(), &mut rng).unwrap();
        assert_eq!(trajectory, vec![100]);
    }

    #[test]
    fn test_invalid_distribution_propagates() {
        let dist = Distribution::from_pairs(&[(5, 0.3), (5, 0.3), (-5, 0.3)]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = simulate(&params(10, false), &dist, &mut rng);
        assert!(matches!(
            result,
            Err(BetsimError::InvalidDistribution { .. })
        ));
    }

    #[test]
    fn test_allow_broke_stops_at_zero() {
        // Every bet loses the wager and pays nothing back
        let dist = Distribution::from_pairs(&[(0, 1.0)]);
        let p = BetParams {
            start_balance: 12,
            wager: 5,
            bet_count: 10,
            allow_broke: true,
        };
        let trajectory = simulate_with(&p, &dist, |_| 0).unwrap();
        assert_eq!(trajectory, vec![12, 7, 2, -3]);
    }

    #[test]
    fn test_without_allow_broke_goes_negative() {
        let dist = Distribution::from_pairs(&[(0, 1.0)]);
        let p = BetParams {
            start_balance: 12,
            wager: 5,
            bet_count: 5,
            allow_broke: false,
        };
        let trajectory = simulate_with(&p, &dist, |_| 0).unwrap();
        assert_eq!(trajectory, vec![12, 7, 2, -3, -8, -13]);
    }

    #[test]
    fn test_negative_wager_is_a_gain() {
        let dist = Distribution::from_pairs(&[(0, 1.0)]);
        let p = BetParams {
            start_balance: 0,
            wager: -3,
            bet_count: 3,
            allow_broke: false,
        };
        assert_eq!(simulate_with(&p, &dist, |_| 0).unwrap(), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_starting_broke_with_allow_broke() {
        let p = BetParams {
            start_balance: 0,
            wager: 5,
            bet_count: 10,
            allow_broke: true,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(simulate(&p, &coin_flip(), &mut rng).unwrap(), vec![0]);
    }

    #[test]
    fn test_huge_bet_count_stops_when_broke() {
        let dist = Distribution::from_pairs(&[(0, 1.0)]);
        let p = BetParams {
            start_balance: 1,
            wager: 5,
            bet_count: u32::MAX,
            allow_broke: true,
        };
        assert_eq!(simulate_with(&p, &dist, |_| 0).unwrap(), vec![1, -4]);
    }

    #[test]
    fn test_balance_clamps_at_i64_bounds() {
        let dist = Distribution::from_pairs(&[(i64::MAX, 1.0)]);
        let p = BetParams {
            start_balance: i64::MAX - 1,
            wager: 0,
            bet_count: 2,
            allow_broke: false,
        };
        assert_eq!(
            simulate_with(&p, &dist, |_| 0).unwrap(),
            vec![i64::MAX - 1, i64::MAX, i64::MAX]
        );

        let p = BetParams {
            start_balance: i64::MIN + 1,
            wager: i64::MAX,
            bet_count: 1,
            allow_broke: false,
        };
        let dist = Distribution::from_pairs(&[(0, 1.0)]);
        assert_eq!(
            simulate_with(&p, &dist, |_| 0).unwrap(),
            vec![i64::MIN + 1, i64::MIN]
        );
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let a = simulate(&params(50, false), &coin_flip(), &mut ChaCha8Rng::seed_from_u64(9));
        let b = simulate(&params(50, false), &coin_flip(), &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a.unwrap(), b.unwrap());
    }
}
