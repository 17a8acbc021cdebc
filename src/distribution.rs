//! Discrete payout distributions: validation and weighted draws.

use crate::constants::PROBABILITY_DECIMALS;
use crate::error::{BetsimError, Result};
use rand::Rng;

/// A single possible result of one bet: the amount added to the balance
/// (negative for a penalty) and the chance of it happening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub value: i64,
    pub probability: f64,
}

impl Outcome {
    pub fn new(value: i64, probability: f64) -> Self {
        Self { value, probability }
    }
}

/// The full set of outcomes for one simulation configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    outcomes: Vec<Outcome>,
}

impl Distribution {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self { outcomes }
    }

    /// Builds a distribution from `(value, probability)` pairs.
    pub fn from_pairs(pairs: &[(i64, f64)]) -> Self {
        Self::new(pairs.iter().map(|&(v, p)| Outcome::new(v, p)).collect())
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn total_probability(&self) -> f64 {
        self.outcomes.iter().map(|o| o.probability).sum()
    }

    /// Checks that the probabilities sum to 1.00 after rounding to two
    /// decimal places.
    ///
    /// Each probability must also be a finite number in `[0, 1]`; weighted
    /// draws are meaningless otherwise.
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self
            .outcomes
            .iter()
            .find(|o| !o.probability.is_finite() || !(0.0..=1.0).contains(&o.probability))
        {
            return Err(BetsimError::InvalidDistribution {
                message: format!(
                    "Probability {} for reward {} must be between 0 and 1.",
                    bad.probability, bad.value
                ),
            });
        }

        let total = self.total_probability();
        let rounded = round_decimals(total);
        if rounded == 1.0 {
            return Ok(());
        }

        // Percent with the same rounding, so 0.3 + 0.3 + 0.3 reads as 90%
        let percent = (rounded * 100.0).round() as i64;
        let message = if percent < 100 {
            format!(
                "The odds add up to {}%, {}% short of 100%. Please adjust the odds.",
                percent,
                100 - percent
            )
        } else {
            format!(
                "The odds add up to {}%, {}% over 100%. Please adjust the odds.",
                percent,
                percent - 100
            )
        };
        Err(BetsimError::InvalidDistribution { message })
    }

    /// Draws the index of one outcome, each weighted by its probability.
    ///
    /// Expects a validated, non-empty distribution.
    pub fn sample_index(&self, rng: &mut impl Rng) -> usize {
        let total = self.total_probability();
        let roll: f64 = rng.gen::<f64>() * total;

        let mut cumulative = 0.0;
        let mut last_weighted = 0;
        for (i, outcome) in self.outcomes.iter().enumerate() {
            if outcome.probability <= 0.0 {
                continue;
            }
            cumulative += outcome.probability;
            last_weighted = i;
            if roll < cumulative {
                return i;
            }
        }

        // Float accumulation can leave `roll` a hair above the final sum
        last_weighted
    }
}

/// Rounds to `PROBABILITY_DECIMALS` places from the exact binary value, so
/// `0.994999...` becomes `0.99` rather than `1.00`.
fn round_decimals(value: f64) -> f64 {
    format!("{:.*}", PROBABILITY_DECIMALS, value)
        .parse()
        .unwrap_or(value)
}
