//! The ladder of per-bit mutation rates an individual can choose from.

use std::ops::Index;

use crate::error::{Error, Result};

/// The upper bound no rung of the ladder may exceed.
pub const MAX_RATE: f64 = 0.5;

/// An immutable geometric progression of per-bit mutation rates.
///
/// The first rung is the minimum rate, every next rung is the previous one
/// multiplied by the growth factor `A`, and the last rung is the largest one
/// that does not exceed [`MAX_RATE`]. Individuals refer to rungs by index.
///
/// # Examples
/// ```
/// # use mosa::ladder::MutationRateLadder;
/// let ladder = MutationRateLadder::new(0.1, 2.0).unwrap();
/// assert_eq!(ladder.rates(), &[0.1, 0.2, 0.4]);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct MutationRateLadder {
  rates: Vec<f64>,
  growth_factor: f64,
}

impl MutationRateLadder {
  /// Builds a ladder starting at `min_rate` and growing by `growth_factor`.
  ///
  /// # Errors
  ///
  /// Fails if `min_rate` is not positive, if `growth_factor` is not greater
  /// than `1`, or if `min_rate` exceeds [`MAX_RATE`] and the ladder would be
  /// empty.
  pub fn new(min_rate: f64, growth_factor: f64) -> Result<Self> {
    if !min_rate.is_finite() || min_rate <= 0.0 {
      return Err(Error::InvalidMinRate(min_rate));
    }
    if !growth_factor.is_finite() || growth_factor <= 1.0 {
      return Err(Error::InvalidGrowthFactor(growth_factor));
    }

    let mut len = 0;
    let mut rate = min_rate;
    while rate <= MAX_RATE {
      len += 1;
      rate *= growth_factor;
    }
    if len == 0 {
      return Err(Error::EmptyLadder { min_rate });
    }

    let rates = std::iter::successors(Some(min_rate), |r| Some(r * growth_factor))
      .take(len)
      .collect();
    Ok(Self {
      rates,
      growth_factor,
    })
  }

  /// Builds a ladder for bit strings of length `n`, starting at `c / n`.
  pub fn for_problem(c: f64, n: usize, growth_factor: f64) -> Result<Self> {
    if n == 0 {
      return Err(Error::InvalidProblemSize(n));
    }
    Self::new(c / n as f64, growth_factor)
  }

  /// Returns the number of rungs. Never zero.
  pub fn len(&self) -> usize {
    self.rates.len()
  }

  /// Always `false`, an empty ladder cannot be constructed.
  pub fn is_empty(&self) -> bool {
    self.rates.is_empty()
  }

  /// Returns the rate at `index`, if there is such a rung.
  pub fn get(&self, index: usize) -> Option<f64> {
    self.rates.get(index).copied()
  }

  /// Returns all rates in increasing order.
  pub fn rates(&self) -> &[f64] {
    &self.rates
  }

  /// Returns the lowest rate.
  pub fn min_rate(&self) -> f64 {
    self.rates[0]
  }

  /// Returns the highest rate.
  pub fn max_rate(&self) -> f64 {
    self.rates[self.rates.len() - 1]
  }

  /// Returns the factor between two consecutive rungs.
  pub fn growth_factor(&self) -> f64 {
    self.growth_factor
  }
}

impl Index<usize> for MutationRateLadder {
  type Output = f64;

  fn index(&self, index: usize) -> &Self::Output {
    &self.rates[index]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn assert_ladder_shape(ladder: &MutationRateLadder, min_rate: f64, a: f64) {
    let rates = ladder.rates();
    assert!(!rates.is_empty());
    assert_eq!(rates[0], min_rate);
    for pair in rates.windows(2) {
      assert!(pair[0] < pair[1]);
      assert_eq!(pair[1], pair[0] * a);
    }
    assert!(ladder.max_rate() <= MAX_RATE);
    assert!(ladder.max_rate() * a > MAX_RATE);
  }

  #[test]
  fn test_ladder_shape() {
    for (min_rate, a) in [(0.001, 1.01), (0.125, 1.1), (0.3, 1.5), (0.5, 2.0)] {
      let ladder = MutationRateLadder::new(min_rate, a).unwrap();
      assert_ladder_shape(&ladder, min_rate, a);
    }
  }

  #[test]
  fn test_ladder_exact_rungs() {
    let ladder = MutationRateLadder::new(0.1, 2.0).unwrap();
    assert_eq!(ladder.len(), 3);
    assert_eq!(ladder[0], 0.1);
    assert_eq!(ladder.get(2), Some(0.4));
    assert_eq!(ladder.get(3), None);
  }

  #[test]
  fn test_ladder_single_rung() {
    let ladder = MutationRateLadder::new(0.4, 1.5).unwrap();
    assert_eq!(ladder.rates(), &[0.4]);
    assert_eq!(ladder.min_rate(), ladder.max_rate());
  }

  #[test]
  fn test_ladder_for_problem() {
    let ladder = MutationRateLadder::for_problem(1.0, 8, 1.1).unwrap();
    assert_eq!(ladder.min_rate(), 0.125);
    assert_eq!(ladder.len(), 15);
    assert_ladder_shape(&ladder, 0.125, 1.1);
  }

  #[test]
  fn test_ladder_is_deterministic() {
    let a = MutationRateLadder::new(0.002, 1.01).unwrap();
    let b = MutationRateLadder::new(0.002, 1.01).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn test_empty_ladder_is_rejected() {
    assert_eq!(
      MutationRateLadder::new(0.6, 1.1),
      Err(Error::EmptyLadder { min_rate: 0.6 })
    );
    assert!(matches!(
      MutationRateLadder::for_problem(5.0, 8, 1.1),
      Err(Error::EmptyLadder { .. })
    ));
  }

  #[test]
  fn test_invalid_parameters_are_rejected() {
    assert_eq!(
      MutationRateLadder::new(0.0, 1.1),
      Err(Error::InvalidMinRate(0.0))
    );
    assert_eq!(
      MutationRateLadder::new(0.1, 1.0),
      Err(Error::InvalidGrowthFactor(1.0))
    );
    assert!(matches!(
      MutationRateLadder::new(f64::NAN, 1.1),
      Err(Error::InvalidMinRate(_))
    ));
    assert_eq!(
      MutationRateLadder::for_problem(1.0, 0, 1.1),
      Err(Error::InvalidProblemSize(0))
    );
  }
}
