//! Run configuration.

use typed_builder::TypedBuilder;

use crate::{
  error::{Error, Result},
  ladder::MutationRateLadder,
};

/// Parameters of a MOSA-EA run.
///
/// Defaults follow the reference parameter setting of the algorithm.
///
/// # Examples
/// ```
/// # use mosa::config::Config;
/// let config = Config::builder()
///   .problem_size(8)
///   .population_size(50)
///   .parent_pool_size(6)
///   .build();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.increase_probability, 0.4);
/// ```
#[derive(TypedBuilder, Clone, PartialEq, Debug)]
pub struct Config {
  /// Bit string length `n`.
  #[builder(default = 100)]
  pub problem_size: usize,
  /// Factor `A` between consecutive rungs of the mutation rate ladder.
  #[builder(default = 1.01)]
  pub growth_factor: f64,
  /// Probability `p_inc` of moving one rung up during self-adaptation.
  #[builder(default = 0.4)]
  pub increase_probability: f64,
  /// Parameter `c` of the lowest mutation rate `c / n`.
  #[builder(default = 0.1)]
  pub min_rate_param: f64,
  /// Population size `lambda`.
  #[builder(default = 5000)]
  pub population_size: usize,
  /// Parent pool size `mu` of the `(mu, lambda)` selection.
  #[builder(default = 625)]
  pub parent_pool_size: usize,
  /// Evaluation budget `e`.
  #[builder(default = 100_000_000)]
  pub max_evaluations: u64,
}

impl Default for Config {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl Config {
  /// Returns the lowest mutation rate `c / n`.
  pub fn min_rate(&self) -> f64 {
    self.min_rate_param / self.problem_size as f64
  }

  /// Checks every parameter, including the mutation rate ladder they imply.
  ///
  /// # Errors
  ///
  /// Returns the first violated constraint.
  pub fn validate(&self) -> Result<()> {
    self.ladder().map(|_| ())
  }

  /// Validates the configuration and builds its mutation rate ladder.
  pub fn ladder(&self) -> Result<MutationRateLadder> {
    if self.problem_size == 0 {
      return Err(Error::InvalidProblemSize(self.problem_size));
    }
    if self.population_size == 0 {
      return Err(Error::InvalidPopulationSize(self.population_size));
    }
    if self.parent_pool_size == 0 || self.parent_pool_size > self.population_size
    {
      return Err(Error::InvalidParentPool {
        mu: self.parent_pool_size,
        lambda: self.population_size,
      });
    }
    if !(0.0..=1.0).contains(&self.increase_probability) {
      return Err(Error::InvalidIncreaseProbability(self.increase_probability));
    }
    MutationRateLadder::for_problem(
      self.min_rate_param,
      self.problem_size,
      self.growth_factor,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn small() -> Config {
    Config::builder()
      .problem_size(8)
      .growth_factor(1.1)
      .min_rate_param(1.0)
      .population_size(50)
      .parent_pool_size(6)
      .build()
  }

  #[test]
  fn test_defaults_are_valid() {
    let config = Config::default();
    assert_eq!(config.problem_size, 100);
    assert_eq!(config.population_size, 5000);
    assert_eq!(config.parent_pool_size, 625);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_ladder_from_config() {
    let ladder = small().ladder().unwrap();
    assert_eq!(ladder.min_rate(), 0.125);
    assert_eq!(ladder.len(), 15);
  }

  #[test]
  fn test_invalid_configs() {
    let config = Config { problem_size: 0, ..small() };
    assert_eq!(config.validate(), Err(Error::InvalidProblemSize(0)));

    let config = Config { population_size: 0, ..small() };
    assert_eq!(config.validate(), Err(Error::InvalidPopulationSize(0)));

    let config = Config { parent_pool_size: 0, ..small() };
    assert_eq!(
      config.validate(),
      Err(Error::InvalidParentPool { mu: 0, lambda: 50 })
    );

    let config = Config { parent_pool_size: 51, ..small() };
    assert_eq!(
      config.validate(),
      Err(Error::InvalidParentPool { mu: 51, lambda: 50 })
    );

    let config = Config { increase_probability: 1.5, ..small() };
    assert_eq!(
      config.validate(),
      Err(Error::InvalidIncreaseProbability(1.5))
    );

    let config = Config { growth_factor: 0.9, ..small() };
    assert_eq!(config.validate(), Err(Error::InvalidGrowthFactor(0.9)));

    let config = Config { min_rate_param: 8.0, ..small() };
    assert_eq!(config.validate(), Err(Error::EmptyLadder { min_rate: 1.0 }));
  }

  #[test]
  fn test_mu_equal_to_lambda_is_valid() {
    let config = Config { parent_pool_size: 50, ..small() };
    assert!(config.validate().is_ok());
  }
}
