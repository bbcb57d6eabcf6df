//! Configuration errors.
//!
//! Every error is raised before a run starts. Once a configuration is
//! validated, evaluation, ranking, selection and mutation cannot fail.

use thiserror::Error;

/// An error describing an invalid run configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  /// The minimum mutation rate already exceeds `0.5`, so the ladder would
  /// have no rungs.
  #[error("mutation rate ladder is empty: minimum rate {min_rate} exceeds 0.5")]
  EmptyLadder {
    /// The rejected minimum rate.
    min_rate: f64,
  },

  /// The minimum mutation rate is not a positive finite number.
  #[error("minimum mutation rate must be positive and finite, got {0}")]
  InvalidMinRate(f64),

  /// The ladder growth factor is not a finite number greater than `1`.
  #[error("growth factor must be finite and greater than 1, got {0}")]
  InvalidGrowthFactor(f64),

  /// The bit string length is zero.
  #[error("problem size must be positive, got {0}")]
  InvalidProblemSize(usize),

  /// The population size (`lambda`) is zero.
  #[error("population size must be positive, got {0}")]
  InvalidPopulationSize(usize),

  /// The parent pool size (`mu`) lies outside `(0, lambda]`.
  #[error("parent pool size mu must be in (0, {lambda}], got {mu}")]
  InvalidParentPool {
    /// The rejected parent pool size.
    mu: usize,
    /// The population size it was checked against.
    lambda: usize,
  },

  /// The self-adaptation bias is not a probability.
  #[error("rate increase probability must be in [0, 1], got {0}")]
  InvalidIncreaseProbability(f64),

  /// No objective function is registered under the given id.
  #[error("no objective function is defined for id {0}")]
  UnknownObjective(u32),

  /// The objective was built for a different bit string length than the run.
  #[error("objective expects bit strings of length {objective}, run uses {config}")]
  ObjectiveSizeMismatch {
    /// Length the objective was built for.
    objective: usize,
    /// Length configured for the run.
    config: usize,
  },
}

/// A `Result` alias with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_messages() {
    assert_eq!(
      Error::UnknownObjective(7).to_string(),
      "no objective function is defined for id 7"
    );
    assert_eq!(
      Error::InvalidParentPool { mu: 0, lambda: 10 }.to_string(),
      "parent pool size mu must be in (0, 10], got 0"
    );
  }
}
