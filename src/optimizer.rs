//! Abstract optimizer and the results of a run.

use std::time::Duration;

use crate::{error::Result, individual::Individual, objective::Fitness};

pub mod mosa_ea;

/// Represents an abstract optimizer.
pub trait Optimizer: Sized {
  /// Runs `Optimizer` until the termination condition is met, then returns
  /// the outcome of the run.
  ///
  /// # Errors
  ///
  /// Fails before the first generation if the run is misconfigured.
  fn optimize(self) -> Result<Outcome>;
}

/// Why a run stopped.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Termination {
  /// The best individual reached the target fitness.
  TargetReached,
  /// The evaluation budget was used up.
  BudgetExhausted,
}

/// What a generation looked like right after it was ranked.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GenerationReport {
  /// Generation number, starting at `1`.
  pub generation: u64,
  /// Evaluations performed before this generation, counted as
  /// `(generation - 1) * lambda`.
  pub evaluations: u64,
  /// Fitness of the best individual of this generation.
  pub best_fitness: Fitness,
  /// Best fitness of this and all previous generations.
  pub best_so_far: Fitness,
  /// Mutation rate of the best individual multiplied by the problem size.
  pub best_mutation_param: f64,
  /// Number of fronts the ranking peeled.
  pub fronts: usize,
}

/// The result of a finished run.
#[derive(Clone, Debug)]
pub struct Outcome {
  /// Why the run stopped.
  pub termination: Termination,
  /// Number of generations that were evaluated.
  pub generations: u64,
  /// Evaluation count estimate, `generations * lambda` of the completed
  /// generation loop iterations.
  pub evaluations: u64,
  /// Best individual of the last generation.
  pub best: Individual,
  /// Best fitness over the whole run.
  pub best_fitness: Fitness,
  /// One report per generation.
  pub history: Vec<GenerationReport>,
  /// Wall time of the run.
  pub elapsed: Duration,
}

impl Outcome {
  /// Returns the mean wall time of a generation.
  pub fn time_per_generation(&self) -> Duration {
    match u32::try_from(self.generations) {
      Ok(0) => Duration::ZERO,
      Ok(g) => self.elapsed / g,
      Err(_) => self.elapsed.div_f64(self.generations as f64),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bitstring::BitString;

  #[test]
  fn test_time_per_generation() {
    let outcome = |generations| Outcome {
      termination: Termination::TargetReached,
      generations,
      evaluations: 0,
      best: Individual::new(BitString::zeros(1), 0),
      best_fitness: 0.0,
      history: vec![],
      elapsed: Duration::from_secs(10),
    };
    assert_eq!(outcome(0).time_per_generation(), Duration::ZERO);
    assert_eq!(outcome(4).time_per_generation(), Duration::from_millis(2500));
  }
}
