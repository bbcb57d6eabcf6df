//! The population and its per-generation buffers.

use log::debug;
use rand::{rngs::StdRng, Rng};

use crate::{
  error::{Error, Result},
  individual::Individual,
  ladder::MutationRateLadder,
  mutation::executor::MutationExecutor,
  objective::executor::EvaluationExecutor,
  ranking,
  selection::Selector,
};

/// A population of `lambda` individuals spread over three buffers of equal
/// size:
/// - `current` is the generation being evaluated and ranked,
/// - `ranked` receives copies of `current` in ranking order,
/// - `offspring` receives copies of selected parents and is mutated in place
///   before it becomes the next `current`.
///
/// Individuals move between buffers by value only. Buffers keep their
/// storage across generations.
#[derive(Clone, Debug)]
pub struct Population {
  current: Vec<Individual>,
  ranked: Vec<Individual>,
  offspring: Vec<Individual>,
  mu: usize,
}

impl Population {
  /// Creates `lambda` random individuals of `n` bits with random rungs of
  /// `ladder` in each buffer.
  ///
  /// # Errors
  ///
  /// Fails if `n` or `lambda` is zero or `mu` lies outside `(0, lambda]`.
  pub fn random<R: Rng + ?Sized>(
    n: usize,
    lambda: usize,
    mu: usize,
    ladder: &MutationRateLadder,
    rng: &mut R,
  ) -> Result<Self> {
    if n == 0 {
      return Err(Error::InvalidProblemSize(n));
    }
    if lambda == 0 {
      return Err(Error::InvalidPopulationSize(lambda));
    }
    if mu == 0 || mu > lambda {
      return Err(Error::InvalidParentPool { mu, lambda });
    }
    let mut buffer = || -> Vec<Individual> {
      (0..lambda)
        .map(|_| Individual::random(n, ladder, rng))
        .collect()
    };
    Ok(Self {
      current: buffer(),
      ranked: buffer(),
      offspring: buffer(),
      mu,
    })
  }

  /// Returns the population size `lambda`.
  pub fn size(&self) -> usize {
    self.current.len()
  }

  /// Returns the parent pool size `mu`.
  pub fn mu(&self) -> usize {
    self.mu
  }

  /// Returns the current generation.
  pub fn current(&self) -> &[Individual] {
    &self.current
  }

  /// Returns the last ranking, best individual first.
  pub fn ranked(&self) -> &[Individual] {
    &self.ranked
  }

  /// Returns the offspring buffer.
  pub fn offspring(&self) -> &[Individual] {
    &self.offspring
  }

  /// Returns the best individual of the last ranking.
  pub fn best(&self) -> &Individual {
    &self.ranked[0]
  }

  /// Evaluates every individual of the current generation.
  pub fn evaluate<ES, E>(&mut self, evaluator: &E)
  where
    E: EvaluationExecutor<ES>,
  {
    evaluator.execute_evaluations(&mut self.current);
  }

  /// Ranks the current generation into the ranked buffer and returns the
  /// number of fronts.
  pub fn rank(&mut self) -> usize {
    let fronts = ranking::fronts(&self.current);
    let front_count = fronts.len();
    let order = fronts.into_iter().flatten();
    for (slot, idx) in self.ranked.iter_mut().zip(order) {
      slot.copy_from(&self.current[idx]);
    }
    debug!(
      "ranked {} individuals into {front_count} fronts",
      self.ranked.len()
    );
    front_count
  }

  /// Fills the offspring buffer with copies of parents picked by `selector`
  /// among the ranked individuals.
  pub fn select<S, R>(&mut self, selector: &S, rng: &mut R)
  where
    S: Selector,
    R: Rng + ?Sized,
  {
    let parents = selector.select(&self.ranked, self.offspring.len(), rng);
    for (slot, parent) in self.offspring.iter_mut().zip(parents) {
      slot.copy_from(parent);
    }
  }

  /// Mutates every offspring.
  pub fn mutate<ES, M>(&mut self, mutator: &M, rng: &mut StdRng)
  where
    M: MutationExecutor<ES>,
  {
    mutator.execute_mutations(&mut self.offspring, rng);
  }

  /// Makes the offspring the current generation.
  pub fn advance(&mut self) {
    std::mem::swap(&mut self.current, &mut self.offspring);
  }
}
