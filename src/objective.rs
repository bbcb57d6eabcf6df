//! Objective functions and their evaluation over a population.

use executor::EvaluationExecutor;
use rayon::prelude::*;

use crate::{
  bitstring::BitString,
  error::{Error, Result},
  execution::*,
  individual::Individual,
  operator::{
    tag::EvaluationOperatorTag,
    ParBatch,
    ParBatchOperator,
    ParEach,
    ParEachOperator,
  },
};

/// An alias for a fitness value. The higher - the better.
pub type Fitness = f64;

/// An objective function that maps a bit string to its fitness.
///
/// The optimizer makes no assumption about the fitness landscape, it only
/// compares values and stops once the best one reaches
/// [`target_fitness()`](Objective::target_fitness).
///
/// Can be applied in parallel to each individual or to batches of
/// individuals by converting it into a parallelized operator with
/// `par_each()` or `par_batch()` methods.
///
/// # Examples
/// ```
/// # use mosa::{bitstring::BitString, objective::*, operator::*};
/// let zeros = WithTarget::new(8.0, |b: &BitString| (b.len() - b.count_ones()) as f64);
/// assert_eq!(zeros.evaluate(&BitString::zeros(8)), 8.0);
/// let zeros = zeros.par_batch();
/// ```
pub trait Objective {
  /// Returns the fitness of given bit string. Must be deterministic.
  fn evaluate(&self, bits: &BitString) -> Fitness;

  /// Returns the fitness at which the optimization stops.
  fn target_fitness(&self) -> Fitness;

  /// Returns the bit string length the objective is defined for, if it is
  /// defined for a single length only.
  fn problem_size(&self) -> Option<usize> {
    None
  }
}

impl<O> ParEach<EvaluationOperatorTag> for O where O: Objective {}

impl<O> ParBatch<EvaluationOperatorTag> for O where O: Objective {}

/// Counts set bits. The target is a string of ones.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OneMax(pub usize);

impl Objective for OneMax {
  fn evaluate(&self, bits: &BitString) -> Fitness {
    bits.count_ones() as Fitness
  }

  fn target_fitness(&self) -> Fitness {
    self.0 as Fitness
  }

  fn problem_size(&self) -> Option<usize> {
    Some(self.0)
  }
}

/// Counts set bits preceding the first unset one. The target is a string of
/// ones.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LeadingOnes(pub usize);

impl Objective for LeadingOnes {
  fn evaluate(&self, bits: &BitString) -> Fitness {
    bits.leading_ones() as Fitness
  }

  fn target_fitness(&self) -> Fitness {
    self.0 as Fitness
  }

  fn problem_size(&self) -> Option<usize> {
    Some(self.0)
  }
}

/// Pairs a fitness closure with the target fitness it is optimized towards.
#[derive(Clone, Copy, Debug)]
pub struct WithTarget<F> {
  target: Fitness,
  f: F,
}

impl<F> WithTarget<F>
where
  F: Fn(&BitString) -> Fitness,
{
  /// Wraps `f` as an objective that stops at `target`.
  pub fn new(target: Fitness, f: F) -> Self {
    Self { target, f }
  }
}

impl<F> Objective for WithTarget<F>
where
  F: Fn(&BitString) -> Fitness,
{
  fn evaluate(&self, bits: &BitString) -> Fitness {
    (self.f)(bits)
  }

  fn target_fitness(&self) -> Fitness {
    self.target
  }
}

/// One of the built-in objectives, chosen by numeric id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ObjectiveKind {
  /// Id `1`.
  OneMax(OneMax),
  /// Id `2`.
  LeadingOnes(LeadingOnes),
}

impl ObjectiveKind {
  /// Selects the objective registered under `id` for bit strings of length
  /// `n`.
  ///
  /// # Errors
  ///
  /// Fails with [`Error::UnknownObjective`] if no objective has this id.
  pub fn from_id(id: u32, n: usize) -> Result<Self> {
    match id {
      1 => Ok(Self::OneMax(OneMax(n))),
      2 => Ok(Self::LeadingOnes(LeadingOnes(n))),
      _ => Err(Error::UnknownObjective(id)),
    }
  }

  /// Returns the objective's name.
  pub fn name(&self) -> &'static str {
    match self {
      Self::OneMax(_) => "OneMax",
      Self::LeadingOnes(_) => "LeadingOnes",
    }
  }
}

impl Objective for ObjectiveKind {
  fn evaluate(&self, bits: &BitString) -> Fitness {
    match self {
      Self::OneMax(o) => o.evaluate(bits),
      Self::LeadingOnes(o) => o.evaluate(bits),
    }
  }

  fn target_fitness(&self) -> Fitness {
    match self {
      Self::OneMax(o) => o.target_fitness(),
      Self::LeadingOnes(o) => o.target_fitness(),
    }
  }

  fn problem_size(&self) -> Option<usize> {
    match self {
      Self::OneMax(o) => o.problem_size(),
      Self::LeadingOnes(o) => o.problem_size(),
    }
  }
}

/// Evaluation executors. Not meant to be implemented outside of this crate.
pub mod executor {
  use crate::{individual::Individual, objective::Fitness};

  /// An internal evaluation executor.
  pub trait EvaluationExecutor<ExecutionStrategy> {
    /// Evaluates each individual, caching its fitness, optionally
    /// parallelizing objective's application.
    fn execute_evaluations(&self, individuals: &mut [Individual]);

    /// Returns the fitness at which the optimization stops.
    fn target(&self) -> Fitness;

    /// Returns the bit string length the objective is defined for, if any.
    fn expected_len(&self) -> Option<usize>;
  }
}

impl<O> EvaluationExecutor<SequentialExecutionStrategy> for O
where
  O: Objective,
{
  fn execute_evaluations(&self, individuals: &mut [Individual]) {
    individuals
      .iter_mut()
      .for_each(|i| i.set_fitness(self.evaluate(i.bits())));
  }

  fn target(&self) -> Fitness {
    self.target_fitness()
  }

  fn expected_len(&self) -> Option<usize> {
    self.problem_size()
  }
}

impl<O> EvaluationExecutor<ParallelEachExecutionStrategy>
  for ParEachOperator<EvaluationOperatorTag, O>
where
  O: Objective + Sync,
{
  fn execute_evaluations(&self, individuals: &mut [Individual]) {
    individuals
      .par_iter_mut()
      .for_each(|i| i.set_fitness(self.operator().evaluate(i.bits())));
  }

  fn target(&self) -> Fitness {
    self.operator().target_fitness()
  }

  fn expected_len(&self) -> Option<usize> {
    self.operator().problem_size()
  }
}

impl<O> EvaluationExecutor<ParallelBatchExecutionStrategy>
  for ParBatchOperator<EvaluationOperatorTag, O>
where
  O: Objective + Sync,
{
  fn execute_evaluations(&self, individuals: &mut [Individual]) {
    let chunk_size = batch_size(individuals.len());
    individuals.par_chunks_mut(chunk_size).for_each(|chunk| {
      chunk
        .iter_mut()
        .for_each(|i| i.set_fitness(self.operator().evaluate(i.bits())))
    });
  }

  fn target(&self) -> Fitness {
    self.operator().target_fitness()
  }

  fn expected_len(&self) -> Option<usize> {
    self.operator().problem_size()
  }
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;
  use crate::ladder::MutationRateLadder;

  fn bits(s: &str) -> BitString {
    s.chars().map(|c| c == '1').collect()
  }

  fn takes_evaluator<ES, E: EvaluationExecutor<ES>>(e: &E) {
    e.execute_evaluations(&mut []);
  }

  #[test]
  fn test_one_max() {
    let o = OneMax(6);
    assert_eq!(o.evaluate(&bits("101101")), 4.0);
    assert_eq!(o.evaluate(&bits("111111")), o.target_fitness());
    assert_eq!(o.problem_size(), Some(6));
  }

  #[test]
  fn test_leading_ones() {
    let o = LeadingOnes(6);
    assert_eq!(o.evaluate(&bits("110111")), 2.0);
    assert_eq!(o.evaluate(&bits("011111")), 0.0);
    assert_eq!(o.evaluate(&bits("111111")), o.target_fitness());
  }

  #[test]
  fn test_objective_from_id() {
    assert_eq!(
      ObjectiveKind::from_id(1, 10),
      Ok(ObjectiveKind::OneMax(OneMax(10)))
    );
    assert_eq!(
      ObjectiveKind::from_id(2, 10),
      Ok(ObjectiveKind::LeadingOnes(LeadingOnes(10)))
    );
    assert_eq!(ObjectiveKind::from_id(0, 10), Err(Error::UnknownObjective(0)));
    assert_eq!(ObjectiveKind::from_id(3, 10), Err(Error::UnknownObjective(3)));

    let o = ObjectiveKind::from_id(2, 4).unwrap();
    assert_eq!(o.name(), "LeadingOnes");
    assert_eq!(o.evaluate(&bits("1101")), 2.0);
    assert_eq!(o.target_fitness(), 4.0);
  }

  #[test]
  fn test_evaluator_from_objectives() {
    takes_evaluator(&OneMax(3));
    takes_evaluator(&OneMax(3).par_each());
    takes_evaluator(&OneMax(3).par_batch());
    let closure = WithTarget::new(1.0, |b: &BitString| b.len() as Fitness);
    takes_evaluator(&closure);
    takes_evaluator(&closure.par_each());
    takes_evaluator(&closure.par_batch());
  }

  #[test]
  fn test_parallel_evaluation_matches_sequential() {
    let ladder = MutationRateLadder::new(0.01, 1.5).unwrap();
    let mut rng = StdRng::seed_from_u64(21);
    let population: Vec<_> = (0..257)
      .map(|_| Individual::random(32, &ladder, &mut rng))
      .collect();

    let mut sequential = population.clone();
    let mut each = population.clone();
    let mut batch = population;
    OneMax(32).execute_evaluations(&mut sequential);
    OneMax(32).par_each().execute_evaluations(&mut each);
    OneMax(32).par_batch().execute_evaluations(&mut batch);

    assert!(sequential.iter().all(|i| i.fitness().is_some()));
    assert_eq!(sequential, each);
    assert_eq!(sequential, batch);
  }
}
