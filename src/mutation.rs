//! Self-adaptive mutation operators and utilities.

use executor::MutationExecutor;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::{
  error::{Error, Result},
  execution::*,
  individual::Individual,
  ladder::MutationRateLadder,
  operator::{
    tag::MutationOperatorTag,
    ParBatch,
    ParBatchOperator,
    ParEach,
    ParEachOperator,
  },
};

/// An operator that mutates a single individual.
///
/// Each individual gets its own random stream, so the operator can be applied
/// in parallel to each individual or to batches of individuals by converting
/// it into a parallelized operator with `par_each()` or `par_batch()` methods.
/// The outcome does not depend on the chosen execution strategy.
///
/// # Examples
/// ```
/// # use mosa::{individual::Individual, operator::*};
/// # use rand::rngs::StdRng;
/// let m = |i: &mut Individual, rng: &mut StdRng| i.mutate_bits(0.1, rng);
/// let m = m.par_batch();
/// ```
///
/// **Note that you always can implement this trait instead of using closures.**
pub trait Mutation {
  /// Mutates given individual drawing randomness from `rng`.
  fn mutate(&self, individual: &mut Individual, rng: &mut StdRng);
}

impl<F> Mutation for F
where
  F: Fn(&mut Individual, &mut StdRng),
{
  fn mutate(&self, individual: &mut Individual, rng: &mut StdRng) {
    self(individual, rng)
  }
}

impl<M> ParEach<MutationOperatorTag> for M where M: Mutation {}

impl<M> ParBatch<MutationOperatorTag> for M where M: Mutation {}

/// The MOSA-EA mutation: first move the rate index one rung up with
/// probability `p_inc` or one rung down otherwise, then flip each bit with
/// the newly chosen rate.
#[derive(Clone, Copy, Debug)]
pub struct SelfAdaptiveMutation<'a> {
  p_inc: f64,
  ladder: &'a MutationRateLadder,
}

impl<'a> SelfAdaptiveMutation<'a> {
  /// Creates the mutation for rates of `ladder`.
  ///
  /// # Errors
  ///
  /// Fails with [`Error::InvalidIncreaseProbability`] if `p_inc` lies outside
  /// `[0, 1]`.
  pub fn new(p_inc: f64, ladder: &'a MutationRateLadder) -> Result<Self> {
    if !(0.0..=1.0).contains(&p_inc) {
      return Err(Error::InvalidIncreaseProbability(p_inc));
    }
    Ok(Self { p_inc, ladder })
  }
}

impl Mutation for SelfAdaptiveMutation<'_> {
  fn mutate(&self, individual: &mut Individual, rng: &mut StdRng) {
    individual.self_adapt_rate_index(self.p_inc, self.ladder.len(), rng);
    let rate = individual.mutation_rate(self.ladder);
    individual.mutate_bits(rate, rng);
  }
}

/// Draws one seed per individual, in order, from the driver's generator.
fn draw_seeds<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<u64> {
  (0..len).map(|_| rng.gen()).collect()
}

/// Mutation executors. Not meant to be implemented outside of this crate.
pub mod executor {
  use rand::rngs::StdRng;

  use crate::individual::Individual;

  /// An internal mutation executor.
  pub trait MutationExecutor<ExecutionStrategy> {
    /// Executes mutations optionally parallelizing operator's application.
    /// Every individual is mutated with a generator seeded from `rng`.
    fn execute_mutations(&self, individuals: &mut [Individual], rng: &mut StdRng);
  }
}

impl<M> MutationExecutor<SequentialExecutionStrategy> for M
where
  M: Mutation,
{
  fn execute_mutations(&self, individuals: &mut [Individual], rng: &mut StdRng) {
    let seeds = draw_seeds(individuals.len(), rng);
    individuals.iter_mut().zip(seeds).for_each(|(i, seed)| {
      self.mutate(i, &mut StdRng::seed_from_u64(seed))
    });
  }
}

impl<M> MutationExecutor<ParallelEachExecutionStrategy>
  for ParEachOperator<MutationOperatorTag, M>
where
  M: Mutation + Sync,
{
  fn execute_mutations(&self, individuals: &mut [Individual], rng: &mut StdRng) {
    let seeds = draw_seeds(individuals.len(), rng);
    individuals
      .par_iter_mut()
      .zip(seeds)
      .for_each(|(i, seed)| {
        self.operator().mutate(i, &mut StdRng::seed_from_u64(seed))
      });
  }
}

impl<M> MutationExecutor<ParallelBatchExecutionStrategy>
  for ParBatchOperator<MutationOperatorTag, M>
where
  M: Mutation + Sync,
{
  fn execute_mutations(&self, individuals: &mut [Individual], rng: &mut StdRng) {
    let seeds = draw_seeds(individuals.len(), rng);
    let chunk_size = batch_size(individuals.len());
    individuals
      .par_chunks_mut(chunk_size)
      .zip(seeds.par_chunks(chunk_size))
      .for_each(|(chunk, seeds)| {
        chunk.iter_mut().zip(seeds).for_each(|(i, &seed)| {
          self.operator().mutate(i, &mut StdRng::seed_from_u64(seed))
        })
      });
  }
}
