//! Execution strategy markers.
//!
//! An executor trait is implemented once per strategy, and the strategy type
//! parameter is inferred from the operator it is called on: a plain operator
//! runs sequentially, an operator wrapped with
//! [`par_each()`](crate::operator::ParEach::par_each) or
//! [`par_batch()`](crate::operator::ParBatch::par_batch) runs on [rayon].

/// Sequential execution strategy marker, i.e. no parallelization involved.
pub enum SequentialExecutionStrategy {}

/// Parallel execution strategy marker, parallelizes the operator for **each**
/// individual.
pub enum ParallelEachExecutionStrategy {}

/// Parallel execution strategy marker, parallelizes the operator for a
/// **batch** of individuals. The crate tries to split the work equally for
/// each available thread.
pub enum ParallelBatchExecutionStrategy {}

/// Returns the batch size that splits `len` items evenly across rayon's
/// threads.
pub(crate) fn batch_size(len: usize) -> usize {
  (len / rayon::current_num_threads()).max(1)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_batch_size_is_never_zero() {
    assert_eq!(batch_size(0), 1);
    assert!(batch_size(1) >= 1);
    assert!(batch_size(1_000_000) >= 1);
  }
}
