//! Wrappers that mark operators for parallel execution.

use std::marker::PhantomData;

/// Tags that tell apart the kinds of operators, so the same type could be
/// wrapped for each kind without conflicting implementations.
pub mod tag {
  /// Marks fitness evaluation operators.
  pub enum EvaluationOperatorTag {}
  /// Marks mutation operators.
  pub enum MutationOperatorTag {}
}

/// A wrapper around an operator that marks it to be executed in parallel for
/// **each** individual.
pub struct ParEachOperator<OperatorTag, O> {
  operator: O,
  _operator_tag: PhantomData<OperatorTag>,
}

impl<OperatorTag, O> ParEachOperator<OperatorTag, O> {
  /// Returns the wrapped operator.
  pub fn operator(&self) -> &O {
    &self.operator
  }
}

/// A wrapper around an operator that marks it to be executed in parallel for
/// each **batch** of individuals.
pub struct ParBatchOperator<OperatorTag, O> {
  operator: O,
  _operator_tag: PhantomData<OperatorTag>,
}

impl<OperatorTag, O> ParBatchOperator<OperatorTag, O> {
  /// Returns the wrapped operator.
  pub fn operator(&self) -> &O {
    &self.operator
  }
}

/// Converts an operator into one applied in parallel to each individual.
pub trait ParEach<OperatorTag>: Sized {
  /// Wraps the operator so that its executor hands **each** individual to
  /// rayon as a separate task.
  ///
  /// **Cheap operators such as `OneMax` on short strings usually run slower
  /// this way. Measure before switching.**
  fn par_each(self) -> ParEachOperator<OperatorTag, Self> {
    ParEachOperator {
      operator: self,
      _operator_tag: PhantomData,
    }
  }
}

/// Converts an operator into one applied in parallel to batches of
/// individuals.
pub trait ParBatch<OperatorTag>: Sized {
  /// Wraps the operator so that its executor splits the population into one
  /// **batch** per rayon thread and processes the batches in parallel.
  fn par_batch(self) -> ParBatchOperator<OperatorTag, Self> {
    ParBatchOperator {
      operator: self,
      _operator_tag: PhantomData,
    }
  }
}
