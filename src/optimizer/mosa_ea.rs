//! The mutation-rate self-adaptive evolutionary algorithm.

use std::{marker::PhantomData, time::Instant};

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use typed_builder::TypedBuilder;

use crate::{
  config::Config,
  error::{Error, Result},
  mutation::SelfAdaptiveMutation,
  objective::executor::EvaluationExecutor,
  operator::ParBatch,
  optimizer::{GenerationReport, Optimizer, Outcome, Termination},
  population::Population,
  selection::CommaSelector,
};

/// A callback invoked with the report of every generation.
pub type Observer = Box<dyn FnMut(&GenerationReport)>;

/// MOSA-EA optimizer.
///
/// Every generation, the current population is evaluated and ranked. The run
/// stops as soon as the best individual reaches the objective's target
/// fitness. Otherwise, `lambda` offspring are copied from the `mu` best ranked
/// individuals, each offspring adapts its mutation rate and mutates its bits
/// with that rate, and the offspring replace the population.
///
/// The run also stops when the evaluation count estimate `generation *
/// lambda` exceeds the configured budget.
///
/// # Examples
/// ```
/// # use mosa::{config::Config, objective::OneMax, optimizer::{*, mosa_ea::MosaEa}};
/// let config = Config::builder()
///   .problem_size(16)
///   .min_rate_param(1.0)
///   .growth_factor(1.1)
///   .population_size(64)
///   .parent_pool_size(8)
///   .build();
/// let outcome = MosaEa::builder()
///   .config(config)
///   .evaluator(OneMax(16))
///   .seed(7)
///   .build()
///   .optimize()
///   .unwrap();
/// assert_eq!(outcome.termination, Termination::TargetReached);
/// ```
#[derive(TypedBuilder)]
pub struct MosaEa<Eval, EvalExecStrat> {
  /// Run parameters.
  config: Config,
  /// The objective, optionally wrapped with `par_each()` or `par_batch()`.
  evaluator: Eval,
  /// Seed of the run's random generator. Drawn from the OS if not set.
  #[builder(default, setter(strip_option))]
  seed: Option<u64>,
  /// Mutates offspring in parallel if set.
  #[builder(default)]
  parallel_mutation: bool,
  /// Receives the report of every generation.
  #[builder(
    default,
    setter(transform = |f: impl FnMut(&GenerationReport) + 'static| {
      Some(Box::new(f) as Observer)
    })
  )]
  observer: Option<Observer>,
  #[builder(setter(skip), default)]
  _eval_es: PhantomData<EvalExecStrat>,
}

impl<Eval, EvalExecStrat> MosaEa<Eval, EvalExecStrat>
where
  Eval: EvaluationExecutor<EvalExecStrat>,
{
  fn check_problem_size(&self) -> Result<()> {
    match self.evaluator.expected_len() {
      Some(len) if len != self.config.problem_size => {
        Err(Error::ObjectiveSizeMismatch {
          objective: len,
          config: self.config.problem_size,
        })
      }
      _ => Ok(()),
    }
  }
}

impl<Eval, EvalExecStrat> Optimizer for MosaEa<Eval, EvalExecStrat>
where
  Eval: EvaluationExecutor<EvalExecStrat>,
{
  fn optimize(mut self) -> Result<Outcome> {
    let start = Instant::now();
    let ladder = self.config.ladder()?;
    self.check_problem_size()?;

    let config = &self.config;
    let mut rng = match self.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    let mut population = Population::random(
      config.problem_size,
      config.population_size,
      config.parent_pool_size,
      &ladder,
      &mut rng,
    )?;
    let selector = CommaSelector(config.parent_pool_size);
    let mutation = SelfAdaptiveMutation::new(config.increase_probability, &ladder)?;
    let target = self.evaluator.target();
    let lambda = config.population_size as u64;
    let n = config.problem_size as f64;

    info!(
      "MOSA-EA with n={}, lambda={}, mu={}, A={}, p_inc={}, c={}, {} mutation rates",
      config.problem_size,
      config.population_size,
      config.parent_pool_size,
      config.growth_factor,
      config.increase_probability,
      config.min_rate_param,
      ladder.len(),
    );
    debug!(
      "mutation rates range from {} to {}",
      ladder.min_rate(),
      ladder.max_rate()
    );

    let mut generation = 0;
    let mut evaluations = 0;
    let mut best_so_far = f64::NEG_INFINITY;
    let mut history = Vec::new();
    let mut termination = Termination::BudgetExhausted;

    while evaluations <= config.max_evaluations {
      generation += 1;
      population.evaluate(&self.evaluator);
      let fronts = population.rank();

      let best = population.best();
      let best_fitness = best.fitness().unwrap_or(f64::NEG_INFINITY);
      best_so_far = best_so_far.max(best_fitness);
      let report = GenerationReport {
        generation,
        evaluations,
        best_fitness,
        best_so_far,
        best_mutation_param: best.mutation_rate(&ladder) * n,
        fronts,
      };
      debug!(
        "Gen' {generation} (Evaluation: {evaluations}) : Best Fitness: {best_fitness}, its mutation para': {}",
        report.best_mutation_param
      );
      if let Some(observer) = self.observer.as_mut() {
        observer(&report);
      }
      history.push(report);

      if best_fitness >= target {
        termination = Termination::TargetReached;
        break;
      }

      population.select(&selector, &mut rng);
      if self.parallel_mutation {
        population.mutate(&mutation.par_batch(), &mut rng);
      } else {
        population.mutate(&mutation, &mut rng);
      }
      population.advance();

      evaluations = generation * lambda;
    }

    let elapsed = start.elapsed();
    info!("run finished after {generation} generations: {termination:?}");
    Ok(Outcome {
      termination,
      generations: generation,
      evaluations: generation * lambda,
      best: population.best().clone(),
      best_fitness: best_so_far,
      history,
      elapsed,
    })
  }
}
