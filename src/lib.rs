//! **MOSA** is an implementation of MOSA-EA, a Mutation-rate Self-Adaptive
//! Evolutionary Algorithm for optimizing pseudo-Boolean functions over bit
//! strings. It strives to be simple, deterministic under a fixed seed and
//! easy to parallelize.
//!
//! Here's a [quick start example](#example) for the impatient.
//!
//! Every individual of the population carries its own mutation rate, picked
//! from a geometric ladder of rates between `c / n` and `1 / 2`. Each
//! generation runs the following loop:
//!   1. **Evaluate** each individual against the objective
//!   2. **Rank** the population, peeling fronts that prefer high fitness and
//!      high mutation rates
//!   3. **Terminate** if the best individual has reached the target fitness or
//!      the evaluation budget is exhausted
//!   4. **Select** `lambda` offspring uniformly among the `mu` best ranked
//!      individuals
//!   5. **Mutate** each offspring: its rate moves one rung up the ladder with
//!      probability `p_inc` and one rung down otherwise, then every bit flips
//!      with the new rate
//!
//! # Ranking
//!
//! Ranking is done by [`fronts`]. Individuals are stratified into levels of
//! equal fitness, best level first. Then fronts are peeled, each front taking
//! at most one individual from each level, so that within a front fitness
//! strictly decreases while mutation rates strictly increase. Individuals with
//! higher mutation rates end up ahead of fitter individuals with lower
//! mutation rates whenever the fronts interleave.
//!
//! # Operators and Executors
//!
//! Evaluation and mutation are **operators**: an [`Objective`] scores a single
//! bit string and a [`Mutation`] mutates a single individual. Each **operator**
//! is applied to the whole population by an **executor**, an internal
//! abstraction that picks the execution strategy: **sequential** or
//! **parallel**.
//!
//! Both operators are implemented by closures too, so a quick custom
//! objective is a single line away:
//! ```
//! # use mosa::{bitstring::BitString, objective::{Objective, WithTarget}};
//! let zeros = WithTarget::new(8.0, |b: &BitString| (b.len() - b.count_ones()) as f64);
//! assert_eq!(zeros.evaluate(&BitString::zeros(8)), 8.0);
//! ```
//!
//! # Parallelization
//!
//! **Operators** can be parallelized by calling [`par_each()`] or
//! [`par_batch()`] methods on them. This cheap conversion only wraps the
//! **operator** into a struct, tagging it, so an **executor** will apply such
//! **operator** in parallel to each individual or to batches of individuals of
//! equal size. Mutation draws one seed per individual from the run's generator
//! before the work is spread across threads, so a seeded run produces the same
//! result regardless of the execution strategy.
//!
//! # Example
//!
//! Maximizing the number of ones in a 64 bit string:
//! ```no_run
//! # fn main() {
//! use mosa::{
//!   config::Config,
//!   objective::OneMax,
//!   operator::ParBatch,
//!   optimizer::{mosa_ea::MosaEa, Optimizer, Termination},
//! };
//! let config = Config::builder()
//!   .problem_size(64)
//!   .population_size(500)
//!   .parent_pool_size(60)
//!   .build();
//! let outcome = MosaEa::builder()
//!   .config(config)
//!   // fitness will be evaluated concurrently for each batch of individuals
//!   .evaluator(OneMax(64).par_batch())
//!   .parallel_mutation(true)
//!   .seed(42)
//!   .observer(|report: &mosa::optimizer::GenerationReport| {
//!     println!("{}: {}", report.generation, report.best_fitness)
//!   })
//!   .build()
//!   .optimize()
//!   .unwrap();
//! assert_eq!(outcome.termination, Termination::TargetReached);
//! println!("{:?} per generation", outcome.time_per_generation());
//! # }
//! ```
//!
//! A command line driver lives in the *demos* folder in the root of the
//! project.
//!
//! [`fronts`]: crate::ranking::fronts
//! [`Objective`]: crate::objective::Objective
//! [`Mutation`]: crate::mutation::Mutation
//! [`par_each()`]: crate::operator::ParEach::par_each
//! [`par_batch()`]: crate::operator::ParBatch::par_batch

#![warn(missing_docs)]

pub mod bitstring;
pub mod config;
pub mod error;
mod execution;
pub mod individual;
pub mod ladder;
pub mod mutation;
pub mod objective;
pub mod operator;
pub mod optimizer;
pub mod population;
pub mod ranking;
pub mod selection;

pub use error::{Error, Result};
