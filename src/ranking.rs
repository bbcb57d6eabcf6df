//! Ranking of a population by fitness and mutation rate.
//!
//! The ranking is a total order that is fitness-primary and rewards high
//! mutation rates among fitter individuals, without comparing every pair of
//! individuals for dominance. It runs in two phases:
//!
//! 1. **Stratify.** Individuals are sorted by fitness, descending, and split
//!    into *levels*: maximal runs of equal fitness. Each level is a max-heap
//!    on the rate index.
//! 2. **Peel.** Levels are swept from the fittest to the least fit one with a
//!    cursor that starts below every rate index. A level whose highest
//!    remaining rate index is above the cursor gives up that individual, and
//!    the cursor moves to its rate index. The individuals taken in one sweep
//!    form a *front*. Sweeps repeat until every level is empty, and the fronts
//!    concatenated in sweep order are the ranking.
//!
//! Within a front rate indices strictly increase. Across fronts the fitness
//! order is not strict: a less fit level can still give up an individual
//! after a fitter level ran dry in an earlier sweep.
//!
//! Individuals with equal fitness and equal rate index leave their level in
//! input order. This tie-break is a choice of this implementation and carries
//! no meaning for the algorithm.

use std::{cmp::Reverse, collections::BinaryHeap};

use itertools::Itertools;

use crate::individual::Individual;

/// Index of an individual in the ranked slice.
pub type IndividualIndex = usize;

/// Indices of the individuals of one front in the order they were peeled.
pub type Front = Vec<IndividualIndex>;

/// Key of a level's heap: the highest rate index comes first, the earliest
/// individual among equal rate indices.
type LevelKey = (usize, Reverse<IndividualIndex>);

/// A fitness level: individuals of equal fitness keyed by rate index.
type Level = BinaryHeap<LevelKey>;

/// Splits `individuals` into fitness levels, the fittest level first.
fn stratify(individuals: &[Individual]) -> Vec<Level> {
  let by_fitness = (0..individuals.len())
    .sorted_by(|&a, &b| individuals[b].cmp_fitness(&individuals[a]))
    .collect_vec();

  by_fitness
    .chunk_by(|&a, &b| individuals[a].cmp_fitness(&individuals[b]).is_eq())
    .map(|level| {
      level
        .iter()
        .map(|&idx| (individuals[idx].rate_index(), Reverse(idx)))
        .collect()
    })
    .collect()
}

/// Peels one front off `levels`, dropping the levels it empties.
fn peel(levels: &mut Vec<Level>) -> Front {
  let mut front = Front::new();
  let mut cursor: Option<usize> = None;
  for level in levels.iter_mut() {
    let Some(&(rate_index, Reverse(idx))) = level.peek() else {
      continue;
    };
    if cursor.map_or(true, |c| rate_index > c) {
      level.pop();
      front.push(idx);
      cursor = Some(rate_index);
    }
  }
  levels.retain(|level| !level.is_empty());
  front
}

/// Returns the fronts of `individuals` in sweep order. Each front lists
/// indices into `individuals`.
///
/// Every index appears in exactly one front.
pub fn fronts(individuals: &[Individual]) -> Vec<Front> {
  let mut levels = stratify(individuals);
  let mut fronts = Vec::new();
  while !levels.is_empty() {
    fronts.push(peel(&mut levels));
  }
  fronts
}

/// Returns the ranking of `individuals` as a permutation of their indices,
/// the best individual first.
pub fn rank(individuals: &[Individual]) -> Vec<IndividualIndex> {
  fronts(individuals).into_iter().flatten().collect()
}
