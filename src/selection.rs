//! Parent selection operators.

use rand::Rng;

use crate::individual::Individual;

/// An operator that picks parents for the next generation out of a ranked
/// population.
///
/// Selected individuals' references are copied by value into the offspring
/// buffer, so a parent may be selected any number of times.
///
/// **Note that you always can implement this trait for your own type.**
pub trait Selector {
  /// Takes a slice of individuals ranked best first and returns `count`
  /// references to the selected parents, one per offspring.
  fn select<'a, R: Rng + ?Sized>(
    &self,
    ranked: &'a [Individual],
    count: usize,
    rng: &mut R,
  ) -> Vec<&'a Individual>;
}

/// The `(mu, lambda)` comma selection: every offspring gets a parent drawn
/// uniformly, with replacement, from the `mu` best ranked individuals.
///
/// No individual survives a generation unchanged by itself; the best ones
/// only survive as copies that are mutated afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CommaSelector(pub usize);

impl CommaSelector {
  /// Returns the size of the parent pool.
  pub fn mu(&self) -> usize {
    self.0
  }
}

impl Selector for CommaSelector {
  /// # Panics
  ///
  /// Panics if `count` is positive while `mu` or `ranked` is empty.
  fn select<'a, R: Rng + ?Sized>(
    &self,
    ranked: &'a [Individual],
    count: usize,
    rng: &mut R,
  ) -> Vec<&'a Individual> {
    let pool = &ranked[..self.0.min(ranked.len())];
    (0..count)
      .map(|_| &pool[rng.gen_range(0..pool.len())])
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;
  use crate::bitstring::BitString;

  fn ranked(len: usize) -> Vec<Individual> {
    (0..len)
      .map(|i| Individual::new(BitString::zeros(4), i))
      .collect()
  }

  #[test]
  fn test_comma_selection_draws_from_top_mu() {
    let ranked = ranked(20);
    let mut rng = StdRng::seed_from_u64(1);
    let parents = CommaSelector(5).select(&ranked, 1000, &mut rng);
    assert_eq!(parents.len(), 1000);
    assert!(parents.iter().all(|p| p.rate_index() < 5));
    // with 1000 draws every one of the 5 parents gets picked
    for r in 0..5 {
      assert!(parents.iter().any(|p| p.rate_index() == r));
    }
  }

  #[test]
  fn test_comma_selection_with_single_parent() {
    let ranked = ranked(10);
    let mut rng = StdRng::seed_from_u64(2);
    let parents = CommaSelector(1).select(&ranked, 10, &mut rng);
    assert!(parents.iter().all(|p| std::ptr::eq(*p, &ranked[0])));
  }

  #[test]
  fn test_comma_selection_with_whole_population() {
    let ranked = ranked(3);
    let mut rng = StdRng::seed_from_u64(3);
    let parents = CommaSelector(3).select(&ranked, 300, &mut rng);
    for r in 0..3 {
      assert!(parents.iter().any(|p| p.rate_index() == r));
    }
  }
}
