//! Individuals: a bit string paired with its own mutation rate.

use std::cmp::Ordering;

use rand::Rng;

use crate::{bitstring::BitString, ladder::MutationRateLadder, objective::Fitness};

/// A candidate solution together with the index of its self-adapted mutation
/// rate in a [`MutationRateLadder`].
///
/// Cloning an individual copies its bit string, individuals never share
/// storage.
#[derive(Clone, PartialEq, Debug)]
pub struct Individual {
  bits: BitString,
  rate_index: usize,
  fitness: Option<Fitness>,
}

impl Individual {
  /// Creates an unevaluated individual.
  pub fn new(bits: BitString, rate_index: usize) -> Self {
    Self {
      bits,
      rate_index,
      fitness: None,
    }
  }

  /// Creates an individual of `n` uniformly random bits and a uniformly
  /// random rung of `ladder`.
  pub fn random<R: Rng + ?Sized>(
    n: usize,
    ladder: &MutationRateLadder,
    rng: &mut R,
  ) -> Self {
    let rate_index = rng.gen_range(0..ladder.len());
    Self::new(BitString::random(n, rng), rate_index)
  }

  /// Returns the genome.
  pub fn bits(&self) -> &BitString {
    &self.bits
  }

  /// Returns the index of the individual's mutation rate.
  pub fn rate_index(&self) -> usize {
    self.rate_index
  }

  /// Returns the cached fitness, or `None` if the individual has never been
  /// evaluated.
  ///
  /// Offspring carry their parent's fitness until they are evaluated again.
  pub fn fitness(&self) -> Option<Fitness> {
    self.fitness
  }

  /// Caches the fitness of the current genome.
  pub fn set_fitness(&mut self, fitness: Fitness) {
    self.fitness = Some(fitness);
  }

  /// Returns the mutation rate the individual uses on `ladder`.
  pub fn mutation_rate(&self, ladder: &MutationRateLadder) -> f64 {
    ladder[self.rate_index]
  }

  /// Overwrites `self` with a copy of `other`, reusing `self`'s storage.
  pub fn copy_from(&mut self, other: &Individual) {
    self.clone_from(other);
  }

  /// Moves the rate index one rung up with probability `p_inc`, otherwise one
  /// rung down, staying within `[0, ladder_len)`.
  pub fn self_adapt_rate_index<R: Rng + ?Sized>(
    &mut self,
    p_inc: f64,
    ladder_len: usize,
    rng: &mut R,
  ) {
    if rng.gen_bool(p_inc) {
      self.rate_index = (self.rate_index + 1).min(ladder_len.saturating_sub(1));
    } else {
      self.rate_index = self.rate_index.saturating_sub(1);
    }
  }

  /// Flips each bit independently with probability `rate`.
  pub fn mutate_bits<R: Rng + ?Sized>(&mut self, rate: f64, rng: &mut R) {
    for bit in self.bits.bits_mut() {
      if rng.gen_bool(rate) {
        *bit = !*bit;
      }
    }
  }

  /// Compares fitness values. Unevaluated individuals are worse than any
  /// evaluated one; evaluated fitness values are compared with
  /// [`f64::total_cmp`] after `-0.0` is folded into `0.0`.
  pub fn cmp_fitness(&self, other: &Individual) -> Ordering {
    // adding positive zero turns -0.0 into 0.0 and keeps every other value
    match (self.fitness, other.fitness) {
      (Some(a), Some(b)) => (a + 0.0).total_cmp(&(b + 0.0)),
      (Some(_), None) => Ordering::Greater,
      (None, Some(_)) => Ordering::Less,
      (None, None) => Ordering::Equal,
    }
  }
}

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;

  fn ladder() -> MutationRateLadder {
    MutationRateLadder::new(0.125, 1.1).unwrap()
  }

  #[test]
  fn test_random_individual_is_in_bounds() {
    let ladder = ladder();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1000 {
      let i = Individual::random(8, &ladder, &mut rng);
      assert!(i.rate_index() < ladder.len());
      assert_eq!(i.bits().len(), 8);
      assert_eq!(i.fitness(), None);
    }
  }

  #[test]
  fn test_self_adaptation_stays_in_bounds() {
    let ladder = ladder();
    let mut rng = StdRng::seed_from_u64(5);
    for p_inc in [0.0, 0.1, 0.4, 0.5, 0.9, 1.0] {
      let mut i = Individual::random(4, &ladder, &mut rng);
      for _ in 0..2000 {
        i.self_adapt_rate_index(p_inc, ladder.len(), &mut rng);
        assert!(i.rate_index() < ladder.len());
      }
    }
  }

  #[test]
  fn test_self_adaptation_saturates() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut i = Individual::new(BitString::zeros(4), 2);
    i.self_adapt_rate_index(1.0, 4, &mut rng);
    assert_eq!(i.rate_index(), 3);
    i.self_adapt_rate_index(1.0, 4, &mut rng);
    assert_eq!(i.rate_index(), 3);
    for _ in 0..5 {
      i.self_adapt_rate_index(0.0, 4, &mut rng);
    }
    assert_eq!(i.rate_index(), 0);
  }

  #[test]
  fn test_mutate_bits_extremes() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut i = Individual::new(BitString::zeros(16), 0);
    i.mutate_bits(0.0, &mut rng);
    assert_eq!(i.bits(), &BitString::zeros(16));
    i.mutate_bits(1.0, &mut rng);
    assert_eq!(i.bits(), &BitString::ones(16));
  }

  #[test]
  fn test_mutate_bits_flip_count() {
    // the number of flips of n bits at rate p follows Binomial(n, p)
    let (n, p) = (10_000, 0.1);
    let mut rng = StdRng::seed_from_u64(13);
    let mut i = Individual::new(BitString::zeros(n), 0);
    i.mutate_bits(p, &mut rng);
    let flips = i.bits().count_ones() as f64;
    let expected = n as f64 * p;
    let sd = (n as f64 * p * (1.0 - p)).sqrt();
    assert!((flips - expected).abs() < 5.0 * sd);
  }

  #[test]
  fn test_copy_from_does_not_alias() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut parent = Individual::new(BitString::ones(8), 1);
    parent.set_fitness(8.0);
    let mut child = Individual::new(BitString::zeros(8), 0);
    child.copy_from(&parent);
    assert_eq!(child, parent);

    child.mutate_bits(1.0, &mut rng);
    child.self_adapt_rate_index(1.0, 4, &mut rng);
    assert_eq!(parent.bits(), &BitString::ones(8));
    assert_eq!(parent.rate_index(), 1);
    assert_eq!(child.bits(), &BitString::zeros(8));
    assert_eq!(child.rate_index(), 2);
  }

  #[test]
  fn test_cmp_fitness() {
    let mut a = Individual::new(BitString::zeros(1), 0);
    let mut b = a.clone();
    assert_eq!(a.cmp_fitness(&b), Ordering::Equal);
    a.set_fitness(f64::NEG_INFINITY);
    assert_eq!(a.cmp_fitness(&b), Ordering::Greater);
    b.set_fitness(1.0);
    assert_eq!(a.cmp_fitness(&b), Ordering::Less);
  }

  #[test]
  fn test_signed_zeros_have_equal_fitness() {
    let mut a = Individual::new(BitString::zeros(1), 0);
    let mut b = a.clone();
    a.set_fitness(0.0);
    b.set_fitness(-0.0);
    assert_eq!(a.cmp_fitness(&b), Ordering::Equal);
    assert_eq!(b.cmp_fitness(&a), Ordering::Equal);
    b.set_fitness(-f64::MIN_POSITIVE);
    assert_eq!(a.cmp_fitness(&b), Ordering::Greater);
  }
}
