//! Fixed-length bit strings, the genome of an individual.

use std::ops::Index;

use rand::Rng;

/// An owned, fixed-length sequence of bits.
///
/// The length is set at construction and never changes. Cloning copies the
/// bits, two bit strings never share storage.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct BitString(Vec<bool>);

impl BitString {
  /// Creates a bit string of `n` zeros.
  pub fn zeros(n: usize) -> Self {
    Self(vec![false; n])
  }

  /// Creates a bit string of `n` ones.
  pub fn ones(n: usize) -> Self {
    Self(vec![true; n])
  }

  /// Creates a bit string of `n` uniformly random bits.
  pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
    Self((0..n).map(|_| rng.gen::<bool>()).collect())
  }

  /// Returns the number of bits.
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns `true` if there are no bits.
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Returns the bit at `index`, if it is in bounds.
  pub fn get(&self, index: usize) -> Option<bool> {
    self.0.get(index).copied()
  }

  /// Inverts the bit at `index`.
  ///
  /// # Panics
  ///
  /// Panics if `index` is out of bounds.
  pub fn flip(&mut self, index: usize) {
    self.0[index] = !self.0[index];
  }

  /// Iterates over the bits.
  pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
    self.0.iter().copied()
  }

  /// Returns the number of set bits.
  pub fn count_ones(&self) -> usize {
    self.0.iter().filter(|&&b| b).count()
  }

  /// Returns the length of the longest prefix of set bits.
  pub fn leading_ones(&self) -> usize {
    self.0.iter().take_while(|&&b| b).count()
  }

  pub(crate) fn bits_mut(&mut self) -> &mut [bool] {
    &mut self.0
  }
}

impl From<Vec<bool>> for BitString {
  fn from(bits: Vec<bool>) -> Self {
    Self(bits)
  }
}

impl FromIterator<bool> for BitString {
  fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl Index<usize> for BitString {
  type Output = bool;

  fn index(&self, index: usize) -> &Self::Output {
    &self.0[index]
  }
}
