use crate::traits::producer::Producer;
use tracing::debug;

/// A producer that replays the items of an iterator.
///
/// Once the iterator is exhausted every pull yields `T::default()`, the
/// in-band "no reading" value.
#[derive(Debug, Clone)]
pub struct Sequence<I> {
  iter: I,
  exhausted: bool,
}

impl<I> Sequence<I>
where
  I: Iterator,
{
  /// Creates a producer over `iter`.
  pub fn new(iter: I) -> Self {
    Self {
      iter,
      exhausted: false,
    }
  }

  /// Whether the underlying iterator has run out.
  pub fn is_exhausted(&self) -> bool {
    self.exhausted
  }
}

impl<I> Producer for Sequence<I>
where
  I: Iterator,
  I::Item: Default,
{
  type Output = I::Item;

  fn pull(&mut self) -> Self::Output {
    match self.iter.next() {
      Some(item) => item,
      None => {
        if !self.exhausted {
          debug!("sequence exhausted, yielding default values");
          self.exhausted = true;
        }
        I::Item::default()
      }
    }
  }
}

/// Builds a [`Sequence`] from anything iterable.
pub fn sequence<I>(items: I) -> Sequence<I::IntoIter>
where
  I: IntoIterator,
{
  Sequence::new(items.into_iter())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sequence_then_default() {
    let mut producer = sequence(vec![4u8, 5]);
    assert!(!producer.is_exhausted());
    assert_eq!(producer.pull(), 4);
    assert_eq!(producer.pull(), 5);
    assert_eq!(producer.pull(), 0);
    assert!(producer.is_exhausted());
    assert_eq!(producer.pull(), 0);
  }

  #[test]
  fn test_sequence_from_range() {
    let mut producer = sequence(1..=3i64);
    let pulled: Vec<i64> = (0..4).map(|_| producer.pull()).collect();
    assert_eq!(pulled, vec![1, 2, 3, 0]);
  }
}
