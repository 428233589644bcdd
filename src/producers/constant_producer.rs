use crate::traits::producer::Producer;

/// A producer that yields the same value on every pull.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant<T> {
  value: T,
}

impl<T: Clone> Constant<T> {
  /// Creates a producer that always yields `value`.
  pub fn new(value: T) -> Self {
    Self { value }
  }

  /// Replaces the value yielded from now on.
  pub fn set(&mut self, value: T) {
    self.value = value;
  }
}

impl<T: Clone> Producer for Constant<T> {
  type Output = T;

  fn pull(&mut self) -> T {
    self.value.clone()
  }
}

/// Builds a [`Constant`].
pub fn constant<T: Clone>(value: T) -> Constant<T> {
  Constant::new(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_constant_repeats() {
    let mut producer = constant(3.5f32);
    assert_eq!(producer.pull(), 3.5);
    assert_eq!(producer.pull(), 3.5);

    producer.set(1.0);
    assert_eq!(producer.pull(), 1.0);
  }
}
