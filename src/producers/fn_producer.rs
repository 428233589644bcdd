use crate::traits::producer::Producer;
use std::fmt;

/// A producer backed by a closure.
///
/// Useful for adapting a driver call, or for test stubs that count pulls.
#[derive(Clone)]
pub struct FnProducer<F> {
  f: F,
}

impl<F, T> Producer for FnProducer<F>
where
  F: FnMut() -> T,
{
  type Output = T;

  #[inline]
  fn pull(&mut self) -> T {
    (self.f)()
  }
}

impl<F> fmt::Debug for FnProducer<F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FnProducer").finish_non_exhaustive()
  }
}

/// Wraps a closure as a [`Producer`].
///
/// ```rust
/// use stageweave::producers::from_fn;
/// use stageweave::traits::producer::Producer;
///
/// let mut ticks = 0;
/// let mut producer = from_fn(|| {
///   ticks += 1;
///   ticks
/// });
///
/// assert_eq!(producer.pull(), 1);
/// assert_eq!(producer.pull(), 2);
/// ```
pub fn from_fn<F, T>(f: F) -> FnProducer<F>
where
  F: FnMut() -> T,
{
  FnProducer { f }
}
