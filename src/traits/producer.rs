use crate::stages::moving_average::{MovingAverage, moving_average};
use crate::stages::pass_through::{
  BufferedPassThrough, PassThrough, ThresholdPassThrough, buffered_pass_through, pass_through,
  threshold_pass_through,
};
use crate::traits::sample::{Activation, Sample};

/// A zero-argument source of values.
///
/// Every source and every stage is a `Producer`. Pulling never fails: a
/// producer that cannot deliver a reading reports it in-band, usually as
/// `Output::default()`.
///
/// Stages are generic over their upstream producers. Handing a stage
/// `&mut upstream` makes it borrow the upstream, and the borrow checker keeps
/// the stage from outliving it; handing it `upstream` by value moves the
/// upstream into the stage.
pub trait Producer {
  /// The value type produced on each pull.
  type Output;

  /// Produces the next value.
  fn pull(&mut self) -> Self::Output;
}

impl<P> Producer for &mut P
where
  P: Producer + ?Sized,
{
  type Output = P::Output;

  #[inline]
  fn pull(&mut self) -> Self::Output {
    (**self).pull()
  }
}

impl<P> Producer for Box<P>
where
  P: Producer + ?Sized,
{
  type Output = P::Output;

  #[inline]
  fn pull(&mut self) -> Self::Output {
    (**self).pull()
  }
}

/// Chaining combinators available on every [`Producer`].
///
/// Each combinator wraps `self` in a stage using the same defaults as the
/// corresponding factory function.
pub trait ProducerExt: Producer + Sized {
  /// Wraps `self` in an `N`-sample moving average built by
  /// [`moving_average`], so zero samples are ignored.
  fn moving_average<const N: usize>(self) -> MovingAverage<Self, N>
  where
    Self::Output: Sample,
  {
    moving_average::<N, Self>(self)
  }

  /// Forwards `self` only while `activator` is active.
  fn gate<A>(self, activator: A) -> PassThrough<Self, A>
  where
    A: Producer,
    A::Output: Activation,
  {
    pass_through(self, activator)
  }

  /// Forwards values strictly greater than `limit`.
  fn threshold(self, limit: Self::Output) -> ThresholdPassThrough<Self>
  where
    Self::Output: PartialOrd + Default,
  {
    threshold_pass_through(self, limit)
  }

  /// Latches a fresh value from `self` whenever `activator` is active.
  fn latch<A>(self, activator: A) -> BufferedPassThrough<Self, A>
  where
    Self::Output: Default,
    A: Producer,
    A::Output: Activation,
  {
    buffered_pass_through(self, activator)
  }

  /// Borrows `self` so a stage can be built without consuming it.
  fn by_ref(&mut self) -> &mut Self {
    self
  }
}

impl<P: Producer> ProducerExt for P {}
