//! Value capabilities required by the stages.
//!
//! Stages never rely on implicit truthiness. A value type states explicitly
//! whether a sample carries a reading ([`Sample::is_significant`]) and how it
//! divides by a window length ([`Sample::div_count`]). Activator outputs are
//! interpreted through [`Activation`].

use num_traits::{NumCast, Zero};
use std::ops::Add;

/// A numeric value that can flow through a windowed stage.
///
/// `Default` is the "no value" sentinel a closed gate returns, and the seed
/// of every window sum.
pub trait Sample: Copy + Default + Add<Output = Self> + PartialOrd + Zero {
  /// Whether this sample carries a reading.
  ///
  /// Zero samples are treated as quiescent by the moving average when it is
  /// configured to ignore them.
  fn is_significant(&self) -> bool {
    !self.is_zero()
  }

  /// Divides by a window length using the type's own division.
  ///
  /// Integers truncate, floats follow IEEE semantics. The count is never
  /// narrowed into the value type: a count wider than the type still divides
  /// exactly, which truncates to zero for every value except `MIN` over
  /// `MAX + 1`. A zero count yields zero.
  fn div_count(self, count: usize) -> Self;
}

/// Interpretation of an activator's output as open or closed.
pub trait Activation {
  /// Returns `true` when the gate driven by this value should open.
  fn is_active(&self) -> bool;
}

impl Activation for bool {
  #[inline]
  fn is_active(&self) -> bool {
    *self
  }
}

macro_rules! impl_numeric {
  ($($t:ty),* $(,)?) => {
    $(
      impl Sample for $t {
        #[inline]
        fn div_count(self, count: usize) -> Self {
          match <$t as NumCast>::from(count) {
            Some(divisor) if !divisor.is_zero() => self / divisor,
            Some(_) => <$t>::zero(),
            None => match <$t as NumCast>::from(count - 1) {
              // count == MAX + 1: only MIN has a non-zero quotient, and MIN + MAX == -1
              Some(max) if self < <$t>::zero() && self + max < <$t>::zero() => self + max,
              _ => <$t>::zero(),
            },
          }
        }
      }

      impl Activation for $t {
        #[inline]
        fn is_active(&self) -> bool {
          !self.is_zero()
        }
      }
    )*
  };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
