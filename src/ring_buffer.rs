//! Fixed-capacity circular buffer.
//!
//! A [`RingBuffer`] always holds exactly `N` elements. It starts out filled
//! with `T::default()` and every [`push`](RingBuffer::push) overwrites the
//! oldest element, so the buffer never grows and never empties.
//!
//! # Example
//!
//! ```rust
//! use stageweave::ring_buffer::RingBuffer;
//!
//! let mut buffer: RingBuffer<u8, 3> = RingBuffer::new();
//! buffer.push(1);
//! buffer.push(2);
//! buffer.push(3);
//! buffer.push(4);
//!
//! assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
//! ```

use std::iter::Chain;
use std::slice;

/// Iterator over a [`RingBuffer`], oldest element first.
pub type Iter<'a, T> = Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

/// A circular buffer of exactly `N` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingBuffer<T, const N: usize> {
  slots: [T; N],
  /// Index of the oldest element, which is also the next slot to overwrite.
  head: usize,
}

impl<T, const N: usize> RingBuffer<T, N> {
  /// Creates a buffer holding `N` copies of `T::default()`.
  ///
  /// A zero capacity is rejected at compile time.
  pub fn new() -> Self
  where
    T: Default,
  {
    const { assert!(N > 0, "ring buffer capacity must be non-zero") };
    Self {
      slots: std::array::from_fn(|_| T::default()),
      head: 0,
    }
  }

  /// Inserts `value`, evicting the oldest element.
  #[inline]
  pub fn push(&mut self, value: T) {
    self.slots[self.head] = value;
    self.head = (self.head + 1) % N;
  }

  /// Iterates over all `N` elements, oldest first.
  pub fn iter(&self) -> Iter<'_, T> {
    let (newer, older) = self.slots.split_at(self.head);
    older.iter().chain(newer.iter())
  }

  /// The most recently pushed element.
  pub fn newest(&self) -> &T {
    &self.slots[(self.head + N - 1) % N]
  }

  /// The element that the next push will evict.
  pub fn oldest(&self) -> &T {
    &self.slots[self.head]
  }

  /// Number of elements held, always `N`.
  #[inline]
  pub const fn len(&self) -> usize {
    N
  }

  /// Always `false`: the buffer holds `N > 0` elements at all times.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    false
  }

  /// Fixed capacity of the buffer.
  #[inline]
  pub const fn capacity(&self) -> usize {
    N
  }
}

impl<T: Clone, const N: usize> RingBuffer<T, N> {
  /// Overwrites every slot with `value`.
  pub fn fill(&mut self, value: T) {
    self.slots.fill(value);
    self.head = 0;
  }

  /// Restores the buffer to `N` default elements.
  pub fn reset(&mut self)
  where
    T: Default,
  {
    self.fill(T::default());
  }
}

impl<T: Default, const N: usize> Default for RingBuffer<T, N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<'a, T, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
