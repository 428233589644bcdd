//! Composable pull stages.
//!
//! Each stage wraps one or two upstream [`Producer`](crate::traits::producer::Producer)s
//! and is itself a producer, so stages chain into a pipeline that a sampling
//! loop drives one pull at a time.

/// Windowed moving average over a ring buffer.
pub mod moving_average;
/// Gates that forward, suppress or latch upstream values.
pub mod pass_through;
