//! Gating stages.
//!
//! - [`PassThrough`] forwards its upstream while an activator is active and
//!   yields the default value otherwise.
//! - [`ThresholdPassThrough`] forwards values strictly above a limit.
//! - [`BufferedPassThrough`] refreshes a latched value while an activator is
//!   active and keeps returning it while inactive.
//!
//! The activator is always pulled first. The activator-driven gates pull
//! their upstream only when the activator is active, so an upstream with
//! side effects (a sensor read, say) is left alone while the gate is closed.

use crate::config::{StageConfig, ThresholdSettings};
use crate::traits::producer::Producer;
use crate::traits::sample::Activation;
use crate::traits::stage::Stage;
use std::fmt;
use tracing::{debug, trace};

/// Forwards the upstream value while the activator is active.
#[derive(Debug)]
pub struct PassThrough<P, A> {
  input: P,
  activator: A,
  config: StageConfig,
}

impl<P, A> PassThrough<P, A> {
  /// Creates a gate over `input` driven by `activator`.
  pub fn new(input: P, activator: A) -> Self {
    Self {
      input,
      activator,
      config: StageConfig::default(),
    }
  }

  /// Consumes the stage and returns its upstream and activator.
  pub fn into_parts(self) -> (P, A) {
    (self.input, self.activator)
  }
}

impl<P, A> Producer for PassThrough<P, A>
where
  P: Producer,
  P::Output: Default,
  A: Producer,
  A::Output: Activation,
{
  type Output = P::Output;

  fn pull(&mut self) -> Self::Output {
    if self.activator.pull().is_active() {
      trace!(stage = self.name(), "gate open");
      self.input.pull()
    } else {
      trace!(stage = self.name(), "gate closed");
      P::Output::default()
    }
  }
}

impl<P, A> Stage for PassThrough<P, A> {
  const DEFAULT_NAME: &'static str = "pass_through";

  fn config(&self) -> &StageConfig {
    &self.config
  }

  fn config_mut(&mut self) -> &mut StageConfig {
    &mut self.config
  }
}

/// Builds a [`PassThrough`].
pub fn pass_through<P, A>(input: P, activator: A) -> PassThrough<P, A>
where
  P: Producer,
  A: Producer,
{
  PassThrough::new(input, activator)
}

/// Forwards upstream values strictly greater than a fixed limit.
///
/// The upstream is pulled on every call, whatever the outcome.
pub struct ThresholdPassThrough<P>
where
  P: Producer,
{
  input: P,
  limit: P::Output,
  config: StageConfig,
}

impl<P> ThresholdPassThrough<P>
where
  P: Producer,
{
  /// Creates a threshold gate over `input`.
  pub fn new(input: P, limit: P::Output) -> Self {
    Self {
      input,
      limit,
      config: StageConfig::default(),
    }
  }

  /// Creates a threshold gate from loaded settings.
  pub fn from_settings(input: P, settings: &ThresholdSettings<P::Output>) -> Self
  where
    P::Output: Clone,
  {
    let mut stage = Self::new(input, settings.limit.clone());
    stage.config.name = settings.name.clone();
    debug!(stage = stage.name(), "threshold pass-through configured");
    stage
  }

  /// The exclusive lower bound for forwarded values.
  pub fn limit(&self) -> &P::Output {
    &self.limit
  }

  /// Consumes the stage and returns its upstream.
  pub fn into_inner(self) -> P {
    self.input
  }
}

impl<P> Producer for ThresholdPassThrough<P>
where
  P: Producer,
  P::Output: PartialOrd + Default,
{
  type Output = P::Output;

  fn pull(&mut self) -> Self::Output {
    let value = self.input.pull();
    if value > self.limit {
      value
    } else {
      trace!(stage = self.name(), "value at or below limit suppressed");
      P::Output::default()
    }
  }
}

impl<P> Stage for ThresholdPassThrough<P>
where
  P: Producer,
{
  const DEFAULT_NAME: &'static str = "threshold_pass_through";

  fn config(&self) -> &StageConfig {
    &self.config
  }

  fn config_mut(&mut self) -> &mut StageConfig {
    &mut self.config
  }
}

impl<P> fmt::Debug for ThresholdPassThrough<P>
where
  P: Producer + fmt::Debug,
  P::Output: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ThresholdPassThrough")
      .field("input", &self.input)
      .field("limit", &self.limit)
      .field("config", &self.config)
      .finish()
  }
}

/// Builds a [`ThresholdPassThrough`].
pub fn threshold_pass_through<P>(input: P, limit: P::Output) -> ThresholdPassThrough<P>
where
  P: Producer,
{
  ThresholdPassThrough::new(input, limit)
}

/// Latches the upstream value while the activator is active.
///
/// Returns the latched value on every pull. Before the first activation the
/// latch holds the default value.
pub struct BufferedPassThrough<P, A>
where
  P: Producer,
{
  input: P,
  activator: A,
  latch: P::Output,
  config: StageConfig,
}

impl<P, A> BufferedPassThrough<P, A>
where
  P: Producer,
  P::Output: Default,
{
  /// Creates a latching gate over `input` driven by `activator`.
  pub fn new(input: P, activator: A) -> Self {
    Self {
      input,
      activator,
      latch: P::Output::default(),
      config: StageConfig::default(),
    }
  }

  /// The currently latched value, without pulling.
  pub fn latched(&self) -> &P::Output {
    &self.latch
  }

  /// Consumes the stage and returns its upstream and activator.
  pub fn into_parts(self) -> (P, A) {
    (self.input, self.activator)
  }
}

impl<P, A> Producer for BufferedPassThrough<P, A>
where
  P: Producer,
  P::Output: Clone,
  A: Producer,
  A::Output: Activation,
{
  type Output = P::Output;

  fn pull(&mut self) -> Self::Output {
    if self.activator.pull().is_active() {
      self.latch = self.input.pull();
      trace!(stage = self.name(), "latch updated");
    }
    self.latch.clone()
  }
}

impl<P, A> Stage for BufferedPassThrough<P, A>
where
  P: Producer,
{
  const DEFAULT_NAME: &'static str = "buffered_pass_through";

  fn config(&self) -> &StageConfig {
    &self.config
  }

  fn config_mut(&mut self) -> &mut StageConfig {
    &mut self.config
  }
}

impl<P, A> fmt::Debug for BufferedPassThrough<P, A>
where
  P: Producer + fmt::Debug,
  P::Output: fmt::Debug,
  A: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BufferedPassThrough")
      .field("input", &self.input)
      .field("activator", &self.activator)
      .field("latch", &self.latch)
      .field("config", &self.config)
      .finish()
  }
}

/// Builds a [`BufferedPassThrough`].
pub fn buffered_pass_through<P, A>(input: P, activator: A) -> BufferedPassThrough<P, A>
where
  P: Producer,
  P::Output: Default,
  A: Producer,
{
  BufferedPassThrough::new(input, activator)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::producers::{constant, from_fn, sequence};
  use std::cell::Cell;

  #[test]
  fn test_pass_through_open_forwards() {
    let mut stage = pass_through(sequence(vec![3, 4]), constant(true));
    assert_eq!(stage.pull(), 3);
    assert_eq!(stage.pull(), 4);
  }

  #[test]
  fn test_pass_through_closed_skips_upstream() {
    let pulls = Cell::new(0);
    let mut stage = pass_through(
      from_fn(|| {
        pulls.set(pulls.get() + 1);
        42
      }),
      constant(false),
    );

    assert_eq!(stage.pull(), 0);
    assert_eq!(stage.pull(), 0);
    assert_eq!(pulls.get(), 0);
  }

  #[test]
  fn test_pass_through_numeric_activator() {
    let pulls = Cell::new(0);
    let mut stage = pass_through(
      from_fn(|| {
        pulls.set(pulls.get() + 1);
        pulls.get() * 10
      }),
      sequence(vec![0u8, 1, 0, 2]),
    );

    let results: Vec<i32> = (0..4).map(|_| stage.pull()).collect();
    assert_eq!(results, vec![0, 10, 0, 20]);
    assert_eq!(pulls.get(), 2);
  }

  #[test]
  fn test_activator_pulled_before_upstream() {
    let order = std::cell::RefCell::new(Vec::new());
    let mut stage = pass_through(
      from_fn(|| {
        order.borrow_mut().push("input");
        1
      }),
      from_fn(|| {
        order.borrow_mut().push("activator");
        true
      }),
    );

    stage.pull();
    assert_eq!(*order.borrow(), vec!["activator", "input"]);
  }

  #[test]
  fn test_threshold_boundary_is_excluded() {
    let mut stage = threshold_pass_through(sequence(vec![10, 11, 9]), 10);
    assert_eq!(stage.pull(), 0);
    assert_eq!(stage.pull(), 11);
    assert_eq!(stage.pull(), 0);
  }

  #[test]
  fn test_threshold_always_pulls_upstream() {
    let pulls = Cell::new(0);
    let mut stage = threshold_pass_through(
      from_fn(|| {
        pulls.set(pulls.get() + 1);
        1.5f32
      }),
      2.0,
    );

    for _ in 0..3 {
      assert_eq!(stage.pull(), 0.0);
    }
    assert_eq!(pulls.get(), 3);
    assert_eq!(*stage.limit(), 2.0);
  }

  #[test]
  fn test_threshold_from_settings() {
    let settings = ThresholdSettings {
      limit: 100u32,
      name: Some("overcurrent".to_string()),
    };
    let mut stage = ThresholdPassThrough::from_settings(sequence(vec![150u32, 100]), &settings);

    assert_eq!(stage.name(), "overcurrent");
    assert_eq!(stage.pull(), 150);
    assert_eq!(stage.pull(), 0);
  }

  #[test]
  fn test_buffered_holds_latched_value() {
    let pulls = Cell::new(0);
    let mut stage = buffered_pass_through(
      from_fn(|| {
        pulls.set(pulls.get() + 1);
        if pulls.get() == 1 { 5 } else { 9 }
      }),
      sequence(vec![true, false, false]),
    );

    assert_eq!(stage.pull(), 5);
    assert_eq!(stage.pull(), 5);
    assert_eq!(stage.pull(), 5);
    assert_eq!(pulls.get(), 1);
  }

  #[test]
  fn test_buffered_starts_at_default() {
    let mut stage = buffered_pass_through(
      sequence(vec![7i64, 8]),
      sequence(vec![false, true, false, true]),
    );

    assert_eq!(*stage.latched(), 0);
    assert_eq!(stage.pull(), 0);
    assert_eq!(stage.pull(), 7);
    assert_eq!(stage.pull(), 7);
    assert_eq!(stage.pull(), 8);
  }

  #[test]
  fn test_stage_names() {
    let gate = pass_through(constant(1), constant(true));
    assert_eq!(gate.name(), "pass_through");

    let threshold = threshold_pass_through(constant(1), 0).with_name("floor");
    assert_eq!(threshold.component_info().name, "floor");

    let latch = buffered_pass_through(constant(1), constant(true));
    assert_eq!(latch.name(), "buffered_pass_through");
  }

  #[test]
  fn test_into_parts_returns_borrowed_producers() {
    let mut input = sequence(vec![1, 2]);
    let mut activator = constant(true);
    {
      let mut stage = pass_through(&mut input, &mut activator);
      assert_eq!(stage.pull(), 1);
      let (rest, _) = stage.into_parts();
      assert_eq!(rest.pull(), 2);
    }
    assert_eq!(input.pull(), 0);
  }
}
