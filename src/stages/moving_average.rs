//! Moving average over the last `N` admitted samples.
//!
//! On every pull the stage fetches one sample from its upstream and decides
//! whether to admit it into the window. Non-zero samples are always
//! admitted; zero samples only when `use_zeros` is set. With `use_zeros`
//! off, zeros do not advance the window at all, so the stage keeps
//! reporting the average of the last `N` non-zero readings. This suits
//! sensors that report zero when they have nothing to say.
//!
//! The average is always `sum(window) / N`, using the division of the value
//! type. A fresh window holds `N` zeros, so early averages are pulled
//! towards zero until the window fills.
//!
//! # Defaults
//!
//! Direct construction through [`MovingAverage::new`] admits zeros
//! ([`DEFAULT_USE_ZEROS`]). The [`moving_average`] factory and
//! [`ProducerExt::moving_average`](crate::traits::producer::ProducerExt::moving_average)
//! ignore them ([`FACTORY_USE_ZEROS`]). The two defaults disagree and both are
//! kept as-is; pass the flag explicitly when it matters.
//!
//! # Example
//!
//! ```rust
//! use stageweave::producers::sequence;
//! use stageweave::stages::moving_average::MovingAverage;
//! use stageweave::traits::producer::Producer;
//!
//! let mut sensor = sequence(vec![2, 4, 6, 8]);
//! let mut average: MovingAverage<_, 3> = MovingAverage::new(&mut sensor);
//!
//! assert_eq!(average.pull(), 0); // 2 / 3
//! assert_eq!(average.pull(), 2); // (2 + 4) / 3
//! assert_eq!(average.pull(), 4); // (2 + 4 + 6) / 3
//! assert_eq!(average.pull(), 6); // (4 + 6 + 8) / 3
//! ```

use crate::config::{MovingAverageSettings, StageConfig};
use crate::error::{ConfigError, ConfigResult};
use crate::ring_buffer::RingBuffer;
use crate::traits::producer::Producer;
use crate::traits::sample::Sample;
use crate::traits::stage::Stage;
use std::fmt;
use tracing::{debug, trace};

/// `use_zeros` applied by [`MovingAverage::new`].
pub const DEFAULT_USE_ZEROS: bool = true;

/// `use_zeros` applied by [`moving_average`].
pub const FACTORY_USE_ZEROS: bool = false;

/// A stage reporting the average of the last `N` admitted upstream samples.
pub struct MovingAverage<P, const N: usize>
where
  P: Producer,
{
  input: P,
  use_zeros: bool,
  buffer: RingBuffer<P::Output, N>,
  config: StageConfig,
}

impl<P, const N: usize> MovingAverage<P, N>
where
  P: Producer,
  P::Output: Sample,
{
  /// Creates a moving average over `input` that admits zero samples.
  pub fn new(input: P) -> Self {
    Self::with_use_zeros(input, DEFAULT_USE_ZEROS)
  }

  /// Creates a moving average over `input` with an explicit admission policy.
  pub fn with_use_zeros(input: P, use_zeros: bool) -> Self {
    Self {
      input,
      use_zeros,
      buffer: RingBuffer::new(),
      config: StageConfig::default(),
    }
  }

  /// Creates a moving average from loaded settings.
  ///
  /// Fails if the configured window differs from `N`.
  pub fn from_settings(input: P, settings: &MovingAverageSettings) -> ConfigResult<Self> {
    if settings.window != N {
      return Err(ConfigError::WindowMismatch {
        expected: N,
        found: settings.window,
      });
    }

    let mut stage = Self::with_use_zeros(input, settings.use_zeros());
    stage.config.name = settings.name.clone();
    debug!(
      stage = stage.name(),
      window = N,
      use_zeros = stage.use_zeros,
      "moving average configured"
    );
    Ok(stage)
  }

  /// Clears the window back to `N` zero samples.
  pub fn reset(&mut self) {
    self.buffer.reset();
    debug!(stage = self.name(), "moving average reset");
  }

  /// The current average, without pulling from upstream.
  pub fn report(&self) -> P::Output {
    self
      .buffer
      .iter()
      .fold(P::Output::default(), |sum, &sample| sum + sample)
      .div_count(N)
  }

  /// Whether zero samples are admitted into the window.
  pub fn use_zeros(&self) -> bool {
    self.use_zeros
  }

  /// The samples currently in the window.
  pub fn window(&self) -> &RingBuffer<P::Output, N> {
    &self.buffer
  }

  /// Consumes the stage and returns its upstream.
  pub fn into_inner(self) -> P {
    self.input
  }
}

impl<P, const N: usize> Producer for MovingAverage<P, N>
where
  P: Producer,
  P::Output: Sample,
{
  type Output = P::Output;

  fn pull(&mut self) -> Self::Output {
    let sample = self.input.pull();
    if sample.is_significant() || self.use_zeros {
      self.buffer.push(sample);
      trace!(stage = self.name(), "sample admitted");
    } else {
      trace!(stage = self.name(), "zero sample dropped");
    }
    self.report()
  }
}

impl<P, const N: usize> Stage for MovingAverage<P, N>
where
  P: Producer,
{
  const DEFAULT_NAME: &'static str = "moving_average";

  fn config(&self) -> &StageConfig {
    &self.config
  }

  fn config_mut(&mut self) -> &mut StageConfig {
    &mut self.config
  }
}

impl<P, const N: usize> fmt::Debug for MovingAverage<P, N>
where
  P: Producer + fmt::Debug,
  P::Output: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MovingAverage")
      .field("input", &self.input)
      .field("use_zeros", &self.use_zeros)
      .field("buffer", &self.buffer)
      .field("config", &self.config)
      .finish()
  }
}

/// Builds an `N`-sample moving average that ignores zero samples.
pub fn moving_average<const N: usize, P>(input: P) -> MovingAverage<P, N>
where
  P: Producer,
  P::Output: Sample,
{
  moving_average_with(input, FACTORY_USE_ZEROS)
}

/// Builds an `N`-sample moving average with an explicit admission policy.
pub fn moving_average_with<const N: usize, P>(input: P, use_zeros: bool) -> MovingAverage<P, N>
where
  P: Producer,
  P::Output: Sample,
{
  MovingAverage::with_use_zeros(input, use_zeros)
}
