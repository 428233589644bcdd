//! # StageWeave
//!
//! Composable, pull-based signal processing for sampling loops.
//!
//! A pipeline is a chain of stages. Each stage is a
//! [`Producer`](traits::producer::Producer): pulling it pulls its upstream
//! producers, computes a value and returns it synchronously. A host loop
//! (timer interrupt, polling thread, test harness) simply pulls the last
//! stage on its own schedule.
//!
//! ## Building Blocks
//!
//! - **[`RingBuffer`](ring_buffer::RingBuffer)**: fixed-capacity window that
//!   overwrites its oldest element
//! - **[`MovingAverage`](stages::moving_average::MovingAverage)**: windowed
//!   average with an optional "ignore zero samples" admission policy
//! - **[`PassThrough`](stages::pass_through::PassThrough)**: forwards while an
//!   activator is active
//! - **[`ThresholdPassThrough`](stages::pass_through::ThresholdPassThrough)**:
//!   forwards values above a limit
//! - **[`BufferedPassThrough`](stages::pass_through::BufferedPassThrough)**:
//!   latches the last value seen while active
//!
//! ## Quick Start
//!
//! ```rust
//! use stageweave::producers::{from_fn, sequence};
//! use stageweave::traits::producer::{Producer, ProducerExt};
//!
//! let mut sensor = sequence(vec![12, 3, 18, 30, 0]);
//! let mut armed = from_fn(|| true);
//!
//! let mut pipeline = sensor
//!   .by_ref()
//!   .threshold(5)
//!   .moving_average::<2>()
//!   .latch(armed.by_ref());
//!
//! assert_eq!(pipeline.pull(), 6); // (0 + 12) / 2
//! assert_eq!(pipeline.pull(), 6); // 3 is suppressed, then ignored
//! assert_eq!(pipeline.pull(), 15); // (12 + 18) / 2
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Stage naming and loadable stage settings.
pub mod config;
/// Errors raised while loading settings.
pub mod error;
/// Leaf producers: closures, sequences and constants.
pub mod producers;
/// Fixed-capacity circular buffer.
pub mod ring_buffer;
/// Moving-average and pass-through stages.
pub mod stages;
/// Producer, sample and stage capabilities.
pub mod traits;

pub use config::{MovingAverageSettings, PipelineSettings, StageConfig, ThresholdSettings};
pub use error::{ConfigError, ConfigResult};
pub use ring_buffer::RingBuffer;
pub use stages::moving_average::{MovingAverage, moving_average, moving_average_with};
pub use stages::pass_through::{
  BufferedPassThrough, PassThrough, ThresholdPassThrough, buffered_pass_through, pass_through,
  threshold_pass_through,
};
pub use traits::producer::{Producer, ProducerExt};
pub use traits::sample::{Activation, Sample};
pub use traits::stage::Stage;
