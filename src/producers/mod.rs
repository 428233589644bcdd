//! Leaf producers for feeding a pipeline.
//!
//! Hardware drivers usually implement [`Producer`](crate::traits::producer::Producer)
//! directly; these cover closures, canned sequences and constants.

/// Constant producer.
pub mod constant_producer;
/// Closure-backed producer.
pub mod fn_producer;
/// Iterator-backed producer.
pub mod sequence_producer;

pub use constant_producer::{Constant, constant};
pub use fn_producer::{FnProducer, from_fn};
pub use sequence_producer::{Sequence, sequence};
