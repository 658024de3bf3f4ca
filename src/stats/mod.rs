//! Rolling statistics primitives
//!
//! Everything here is synchronous, bounded in memory and free of I/O.
//! The [`Engine`](crate::engine::Engine) owns one instance of each and is
//! the only caller that mutates them.

mod normalizer;
mod spike;
mod window;

pub use normalizer::{Normalizer, RunningRange};
pub use spike::SpikeDetector;
pub use window::{BoundedWindow, IntervalWindow, SizeTimeWindow};
