//! Bounded History Buffer
//!
//! Provides a fixed-capacity FIFO ring buffer used by every smoothing stage
//! to hold the most recent per-frame samples.

mod buffer;

pub use buffer::{RingBuffer, DEFAULT_CAPACITY};
