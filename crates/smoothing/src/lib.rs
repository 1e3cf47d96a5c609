//! Sample Smoothing
//!
//! Moving-average smoothers that stabilise noisy per-frame detector output.
//! Each smoother keeps one bounded history buffer per component; the
//! smoothed value is the arithmetic mean of the current window.

mod composite;
mod scalar;

pub use composite::{AngleSmoothing, RectSmoothing};
pub use scalar::Smoothing;

/// Common interface of the windowed smoothers
pub trait Smoother {
    /// Sample type fed in and produced as the smoothed value
    type Sample;

    /// Push a sample and recompute the smoothed value
    fn add_sample(&mut self, sample: Self::Sample);

    /// Evict the oldest sample without recomputing the smoothed value
    fn remove_first_sample(&mut self);

    /// Mean of the window as of the last `add_sample`, `None` before the first sample
    fn smoothed_value(&self) -> Option<Self::Sample>;

    /// Clear all history
    fn reset(&mut self);
}
