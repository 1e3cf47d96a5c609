//! Scalar moving average

use crate::Smoother;
use ring_buffer::RingBuffer;

/// Moving average over the last `window` scalar samples
#[derive(Debug, Clone)]
pub struct Smoothing {
    buffer: RingBuffer<f64>,
    smoothed_value: Option<f64>,
}

impl Smoothing {
    /// Create a new smoother with given window size
    pub fn new(window: usize) -> Self {
        Self {
            buffer: RingBuffer::new(window),
            smoothed_value: None,
        }
    }

    /// Push a sample and recompute the mean
    pub fn add_sample(&mut self, value: f64) {
        self.buffer.enqueue(value);
        self.smoothed_value = self.calculate_smoothed_value();
    }

    /// Evict and return the oldest sample; the smoothed value is left as is
    pub fn remove_first_sample(&mut self) -> Option<f64> {
        self.buffer.dequeue()
    }

    pub fn smoothed_value(&self) -> Option<f64> {
        self.smoothed_value
    }

    /// Samples currently in the window
    pub fn sample_count(&self) -> usize {
        self.buffer.len()
    }

    pub fn window(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.smoothed_value = None;
    }

    fn calculate_smoothed_value(&self) -> Option<f64> {
        let sum = self.buffer.reduce(|acc, v| acc + v)?;
        Some(sum / self.buffer.len() as f64)
    }
}

impl Smoother for Smoothing {
    type Sample = f64;

    fn add_sample(&mut self, sample: f64) {
        Smoothing::add_sample(self, sample);
    }

    fn remove_first_sample(&mut self) {
        Smoothing::remove_first_sample(self);
    }

    fn smoothed_value(&self) -> Option<f64> {
        self.smoothed_value
    }

    fn reset(&mut self) {
        Smoothing::reset(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_has_no_value() {
        let smoothing = Smoothing::new(3);
        assert_eq!(smoothing.smoothed_value(), None);
    }

    #[test]
    fn test_moving_average() {
        let mut smoothing = Smoothing::new(3);

        smoothing.add_sample(10.0);
        assert_eq!(smoothing.smoothed_value(), Some(10.0));

        smoothing.add_sample(20.0);
        assert_eq!(smoothing.smoothed_value(), Some(15.0));

        smoothing.add_sample(30.0);
        assert_eq!(smoothing.smoothed_value(), Some(20.0));

        // Window is full, oldest value should be dropped
        smoothing.add_sample(40.0);
        assert_eq!(smoothing.smoothed_value(), Some(30.0));
    }

    #[test]
    fn test_remove_first_sample_keeps_value() {
        let mut smoothing = Smoothing::new(3);
        smoothing.add_sample(10.0);
        smoothing.add_sample(20.0);

        assert_eq!(smoothing.remove_first_sample(), Some(10.0));
        assert_eq!(smoothing.smoothed_value(), Some(15.0));
        assert_eq!(smoothing.sample_count(), 1);

        // Next sample averages only what is left in the window
        smoothing.add_sample(30.0);
        assert_eq!(smoothing.smoothed_value(), Some(25.0));
    }

    #[test]
    fn test_remove_from_empty() {
        let mut smoothing = Smoothing::new(2);
        assert_eq!(smoothing.remove_first_sample(), None);
    }

    #[test]
    fn test_reset() {
        let mut smoothing = Smoothing::new(3);
        smoothing.add_sample(5.0);
        smoothing.reset();
        assert_eq!(smoothing.smoothed_value(), None);
        assert_eq!(smoothing.sample_count(), 0);
    }

    proptest! {
        #[test]
        fn prop_mean_of_last_window(window in 1usize..10, samples in prop::collection::vec(-1000.0f64..1000.0, 1..40)) {
            let mut smoothing = Smoothing::new(window);
            for &s in &samples {
                smoothing.add_sample(s);
            }
            let tail = &samples[samples.len().saturating_sub(window)..];
            let expected = tail.iter().sum::<f64>() / tail.len() as f64;
            let actual = smoothing.smoothed_value().unwrap();
            prop_assert!((actual - expected).abs() < 1e-9);
        }
    }
}
