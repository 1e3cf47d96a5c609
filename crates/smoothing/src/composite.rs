//! Per-component smoothing of rectangles and angles

use crate::{Smoother, Smoothing};
use pose_geometry::{Angle, Rect};

/// Smooths face bounds by averaging x, y, width and height independently
#[derive(Debug, Clone)]
pub struct RectSmoothing {
    x: Smoothing,
    y: Smoothing,
    width: Smoothing,
    height: Smoothing,
    smoothed_value: Option<Rect>,
}

impl RectSmoothing {
    pub fn new(window: usize) -> Self {
        Self {
            x: Smoothing::new(window),
            y: Smoothing::new(window),
            width: Smoothing::new(window),
            height: Smoothing::new(window),
            smoothed_value: None,
        }
    }

    fn calculate_smoothed_value(&self) -> Option<Rect> {
        Some(Rect::new(
            self.x.smoothed_value()?,
            self.y.smoothed_value()?,
            self.width.smoothed_value()?,
            self.height.smoothed_value()?,
        ))
    }
}

impl Smoother for RectSmoothing {
    type Sample = Rect;

    fn add_sample(&mut self, sample: Rect) {
        self.x.add_sample(sample.x);
        self.y.add_sample(sample.y);
        self.width.add_sample(sample.width);
        self.height.add_sample(sample.height);
        self.smoothed_value = self.calculate_smoothed_value();
    }

    fn remove_first_sample(&mut self) {
        self.x.remove_first_sample();
        self.y.remove_first_sample();
        self.width.remove_first_sample();
        self.height.remove_first_sample();
    }

    fn smoothed_value(&self) -> Option<Rect> {
        self.smoothed_value
    }

    fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
        self.width.reset();
        self.height.reset();
        self.smoothed_value = None;
    }
}

/// Smooths head pose by averaging yaw and pitch independently
#[derive(Debug, Clone)]
pub struct AngleSmoothing {
    yaw: Smoothing,
    pitch: Smoothing,
    smoothed_value: Option<Angle>,
}

impl AngleSmoothing {
    pub fn new(window: usize) -> Self {
        Self {
            yaw: Smoothing::new(window),
            pitch: Smoothing::new(window),
            smoothed_value: None,
        }
    }

    /// Samples currently in the window
    pub fn sample_count(&self) -> usize {
        self.yaw.sample_count()
    }

    fn calculate_smoothed_value(&self) -> Option<Angle> {
        Some(Angle::new(self.yaw.smoothed_value()?, self.pitch.smoothed_value()?))
    }
}

impl Smoother for AngleSmoothing {
    type Sample = Angle;

    fn add_sample(&mut self, sample: Angle) {
        self.yaw.add_sample(sample.yaw);
        self.pitch.add_sample(sample.pitch);
        self.smoothed_value = self.calculate_smoothed_value();
    }

    fn remove_first_sample(&mut self) {
        self.yaw.remove_first_sample();
        self.pitch.remove_first_sample();
    }

    fn smoothed_value(&self) -> Option<Angle> {
        self.smoothed_value
    }

    fn reset(&mut self) {
        self.yaw.reset();
        self.pitch.reset();
        self.smoothed_value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_smoothing() {
        let mut smoothing = RectSmoothing::new(2);
        assert_eq!(smoothing.smoothed_value(), None);

        smoothing.add_sample(Rect::new(0.0, 0.0, 10.0, 10.0));
        smoothing.add_sample(Rect::new(10.0, 20.0, 30.0, 50.0));
        assert_eq!(smoothing.smoothed_value(), Some(Rect::new(5.0, 10.0, 20.0, 30.0)));

        smoothing.add_sample(Rect::new(20.0, 20.0, 30.0, 50.0));
        assert_eq!(smoothing.smoothed_value(), Some(Rect::new(15.0, 20.0, 30.0, 50.0)));

        smoothing.reset();
        assert_eq!(smoothing.smoothed_value(), None);
    }

    #[test]
    fn test_angle_smoothing() {
        let mut smoothing = AngleSmoothing::new(3);

        smoothing.add_sample(Angle::new(10.0, 20.0));
        assert_eq!(smoothing.smoothed_value(), Some(Angle::new(10.0, 20.0)));

        smoothing.add_sample(Angle::new(20.0, 30.0));
        smoothing.add_sample(Angle::new(30.0, 40.0));
        assert_eq!(smoothing.smoothed_value(), Some(Angle::new(20.0, 30.0)));

        smoothing.add_sample(Angle::new(40.0, 50.0));
        assert_eq!(smoothing.smoothed_value(), Some(Angle::new(30.0, 40.0)));
    }

    #[test]
    fn test_rect_rewind() {
        let mut smoothing = RectSmoothing::new(3);
        smoothing.add_sample(Rect::new(0.0, 0.0, 10.0, 10.0));
        smoothing.add_sample(Rect::new(4.0, 2.0, 20.0, 30.0));

        smoothing.remove_first_sample();
        assert_eq!(smoothing.smoothed_value(), Some(Rect::new(2.0, 1.0, 15.0, 20.0)));

        // The oldest rect no longer contributes
        smoothing.add_sample(Rect::new(8.0, 4.0, 40.0, 50.0));
        assert_eq!(smoothing.smoothed_value(), Some(Rect::new(6.0, 3.0, 30.0, 40.0)));
    }

    #[test]
    fn test_angle_rewind() {
        let mut smoothing = AngleSmoothing::new(3);
        smoothing.add_sample(Angle::new(0.0, 0.0));
        smoothing.add_sample(Angle::new(6.0, 3.0));

        smoothing.remove_first_sample();
        assert_eq!(smoothing.sample_count(), 1);
        // Unchanged until the next sample arrives
        assert_eq!(smoothing.smoothed_value(), Some(Angle::new(3.0, 1.5)));

        smoothing.add_sample(Angle::new(10.0, 5.0));
        assert_eq!(smoothing.smoothed_value(), Some(Angle::new(8.0, 4.0)));
    }

    fn feed<S: Smoother>(smoother: &mut S, samples: impl IntoIterator<Item = S::Sample>) {
        for sample in samples {
            smoother.add_sample(sample);
        }
    }

    #[test]
    fn test_generic_reset() {
        let mut smoothing = AngleSmoothing::new(4);
        feed(&mut smoothing, [Angle::new(1.0, 1.0), Angle::new(3.0, 3.0)]);
        assert!(smoothing.smoothed_value().is_some());
        smoothing.reset();
        assert_eq!(smoothing.sample_count(), 0);
        assert_eq!(smoothing.smoothed_value(), None);
    }
}
