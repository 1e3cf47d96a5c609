//! Head pose angles

use serde::{Deserialize, Serialize};

/// Rotation axis of a head pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left-right rotation
    Yaw,
    /// Up-down tilt
    Pitch,
}

/// Head pose (yaw, pitch) in degrees
///
/// Positive yaw is the subject's left, positive pitch is down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    pub yaw: f64,
    pub pitch: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { yaw: 0.0, pitch: 0.0 };

    pub const fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }

    /// Value along the given axis
    pub fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Yaw => self.yaw,
            Axis::Pitch => self.pitch,
        }
    }

    /// On-screen compass direction of the pose in radians
    pub fn screen_angle(&self) -> f64 {
        self.pitch.atan2(-self.yaw)
    }

    /// Euclidean distance in yaw/pitch space
    pub fn distance_to(&self, other: &Angle) -> f64 {
        (self.yaw - other.yaw).hypot(self.pitch - other.pitch)
    }
}
